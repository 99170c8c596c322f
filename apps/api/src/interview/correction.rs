//! Document correction: editing suggestions for a resume or career history.
//!
//! When the caller passes a prior position analysis, its findings are folded into
//! the prompt so corrections target what this particular employer is looking for.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::prompts::{CORRECTION_PROMPT_TEMPLATE, POSITION_POLICY};
use crate::llm_client::prompts::{render, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;

const CORRECTION_MAX_TOKENS: u32 = 4000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFocus {
    #[default]
    Overall,
    Impact,
    Clarity,
    Achievement,
    Keywords,
}

impl DocumentFocus {
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("impact") => DocumentFocus::Impact,
            Some("clarity") => DocumentFocus::Clarity,
            Some("achievement") => DocumentFocus::Achievement,
            Some("keywords") => DocumentFocus::Keywords,
            _ => DocumentFocus::Overall,
        }
    }

    fn instruction(&self) -> &'static str {
        match self {
            DocumentFocus::Overall => "総合的な視点で添削",
            DocumentFocus::Impact => "インパクト・説得力の向上を重視",
            DocumentFocus::Clarity => "明確性・読みやすさの改善を重視",
            DocumentFocus::Achievement => "実績の数値化・具体化を重視",
            DocumentFocus::Keywords => "業界キーワードの最適化を重視",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyQuality {
    #[serde(default)]
    pub quality: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BetweenTheLines {
    #[serde(default)]
    pub written: String,
    #[serde(default)]
    pub reading: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FitPoint {
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub application: String,
}

/// The parts of a position analysis that inform a correction.
/// Every field is optional; the client sends whatever it has.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionBrief {
    pub position_title: Option<String>,
    pub reality_description: Option<String>,
    pub daily_image: Option<String>,
    pub interview_focus_summary: Option<String>,
    pub key_qualities: Vec<KeyQuality>,
    pub possible_concerns: Option<String>,
    pub between_the_lines: Vec<BetweenTheLines>,
    pub fit_points: Vec<FitPoint>,
    pub gap_to_cover: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionRequest {
    pub user_id: Option<String>,
    #[serde(default)]
    pub document_text: String,
    pub focus: Option<String>,
    pub job_info: Option<String>,
    pub position_analysis: Option<PositionBrief>,
}

/// Normalized correction parameters; also what gets stored as history input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionParams {
    pub document_text: String,
    pub focus: DocumentFocus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_analysis: Option<PositionBrief>,
}

impl CorrectionParams {
    pub fn from_request(request: CorrectionRequest) -> Result<Self, AppError> {
        if request.document_text.trim().is_empty() {
            return Err(AppError::Validation(
                "添削対象のテキストを入力してください".to_string(),
            ));
        }

        Ok(Self {
            document_text: request.document_text,
            focus: DocumentFocus::from_label(request.focus.as_deref()),
            job_info: request.job_info.filter(|j| !j.trim().is_empty()),
            position_analysis: request.position_analysis,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Correction {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub before: String,
    pub after: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionResult {
    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub corrections: Vec<Correction>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Renders the position analysis as prompt context.
/// Returns `None` when no field carries anything usable.
pub fn build_position_context(brief: &PositionBrief) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    if let Some(title) = non_blank(&brief.position_title) {
        parts.push(format!("■ ポジション名: {title}"));
    }
    if let Some(reality) = non_blank(&brief.reality_description) {
        parts.push(format!("■ ポジションの実態: {reality}"));
    }
    if let Some(daily) = non_blank(&brief.daily_image) {
        parts.push(format!("■ 想定される1日の業務: {daily}"));
    }
    if let Some(focus) = non_blank(&brief.interview_focus_summary) {
        parts.push(format!("■ 面接で見られるポイント: {focus}"));
    }
    if !brief.key_qualities.is_empty() {
        let lines: Vec<String> = brief
            .key_qualities
            .iter()
            .map(|q| format!("・{}（{}）", q.quality, q.reason))
            .collect();
        parts.push(format!("■ 重視される資質:\n{}", lines.join("\n")));
    }
    if let Some(concerns) = non_blank(&brief.possible_concerns) {
        parts.push(format!("■ 採用側が持ちうる懸念: {concerns}"));
    }
    if !brief.between_the_lines.is_empty() {
        let lines: Vec<String> = brief
            .between_the_lines
            .iter()
            .map(|b| format!("・「{}」→ {}", b.written, b.reading))
            .collect();
        parts.push(format!("■ 求人の行間:\n{}", lines.join("\n")));
    }
    if !brief.fit_points.is_empty() {
        let lines: Vec<String> = brief
            .fit_points
            .iter()
            .map(|f| format!("・{} → {}", f.experience, f.application))
            .collect();
        parts.push(format!("■ 活かせるポイント:\n{}", lines.join("\n")));
    }
    if let Some(gap) = non_blank(&brief.gap_to_cover) {
        parts.push(format!("■ 面接で補うべきギャップ: {gap}"));
    }

    if parts.is_empty() {
        return None;
    }

    Some(format!(
        "\n\n# ポジション分析の結果（この分析を踏まえて添削してください）\n{}",
        parts.join("\n\n")
    ))
}

pub fn build_correction_prompt(params: &CorrectionParams) -> String {
    let position_section = params
        .position_analysis
        .as_ref()
        .and_then(build_position_context);
    let with_position = position_section.is_some();

    let job_section = params
        .job_info
        .as_deref()
        .map(|j| format!("\n\n# 応募先の求人情報\n{j}"))
        .unwrap_or_default();

    let (policy, summary_hint, type_hint, reason_hint, closing_hint) = if with_position {
        (
            POSITION_POLICY,
            "。ポジション分析を参照した場合はその観点も含める",
            "、ポジション適合性の強化",
            "（ポジション分析との関連も記載）",
            "ポジション分析の結果を踏まえた改善提案を優先的に含めてください。",
        )
    } else {
        ("", "", "", "", "")
    };

    render(
        CORRECTION_PROMPT_TEMPLATE,
        &[
            ("focus_instruction", params.focus.instruction()),
            ("position_policy", policy),
            ("summary_hint", summary_hint),
            ("type_hint", type_hint),
            ("reason_hint", reason_hint),
            ("closing_hint", closing_hint),
            ("position_section", position_section.as_deref().unwrap_or("")),
            ("job_section", &job_section),
            ("document_text", &params.document_text),
        ],
    )
}

/// Produces correction suggestions for a document.
pub async fn correct_document(
    params: &CorrectionParams,
    llm: &LlmClient,
) -> Result<CorrectionResult, AppError> {
    let prompt = build_correction_prompt(params);
    llm.call_json::<CorrectionResult>(&prompt, JSON_ONLY_SYSTEM, CORRECTION_MAX_TOKENS)
        .await
        .map_err(|e| AppError::llm("添削に失敗しました。もう一度お試しください。", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(brief: Option<PositionBrief>) -> CorrectionParams {
        CorrectionParams {
            document_text: "営業として3年間勤務".to_string(),
            focus: DocumentFocus::Achievement,
            job_info: None,
            position_analysis: brief,
        }
    }

    #[test]
    fn test_blank_document_rejected() {
        let request = CorrectionRequest {
            user_id: Some("u".into()),
            document_text: "\n".into(),
            focus: None,
            job_info: None,
            position_analysis: None,
        };
        assert!(matches!(
            CorrectionParams::from_request(request),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_brief_yields_no_context() {
        let brief = PositionBrief {
            position_title: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(build_position_context(&brief).is_none());
    }

    #[test]
    fn test_brief_sections_render_in_order() {
        let brief = PositionBrief {
            position_title: Some("実質的にはPM寄りのエンジニア".to_string()),
            key_qualities: vec![KeyQuality {
                quality: "調整力".to_string(),
                reason: "他部署との連携が多い".to_string(),
            }],
            between_the_lines: vec![BetweenTheLines {
                written: "裁量が大きい".to_string(),
                reading: "仕組みが未整備".to_string(),
            }],
            gap_to_cover: Some("マネジメント経験".to_string()),
            ..Default::default()
        };
        let context = build_position_context(&brief).unwrap();

        let title = context.find("■ ポジション名").unwrap();
        let qualities = context.find("・調整力（他部署との連携が多い）").unwrap();
        let lines = context.find("・「裁量が大きい」→ 仕組みが未整備").unwrap();
        let gap = context.find("■ 面接で補うべきギャップ").unwrap();
        assert!(title < qualities && qualities < lines && lines < gap);
    }

    #[test]
    fn test_prompt_without_position_has_no_policy() {
        let prompt = build_correction_prompt(&params(None));
        assert!(prompt.contains("実績の数値化・具体化を重視"));
        assert!(!prompt.contains("重要な添削方針"));
        assert!(!prompt.contains("ポジション適合性の強化"));
        assert!(!prompt.contains("{position_section}"));
    }

    #[test]
    fn test_prompt_with_position_adds_policy_and_context() {
        let brief = PositionBrief {
            possible_concerns: Some("定着性".to_string()),
            ..Default::default()
        };
        let mut p = params(Some(brief));
        p.job_info = Some("法人営業".to_string());
        let prompt = build_correction_prompt(&p);
        assert!(prompt.contains("重要な添削方針"));
        assert!(prompt.contains("■ 採用側が持ちうる懸念: 定着性"));
        assert!(prompt.contains("# 応募先の求人情報\n法人営業"));
        assert!(prompt.contains("ポジション適合性の強化"));
    }

    #[test]
    fn test_correction_result_deserializes_type_field() {
        let json = r#"{
            "summary": "全体的に良い",
            "strengths": ["継続性"],
            "corrections": [{"type": "数値化", "before": "売上に貢献", "after": "売上を前年比120%に", "reason": "具体性"}],
            "suggestions": []
        }"#;
        let result: CorrectionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.corrections[0].kind, "数値化");
    }

    #[test]
    fn test_placeholders_in_user_text_stay_literal() {
        let brief = PositionBrief {
            position_title: Some("{document_text} 担当".to_string()),
            ..Default::default()
        };
        let mut p = params(Some(brief));
        p.job_info = Some("{position_policy} を理解できる方".to_string());
        let prompt = build_correction_prompt(&p);

        assert_eq!(prompt.matches("営業として3年間勤務").count(), 1);
        assert!(prompt.contains("■ ポジション名: {document_text} 担当"));
        assert!(prompt.contains("# 応募先の求人情報\n{position_policy} を理解できる方"));
        assert_eq!(prompt.matches("重要な添削方針").count(), 1);
    }
}
