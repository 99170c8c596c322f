//! Position analysis: reads a job posting between the lines.

use serde::{Deserialize, Serialize};

use crate::analysis::prompts::{POSITION_ANALYSIS_PROMPT_TEMPLATE, YOUR_FIT_SCHEMA};
use crate::errors::AppError;
use crate::interview::correction::{BetweenTheLines, FitPoint, KeyQuality, PositionBrief};
use crate::llm_client::prompts::{optional_section, render, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;

const POSITION_ANALYSIS_MAX_TOKENS: u32 = 4000;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionAnalysisRequest {
    #[serde(default)]
    pub job_info: String,
    pub resume_text: Option<String>,
}

impl PositionAnalysisRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.job_info.trim().is_empty() {
            return Err(AppError::Validation("求人情報を入力してください".to_string()));
        }
        Ok(())
    }

    fn resume_text(&self) -> Option<&str> {
        self.resume_text.as_deref().filter(|r| !r.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionReality {
    pub title: String,
    pub summary: String,
    pub day_in_life: String,
    pub team_context: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyPain {
    pub pain: String,
    pub evidence: String,
    pub implication: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhyNow {
    pub primary_reason: String,
    pub reasoning: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HiddenContext {
    pub company_pains: Vec<CompanyPain>,
    pub why_now: WhyNow,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskScenario {
    pub scenario: String,
    pub signals: String,
    pub mitigation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusQuality {
    pub quality: String,
    pub why: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterviewFocus {
    pub what_they_really_want: String,
    pub key_qualities: Vec<FocusQuality>,
    pub possible_concerns: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FitConnection {
    pub your_experience: String,
    pub how_it_connects: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YourFit {
    pub strong_connections: Vec<FitConnection>,
    pub gap_to_address: String,
    pub interview_strategy: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionAnalysis {
    pub position_reality: PositionReality,
    pub hidden_context: HiddenContext,
    pub risk_scenarios: Vec<RiskScenario>,
    pub interview_focus: InterviewFocus,
    /// Present only when the request carried a resume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub your_fit: Option<YourFit>,
}

fn non_empty(s: &str) -> Option<String> {
    (!s.trim().is_empty()).then(|| s.to_string())
}

impl PositionAnalysis {
    /// Condenses the analysis into the brief a document correction consumes.
    pub fn to_brief(&self) -> PositionBrief {
        let reality = &self.position_reality;
        let focus = &self.interview_focus;

        PositionBrief {
            position_title: non_empty(&reality.title),
            reality_description: non_empty(&reality.summary),
            daily_image: non_empty(&reality.day_in_life),
            interview_focus_summary: non_empty(&focus.what_they_really_want),
            key_qualities: focus
                .key_qualities
                .iter()
                .map(|q| KeyQuality {
                    quality: q.quality.clone(),
                    reason: q.why.clone(),
                })
                .collect(),
            possible_concerns: non_empty(&focus.possible_concerns),
            between_the_lines: self
                .hidden_context
                .company_pains
                .iter()
                .map(|p| BetweenTheLines {
                    written: p.evidence.clone(),
                    reading: p.pain.clone(),
                })
                .collect(),
            fit_points: self
                .your_fit
                .iter()
                .flat_map(|f| f.strong_connections.iter())
                .map(|c| FitPoint {
                    experience: c.your_experience.clone(),
                    application: c.how_it_connects.clone(),
                })
                .collect(),
            gap_to_cover: self
                .your_fit
                .as_ref()
                .and_then(|f| non_empty(&f.gap_to_address)),
        }
    }
}

pub fn build_position_analysis_prompt(request: &PositionAnalysisRequest) -> String {
    let resume = request.resume_text();
    let resume_intro = if resume.is_some() {
        "\nまた、応募者の経歴も参照し、このポジションとの接点を具体的に分析してください。\n"
    } else {
        ""
    };
    let your_fit_schema = if resume.is_some() { YOUR_FIT_SCHEMA } else { "" };
    let resume_section = optional_section("応募者の経歴", resume);

    render(
        POSITION_ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("resume_intro", resume_intro),
            ("your_fit_schema", your_fit_schema),
            ("resume_section", &resume_section),
            ("job_info", &request.job_info),
        ],
    )
}

/// Analyzes a posting. `your_fit` is dropped when no resume was given, even if
/// the model volunteers one.
pub async fn analyze_position(
    request: &PositionAnalysisRequest,
    llm: &LlmClient,
) -> Result<PositionAnalysis, AppError> {
    let prompt = build_position_analysis_prompt(request);
    let mut analysis = llm
        .call_json::<PositionAnalysis>(&prompt, JSON_ONLY_SYSTEM, POSITION_ANALYSIS_MAX_TOKENS)
        .await
        .map_err(|e| AppError::llm("ポジション分析に失敗しました", e))?;

    if request.resume_text().is_none() {
        analysis.your_fit = None;
    }
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::correction::build_position_context;

    fn request(resume: Option<&str>) -> PositionAnalysisRequest {
        PositionAnalysisRequest {
            job_info: "Webマーケター募集。裁量大。".to_string(),
            resume_text: resume.map(str::to_string),
        }
    }

    #[test]
    fn test_job_info_required() {
        let r = PositionAnalysisRequest {
            job_info: " ".to_string(),
            resume_text: None,
        };
        assert!(matches!(r.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_prompt_without_resume_has_no_fit_schema() {
        let prompt = build_position_analysis_prompt(&request(None));
        assert!(!prompt.contains("yourFit"));
        assert!(!prompt.contains("応募者の経歴"));
        assert!(prompt.contains("# 求人情報\nWebマーケター募集。裁量大。"));
    }

    #[test]
    fn test_prompt_with_resume_requests_fit() {
        let prompt = build_position_analysis_prompt(&request(Some("広告運用3年")));
        assert!(prompt.contains("\"yourFit\""));
        assert!(prompt.contains("# 応募者の経歴\n広告運用3年"));
        assert!(prompt.contains("接点を具体的に分析"));
    }

    #[test]
    fn test_analysis_without_fit_deserializes() {
        let json = r#"{
            "positionReality": { "title": "実質的には運用寄りのマーケター", "summary": "広告運用が中心" },
            "hiddenContext": {
                "companyPains": [{ "pain": "属人化", "evidence": "裁量大", "implication": "引き継ぎが少ない" }],
                "whyNow": { "primaryReason": "事業拡大" }
            },
            "riskScenarios": [],
            "interviewFocus": { "whatTheyReallyWant": "自走力", "keyQualities": [{ "quality": "主体性", "why": "指示が少ない" }] }
        }"#;
        let analysis: PositionAnalysis = serde_json::from_str(json).unwrap();
        assert!(analysis.your_fit.is_none());
        assert_eq!(analysis.hidden_context.why_now.primary_reason, "事業拡大");

        let value = serde_json::to_value(&analysis).unwrap();
        assert!(value.get("yourFit").is_none());
    }

    #[test]
    fn test_brief_feeds_correction_context() {
        let analysis = PositionAnalysis {
            position_reality: PositionReality {
                title: "運用寄りのマーケター".to_string(),
                ..Default::default()
            },
            hidden_context: HiddenContext {
                company_pains: vec![CompanyPain {
                    pain: "属人化".to_string(),
                    evidence: "裁量大".to_string(),
                    implication: String::new(),
                }],
                ..Default::default()
            },
            your_fit: Some(YourFit {
                strong_connections: vec![FitConnection {
                    your_experience: "広告運用".to_string(),
                    how_it_connects: "即戦力".to_string(),
                }],
                gap_to_address: "マネジメント".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };

        let brief = analysis.to_brief();
        assert_eq!(brief.position_title.as_deref(), Some("運用寄りのマーケター"));
        assert!(brief.daily_image.is_none());

        let context = build_position_context(&brief).unwrap();
        assert!(context.contains("・「裁量大」→ 属人化"));
        assert!(context.contains("・広告運用 → 即戦力"));
        assert!(context.contains("■ 面接で補うべきギャップ: マネジメント"));
    }

    #[test]
    fn test_job_info_placeholders_stay_literal() {
        let r = PositionAnalysisRequest {
            job_info: "応募書類に {resume_section} と {your_fit_schema} を記載".to_string(),
            resume_text: Some("広告運用3年".to_string()),
        };
        let prompt = build_position_analysis_prompt(&r);
        assert!(prompt.contains("応募書類に {resume_section} と {your_fit_schema} を記載"));
        assert_eq!(prompt.matches("広告運用3年").count(), 1);
        assert_eq!(prompt.matches("\"yourFit\"").count(), 1);
    }
}
