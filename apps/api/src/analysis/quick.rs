//! Quick diagnosis: a one-screen fit check of a resume against a posting.

use serde::{Deserialize, Serialize};

use crate::analysis::prompts::QUICK_DIAGNOSIS_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::{deserialize_score, render, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;

const QUICK_DIAGNOSIS_MAX_TOKENS: u32 = 2000;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickDiagnosisRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_info: String,
}

impl QuickDiagnosisRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.resume_text.trim().is_empty() || self.job_info.trim().is_empty() {
            return Err(AppError::Validation(
                "職務経歴と求人情報の両方を入力してください".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionSnapshot {
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickDiagnosis {
    /// Fit percentage, 0 – 100
    #[serde(deserialize_with = "deserialize_score")]
    pub match_score: i64,
    #[serde(default)]
    pub match_comment: String,
    #[serde(default)]
    pub market_view: String,
    #[serde(default)]
    pub instant_value: Vec<String>,
    #[serde(default)]
    pub position_reality: PositionSnapshot,
}

impl QuickDiagnosis {
    /// Clamps the model's score into 0..=100.
    pub fn normalized(mut self) -> Self {
        self.match_score = self.match_score.clamp(0, 100);
        self
    }
}

pub fn build_quick_diagnosis_prompt(request: &QuickDiagnosisRequest) -> String {
    render(
        QUICK_DIAGNOSIS_PROMPT_TEMPLATE,
        &[
            ("resume_text", &request.resume_text),
            ("job_info", &request.job_info),
        ],
    )
}

pub async fn quick_diagnosis(
    request: &QuickDiagnosisRequest,
    llm: &LlmClient,
) -> Result<QuickDiagnosis, AppError> {
    let prompt = build_quick_diagnosis_prompt(request);
    let diagnosis = llm
        .call_json::<QuickDiagnosis>(&prompt, JSON_ONLY_SYSTEM, QUICK_DIAGNOSIS_MAX_TOKENS)
        .await
        .map_err(|e| AppError::llm("クイック診断中にエラーが発生しました", e))?;

    Ok(diagnosis.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_inputs_required() {
        let request = QuickDiagnosisRequest {
            resume_text: "経理5年".to_string(),
            job_info: "".to_string(),
        };
        assert!(matches!(request.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_prompt_embeds_inputs() {
        let request = QuickDiagnosisRequest {
            resume_text: "経理5年".to_string(),
            job_info: "経理マネージャー募集".to_string(),
        };
        let prompt = build_quick_diagnosis_prompt(&request);
        assert!(prompt.contains("【職務経歴】\n経理5年"));
        assert!(prompt.contains("【求人情報】\n経理マネージャー募集"));
    }

    #[test]
    fn test_diagnosis_tolerates_missing_sections() {
        let diagnosis: QuickDiagnosis =
            serde_json::from_str(r#"{"matchScore": 64, "matchComment": "概ね適合"}"#).unwrap();
        assert_eq!(diagnosis.match_score, 64);
        assert!(diagnosis.instant_value.is_empty());
        assert_eq!(diagnosis.position_reality.title, "");
    }

    #[test]
    fn test_placeholder_text_in_job_info_stays_literal() {
        let request = QuickDiagnosisRequest {
            resume_text: "経理5年の職務経歴".to_string(),
            job_info: "テンプレ記法 {resume_text} を扱える方".to_string(),
        };
        let prompt = build_quick_diagnosis_prompt(&request);
        assert_eq!(prompt.matches("経理5年の職務経歴").count(), 1);
        assert!(prompt.contains("テンプレ記法 {resume_text} を扱える方"));
    }

    #[test]
    fn test_out_of_range_score_is_clamped() {
        let low: QuickDiagnosis = serde_json::from_str(r#"{"matchScore": -5}"#).unwrap();
        assert_eq!(low.normalized().match_score, 0);
        let high: QuickDiagnosis = serde_json::from_str(r#"{"matchScore": 140}"#).unwrap();
        assert_eq!(high.normalized().match_score, 100);
    }

    #[test]
    fn test_fractional_score_is_rounded() {
        let diagnosis: QuickDiagnosis = serde_json::from_str(r#"{"matchScore": 72.5}"#).unwrap();
        assert_eq!(diagnosis.normalized().match_score, 73);
    }
}
