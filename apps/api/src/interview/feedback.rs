//! Practice feedback: scores a candidate's own answer to an interview question.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::prompts::FEEDBACK_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{deserialize_score, optional_section, render, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;

const FEEDBACK_MAX_TOKENS: u32 = 2000;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub user_answer: String,
    pub ideal_answer: Option<String>,
    pub job_info: Option<String>,
}

impl FeedbackRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.question.trim().is_empty() || self.user_answer.trim().is_empty() {
            return Err(AppError::Validation(
                "質問と回答を入力してください".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeFeedback {
    /// 0 – 100
    #[serde(deserialize_with = "deserialize_score")]
    pub score: i64,
    #[serde(default)]
    pub score_comment: String,
    #[serde(default)]
    pub good_points: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub improved_answer: String,
    #[serde(default)]
    pub tips: String,
}

impl PracticeFeedback {
    /// Clamps the model's score into 0..=100.
    pub fn normalized(mut self) -> Self {
        self.score = self.score.clamp(0, 100);
        self
    }
}

pub fn build_feedback_prompt(request: &FeedbackRequest) -> String {
    let ideal_section = optional_section("参考：模範解答", request.ideal_answer.as_deref());
    let job_section = optional_section("応募先情報", request.job_info.as_deref());

    render(
        FEEDBACK_PROMPT_TEMPLATE,
        &[
            ("question", &request.question),
            ("user_answer", &request.user_answer),
            ("ideal_section", &ideal_section),
            ("job_section", &job_section),
        ],
    )
}

/// Evaluates a practice answer. The score is clamped to 0..=100.
pub async fn evaluate_answer(
    request: &FeedbackRequest,
    llm: &LlmClient,
) -> Result<PracticeFeedback, AppError> {
    let prompt = build_feedback_prompt(request);
    let feedback = llm
        .call_json::<PracticeFeedback>(&prompt, JSON_ONLY_SYSTEM, FEEDBACK_MAX_TOKENS)
        .await
        .map_err(|e| AppError::llm("フィードバックの生成に失敗しました", e))?;

    Ok(feedback.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> FeedbackRequest {
        FeedbackRequest {
            question: "前職での最大の成果は？".to_string(),
            user_answer: "新規顧客を20社開拓しました".to_string(),
            ideal_answer: None,
            job_info: None,
        }
    }

    #[test]
    fn test_missing_answer_rejected() {
        let mut r = request();
        r.user_answer = " ".to_string();
        assert!(matches!(r.validate(), Err(AppError::Validation(_))));
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_prompt_optional_sections() {
        let prompt = build_feedback_prompt(&request());
        assert!(prompt.contains("# 質問\n前職での最大の成果は？"));
        assert!(!prompt.contains("参考：模範解答"));

        let mut r = request();
        r.ideal_answer = Some("STARで答える".to_string());
        r.job_info = Some("SaaS営業".to_string());
        let prompt = build_feedback_prompt(&r);
        assert!(prompt.contains("# 参考：模範解答\nSTARで答える"));
        assert!(prompt.contains("# 応募先情報\nSaaS営業"));
    }

    #[test]
    fn test_feedback_deserializes_camel_case() {
        let json = r#"{
            "score": 72,
            "scoreComment": "具体性は十分",
            "goodPoints": ["数字がある"],
            "improvements": ["結果を明確に"],
            "improvedAnswer": "私は...",
            "tips": "結論から話す"
        }"#;
        let feedback: PracticeFeedback = serde_json::from_str(json).unwrap();
        assert_eq!(feedback.score, 72);
        assert_eq!(feedback.good_points, vec!["数字がある"]);
    }

    #[test]
    fn test_user_text_with_placeholders_is_not_expanded() {
        let mut r = request();
        r.ideal_answer = Some("形式: {user_answer}".to_string());
        r.job_info = Some("{question} を問う面接".to_string());
        let prompt = build_feedback_prompt(&r);
        assert!(prompt.contains("形式: {user_answer}"));
        assert!(prompt.contains("{question} を問う面接"));
        assert_eq!(prompt.matches("新規顧客を20社開拓しました").count(), 1);
        assert_eq!(prompt.matches("前職での最大の成果は？").count(), 1);
    }

    #[test]
    fn test_score_is_clamped_and_rounded() {
        let high: PracticeFeedback = serde_json::from_str(r#"{"score": 150}"#).unwrap();
        assert_eq!(high.normalized().score, 100);
        let low: PracticeFeedback = serde_json::from_str(r#"{"score": -20}"#).unwrap();
        assert_eq!(low.normalized().score, 0);
        let fractional: PracticeFeedback = serde_json::from_str(r#"{"score": 72.5}"#).unwrap();
        assert_eq!(fractional.normalized().score, 73);
    }
}
