//! Interview question generation: likely questions plus model answers for a posting.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::prompts::QUESTIONS_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{optional_section, render, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;

pub const DEFAULT_QUESTION_COUNT: u32 = 7;
pub const MAX_QUESTION_COUNT: u32 = 20;
const QUESTIONS_MAX_TOKENS: u32 = 4000;

/// Which side of the candidate the question set should probe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewType {
    #[default]
    Balanced,
    Technical,
    Behavioral,
    Executive,
}

impl InterviewType {
    /// Unknown labels fall back to `Balanced`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("technical") => InterviewType::Technical,
            Some("behavioral") => InterviewType::Behavioral,
            Some("executive") => InterviewType::Executive,
            _ => InterviewType::Balanced,
        }
    }

    fn instruction(&self) -> &'static str {
        match self {
            InterviewType::Balanced => "技術と人物面接をバランスよく",
            InterviewType::Technical => "技術的な質問を中心に",
            InterviewType::Behavioral => "行動・経験の質問を中心に",
            InterviewType::Executive => "経営・リーダーシップの質問を中心に",
        }
    }
}

/// Target length of each model answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl AnswerLength {
    /// Unknown labels fall back to `Medium`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("short") => AnswerLength::Short,
            Some("long") => AnswerLength::Long,
            _ => AnswerLength::Medium,
        }
    }

    fn instruction(&self) -> &'static str {
        match self {
            AnswerLength::Short => "150-200文字",
            AnswerLength::Medium => "200-300文字",
            AnswerLength::Long => "300-400文字",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsRequest {
    pub user_id: Option<String>,
    #[serde(default)]
    pub job_info: String,
    pub resume_text: Option<String>,
    pub question_count: Option<u32>,
    pub interview_type: Option<String>,
    pub answer_length: Option<String>,
}

/// Normalized generation parameters; also what gets stored as history input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionParams {
    pub job_info: String,
    pub resume_text: Option<String>,
    pub question_count: u32,
    pub interview_type: InterviewType,
    pub answer_length: AnswerLength,
}

impl QuestionParams {
    pub fn from_request(request: QuestionsRequest) -> Result<Self, AppError> {
        if request.job_info.trim().is_empty() {
            return Err(AppError::Validation("求人情報を入力してください".to_string()));
        }

        Ok(Self {
            job_info: request.job_info,
            resume_text: request.resume_text.filter(|t| !t.trim().is_empty()),
            question_count: request
                .question_count
                .unwrap_or(DEFAULT_QUESTION_COUNT)
                .clamp(1, MAX_QUESTION_COUNT),
            interview_type: InterviewType::from_label(request.interview_type.as_deref()),
            answer_length: AnswerLength::from_label(request.answer_length.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<InterviewQuestion>,
}

pub fn build_questions_prompt(params: &QuestionParams) -> String {
    let resume_section = optional_section("履歴書・職務経歴書", params.resume_text.as_deref());

    let question_count = params.question_count.to_string();

    render(
        QUESTIONS_PROMPT_TEMPLATE,
        &[
            ("question_count", &question_count),
            ("type_instruction", params.interview_type.instruction()),
            ("length_instruction", params.answer_length.instruction()),
            ("resume_section", &resume_section),
            ("job_info", &params.job_info),
        ],
    )
}

/// Generates a question set with model answers.
pub async fn generate_questions(
    params: &QuestionParams,
    llm: &LlmClient,
) -> Result<QuestionSet, AppError> {
    let prompt = build_questions_prompt(params);
    llm.call_json::<QuestionSet>(&prompt, JSON_ONLY_SYSTEM, QUESTIONS_MAX_TOKENS)
        .await
        .map_err(|e| AppError::llm("質問の生成に失敗しました。もう一度お試しください。", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(job_info: &str) -> QuestionsRequest {
        QuestionsRequest {
            user_id: Some("user_1".to_string()),
            job_info: job_info.to_string(),
            resume_text: None,
            question_count: None,
            interview_type: None,
            answer_length: None,
        }
    }

    #[test]
    fn test_blank_job_info_is_rejected() {
        let err = QuestionParams::from_request(request("  ")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_defaults_applied() {
        let params = QuestionParams::from_request(request("バックエンドエンジニア募集")).unwrap();
        assert_eq!(params.question_count, DEFAULT_QUESTION_COUNT);
        assert_eq!(params.interview_type, InterviewType::Balanced);
        assert_eq!(params.answer_length, AnswerLength::Medium);
    }

    #[test]
    fn test_question_count_clamped() {
        let mut req = request("営業職");
        req.question_count = Some(500);
        assert_eq!(
            QuestionParams::from_request(req).unwrap().question_count,
            MAX_QUESTION_COUNT
        );

        let mut req = request("営業職");
        req.question_count = Some(0);
        assert_eq!(QuestionParams::from_request(req).unwrap().question_count, 1);
    }

    #[test]
    fn test_unknown_labels_fall_back() {
        assert_eq!(
            InterviewType::from_label(Some("casual")),
            InterviewType::Balanced
        );
        assert_eq!(AnswerLength::from_label(Some("huge")), AnswerLength::Medium);
        assert_eq!(
            InterviewType::from_label(Some("executive")),
            InterviewType::Executive
        );
    }

    #[test]
    fn test_prompt_includes_conditions_and_optional_resume() {
        let mut req = request("Rustエンジニア募集");
        req.question_count = Some(5);
        req.interview_type = Some("technical".to_string());
        req.answer_length = Some("short".to_string());
        req.resume_text = Some("Go歴5年".to_string());
        let prompt = build_questions_prompt(&QuestionParams::from_request(req).unwrap());

        assert!(prompt.contains("質問を5個生成"));
        assert!(prompt.contains("技術的な質問を中心に"));
        assert!(prompt.contains("150-200文字"));
        assert!(prompt.contains("# 履歴書・職務経歴書\nGo歴5年"));
        assert!(prompt.contains("Rustエンジニア募集"));
        assert!(!prompt.contains("{resume_section}"));
    }

    #[test]
    fn test_prompt_omits_resume_section_when_absent() {
        let params = QuestionParams::from_request(request("事務職")).unwrap();
        assert!(!build_questions_prompt(&params).contains("履歴書・職務経歴書"));
    }

    #[test]
    fn test_question_set_deserializes() {
        let json = r#"{"questions": [
            {"question": "自己紹介をお願いします", "answer": "私は...", "category": "自己紹介"},
            {"question": "志望動機は？", "answer": "御社の..."}
        ]}"#;
        let set: QuestionSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.questions.len(), 2);
        assert_eq!(set.questions[1].category, "");
    }

    #[test]
    fn test_resume_placeholders_are_not_expanded() {
        let mut req = request("Rustエンジニア募集");
        req.resume_text = Some("自己PR欄に {job_info} と書いた".to_string());
        let prompt = build_questions_prompt(&QuestionParams::from_request(req).unwrap());

        assert!(prompt.contains("自己PR欄に {job_info} と書いた"));
        assert_eq!(prompt.matches("Rustエンジニア募集").count(), 1);
    }
}
