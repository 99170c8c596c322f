//! Market evaluation: the candidate's standing in the Japanese job market.
//!
//! The model also judges which advisor categories suit the candidate; those
//! judgments feed the agent matcher so the response carries ranked recommendations.

use serde::{Deserialize, Serialize};

use crate::agents::matcher::{match_agents, CategoryJudgments, MatchedAgent};
use crate::analysis::prompts::MARKET_EVALUATION_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::{render, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;

const MARKET_EVALUATION_MAX_TOKENS: u32 = 4500;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketEvaluationRequest {
    #[serde(default)]
    pub resume_text: String,
    pub job_info: Option<String>,
}

impl MarketEvaluationRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.resume_text.trim().is_empty() {
            return Err(AppError::Validation("職務経歴を入力してください".to_string()));
        }
        Ok(())
    }

    fn job_info(&self) -> Option<&str> {
        self.job_info.as_deref().filter(|j| !j.trim().is_empty())
    }
}

/// Expected salary movement relative to the candidate's current pay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryComparison {
    Up,
    Flat,
    NegotiationNeeded,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Screening pass likelihood: A high, B medium, C needs work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionGrade {
    A,
    B,
    C,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketView {
    pub summary: String,
    pub instant_value: Vec<String>,
    pub growing_demand: Vec<String>,
    pub reproducible_results: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalaryEstimate {
    pub range: String,
    pub current_comparison: SalaryComparison,
    pub reasoning: String,
    pub note: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionOutlook {
    pub grade: SelectionGrade,
    pub comment: String,
    pub key_factors: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompetitorProfile {
    pub typical_background: String,
    pub competitive_advantages: Vec<String>,
    pub potential_weaknesses: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NegotiationLeverage {
    pub salary_negotiation: Vec<String>,
    pub condition_negotiation: Vec<String>,
    pub timing_advice: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrengthAssessment {
    pub execution: String,
    pub continuity: String,
    pub problem_solving: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrowthAreas {
    pub quantification: String,
    pub decision_making: String,
    pub cross_functional: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerDirection {
    pub direction: String,
    pub description: String,
    pub relevant_industries: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSummary {
    pub primary_skills: Vec<String>,
    pub experience_years: String,
    pub job_category: String,
    pub seniority_level: String,
    pub estimated_salary_range: String,
    pub industry_experience: Vec<String>,
    pub unique_strengths: Vec<String>,
    pub leadership_experience: String,
    pub career_highlight: String,
}

/// Full structured output of a market evaluation.
/// Sections the model leaves out come back as their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketEvaluation {
    pub market_view: MarketView,
    pub salary_estimate: SalaryEstimate,
    pub selection_outlook: SelectionOutlook,
    pub competitor_profile: CompetitorProfile,
    pub negotiation_leverage: NegotiationLeverage,
    pub strengths: StrengthAssessment,
    pub growth_areas: GrowthAreas,
    pub career_directions: Vec<CareerDirection>,
    pub profile_summary: ProfileSummary,
    pub agent_match_reasons: CategoryJudgments,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketEvaluationResponse {
    #[serde(flatten)]
    pub evaluation: MarketEvaluation,
    pub recommended_agents: Vec<MatchedAgent>,
}

impl MarketEvaluationResponse {
    /// Pairs an evaluation with agents ranked from its category judgments.
    pub fn with_recommendations(evaluation: MarketEvaluation, max_agents: usize) -> Self {
        let recommended_agents = match_agents(&evaluation.agent_match_reasons, max_agents);
        Self {
            evaluation,
            recommended_agents,
        }
    }
}

pub fn build_market_evaluation_prompt(request: &MarketEvaluationRequest) -> String {
    let (job_label, job_section, competitor_scope) = match request.job_info() {
        Some(job) => (
            "と求人情報",
            format!("【求人情報】\n{job}\n\n"),
            "この具体的な求人に",
        ),
        None => ("", String::new(), "同様のポジションに"),
    };

    render(
        MARKET_EVALUATION_PROMPT_TEMPLATE,
        &[
            ("job_label", job_label),
            ("competitor_scope", competitor_scope),
            ("job_section", &job_section),
            ("resume_text", &request.resume_text),
        ],
    )
}

pub async fn evaluate_market(
    request: &MarketEvaluationRequest,
    llm: &LlmClient,
) -> Result<MarketEvaluation, AppError> {
    let prompt = build_market_evaluation_prompt(request);
    llm.call_json::<MarketEvaluation>(&prompt, JSON_ONLY_SYSTEM, MARKET_EVALUATION_MAX_TOKENS)
        .await
        .map_err(|e| AppError::llm("市場評価中にエラーが発生しました", e))
}
