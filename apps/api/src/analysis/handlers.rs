//! Axum route handlers for the analysis API.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::analysis::market::{evaluate_market, MarketEvaluationRequest, MarketEvaluationResponse};
use crate::analysis::position::{analyze_position, PositionAnalysis, PositionAnalysisRequest};
use crate::analysis::quick::{quick_diagnosis, QuickDiagnosis, QuickDiagnosisRequest};
use crate::errors::AppError;
use crate::interview::correction::PositionBrief;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionAnalysisResponse {
    #[serde(flatten)]
    pub analysis: PositionAnalysis,
    /// Ready to send back as `positionAnalysis` on a correction request.
    pub correction_brief: PositionBrief,
}

/// POST /api/v1/analysis/quick
pub async fn handle_quick_diagnosis(
    State(state): State<AppState>,
    Json(request): Json<QuickDiagnosisRequest>,
) -> Result<Json<QuickDiagnosis>, AppError> {
    request.validate()?;
    let diagnosis = quick_diagnosis(&request, &state.llm).await?;
    Ok(Json(diagnosis))
}

/// POST /api/v1/analysis/market
///
/// Returns the evaluation together with agents ranked from its category judgments.
pub async fn handle_market_evaluation(
    State(state): State<AppState>,
    Json(request): Json<MarketEvaluationRequest>,
) -> Result<Json<MarketEvaluationResponse>, AppError> {
    request.validate()?;
    let evaluation = evaluate_market(&request, &state.llm).await?;

    let response =
        MarketEvaluationResponse::with_recommendations(evaluation, state.config.agent_max_results);
    info!(
        "Market evaluation complete, {} agents recommended",
        response.recommended_agents.len()
    );

    Ok(Json(response))
}

/// POST /api/v1/analysis/position
pub async fn handle_position_analysis(
    State(state): State<AppState>,
    Json(request): Json<PositionAnalysisRequest>,
) -> Result<Json<PositionAnalysisResponse>, AppError> {
    request.validate()?;
    let analysis = analyze_position(&request, &state.llm).await?;
    let correction_brief = analysis.to_brief();
    Ok(Json(PositionAnalysisResponse {
        analysis,
        correction_brief,
    }))
}
