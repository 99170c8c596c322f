//! Axum route handlers for the interview API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::history::require_user_id;
use crate::history::store::record_generation;
use crate::interview::correction::{
    correct_document, CorrectionParams, CorrectionRequest, CorrectionResult,
};
use crate::interview::feedback::{evaluate_answer, FeedbackRequest, PracticeFeedback};
use crate::interview::questions::{
    generate_questions, QuestionParams, QuestionSet, QuestionsRequest,
};
use crate::models::generation::GenerationKind;
use crate::state::AppState;

/// POST /api/v1/interview/questions
///
/// Signed-in only. The generated set is recorded in the user's history.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<QuestionsRequest>,
) -> Result<Json<QuestionSet>, AppError> {
    let user_id = require_user_id(request.user_id.as_deref())?.to_string();
    let params = QuestionParams::from_request(request)?;

    let set = generate_questions(&params, &state.llm).await?;

    record_generation(&state.db, &user_id, GenerationKind::Questions, &params, &set).await;

    Ok(Json(set))
}

/// POST /api/v1/interview/correction
///
/// Signed-in only. The correction is recorded in the user's history.
pub async fn handle_correct_document(
    State(state): State<AppState>,
    Json(request): Json<CorrectionRequest>,
) -> Result<Json<CorrectionResult>, AppError> {
    let user_id = require_user_id(request.user_id.as_deref())?.to_string();
    let params = CorrectionParams::from_request(request)?;

    let result = correct_document(&params, &state.llm).await?;

    record_generation(
        &state.db,
        &user_id,
        GenerationKind::Correction,
        &params,
        &result,
    )
    .await;

    Ok(Json(result))
}

/// POST /api/v1/interview/feedback
pub async fn handle_practice_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<PracticeFeedback>, AppError> {
    request.validate()?;
    let feedback = evaluate_answer(&request, &state.llm).await?;
    Ok(Json(feedback))
}
