use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::history::require_user_id;
use crate::history::store::{delete_generation, list_generations};
use crate::models::generation::GenerationRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Option<String>,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub generations: Vec<GenerationRow>,
}

/// GET /api/v1/history
pub async fn handle_list_history(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let user_id = require_user_id(params.user_id.as_deref())?;
    let generations = list_generations(&state.db, user_id).await?;
    Ok(Json(HistoryResponse { generations }))
}

/// DELETE /api/v1/history/:id
pub async fn handle_delete_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let user_id = require_user_id(params.user_id.as_deref())?;
    if !delete_generation(&state.db, id, user_id).await? {
        return Err(AppError::NotFound(format!("Generation {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
