//! Axum route handlers for agent recommendations.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agents::catalog::{catalog, AgentRecord};
use crate::agents::matcher::{match_agents, CategoryJudgments, MatchedAgent};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAgentsRequest {
    #[serde(default)]
    pub agent_match_reasons: CategoryJudgments,
    pub max_results: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct MatchAgentsResponse {
    pub agents: Vec<MatchedAgent>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub agents: &'static [AgentRecord],
}

/// GET /api/v1/agents
pub async fn handle_list_agents() -> Json<CatalogResponse> {
    Json(CatalogResponse { agents: catalog() })
}

/// POST /api/v1/agents/match
///
/// Ranks catalog agents for a set of category judgments.
/// `maxResults` falls back to the configured default.
pub async fn handle_match_agents(
    State(state): State<AppState>,
    Json(request): Json<MatchAgentsRequest>,
) -> Json<MatchAgentsResponse> {
    let max_results = request
        .max_results
        .unwrap_or(state.config.agent_max_results);

    let agents = match_agents(&request.agent_match_reasons, max_results);
    debug!(
        "Matched {} agents (max {max_results}): {:?}",
        agents.len(),
        agents.iter().map(|a| a.identifier()).collect::<Vec<_>>()
    );

    Json(MatchAgentsResponse { agents })
}
