pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::agents::handlers as agents;
use crate::analysis::handlers as analysis;
use crate::history::handlers as history;
use crate::interview::handlers as interview;
use crate::resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Interview preparation
        .route(
            "/api/v1/interview/questions",
            post(interview::handle_generate_questions),
        )
        .route(
            "/api/v1/interview/correction",
            post(interview::handle_correct_document),
        )
        .route(
            "/api/v1/interview/feedback",
            post(interview::handle_practice_feedback),
        )
        // Analysis
        .route("/api/v1/analysis/quick", post(analysis::handle_quick_diagnosis))
        .route(
            "/api/v1/analysis/market",
            post(analysis::handle_market_evaluation),
        )
        .route(
            "/api/v1/analysis/position",
            post(analysis::handle_position_analysis),
        )
        // Agent recommendations
        .route("/api/v1/agents", get(agents::handle_list_agents))
        .route("/api/v1/agents/match", post(agents::handle_match_agents))
        // History
        .route("/api/v1/history", get(history::handle_list_history))
        .route("/api/v1/history/:id", delete(history::handle_delete_history))
        // Resume upload
        .route(
            "/api/v1/resume/extract",
            post(resume::handle_extract).layer(DefaultBodyLimit::max(resume::MAX_UPLOAD_BYTES)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::llm_client::LlmClient;

    fn test_state() -> AppState {
        let config = Config {
            database_url: "postgres://localhost/interview_test".to_string(),
            anthropic_api_key: "test-key".to_string(),
            port: 0,
            rust_log: "info".to_string(),
            agent_max_results: 3,
        };
        AppState {
            db: PgPoolOptions::new()
                .connect_lazy(&config.database_url)
                .unwrap(),
            llm: LlmClient::new(config.anthropic_api_key.clone()).unwrap(),
            config,
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_agent_catalog_listing() {
        let (status, body) =
            send(Request::get("/api/v1/agents").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["agents"].as_array().map(|a| a.len()), Some(9));
    }

    #[tokio::test]
    async fn test_match_uses_configured_default() {
        let (status, body) = send(post_json(
            "/api/v1/agents/match",
            json!({
                "agentMatchReasons": {
                    "youngCareer": { "applicable": true, "reasons": ["第二新卒"] }
                }
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let agents = body["agents"].as_array().unwrap();
        assert_eq!(agents.len(), 3);
        assert_eq!(agents[0]["id"], "agent-navi");
        assert_eq!(agents[1]["id"], "mynavi-agent");
        assert_eq!(agents[1]["matchReasons"][0], "第二新卒");
        assert_eq!(agents[2]["matchScore"], 95);
    }

    #[tokio::test]
    async fn test_match_honors_max_results() {
        let (status, body) = send(post_json(
            "/api/v1/agents/match",
            json!({ "agentMatchReasons": {}, "maxResults": 1 }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["agents"].as_array().map(|a| a.len()), Some(1));
    }

    #[tokio::test]
    async fn test_questions_require_user() {
        let (status, body) = send(post_json(
            "/api/v1/interview/questions",
            json!({ "jobInfo": "エンジニア募集" }),
        ))
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_questions_validate_job_info_before_llm() {
        let (status, body) = send(post_json(
            "/api/v1/interview/questions",
            json!({ "userId": "user_1", "jobInfo": "" }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "求人情報を入力してください");
    }

    #[tokio::test]
    async fn test_quick_diagnosis_requires_both_inputs() {
        let (status, _) = send(post_json(
            "/api/v1/analysis/quick",
            json!({ "resumeText": "経理5年" }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_feedback_requires_answer() {
        let (status, _) = send(post_json(
            "/api/v1/interview/feedback",
            json!({ "question": "志望動機は？" }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_history_requires_user() {
        let (status, _) =
            send(Request::get("/api/v1/history").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
