// ABOUTME: Request handlers for the health check and the run endpoint.
// ABOUTME: POST /run hands the body to AgentClient::run and returns the report as-is.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use agentcore::RunReport;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Body of `POST /run`.
#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    pub task: String,
    #[serde(default)]
    pub params: Map<String, Value>,
}

pub async fn run_task(
    State(state): State<AppState>,
    Json(request): Json<TaskRequest>,
) -> Json<RunReport> {
    info!(task_len = request.task.len(), "run requested");
    Json(state.agent.run(&request.task, request.params))
}
