use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use crate::state::AppState;

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
    pub timestamp: i64,
}

// GET /health - Reports "degraded" when player data failed to load
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let status = if state.store.is_degraded() { "degraded" } else { "ok" };

    let response = HealthResponse {
        status: status.to_string(),
        records: state.store.len(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    (StatusCode::OK, Json(response))
}
