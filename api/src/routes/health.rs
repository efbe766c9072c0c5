use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use util::{config, state::AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /api/health
///
/// ```json
/// { "status": "OK", "message": "TheraFlow API is running" }
/// ```
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".into(),
        message: format!("{} API is running", config::project_name()),
    })
}
