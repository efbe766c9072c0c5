use axum::{
    Json,
    extract::State,
};
use db::CascadeSummary;
use services::SessionService;
use util::state::AppState;

use crate::error::ApiError;
use crate::extract::PathParam;

/// DELETE /api/sessions/{session_id}
///
/// Removes the session and its attendance record, if one exists.
pub async fn delete_session(
    State(state): State<AppState>,
    PathParam(session_id): PathParam<String>,
) -> Result<Json<CascadeSummary>, ApiError> {
    let mut store = state.write().await;
    Ok(Json(SessionService::delete(&mut store, &session_id)?))
}
