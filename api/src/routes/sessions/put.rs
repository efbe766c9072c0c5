use axum::{
    Json,
    extract::State,
};
use services::{SessionPatch, SessionService, SessionView};
use util::state::AppState;

use crate::{
    error::ApiError,
    extract::{JsonBody, PathParam},
};

/// PUT /api/sessions/{session_id}
///
/// Merges any subset of `therapistId`, `patientId`, `dateTime`, `duration`,
/// `sessionType`, `notes` and `status` into the session and stamps `updatedAt`.
/// Status may move forward only (`Scheduled` → `Checked-In` → `Completed`) and
/// is matched case-insensitively.
///
/// ### Responses
/// - `200 OK` → the merged, enriched session
/// - `400 Bad Request` → unknown therapist/patient, unknown status, or a backward move
/// - `404 Not Found` → `{"error": "Session not found"}`
pub async fn edit_session(
    State(state): State<AppState>,
    PathParam(session_id): PathParam<String>,
    JsonBody(body): JsonBody<SessionPatch>,
) -> Result<Json<SessionView>, ApiError> {
    let mut store = state.write().await;
    Ok(Json(SessionService::update(&mut store, &session_id, body)?))
}
