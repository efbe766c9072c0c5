use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use services::{NewSession, SessionService, SessionView};
use util::state::AppState;

use crate::{
    error::ApiError,
    extract::{JsonBody, PathParam},
};

/// POST /api/sessions
///
/// ### Request Body
/// ```json
/// {
///   "therapistId": "…",
///   "patientId": "…",
///   "dateTime": "2026-10-16T09:00",
///   "duration": 60,
///   "sessionType": "Evaluation",
///   "notes": ""
/// }
/// ```
/// `sessionType` defaults to `Regular`. New sessions start `Scheduled`.
///
/// ### Responses
/// - `201 Created` → the enriched session
/// - `400 Bad Request` → missing field, `Invalid therapist ID`, `Invalid patient ID`
pub async fn create_session(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewSession>,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let mut store = state.write().await;
    let session = SessionService::create(&mut store, body)?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// POST /api/sessions/{session_id}/check-in
///
/// - `200 OK` → the session, now `Checked-In`
/// - `400 Bad Request` → the session is not `Scheduled`
/// - `404 Not Found`
pub async fn check_in_session(
    State(state): State<AppState>,
    PathParam(session_id): PathParam<String>,
) -> Result<Json<SessionView>, ApiError> {
    let mut store = state.write().await;
    Ok(Json(SessionService::check_in(&mut store, &session_id)?))
}

/// POST /api/sessions/{session_id}/complete
///
/// - `200 OK` → the session, now `Completed`
/// - `400 Bad Request` → the session is not `Checked-In`
/// - `404 Not Found`
pub async fn complete_session(
    State(state): State<AppState>,
    PathParam(session_id): PathParam<String>,
) -> Result<Json<SessionView>, ApiError> {
    let mut store = state.write().await;
    Ok(Json(SessionService::complete(&mut store, &session_id)?))
}
