use axum::{
    Json,
    extract::State,
};
use services::{SessionView, query};
use util::state::AppState;

use super::common::{SessionFilter, UpcomingQuery, local_now, local_today};
use crate::error::ApiError;
use crate::extract::{PathParam, QueryParams};

/// GET /api/sessions
///
/// Every session enriched with `therapistName` and `patientName`, soonest
/// first. `?date=YYYY-MM-DD` narrows the list to one calendar day.
///
/// - `400 Bad Request` → `{"error": "Invalid date"}`
pub async fn list_sessions(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<SessionFilter>,
) -> Result<Json<Vec<SessionView>>, ApiError> {
    let day = filter.day()?;
    let store = state.read().await;
    let sessions = match day {
        Some(day) => query::sessions_on(&store, day),
        None => query::list_sessions(&store),
    };
    Ok(Json(sessions))
}

/// GET /api/sessions/today
pub async fn list_today(State(state): State<AppState>) -> Json<Vec<SessionView>> {
    let store = state.read().await;
    Json(query::sessions_on(&store, local_today()))
}

/// GET /api/sessions/upcoming?days=N
///
/// Sessions starting between now and `N` days from now (default 7, at most 365).
pub async fn list_upcoming(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<UpcomingQuery>,
) -> Result<Json<Vec<SessionView>>, ApiError> {
    let days = params.days()?;
    let store = state.read().await;
    Ok(Json(query::upcoming_sessions(&store, local_now(), days)))
}

/// GET /api/sessions/{session_id}
pub async fn get_session(
    State(state): State<AppState>,
    PathParam(session_id): PathParam<String>,
) -> Result<Json<SessionView>, ApiError> {
    let store = state.read().await;
    Ok(Json(query::find_session(&store, &session_id)?))
}
