use axum::{
    Json,
    extract::State,
};
use db::models::Therapist;
use services::TherapistService;
use util::state::AppState;

use crate::error::ApiError;
use crate::extract::PathParam;

/// GET /api/therapists
pub async fn list_therapists(State(state): State<AppState>) -> Json<Vec<Therapist>> {
    let store = state.read().await;
    Json(TherapistService::list(&store))
}

/// GET /api/therapists/{therapist_id}
///
/// - `404 Not Found` → `{"error": "Therapist not found"}`
pub async fn get_therapist(
    State(state): State<AppState>,
    PathParam(therapist_id): PathParam<String>,
) -> Result<Json<Therapist>, ApiError> {
    let store = state.read().await;
    Ok(Json(TherapistService::find(&store, &therapist_id)?))
}
