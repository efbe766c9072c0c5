use axum::{
    Json,
    extract::State,
};
use db::CascadeSummary;
use services::PatientService;
use util::state::AppState;

use crate::error::ApiError;
use crate::extract::PathParam;

/// DELETE /api/patients/{patient_id}
///
/// Removes the patient, every session booked for them, and the attendance
/// records of those sessions.
///
/// ### Responses
/// - `200 OK` → `{"sessionsRemoved": 2, "attendanceRemoved": 1}`
/// - `404 Not Found` → `{"error": "Patient not found"}`
pub async fn delete_patient(
    State(state): State<AppState>,
    PathParam(patient_id): PathParam<String>,
) -> Result<Json<CascadeSummary>, ApiError> {
    let mut store = state.write().await;
    Ok(Json(PatientService::delete(&mut store, &patient_id)?))
}
