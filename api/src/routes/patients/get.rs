use axum::{
    Json,
    extract::State,
};
use db::models::Patient;
use services::PatientService;
use util::state::AppState;

use crate::error::ApiError;
use crate::extract::PathParam;

/// GET /api/patients
pub async fn list_patients(State(state): State<AppState>) -> Json<Vec<Patient>> {
    let store = state.read().await;
    Json(PatientService::list(&store))
}

/// GET /api/patients/{patient_id}
pub async fn get_patient(
    State(state): State<AppState>,
    PathParam(patient_id): PathParam<String>,
) -> Result<Json<Patient>, ApiError> {
    let store = state.read().await;
    Ok(Json(PatientService::find(&store, &patient_id)?))
}
