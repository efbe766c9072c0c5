use axum::{Json, extract::State, http::StatusCode};
use db::models::Patient;
use services::{NewPatient, PatientService};
use util::state::AppState;

use crate::{error::ApiError, extract::JsonBody};

/// POST /api/patients
///
/// ### Request Body
/// ```json
/// {
///   "name": "Ana Ruiz",
///   "email": "ana@example.com",
///   "phone": "(555) 123-4567",
///   "dateOfBirth": "2016-04-02",
///   "guardian": "Maria Ruiz",
///   "notes": "Prefers mornings"
/// }
/// ```
/// Only `name` and `email` are required. Optional fields that are omitted
/// are also omitted from the stored record.
///
/// ### Responses
/// - `201 Created` → the stored patient
/// - `400 Bad Request` → `{"error": "Name and email are required"}`
pub async fn create_patient(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewPatient>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let mut store = state.write().await;
    let patient = PatientService::create(&mut store, body)?;
    Ok((StatusCode::CREATED, Json(patient)))
}
