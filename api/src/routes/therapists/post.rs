use axum::{Json, extract::State, http::StatusCode};
use db::models::Therapist;
use services::{NewTherapist, TherapistService};
use util::state::AppState;

use crate::{error::ApiError, extract::JsonBody};

/// POST /api/therapists
///
/// ### Request Body
/// ```json
/// { "name": "Dr. Lee", "specialization": "Speech Therapy", "email": "lee@clinic.test" }
/// ```
///
/// ### Responses
/// - `201 Created` → the stored therapist
/// - `400 Bad Request` → `{"error": "Name, specialization, and email are required"}`
pub async fn create_therapist(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewTherapist>,
) -> Result<(StatusCode, Json<Therapist>), ApiError> {
    let mut store = state.write().await;
    let therapist = TherapistService::create(&mut store, body)?;
    Ok((StatusCode::CREATED, Json(therapist)))
}
