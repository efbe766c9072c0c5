use axum::{Json, extract::State};
use services::{AttendanceService, AttendanceView};
use util::state::AppState;

/// GET /api/attendance
///
/// Every attendance record with `sessionDateTime`, `therapistName` and
/// `patientName` joined in. Records whose session has been removed carry
/// none of the joined fields.
pub async fn list_attendance(State(state): State<AppState>) -> Json<Vec<AttendanceView>> {
    let store = state.read().await;
    Json(AttendanceService::list(&store))
}
