use axum::{Json, extract::State, http::StatusCode};
use services::{AttendanceService, AttendanceView, NewAttendance};
use util::state::AppState;

use crate::{error::ApiError, extract::JsonBody};

/// POST /api/attendance
///
/// ### Request Body
/// ```json
/// {
///   "sessionId": "…",
///   "attended": true,
///   "checkInTime": "2026-10-16T08:55:00Z",
///   "checkOutTime": null,
///   "notes": ""
/// }
/// ```
/// Recording attendance moves the session forward: `attended: true` checks it
/// in, or completes it when `checkOutTime` is given. An absence can only be
/// recorded while the session is still `Scheduled`.
///
/// ### Responses
/// - `201 Created` → the enriched record
/// - `400 Bad Request` → missing field, `Invalid session ID`,
///   `Attendance already recorded for this session`, or a status conflict
pub async fn record_attendance(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewAttendance>,
) -> Result<(StatusCode, Json<AttendanceView>), ApiError> {
    let mut store = state.write().await;
    let record = AttendanceService::create(&mut store, body)?;
    Ok((StatusCode::CREATED, Json(record)))
}
