use chrono::Utc;
use db::models::{AttendanceRecord, SessionStatus};
use db::Store;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ServiceError;
use crate::non_empty;
use crate::query::{self, AttendanceView};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendance {
    #[validate(required, length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[validate(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attended: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

pub struct AttendanceService;

impl AttendanceService {
    /// Records the outcome of a session and moves the session status to match.
    ///
    /// An attended session advances to `Checked-In`, or to `Completed` when a
    /// check-out time is given. An absence may only be recorded while the
    /// session is still `Scheduled`.
    pub fn create(store: &mut Store, params: NewAttendance) -> Result<AttendanceView, ServiceError> {
        if params.validate().is_err() {
            return Err(ServiceError::MissingField(
                "SessionId and attended status are required".into(),
            ));
        }

        let session_id = params.session_id.unwrap_or_default();
        let attended = params.attended.unwrap_or_default();
        let check_in_time = non_empty(params.check_in_time);
        let check_out_time = non_empty(params.check_out_time);

        let current = match store.sessions().get(&session_id) {
            Ok(session) => session.status,
            Err(_) => return Err(ServiceError::InvalidReference("Invalid session ID".into())),
        };

        if store.attendance_for_session(&session_id).is_some() {
            return Err(ServiceError::DuplicateRecord(
                "Attendance already recorded for this session".into(),
            ));
        }

        let next = resolve_status(current, attended, check_out_time.is_some())?;

        let record = store
            .attendance_mut()
            .insert_with(|id| AttendanceRecord {
                id,
                session_id: session_id.clone(),
                attended,
                check_in_time,
                check_out_time,
                notes: params.notes.unwrap_or_default(),
                recorded_at: Utc::now(),
            })
            .clone();

        if next != current {
            store.sessions_mut().update(&session_id, |session| {
                session.status = next;
                session.updated_at = Some(Utc::now());
            })?;
        }

        log::info!(
            "Recorded attendance for session {session_id}: attended={attended}, status {current} -> {next}"
        );
        Ok(query::attendance_view(store, &record))
    }

    pub fn list(store: &Store) -> Vec<AttendanceView> {
        query::list_attendance(store)
    }
}

fn resolve_status(
    current: SessionStatus,
    attended: bool,
    checked_out: bool,
) -> Result<SessionStatus, ServiceError> {
    use SessionStatus::*;

    match (attended, current) {
        (true, Completed) => Ok(Completed),
        (true, _) if checked_out => Ok(Completed),
        (true, _) => Ok(CheckedIn),
        (false, Scheduled) => Ok(Scheduled),
        (false, _) => Err(ServiceError::InvalidTransition(format!(
            "Cannot record an absence for a session that is {current}"
        ))),
    }
}
