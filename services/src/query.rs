//! Read-side joins: records enriched with the names they reference.
//!
//! Joins never fail on dangling references. A session whose therapist or
//! patient is gone reports [`UNKNOWN_NAME`]; an attendance record whose
//! session is gone simply carries no session fields.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use db::models::{AttendanceRecord, Session};
use db::Store;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::ServiceError;

pub const UNKNOWN_NAME: &str = "Unknown";

/// A session with its therapist and patient names resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    #[serde(flatten)]
    pub session: Session,
    pub therapist_name: String,
    pub patient_name: String,
}

/// An attendance record joined through its session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceView {
    #[serde(flatten)]
    pub record: AttendanceRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub therapist_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
}

pub fn session_view(store: &Store, session: &Session) -> SessionView {
    let therapist_name = store
        .therapists()
        .get(&session.therapist_id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|_| UNKNOWN_NAME.into());
    let patient_name = store
        .patients()
        .get(&session.patient_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|_| UNKNOWN_NAME.into());

    SessionView {
        session: session.clone(),
        therapist_name,
        patient_name,
    }
}

pub fn attendance_view(store: &Store, record: &AttendanceRecord) -> AttendanceView {
    match store.sessions().get(&record.session_id) {
        Ok(session) => {
            let joined = session_view(store, session);
            AttendanceView {
                record: record.clone(),
                session_date_time: Some(joined.session.date_time),
                therapist_name: Some(joined.therapist_name),
                patient_name: Some(joined.patient_name),
            }
        }
        Err(_) => AttendanceView {
            record: record.clone(),
            session_date_time: None,
            therapist_name: None,
            patient_name: None,
        },
    }
}

pub fn find_session(store: &Store, id: &str) -> Result<SessionView, ServiceError> {
    let session = store.sessions().get(id)?;
    Ok(session_view(store, session))
}

/// Every session, soonest first.
pub fn list_sessions(store: &Store) -> Vec<SessionView> {
    collect_sessions(store, |_| true)
}

/// Sessions on the given calendar day, soonest first.
pub fn sessions_on(store: &Store, day: NaiveDate) -> Vec<SessionView> {
    collect_sessions(store, |session| session.is_on(day))
}

/// Sessions starting within `[now, now + days]`, soonest first.
pub fn upcoming_sessions(store: &Store, now: NaiveDateTime, days: u32) -> Vec<SessionView> {
    collect_sessions(store, |session| is_upcoming(session, now, days))
}

pub fn list_attendance(store: &Store) -> Vec<AttendanceView> {
    store
        .attendance()
        .list()
        .map(|record| attendance_view(store, record))
        .collect()
}

pub fn is_upcoming(session: &Session, now: NaiveDateTime, days: u32) -> bool {
    let horizon = now + Duration::days(i64::from(days));
    session
        .starts_at()
        .is_some_and(|start| start >= now && start <= horizon)
}

/// Orders sessions by parsed start time. Unparseable times go last, compared
/// as raw strings. The sort is stable, so ties keep insertion order.
pub fn chronological(a: &Session, b: &Session) -> Ordering {
    match (a.starts_at(), b.starts_at()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.date_time.cmp(&b.date_time),
    }
}

fn collect_sessions(store: &Store, keep: impl Fn(&Session) -> bool) -> Vec<SessionView> {
    let mut sessions: Vec<&Session> = store.sessions().list().filter(|s| keep(*s)).collect();
    sessions.sort_by(|a, b| chronological(a, b));
    sessions
        .into_iter()
        .map(|session| session_view(store, session))
        .collect()
}
