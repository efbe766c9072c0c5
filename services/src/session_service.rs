use chrono::Utc;
use db::models::{Session, SessionStatus};
use db::{CascadeSummary, Store};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ServiceError;
use crate::non_empty;
use crate::query::{self, SessionView};

pub const DEFAULT_SESSION_TYPE: &str = "Regular";

/// Scheduling input. Therapist, patient, date/time and a non-zero duration are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    #[validate(required, length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub therapist_id: Option<String>,

    #[validate(required, length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,

    #[validate(required, length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,

    #[validate(required, range(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial session update. Only supplied fields are merged; empty strings and
/// a zero duration count as not supplied. `notes` may be cleared with `""`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub therapist_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

pub struct SessionService;

impl SessionService {
    pub fn create(store: &mut Store, params: NewSession) -> Result<SessionView, ServiceError> {
        if params.validate().is_err() {
            return Err(ServiceError::MissingField(
                "TherapistId, patientId, dateTime, and duration are required".into(),
            ));
        }

        let therapist_id = params.therapist_id.unwrap_or_default();
        let patient_id = params.patient_id.unwrap_or_default();
        ensure_therapist(store, &therapist_id)?;
        ensure_patient(store, &patient_id)?;

        let session = store
            .sessions_mut()
            .insert_with(|id| Session {
                id,
                therapist_id,
                patient_id,
                date_time: params.date_time.unwrap_or_default(),
                duration: params.duration.unwrap_or_default(),
                session_type: non_empty(params.session_type)
                    .unwrap_or_else(|| DEFAULT_SESSION_TYPE.into()),
                notes: params.notes.unwrap_or_default(),
                status: SessionStatus::Scheduled,
                created_at: Utc::now(),
                updated_at: None,
            })
            .clone();

        log::info!("Scheduled session {} at {}", session.id, session.date_time);
        Ok(query::session_view(store, &session))
    }

    /// Merges `patch` into the session. Every check runs before anything is written.
    pub fn update(
        store: &mut Store,
        id: &str,
        patch: SessionPatch,
    ) -> Result<SessionView, ServiceError> {
        let current = store.sessions().get(id)?.status;

        let therapist_id = non_empty(patch.therapist_id);
        if let Some(therapist_id) = &therapist_id {
            ensure_therapist(store, therapist_id)?;
        }
        let patient_id = non_empty(patch.patient_id);
        if let Some(patient_id) = &patient_id {
            ensure_patient(store, patient_id)?;
        }

        let status = match non_empty(patch.status) {
            Some(raw) => {
                let next: SessionStatus = raw
                    .parse()
                    .map_err(|_| ServiceError::InvalidField(format!("Invalid status: {raw}")))?;
                if !current.permits(next) {
                    return Err(ServiceError::InvalidTransition(format!(
                        "Cannot change session status from {current} to {next}"
                    )));
                }
                if next != current {
                    ensure_not_absent(store, id, "change the status of")?;
                }
                Some(next)
            }
            None => None,
        };

        let date_time = non_empty(patch.date_time);
        let session_type = non_empty(patch.session_type);
        let duration = patch.duration.filter(|d| *d > 0);
        let notes = patch.notes;

        let session = store
            .sessions_mut()
            .update(id, |session| {
                if let Some(v) = therapist_id {
                    session.therapist_id = v;
                }
                if let Some(v) = patient_id {
                    session.patient_id = v;
                }
                if let Some(v) = date_time {
                    session.date_time = v;
                }
                if let Some(v) = duration {
                    session.duration = v;
                }
                if let Some(v) = session_type {
                    session.session_type = v;
                }
                if let Some(v) = notes {
                    session.notes = v;
                }
                if let Some(v) = status {
                    session.status = v;
                }
                session.updated_at = Some(Utc::now());
            })?
            .clone();

        Ok(query::session_view(store, &session))
    }

    /// Removes the session and its attendance record.
    pub fn delete(store: &mut Store, id: &str) -> Result<CascadeSummary, ServiceError> {
        let summary = store.remove_session(id)?;
        log::info!("Deleted session {id}");
        Ok(summary)
    }

    /// Staff check-in: `Scheduled -> Checked-In`.
    pub fn check_in(store: &mut Store, id: &str) -> Result<SessionView, ServiceError> {
        Self::step(store, id, SessionStatus::Scheduled, "check in")
    }

    /// Marks a checked-in session as finished: `Checked-In -> Completed`.
    pub fn complete(store: &mut Store, id: &str) -> Result<SessionView, ServiceError> {
        Self::step(store, id, SessionStatus::CheckedIn, "complete")
    }

    fn step(
        store: &mut Store,
        id: &str,
        from: SessionStatus,
        action: &str,
    ) -> Result<SessionView, ServiceError> {
        let current = store.sessions().get(id)?.status;
        let next = match current.next_step() {
            Some(next) if current == from => next,
            _ => {
                return Err(ServiceError::InvalidTransition(format!(
                    "Cannot {action} a session that is {current}"
                )));
            }
        };
        ensure_not_absent(store, id, action)?;

        let session = store
            .sessions_mut()
            .update(id, |session| {
                session.status = next;
                session.updated_at = Some(Utc::now());
            })?
            .clone();

        log::info!("Session {id} moved from {current} to {next}");
        Ok(query::session_view(store, &session))
    }
}

/// A recorded absence pins the session at `Scheduled`.
fn ensure_not_absent(store: &Store, id: &str, action: &str) -> Result<(), ServiceError> {
    match store.attendance_for_session(id) {
        Some(record) if !record.attended => Err(ServiceError::InvalidTransition(format!(
            "Cannot {action} a session recorded as absent"
        ))),
        _ => Ok(()),
    }
}

fn ensure_therapist(store: &Store, id: &str) -> Result<(), ServiceError> {
    if store.therapists().contains(id) {
        Ok(())
    } else {
        Err(ServiceError::InvalidReference("Invalid therapist ID".into()))
    }
}

fn ensure_patient(store: &Store, id: &str) -> Result<(), ServiceError> {
    if store.patients().contains(id) {
        Ok(())
    } else {
        Err(ServiceError::InvalidReference("Invalid patient ID".into()))
    }
}
