use chrono::{NaiveDate, NaiveDateTime};
use db::CascadeSummary;
use db::models::{Patient, Therapist};
use services::{
    AttendanceView, DashboardStats, NewAttendance, NewPatient, NewSession, NewTherapist,
    SessionPatch, SessionView,
};
use tracing::warn;

use crate::backend::{Backend, Result};

/// Last known copy of every collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub therapists: Vec<Therapist>,
    pub patients: Vec<Patient>,
    /// Soonest first, names resolved.
    pub sessions: Vec<SessionView>,
    pub attendance: Vec<AttendanceView>,
}

/// Cache plus user-facing status over a [`Backend`].
///
/// Every action goes to the backend first and, on success, reloads the whole
/// cache. A failure is recorded in [`SyncClient::error`] and the cache keeps
/// its previous contents. Nothing is retried.
pub struct SyncClient<B> {
    backend: B,
    cache: Snapshot,
    error: Option<String>,
    notice: Option<String>,
}

impl<B: Backend> SyncClient<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cache: Snapshot::default(),
            error: None,
            notice: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.cache
    }

    /// Message for the last failed load or action, if it has not been cleared.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Confirmation for the last successful action.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_messages(&mut self) {
        self.error = None;
        self.notice = None;
    }

    /// Reloads all four collections at once. Either all of them are replaced
    /// or none are.
    pub async fn refresh(&mut self) -> Result<()> {
        let loaded = tokio::try_join!(
            self.backend.list_therapists(),
            self.backend.list_patients(),
            self.backend.list_sessions(),
            self.backend.list_attendance(),
        );

        match loaded {
            Ok((therapists, patients, sessions, attendance)) => {
                self.cache = Snapshot {
                    therapists,
                    patients,
                    sessions,
                    attendance,
                };
                self.error = None;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Failed to load clinic data");
                self.error = Some(format!("Failed to load data: {err}"));
                Err(err)
            }
        }
    }

    /// Counters for the dashboard, computed from the cache.
    pub fn dashboard(&self, today: NaiveDate, now: NaiveDateTime) -> DashboardStats {
        DashboardStats::compute(
            self.cache.therapists.len(),
            self.cache.patients.len(),
            self.cache.sessions.iter().map(|view| &view.session),
            today,
            now,
        )
    }

    pub async fn add_therapist(&mut self, params: NewTherapist) -> Result<Therapist> {
        let result = self.backend.create_therapist(params).await;
        self.settle(result, "Therapist added successfully!").await
    }

    pub async fn add_patient(&mut self, params: NewPatient) -> Result<Patient> {
        let result = self.backend.create_patient(params).await;
        self.settle(result, "Patient added successfully!").await
    }

    pub async fn remove_patient(&mut self, id: &str) -> Result<CascadeSummary> {
        let result = self.backend.delete_patient(id).await;
        self.settle(result, "Patient deleted successfully!").await
    }

    pub async fn schedule_session(&mut self, params: NewSession) -> Result<SessionView> {
        let result = self.backend.create_session(params).await;
        self.settle(result, "Session scheduled successfully!").await
    }

    pub async fn edit_session(&mut self, id: &str, patch: SessionPatch) -> Result<SessionView> {
        let result = self.backend.update_session(id, patch).await;
        self.settle(result, "Session updated successfully!").await
    }

    pub async fn remove_session(&mut self, id: &str) -> Result<CascadeSummary> {
        let result = self.backend.delete_session(id).await;
        self.settle(result, "Session deleted successfully!").await
    }

    /// Kiosk tap or attendance-panel check-in.
    pub async fn check_in(&mut self, id: &str) -> Result<SessionView> {
        let result = self.backend.check_in(id).await;
        self.settle(result, "Session checked in successfully!").await
    }

    pub async fn complete(&mut self, id: &str) -> Result<SessionView> {
        let result = self.backend.complete(id).await;
        self.settle(result, "Session completed successfully!").await
    }

    pub async fn record_attendance(&mut self, params: NewAttendance) -> Result<AttendanceView> {
        let result = self.backend.record_attendance(params).await;
        self.settle(result, "Attendance recorded successfully!").await
    }

    async fn settle<T>(&mut self, result: Result<T>, notice: &str) -> Result<T> {
        match result {
            Ok(value) => {
                self.error = None;
                self.notice = Some(notice.to_string());
                // A failed reload shows up in `error`.
                let _ = self.refresh().await;
                Ok(value)
            }
            Err(err) => {
                self.notice = None;
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

impl<B> std::fmt::Debug for SyncClient<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncClient")
            .field("therapists", &self.cache.therapists.len())
            .field("patients", &self.cache.patients.len())
            .field("sessions", &self.cache.sessions.len())
            .field("attendance", &self.cache.attendance.len())
            .field("error", &self.error)
            .finish()
    }
}
