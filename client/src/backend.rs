use async_trait::async_trait;
use db::CascadeSummary;
use db::models::{Patient, Therapist};
use services::{
    AttendanceView, NewAttendance, NewPatient, NewSession, NewTherapist, SessionPatch, SessionView,
};

use crate::error::ClientError;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Where a [`crate::SyncClient`] reads and writes clinic records.
///
/// Both implementations apply the same validation and produce the same
/// enriched views, so screens behave identically against either.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn list_therapists(&self) -> Result<Vec<Therapist>>;
    async fn get_therapist(&self, id: &str) -> Result<Therapist>;
    async fn create_therapist(&self, params: NewTherapist) -> Result<Therapist>;

    async fn list_patients(&self) -> Result<Vec<Patient>>;
    async fn get_patient(&self, id: &str) -> Result<Patient>;
    async fn create_patient(&self, params: NewPatient) -> Result<Patient>;
    async fn delete_patient(&self, id: &str) -> Result<CascadeSummary>;

    async fn list_sessions(&self) -> Result<Vec<SessionView>>;
    async fn get_session(&self, id: &str) -> Result<SessionView>;
    async fn create_session(&self, params: NewSession) -> Result<SessionView>;
    async fn update_session(&self, id: &str, patch: SessionPatch) -> Result<SessionView>;
    async fn delete_session(&self, id: &str) -> Result<CascadeSummary>;
    async fn check_in(&self, id: &str) -> Result<SessionView>;
    async fn complete(&self, id: &str) -> Result<SessionView>;

    async fn list_attendance(&self) -> Result<Vec<AttendanceView>>;
    async fn record_attendance(&self, params: NewAttendance) -> Result<AttendanceView>;
}
