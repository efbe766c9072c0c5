//! Validation, state transitions and read-side joins over the record store.
//!
//! Services are stateless: every operation borrows the [`db::Store`] it works
//! on, validates first, and only then mutates.

pub mod attendance_service;
pub mod dashboard;
pub mod error;
pub mod patient_service;
pub mod query;
pub mod session_service;
pub mod therapist_service;

pub use attendance_service::{AttendanceService, NewAttendance};
pub use dashboard::DashboardStats;
pub use error::ServiceError;
pub use patient_service::{NewPatient, PatientService};
pub use query::{AttendanceView, SessionView};
pub use session_service::{NewSession, SessionPatch, SessionService};
pub use therapist_service::{NewTherapist, TherapistService};

#[cfg(test)]
pub(crate) mod test_support;

/// Drops empty strings so they behave like absent fields.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
