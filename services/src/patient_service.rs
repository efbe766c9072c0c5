use chrono::Utc;
use db::models::Patient;
use db::{CascadeSummary, Store};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ServiceError;
use crate::non_empty;

/// Registration input for a patient. `name` and `email` are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    #[validate(required, length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(required, length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

pub struct PatientService;

impl PatientService {
    pub fn create(store: &mut Store, params: NewPatient) -> Result<Patient, ServiceError> {
        if params.validate().is_err() {
            return Err(ServiceError::MissingField(
                "Name and email are required".into(),
            ));
        }

        let patient = store
            .patients_mut()
            .insert_with(|id| Patient {
                id,
                name: params.name.unwrap_or_default(),
                email: params.email.unwrap_or_default(),
                phone: non_empty(params.phone),
                date_of_birth: non_empty(params.date_of_birth),
                guardian: non_empty(params.guardian),
                notes: non_empty(params.notes),
                created_at: Utc::now(),
            })
            .clone();

        log::info!("Registered patient {}", patient.id);
        Ok(patient)
    }

    pub fn list(store: &Store) -> Vec<Patient> {
        store.patients().list().cloned().collect()
    }

    pub fn find(store: &Store, id: &str) -> Result<Patient, ServiceError> {
        Ok(store.patients().get(id)?.clone())
    }

    /// Removes the patient along with its sessions and their attendance records.
    pub fn delete(store: &mut Store, id: &str) -> Result<CascadeSummary, ServiceError> {
        let summary = store.remove_patient(id)?;
        log::info!(
            "Deleted patient {id}: {} session(s), {} attendance record(s) removed",
            summary.sessions_removed,
            summary.attendance_removed
        );
        Ok(summary)
    }
}
