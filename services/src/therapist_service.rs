use chrono::Utc;
use db::models::Therapist;
use db::Store;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ServiceError;

/// Registration input for a therapist. All three fields are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewTherapist {
    #[validate(required, length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(required, length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,

    #[validate(required, length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

pub struct TherapistService;

impl TherapistService {
    pub fn create(store: &mut Store, params: NewTherapist) -> Result<Therapist, ServiceError> {
        if params.validate().is_err() {
            return Err(ServiceError::MissingField(
                "Name, specialization, and email are required".into(),
            ));
        }

        let therapist = store
            .therapists_mut()
            .insert_with(|id| Therapist {
                id,
                name: params.name.unwrap_or_default(),
                specialization: params.specialization.unwrap_or_default(),
                email: params.email.unwrap_or_default(),
                created_at: Utc::now(),
            })
            .clone();

        log::info!("Registered therapist {} ({})", therapist.id, therapist.name);
        Ok(therapist)
    }

    pub fn list(store: &Store) -> Vec<Therapist> {
        store.therapists().list().cloned().collect()
    }

    pub fn find(store: &Store, id: &str) -> Result<Therapist, ServiceError> {
        Ok(store.therapists().get(id)?.clone())
    }
}
