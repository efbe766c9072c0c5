use db::Store;

use crate::{NewPatient, NewSession, NewTherapist, PatientService, TherapistService};

pub struct Fixture {
    pub therapist_id: String,
    pub patient_id: String,
    pub other_patient_id: String,
}

/// A store with one therapist ("Dr. Lee") and two patients ("Ana", "Ben").
pub fn seeded() -> (Store, Fixture) {
    let mut store = Store::new();

    let therapist = TherapistService::create(
        &mut store,
        NewTherapist {
            name: Some("Dr. Lee".into()),
            specialization: Some("Speech Therapy".into()),
            email: Some("lee@clinic.test".into()),
        },
    )
    .unwrap();

    let mut patient = |name: &str| {
        PatientService::create(
            &mut store,
            NewPatient {
                name: Some(name.into()),
                email: Some(format!("{}@clinic.test", name.to_lowercase())),
                ..Default::default()
            },
        )
        .unwrap()
        .id
    };
    let patient_id = patient("Ana");
    let other_patient_id = patient("Ben");

    (
        store,
        Fixture {
            therapist_id: therapist.id,
            patient_id,
            other_patient_id,
        },
    )
}

pub fn new_session(therapist_id: &str, patient_id: &str, date_time: &str) -> NewSession {
    NewSession {
        therapist_id: Some(therapist_id.into()),
        patient_id: Some(patient_id.into()),
        date_time: Some(date_time.into()),
        duration: Some(60),
        session_type: None,
        notes: None,
    }
}
