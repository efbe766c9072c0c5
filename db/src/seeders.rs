//! Starter records for a fresh store.

use chrono::{NaiveDate, Utc};

use crate::models::{Patient, Session, SessionStatus, Therapist};
use crate::store::Store;

/// Seeds the two reference therapists and two reference patients the API ships with.
pub fn seed_reference_data(store: &mut Store) {
    let now = Utc::now();

    for (name, specialization, email) in [
        ("Dr. Sarah Johnson", "Physical Therapy", "sarah.johnson@theraflow.com"),
        ("Dr. Michael Chen", "Occupational Therapy", "michael.chen@theraflow.com"),
    ] {
        store.therapists_mut().insert_with(|id| Therapist {
            id,
            name: name.into(),
            specialization: specialization.into(),
            email: email.into(),
            created_at: now,
        });
    }

    for (name, email, phone, dob) in [
        ("John Smith", "john.smith@email.com", "(555) 123-4567", "1985-06-15"),
        ("Emily Davis", "emily.davis@email.com", "(555) 987-6543", "1990-12-03"),
    ] {
        store.patients_mut().insert_with(|id| Patient {
            id,
            name: name.into(),
            email: email.into(),
            phone: Some(phone.into()),
            date_of_birth: Some(dob.into()),
            guardian: None,
            notes: None,
            created_at: now,
        });
    }

    tracing::info!(
        therapists = store.therapists().len(),
        patients = store.patients().len(),
        "Seeded reference data"
    );
}

/// Seeds two demo patients with a session each on `today`.
///
/// Records use fixed `demo-*` ids so re-seeding is detectable. Sessions are
/// assigned to the first therapist in the store; without one nothing is seeded.
pub fn seed_demo_sessions(store: &mut Store, today: NaiveDate) {
    let Some(therapist_id) = store.therapists().list().next().map(|t| t.id.clone()) else {
        tracing::warn!("No therapist available, skipping demo sessions");
        return;
    };

    let now = Utc::now();
    let day = today.format("%Y-%m-%d").to_string();

    let demo = [
        (
            "demo-patient-1",
            "Alex Johnson",
            "Sarah Johnson",
            "(555) 123-4567",
            "Autism spectrum disorder, responds well to visual schedules",
            "demo-session-1",
            "09:00",
            "Behavioral Therapy",
            "Focus on social skills",
        ),
        (
            "demo-patient-2",
            "Emma Chen",
            "Michael Chen",
            "(555) 987-6543",
            "Speech delay, working on communication skills",
            "demo-session-2",
            "10:30",
            "Speech Therapy",
            "Working on verbal communication",
        ),
    ];

    for (patient_id, name, guardian, phone, notes, session_id, time, kind, session_notes) in demo {
        if store.patients().contains(patient_id) || store.sessions().contains(session_id) {
            tracing::debug!(patient_id, session_id, "Demo record already present, skipping");
            continue;
        }

        let patient = Patient {
            id: patient_id.into(),
            name: name.into(),
            email: format!("{}@demo.theraflow.com", name.to_lowercase().replace(' ', ".")),
            phone: Some(phone.into()),
            date_of_birth: None,
            guardian: Some(guardian.into()),
            notes: Some(notes.into()),
            created_at: now,
        };
        let session = Session {
            id: session_id.into(),
            therapist_id: therapist_id.clone(),
            patient_id: patient_id.into(),
            date_time: format!("{day}T{time}"),
            duration: 60,
            session_type: kind.into(),
            notes: session_notes.into(),
            status: SessionStatus::Scheduled,
            created_at: now,
            updated_at: None,
        };

        if let Err(err) = store.patients_mut().insert(patient) {
            tracing::warn!(error = %err, "Failed to seed demo patient");
            continue;
        }
        if let Err(err) = store.sessions_mut().insert(session) {
            tracing::warn!(error = %err, "Failed to seed demo session");
        }
    }
}
