use async_trait::async_trait;
use chrono::NaiveDate;
use db::models::{Patient, Therapist};
use db::seeders::{seed_demo_sessions, seed_reference_data};
use db::storage::KeyValueStorage;
use db::{CascadeSummary, Store};
use services::{
    AttendanceService, AttendanceView, NewAttendance, NewPatient, NewSession, NewTherapist,
    PatientService, SessionPatch, SessionService, SessionView, TherapistService, query,
};
use tokio::sync::Mutex;

use crate::backend::{Backend, Result};

struct Inner {
    store: Store,
    storage: Box<dyn KeyValueStorage>,
}

impl Inner {
    /// Runs a mutation against a copy of the store. The copy replaces the
    /// live store only once its snapshot has been saved.
    fn mutate<T>(
        &mut self,
        op: impl FnOnce(&mut Store) -> std::result::Result<T, services::ServiceError>,
    ) -> Result<T> {
        let mut draft = self.store.clone();
        let value = op(&mut draft)?;

        if let Err(err) = draft.save_to(self.storage.as_mut()) {
            // Some keys may already hold the draft; put the last good snapshot back.
            if let Err(restore) = self.store.save_to(self.storage.as_mut()) {
                tracing::warn!(error = %restore, "Failed to restore local snapshot");
            }
            return Err(err.into());
        }

        self.store = draft;
        Ok(value)
    }
}

/// Backend that keeps every record in-process and snapshots it to
/// key/value storage after each change.
pub struct LocalBackend {
    inner: Mutex<Inner>,
}

impl LocalBackend {
    /// Loads whatever `storage` already holds.
    pub fn open(storage: impl KeyValueStorage + 'static) -> Result<Self> {
        let store = Store::load_from(&storage)?;
        Ok(Self::from_parts(store, storage))
    }

    /// Like [`LocalBackend::open`], but an empty storage is filled with the
    /// reference therapists and patients plus two demo sessions on `today`.
    pub fn open_with_demo(
        mut storage: impl KeyValueStorage + 'static,
        today: NaiveDate,
    ) -> Result<Self> {
        let mut store = Store::load_from(&storage)?;
        if is_empty(&store) {
            seed_reference_data(&mut store);
            seed_demo_sessions(&mut store, today);
            store.save_to(&mut storage)?;
            tracing::info!(sessions = store.sessions().len(), "Seeded local demo data");
        }
        Ok(Self::from_parts(store, storage))
    }

    fn from_parts(store: Store, storage: impl KeyValueStorage + 'static) -> Self {
        Self {
            inner: Mutex::new(Inner {
                store,
                storage: Box::new(storage),
            }),
        }
    }
}

fn is_empty(store: &Store) -> bool {
    store.therapists().is_empty()
        && store.patients().is_empty()
        && store.sessions().is_empty()
        && store.attendance().is_empty()
}

#[async_trait]
impl Backend for LocalBackend {
    async fn list_therapists(&self) -> Result<Vec<Therapist>> {
        Ok(TherapistService::list(&self.inner.lock().await.store))
    }

    async fn get_therapist(&self, id: &str) -> Result<Therapist> {
        Ok(TherapistService::find(&self.inner.lock().await.store, id)?)
    }

    async fn create_therapist(&self, params: NewTherapist) -> Result<Therapist> {
        self.inner
            .lock()
            .await
            .mutate(|store| TherapistService::create(store, params))
    }

    async fn list_patients(&self) -> Result<Vec<Patient>> {
        Ok(PatientService::list(&self.inner.lock().await.store))
    }

    async fn get_patient(&self, id: &str) -> Result<Patient> {
        Ok(PatientService::find(&self.inner.lock().await.store, id)?)
    }

    async fn create_patient(&self, params: NewPatient) -> Result<Patient> {
        self.inner
            .lock()
            .await
            .mutate(|store| PatientService::create(store, params))
    }

    async fn delete_patient(&self, id: &str) -> Result<CascadeSummary> {
        self.inner
            .lock()
            .await
            .mutate(|store| PatientService::delete(store, id))
    }

    async fn list_sessions(&self) -> Result<Vec<SessionView>> {
        Ok(query::list_sessions(&self.inner.lock().await.store))
    }

    async fn get_session(&self, id: &str) -> Result<SessionView> {
        Ok(query::find_session(&self.inner.lock().await.store, id)?)
    }

    async fn create_session(&self, params: NewSession) -> Result<SessionView> {
        self.inner
            .lock()
            .await
            .mutate(|store| SessionService::create(store, params))
    }

    async fn update_session(&self, id: &str, patch: SessionPatch) -> Result<SessionView> {
        self.inner
            .lock()
            .await
            .mutate(|store| SessionService::update(store, id, patch))
    }

    async fn delete_session(&self, id: &str) -> Result<CascadeSummary> {
        self.inner
            .lock()
            .await
            .mutate(|store| SessionService::delete(store, id))
    }

    async fn check_in(&self, id: &str) -> Result<SessionView> {
        self.inner
            .lock()
            .await
            .mutate(|store| SessionService::check_in(store, id))
    }

    async fn complete(&self, id: &str) -> Result<SessionView> {
        self.inner
            .lock()
            .await
            .mutate(|store| SessionService::complete(store, id))
    }

    async fn list_attendance(&self) -> Result<Vec<AttendanceView>> {
        Ok(AttendanceService::list(&self.inner.lock().await.store))
    }

    async fn record_attendance(&self, params: NewAttendance) -> Result<AttendanceView> {
        self.inner
            .lock()
            .await
            .mutate(|store| AttendanceService::create(store, params))
    }
}
