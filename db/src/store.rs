//! Identity-keyed collections and the [`Store`] that owns them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::Display;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{AttendanceRecord, Patient, Session, Therapist};

/// The four entity kinds held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RecordKind {
    Therapist,
    Patient,
    Session,
    #[strum(to_string = "Attendance record")]
    AttendanceRecord,
}

/// A record that lives in a [`Collection`].
pub trait Record: Clone {
    const KIND: RecordKind;

    fn id(&self) -> &str;
}

/// Insertion-ordered mapping from id to record.
#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    records: HashMap<String, T>,
    order: Vec<String>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    /// All records, oldest insert first.
    pub fn list(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    pub fn get(&self, id: &str) -> Result<&T, StoreError> {
        self.records.get(id).ok_or_else(|| StoreError::NotFound {
            kind: T::KIND,
            id: id.to_owned(),
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Inserts a record under a freshly generated id.
    ///
    /// `build` receives the id and returns the record to store; the returned
    /// record's own id must equal it.
    pub fn insert_with(&mut self, build: impl FnOnce(String) -> T) -> &T {
        let mut id = Uuid::new_v4().to_string();
        while self.records.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }

        let record = build(id.clone());
        debug_assert_eq!(record.id(), id);
        self.order.push(id.clone());
        self.records.entry(id).or_insert(record)
    }

    /// Inserts a record that already carries an id (seed data, snapshots).
    pub fn insert(&mut self, record: T) -> Result<&T, StoreError> {
        let id = record.id().to_owned();
        if self.records.contains_key(&id) {
            return Err(StoreError::DuplicateId { kind: T::KIND, id });
        }
        self.order.push(id.clone());
        Ok(&*self.records.entry(id).or_insert(record))
    }

    /// Applies `apply` to the record in place and returns the updated record.
    pub fn update(&mut self, id: &str, apply: impl FnOnce(&mut T)) -> Result<&T, StoreError> {
        let record = self.records.get_mut(id).ok_or_else(|| StoreError::NotFound {
            kind: T::KIND,
            id: id.to_owned(),
        })?;
        apply(record);
        Ok(&*record)
    }

    pub fn delete(&mut self, id: &str) -> Result<T, StoreError> {
        let removed = self.records.remove(id).ok_or_else(|| StoreError::NotFound {
            kind: T::KIND,
            id: id.to_owned(),
        })?;
        self.order.retain(|existing| existing != id);
        Ok(removed)
    }

    /// Removes every record matching `predicate`, returning them in insertion order.
    pub fn delete_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
        let doomed: Vec<String> = self
            .list()
            .filter(|record| predicate(*record))
            .map(|record| record.id().to_owned())
            .collect();

        self.order.retain(|id| !doomed.contains(id));
        doomed
            .iter()
            .filter_map(|id| self.records.remove(id))
            .collect()
    }

    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.list().find(|record| predicate(*record))
    }
}

/// How many dependent records a cascading delete removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeSummary {
    pub sessions_removed: usize,
    pub attendance_removed: usize,
}

/// The single owner of every clinic record.
///
/// Construct one per process (or per test) and hand it by reference to the
/// validating and querying layers.
#[derive(Debug, Clone, Default)]
pub struct Store {
    therapists: Collection<Therapist>,
    patients: Collection<Patient>,
    sessions: Collection<Session>,
    attendance: Collection<AttendanceRecord>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn therapists(&self) -> &Collection<Therapist> {
        &self.therapists
    }

    pub fn therapists_mut(&mut self) -> &mut Collection<Therapist> {
        &mut self.therapists
    }

    pub fn patients(&self) -> &Collection<Patient> {
        &self.patients
    }

    pub fn patients_mut(&mut self) -> &mut Collection<Patient> {
        &mut self.patients
    }

    pub fn sessions(&self) -> &Collection<Session> {
        &self.sessions
    }

    pub fn sessions_mut(&mut self) -> &mut Collection<Session> {
        &mut self.sessions
    }

    pub fn attendance(&self) -> &Collection<AttendanceRecord> {
        &self.attendance
    }

    pub fn attendance_mut(&mut self) -> &mut Collection<AttendanceRecord> {
        &mut self.attendance
    }

    /// The attendance record for `session_id`, if one was recorded.
    pub fn attendance_for_session(&self, session_id: &str) -> Option<&AttendanceRecord> {
        self.attendance.find(|record| record.session_id == session_id)
    }

    /// Deletes a patient together with its sessions and their attendance records.
    pub fn remove_patient(&mut self, patient_id: &str) -> Result<CascadeSummary, StoreError> {
        self.patients.delete(patient_id)?;

        let sessions = self
            .sessions
            .delete_where(|session| session.patient_id == patient_id);
        let attendance = self
            .attendance
            .delete_where(|record| sessions.iter().any(|s| s.id == record.session_id));

        tracing::debug!(
            patient_id,
            sessions = sessions.len(),
            attendance = attendance.len(),
            "Removed patient with dependents"
        );

        Ok(CascadeSummary {
            sessions_removed: sessions.len(),
            attendance_removed: attendance.len(),
        })
    }

    /// Deletes a session and its attendance record.
    pub fn remove_session(&mut self, session_id: &str) -> Result<CascadeSummary, StoreError> {
        self.sessions.delete(session_id)?;
        let attendance = self
            .attendance
            .delete_where(|record| record.session_id == session_id);

        Ok(CascadeSummary {
            sessions_removed: 1,
            attendance_removed: attendance.len(),
        })
    }
}
