//! Snapshot persistence for the local (browser-style) variant.
//!
//! A snapshot is one JSON array per collection, each stored under a fixed key.
//! Saving always rewrites every key in full; there are no partial writes.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::models::{AttendanceRecord, Patient, Session, Therapist};
use crate::store::{Collection, Record, Store};

pub const THERAPISTS_KEY: &str = "theraflow_therapists";
pub const PATIENTS_KEY: &str = "theraflow_patients";
pub const SESSIONS_KEY: &str = "theraflow_sessions";
pub const ATTENDANCE_KEY: &str = "theraflow_attendance";

/// String key/value storage, the shape of browser local storage.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage kept in a plain map. Useful for tests and ephemeral clients.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Storage backed by a directory holding one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Opens (and creates if needed) the storage directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl Store {
    /// Writes every collection under its key, replacing what was there.
    pub fn save_to(&self, storage: &mut dyn KeyValueStorage) -> Result<(), StorageError> {
        write_collection(storage, THERAPISTS_KEY, self.therapists())?;
        write_collection(storage, PATIENTS_KEY, self.patients())?;
        write_collection(storage, SESSIONS_KEY, self.sessions())?;
        write_collection(storage, ATTENDANCE_KEY, self.attendance())?;
        tracing::debug!(
            therapists = self.therapists().len(),
            patients = self.patients().len(),
            sessions = self.sessions().len(),
            attendance = self.attendance().len(),
            "Saved store snapshot"
        );
        Ok(())
    }

    /// Rebuilds a store from storage. Missing keys load as empty collections.
    pub fn load_from(storage: &dyn KeyValueStorage) -> Result<Store, StorageError> {
        let mut store = Store::new();
        for therapist in read_collection::<Therapist>(storage, THERAPISTS_KEY)? {
            store.therapists_mut().insert(therapist)?;
        }
        for patient in read_collection::<Patient>(storage, PATIENTS_KEY)? {
            store.patients_mut().insert(patient)?;
        }
        for session in read_collection::<Session>(storage, SESSIONS_KEY)? {
            store.sessions_mut().insert(session)?;
        }
        for record in read_collection::<AttendanceRecord>(storage, ATTENDANCE_KEY)? {
            store.attendance_mut().insert(record)?;
        }
        Ok(store)
    }
}

fn write_collection<T>(
    storage: &mut dyn KeyValueStorage,
    key: &str,
    collection: &Collection<T>,
) -> Result<(), StorageError>
where
    T: Record + Serialize,
{
    let records: Vec<&T> = collection.list().collect();
    let raw = serde_json::to_string(&records).map_err(StorageError::Encode)?;
    storage.set(key, &raw)
}

fn read_collection<T>(storage: &dyn KeyValueStorage, key: &str) -> Result<Vec<T>, StorageError>
where
    T: DeserializeOwned,
{
    match storage.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            key: key.to_owned(),
            source,
        }),
        None => Ok(Vec::new()),
    }
}
