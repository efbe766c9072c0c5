//! In-memory record store for the clinic scheduler.
//!
//! The store owns four identity-keyed collections (therapists, patients,
//! sessions and attendance records). Everything above this crate reads and
//! mutates records exclusively through [`Store`].

pub mod error;
pub mod models;
pub mod seeders;
pub mod storage;
pub mod store;

pub use error::{StorageError, StoreError};
pub use store::{CascadeSummary, Collection, Record, RecordKind, Store};
