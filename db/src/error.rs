use thiserror::Error;

use crate::store::RecordKind;

/// Failures raised by [`crate::Store`] mutations and lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} not found")]
    NotFound { kind: RecordKind, id: String },

    #[error("{kind} with id {id} already exists")]
    DuplicateId { kind: RecordKind, id: String },
}

/// Failures raised while saving or loading a store snapshot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored value under `{key}` is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("snapshot could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
