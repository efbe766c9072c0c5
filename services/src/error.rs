use db::StoreError;
use thiserror::Error;

/// Everything a service operation can reject a request with.
///
/// The display text of each variant is the message handed back to the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A required input was absent or empty.
    #[error("{0}")]
    MissingField(String),

    /// An input was present but not in an accepted form.
    #[error("{0}")]
    InvalidField(String),

    /// A referenced id does not resolve.
    #[error("{0}")]
    InvalidReference(String),

    #[error("{0}")]
    DuplicateRecord(String),

    /// A status change would move a session backward or skip a required step.
    #[error("{0}")]
    InvalidTransition(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unexpected(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ServiceError::NotFound(err.to_string()),
            StoreError::DuplicateId { .. } => ServiceError::Unexpected(err.to_string()),
        }
    }
}
