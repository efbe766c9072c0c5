use db::StorageError;
use services::ServiceError;
use thiserror::Error;

/// Failures surfaced to the user of a [`crate::SyncClient`].
///
/// `Display` is the message shown inline in the UI.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Could not reach the server: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Could not save data: {0}")]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// HTTP-style status for the failure, where one applies.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(err) => err.status().map(|s| s.as_u16()),
            ClientError::Service(ServiceError::NotFound(_)) => Some(404),
            ClientError::Service(ServiceError::Unexpected(_)) => Some(500),
            ClientError::Service(_) => Some(400),
            ClientError::Storage(_) => None,
        }
    }
}
