//! Client-side sync layer.
//!
//! A [`SyncClient`] keeps a local copy of every collection and refreshes it
//! after each action. Where the data lives is decided by the [`Backend`]:
//! [`RemoteBackend`] talks to the REST API, [`LocalBackend`] runs the same
//! services in-process over key/value storage.
//!
//! [`views`] turns the cached collections into what the screens render.

pub mod backend;
pub mod error;
pub mod local;
pub mod remote;
pub mod sync;
pub mod views;

pub use backend::Backend;
pub use error::ClientError;
pub use local::LocalBackend;
pub use remote::{DEFAULT_BASE_URL, RemoteBackend};
pub use sync::{Snapshot, SyncClient};
