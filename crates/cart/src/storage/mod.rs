//! Key-value storage seam.
//!
//! The cart is persisted through [`KeyValueStore`], the asynchronous
//! string-keyed get/set contract the mobile platform's local store
//! provides. The store is injected into [`crate::store::CartStore`] as a
//! trait object, so the library never dials a backend itself.
//!
//! Two implementations ship with the crate:
//!
//! - [`MemoryStore`] - process-local, for tests and ephemeral sessions
//! - [`FileStore`] - one file per key under a data directory, for the CLI
//!   and desktop embedders

use async_trait::async_trait;
use thiserror::Error;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Error type for storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem-level failure.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted record could not be produced.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure reported by a foreign storage engine.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Asynchronous string-keyed storage with atomic per-key get/set.
///
/// Implementations must make `set` atomic per key: a concurrent `get` sees
/// either the previous value or the new one, never a torn write.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Removing an absent key is not
    /// an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
