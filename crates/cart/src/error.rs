//! Crate error taxonomy.
//!
//! Cart operations surface exactly two failure classes to callers: the
//! injected storage engine failed ([`CartError::Storage`]), or a handle was
//! used after its owning session was torn down
//! ([`CartError::SessionClosed`]). A malformed persisted record is not an
//! error - loading absorbs it as "no prior cart" (see
//! [`crate::store::CartStore::load`]).

use thiserror::Error;

use crate::storage::StorageError;

/// Error type for cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The persistence read or write failed. The in-memory cart keeps the
    /// applied mutation; nothing is rolled back and nothing is retried.
    #[error("cart storage error: {0}")]
    Storage(#[from] StorageError),

    /// A [`crate::session::CartHandle`] was used outside a live
    /// [`crate::session::CartSession`]. This is a composition bug in the
    /// caller, not a transient condition - do not retry.
    #[error("cart handle used outside a live cart session")]
    SessionClosed,
}

/// Result type alias for cart operations.
pub type Result<T> = std::result::Result<T, CartError>;
