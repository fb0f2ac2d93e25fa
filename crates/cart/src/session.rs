//! Session scoping and handle distribution.
//!
//! UI components never construct or own a [`crate::store::CartStore`].
//! The application builds one [`CartSession`] when a user session starts
//! and passes [`CartHandle`] clones down to whatever needs the cart -
//! explicit dependency injection rather than an ambient global lookup.
//!
//! A handle that outlives its session does not panic; its operations fail
//! with [`CartError::SessionClosed`], which marks a composition bug in the
//! caller.

use std::sync::{Arc, Weak};

use marketplace_core::{CartItem, NewCartItem, ProductId};

use crate::config::CartConfig;
use crate::error::{CartError, Result};
use crate::storage::KeyValueStore;
use crate::store::CartStore;

/// Owns the cart store for the duration of one app session.
///
/// Construction completes the initial load before any handle exists, so
/// no mutation can race the startup read.
pub struct CartSession {
    store: Arc<CartStore>,
}

impl CartSession {
    /// Open a session over the given storage engine.
    ///
    /// Reads the persisted cart record before returning; a missing or
    /// unreadable record yields an empty cart (see
    /// [`CartStore::load`]).
    pub async fn open(storage: Arc<dyn KeyValueStore>, config: &CartConfig) -> Self {
        let store = Arc::new(CartStore::new(storage, config.storage_key.clone()));
        store.load().await;
        Self { store }
    }

    /// Direct access to the owned store.
    #[must_use]
    pub fn store(&self) -> &CartStore {
        &self.store
    }

    /// Create a handle for a UI component.
    #[must_use]
    pub fn handle(&self) -> CartHandle {
        CartHandle {
            store: Arc::downgrade(&self.store),
        }
    }
}

/// Cheaply cloneable cart access for UI components.
///
/// Holds a weak reference to the session's store: handles do not keep a
/// closed session alive, and using one after the session ended surfaces
/// [`CartError::SessionClosed`] instead of acting on a dead cart.
#[derive(Clone)]
pub struct CartHandle {
    store: Weak<CartStore>,
}

impl CartHandle {
    fn store(&self) -> Result<Arc<CartStore>> {
        self.store.upgrade().ok_or(CartError::SessionClosed)
    }

    /// Read-only snapshot of the current line items.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::SessionClosed`] if the owning session is gone.
    pub async fn products(&self) -> Result<Vec<CartItem>> {
        Ok(self.store()?.products().await)
    }

    /// Add a product to the cart. See [`CartStore::add_to_cart`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::SessionClosed`] if the owning session is gone,
    /// or [`CartError::Storage`] if the persistence write fails.
    pub async fn add_to_cart(&self, product: NewCartItem) -> Result<()> {
        self.store()?.add_to_cart(product).await
    }

    /// Increment a line item's quantity. See [`CartStore::increment`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::SessionClosed`] if the owning session is gone,
    /// or [`CartError::Storage`] if the persistence write fails.
    pub async fn increment(&self, id: &ProductId) -> Result<()> {
        self.store()?.increment(id).await
    }

    /// Decrement a line item's quantity. See [`CartStore::decrement`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::SessionClosed`] if the owning session is gone,
    /// or [`CartError::Storage`] if the persistence write fails.
    pub async fn decrement(&self, id: &ProductId) -> Result<()> {
        self.store()?.decrement(id).await
    }
}
