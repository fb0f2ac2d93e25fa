//! The cart state container.
//!
//! [`CartStore`] owns the authoritative [`Cart`] for one session and
//! mirrors it to the injected [`KeyValueStore`] after every mutation. The
//! in-memory cart is the source of truth; the persisted record is a shadow
//! of it under a single fixed key.
//!
//! Mutations take the state lock, apply the reducer from
//! [`marketplace_core::Cart`], and persist before releasing it. Holding the
//! lock across the write means no two mutations interleave and writes
//! reach the storage engine in issue order (tokio mutexes queue waiters
//! FIFO), so the stored record always converges on the most recently
//! issued mutation.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::instrument;

use marketplace_core::{Cart, CartItem, NewCartItem, ProductId};

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Owns the session cart and its persistence.
///
/// Consumers get read-only snapshots via [`products`](Self::products);
/// the live cart is never handed out mutably.
pub struct CartStore {
    storage: Arc<dyn KeyValueStore>,
    storage_key: String,
    cart: Mutex<Cart>,
}

impl CartStore {
    /// Create a store over `storage`, persisting under `storage_key`.
    ///
    /// The cart starts empty; call [`load`](Self::load) to pull the
    /// persisted record in. [`crate::session::CartSession::open`] does both.
    pub fn new(storage: Arc<dyn KeyValueStore>, storage_key: impl Into<String>) -> Self {
        Self {
            storage,
            storage_key: storage_key.into(),
            cart: Mutex::new(Cart::new()),
        }
    }

    /// Replace the in-memory cart with the persisted record.
    ///
    /// An absent record, a malformed record, or a failed read all degrade
    /// to an empty cart with a warning - a customer opening the app never
    /// sees a load error, they see an empty cart.
    #[instrument(skip(self), fields(key = %self.storage_key))]
    pub async fn load(&self) {
        let mut cart = self.cart.lock().await;
        *cart = match self.storage.get(&self.storage_key).await {
            Ok(Some(raw)) => match Cart::from_json(&raw) {
                Ok(stored) => stored,
                Err(e) => {
                    tracing::warn!("Malformed cart record, starting empty: {e}");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!("Failed to read cart record, starting empty: {e}");
                Cart::new()
            }
        };
        tracing::debug!(items = cart.len(), "Cart loaded");
    }

    /// Add a product to the cart and persist.
    ///
    /// A product already in the cart has its quantity incremented; other
    /// entries are untouched. Duplicate adds are ordinary usage, never an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::CartError::Storage`] if the persistence
    /// write fails. The in-memory mutation is kept either way.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn add_to_cart(&self, product: NewCartItem) -> Result<()> {
        let mut cart = self.cart.lock().await;
        cart.add(product);
        self.persist(&cart).await
    }

    /// Increase the quantity of `id` by 1 and persist.
    ///
    /// A missing id leaves the cart unchanged; the record is persisted
    /// either way.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::CartError::Storage`] if the persistence
    /// write fails.
    #[instrument(skip(self))]
    pub async fn increment(&self, id: &ProductId) -> Result<()> {
        let mut cart = self.cart.lock().await;
        cart.increment(id);
        self.persist(&cart).await
    }

    /// Decrease the quantity of `id` by 1 and persist.
    ///
    /// An entry at quantity 1 is removed entirely. A missing id leaves the
    /// cart unchanged; the record is persisted either way.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::CartError::Storage`] if the persistence
    /// write fails.
    #[instrument(skip(self))]
    pub async fn decrement(&self, id: &ProductId) -> Result<()> {
        let mut cart = self.cart.lock().await;
        cart.decrement(id);
        self.persist(&cart).await
    }

    /// Empty the cart and persist the empty record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::CartError::Storage`] if the persistence
    /// write fails.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<()> {
        let mut cart = self.cart.lock().await;
        cart.clear();
        self.persist(&cart).await
    }

    /// Read-only snapshot of the current line items, in insertion order.
    pub async fn products(&self) -> Vec<CartItem> {
        self.cart.lock().await.items().to_vec()
    }

    /// Snapshot of the whole cart value.
    pub async fn cart(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    /// Write the given cart state under the storage key.
    ///
    /// Callers hold the state lock, which is what serializes writes into
    /// issue order.
    async fn persist(&self, cart: &Cart) -> Result<()> {
        let record = cart.to_json().map_err(crate::storage::StorageError::from)?;
        self.storage.set(&self.storage_key, &record).await?;
        tracing::debug!(items = cart.len(), "Cart persisted");
        Ok(())
    }
}
