//! Marketplace Cart - cart state container for the mobile storefront.
//!
//! This crate owns the session cart: an ordered, id-unique list of line
//! items held in memory and mirrored to a local key-value store on every
//! mutation.
//!
//! # Architecture
//!
//! - [`storage`] - the key-value seam ([`storage::KeyValueStore`]) the
//!   platform's persistent store is injected through, plus the bundled
//!   in-memory and file-backed implementations
//! - [`store`] - [`store::CartStore`], the authoritative cart plus its
//!   mutation operations
//! - [`session`] - explicit dependency injection for UI code: one
//!   [`session::CartSession`] per app session hands out cheap
//!   [`session::CartHandle`] clones
//! - [`config`] - environment-driven configuration
//! - [`error`] - the crate error taxonomy
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use marketplace_cart::config::CartConfig;
//! use marketplace_cart::session::CartSession;
//! use marketplace_cart::storage::MemoryStore;
//! use marketplace_core::{NewCartItem, Price, ProductId};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), marketplace_cart::error::CartError> {
//! let session = CartSession::open(Arc::new(MemoryStore::new()), &CartConfig::default()).await;
//! let cart = session.handle();
//!
//! cart.add_to_cart(NewCartItem {
//!     id: ProductId::new("p1"),
//!     title: "Espresso Cup".to_owned(),
//!     image_url: "https://cdn.example.com/p1.png".to_owned(),
//!     price: Price::from_minor_units(1250),
//! })
//! .await?;
//!
//! assert_eq!(cart.products().await?.len(), 1);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod session;
pub mod storage;
pub mod store;

pub use config::CartConfig;
pub use error::{CartError, Result};
pub use session::{CartHandle, CartSession};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::CartStore;
