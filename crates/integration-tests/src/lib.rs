//! Integration tests for Marketplace.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p marketplace-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_operations` - Cart semantics through the session/handle API
//! - `persistence` - Persisted-record behavior across stores and restarts
//!
//! Everything here goes through the public API only; nothing reaches into
//! crate internals.

use marketplace_core::{NewCartItem, Price, ProductId};

/// Build a catalog product descriptor for tests.
#[must_use]
pub fn product(id: &str) -> NewCartItem {
    NewCartItem {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        image_url: format!("https://cdn.example.com/{id}.png"),
        price: Price::from_minor_units(1999),
    }
}
