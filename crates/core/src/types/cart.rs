//! Cart domain model.
//!
//! A [`Cart`] is an ordered sequence of [`CartItem`]s, unique by product id.
//! Entries keep the order in which their product was first added. Every
//! quantity is at least 1; an item whose quantity would reach 0 is removed
//! from the cart instead. The mutation methods here are the single source
//! of truth for cart semantics - the state container in `marketplace-cart`
//! applies them to its authoritative copy and never to a captured snapshot.
//!
//! Per-entry lifecycle: `absent -> quantity=1 -> quantity=2 -> ... -> absent`
//! (removal happens on decrement from 1). No other transitions exist.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog product id.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Product image URL.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Unit price.
    pub price: Price,
    /// Number of units, always >= 1.
    pub quantity: u32,
}

/// A product descriptor as handed over by the catalog UI - everything a
/// [`CartItem`] has except the quantity, which the cart assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    /// Catalog product id.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Product image URL.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Unit price.
    pub price: Price,
}

impl NewCartItem {
    fn into_item(self, quantity: u32) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity,
        }
    }
}

/// The ordered, id-unique collection of line items for one session.
///
/// Serializes as a plain JSON array of items, which is also the format of
/// the persisted cart record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// All line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Look up a line item by product id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all line items.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |sum, item| sum.saturating_add(item.quantity))
    }

    /// Add a product to the cart.
    ///
    /// A product not yet in the cart is appended with quantity 1. A product
    /// already present has its own quantity incremented; every other entry
    /// is left untouched.
    pub fn add(&mut self, product: NewCartItem) {
        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
            None => self.items.push(product.into_item(1)),
        }
    }

    /// Increase the quantity of the matching line item by 1.
    ///
    /// An id with no matching entry leaves the cart unchanged.
    pub fn increment(&mut self, id: &ProductId) {
        if let Some(item) = self.items.iter_mut().find(|item| &item.id == id) {
            item.quantity = item.quantity.saturating_add(1);
        }
    }

    /// Decrease the quantity of the matching line item by 1.
    ///
    /// An entry at quantity 1 is removed from the cart entirely - quantity
    /// 0 is never representable. An id with no matching entry leaves the
    /// cart unchanged.
    pub fn decrement(&mut self, id: &ProductId) {
        let Some(item) = self.items.iter_mut().find(|item| &item.id == id) else {
            return;
        };
        if item.quantity > 1 {
            item.quantity -= 1;
        } else {
            self.items.retain(|item| &item.id != id);
        }
    }

    /// Remove every item from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Serialize the cart to the persisted-record JSON format.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a cart from the persisted-record JSON format.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` for anything that is not a well-formed
    /// array of line items. Callers loading persisted state treat that as
    /// "no prior cart".
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
