//! Core types for Marketplace.
//!
//! This module provides the cart domain model and type-safe wrappers for
//! common domain concepts.

pub mod cart;
pub mod id;
pub mod price;

pub use cart::{Cart, CartItem, NewCartItem};
pub use id::*;
pub use price::{ParsePriceError, Price};
