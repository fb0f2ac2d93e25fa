//! Type-safe price representation using decimal arithmetic.
//!
//! Prices flow through the cart as opaque values - nothing in this
//! workspace computes totals or tax - but they are still kept as
//! `rust_decimal::Decimal` rather than `f64` so that the value read from
//! the catalog is the value written back to storage. The `serde-float`
//! feature serializes them as plain JSON numbers, which is what the
//! persisted cart record uses.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Error parsing a [`Price`] from a string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid price: {0}")]
pub struct ParsePriceError(#[from] rust_decimal::Error);

/// A unit price in the store's display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in the smallest currency unit
    /// (e.g., cents for USD).
    #[must_use]
    pub fn from_minor_units(minor_units: i64) -> Self {
        Self(Decimal::new(minor_units, 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl FromStr for Price {
    type Err = ParsePriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Decimal::from_str(s)?))
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}
