//! Marketplace Core - Shared types library.
//!
//! This crate provides the domain types used across all Marketplace
//! components:
//! - `cart` - Cart state container library
//! - `cli` - Command-line tools for inspecting and mutating the stored cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no async
//! runtime. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Cart domain model plus newtype wrappers for ids and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
