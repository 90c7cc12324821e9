//! Cartwheel Core - Shared types library.
//!
//! This crate provides the types shared between the Cartwheel components:
//! - `storefront` - Server-rendered catalog and cart site
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no storage,
//! no HTTP. The cart aggregation rules live here so they can be unit tested
//! without a running server.
//!
//! # Modules
//!
//! - [`types`] - Product and cart models, type-safe IDs, and money helpers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
