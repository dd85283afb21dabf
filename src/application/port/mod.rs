// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters
//! implement. The traits use only domain types, ensuring the application
//! layer remains independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`store`]: The backing asset store (query and delete)
//!
//! # Design Notes
//!
//! - All traits use domain types only (no paths, no platform handles)
//! - Traits are object-safe; services accept `&dyn AssetStore`
//! - Methods return `Result` with port-level error types

pub mod store;

// Re-export main types for convenience
pub use store::{AssetRow, AssetStore, StoreError};
