// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! This module contains read-only services over the backing asset store.
//! They never modify store state; mutation (deletion) goes through the
//! gallery presenter's owner instead.
//!
//! # Available Services
//!
//! - [`catalog`]: Owned-media catalog listing (`CatalogQuery`, `ScanTask`)

pub mod catalog;

// Re-export main types
pub use catalog::{CatalogQuery, KindFilter, ScanTask};
