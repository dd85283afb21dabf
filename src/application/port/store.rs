// SPDX-License-Identifier: MPL-2.0
//! Backing asset store port definition.
//!
//! This module defines the [`AssetStore`] trait, the seam between the catalog
//! core and the platform's media index. Infrastructure adapters (the bundled
//! [`DirectoryStore`](crate::infrastructure::fs_store::DirectoryStore), or a
//! platform binding) implement this trait to provide concrete storage.
//!
//! The catalog only ever consumes `query`; the deletion path only ever
//! consumes `delete`. Neither side holds a store cursor between calls.

use crate::config::SortOrder;
use crate::domain::media::{Locator, MediaKind};
use std::fmt;

// =============================================================================
// StoreError
// =============================================================================

/// Errors reported by a backing asset store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store cannot be reached (index offline, root missing).
    Unavailable(String),

    /// The caller's access to the store was denied or revoked.
    AccessDenied,

    /// No asset exists for the given locator.
    NotFound,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {msg}"),
            StoreError::AccessDenied => write!(f, "store access denied"),
            StoreError::NotFound => write!(f, "asset not found"),
        }
    }
}

// =============================================================================
// AssetRow
// =============================================================================

/// One raw row returned by a store query, before catalog filtering.
///
/// `location` is the asset's storage-relative namespace (its directory within
/// the store, trailing-slash normalized), not a full path to the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRow {
    /// The store's numeric id for the asset, unique within its collection.
    pub id: u64,
    /// Storage-relative location the asset lives in, e.g. `DCIM/CameraRoll/`.
    pub location: String,
    /// Store-reported capture time, Unix seconds.
    pub taken_at: i64,
}

// =============================================================================
// AssetStore
// =============================================================================

/// Abstract interface to the platform's media index.
///
/// Implementations must be safe to share across threads: catalog queries may
/// run on a background sequence while deletion stays on the foreground one.
pub trait AssetStore: Send + Sync {
    /// Lists every asset of the given kind, in the requested store order.
    ///
    /// Returns rows for the whole store; ownership filtering is the
    /// catalog's job, not the store's.
    fn query(&self, kind: MediaKind, sort: SortOrder) -> Result<Vec<AssetRow>, StoreError>;

    /// Removes the asset identified by `locator` from the store.
    fn delete(&self, locator: &Locator) -> Result<(), StoreError>;
}
