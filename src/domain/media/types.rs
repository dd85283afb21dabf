// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any storage or presentation
//! dependencies. Records are produced fresh on every catalog query and are
//! never mutated; deletion removes a record from the presented list and
//! issues a removal request against the backing store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the two kinds of captured media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaKind {
    /// Still photo (JPEG, PNG, DNG, etc.)
    Image,
    /// Video recording (MP4, MKV, etc.)
    Video,
}

impl MediaKind {
    /// Returns the store collection that assets of this kind live in.
    #[must_use]
    pub fn collection(self) -> Collection {
        match self {
            MediaKind::Image => Collection::Images,
            MediaKind::Video => Collection::Videos,
        }
    }
}

/// A typed base collection inside the backing asset store.
///
/// Locators are scoped to a collection so that image and video ids coming
/// from independent store tables can never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collection {
    /// Base collection for still images.
    Images,
    /// Base collection for video recordings.
    Videos,
}

impl Collection {
    /// Returns the media kind stored in this collection.
    #[must_use]
    pub fn kind(self) -> MediaKind {
        match self {
            Collection::Images => MediaKind::Image,
            Collection::Videos => MediaKind::Video,
        }
    }

    /// Path segment used when rendering a locator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Images => "images",
            Collection::Videos => "videos",
        }
    }
}

/// Opaque, store-scoped identity of one asset.
///
/// A locator is synthesized from the asset kind's base collection plus the
/// store's numeric row id. It is *not* a file path: it stays valid across
/// store-level reorganization and is sufficient to fetch or delete the asset
/// without knowing where the store keeps its bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locator {
    collection: Collection,
    id: u64,
}

impl Locator {
    /// Creates a locator for the given collection and store row id.
    #[must_use]
    pub fn new(collection: Collection, id: u64) -> Self {
        Self { collection, id }
    }

    /// The base collection this locator points into.
    #[must_use]
    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// The store's numeric id for the asset.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "store://{}/{}", self.collection.as_str(), self.id)
    }
}

/// One captured asset as presented by the catalog.
///
/// Immutable value type: a record is built once from a store row and handed
/// off whole. Within a single listing every record carries a distinct
/// locator; list order is store-determined and never re-sorted client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRecord {
    /// Opaque reference to the asset in the backing store.
    pub locator: Locator,
    /// Whether the asset is a still image or a video.
    pub kind: MediaKind,
    /// Store-reported capture time, Unix seconds.
    pub captured_at: i64,
}

impl MediaRecord {
    /// Creates a record from a store row id and capture timestamp.
    ///
    /// The kind is derived from the collection the row came from, so a
    /// record can never disagree with its own locator about what it is.
    #[must_use]
    pub fn from_row(collection: Collection, id: u64, captured_at: i64) -> Self {
        Self {
            locator: Locator::new(collection, id),
            kind: collection.kind(),
            captured_at,
        }
    }
}
