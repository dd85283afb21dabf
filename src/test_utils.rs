// SPDX-License-Identifier: MPL-2.0
//! Test utilities: an in-memory asset store and a recording gallery
//! listener.
//!
//! Compiled into the library so both unit tests and the integration tests
//! can share the same fixtures.

use crate::application::port::store::{AssetRow, AssetStore, StoreError};
use crate::config::SortOrder;
use crate::domain::media::{Locator, MediaKind};
use crate::gallery::presenter::GalleryListener;
use std::sync::Mutex;

/// One asset seeded into an [`InMemoryStore`].
#[derive(Debug, Clone)]
pub struct StoredAsset {
    pub kind: MediaKind,
    pub id: u64,
    pub location: String,
    pub taken_at: i64,
    pub name: String,
}

impl StoredAsset {
    /// An image asset with a synthetic zero-padded display name.
    #[must_use]
    pub fn image(id: u64, location: &str, taken_at: i64) -> Self {
        Self {
            kind: MediaKind::Image,
            id,
            location: location.to_string(),
            taken_at,
            name: format!("{id:08}.jpg"),
        }
    }

    /// A video asset with a synthetic zero-padded display name.
    #[must_use]
    pub fn video(id: u64, location: &str, taken_at: i64) -> Self {
        Self {
            kind: MediaKind::Video,
            id,
            location: location.to_string(),
            taken_at,
            name: format!("{id:08}.mp4"),
        }
    }
}

/// A backing asset store held entirely in memory.
///
/// Sorting honors the requested [`SortOrder`] the way a real index would;
/// deletes are recorded so tests can assert on the store-level mutation.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    assets: Mutex<Vec<StoredAsset>>,
    deleted: Mutex<Vec<Locator>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new(assets: Vec<StoredAsset>) -> Self {
        Self {
            assets: Mutex::new(assets),
            deleted: Mutex::new(Vec::new()),
        }
    }

    /// Locators deleted so far, in deletion order.
    #[must_use]
    pub fn deleted(&self) -> Vec<Locator> {
        self.deleted.lock().unwrap().clone()
    }

    /// Number of assets currently held.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.assets.lock().unwrap().len()
    }
}

impl AssetStore for InMemoryStore {
    fn query(&self, kind: MediaKind, sort: SortOrder) -> Result<Vec<AssetRow>, StoreError> {
        let mut matching: Vec<StoredAsset> = self
            .assets
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.kind == kind)
            .cloned()
            .collect();

        match sort {
            SortOrder::NameAscending => matching.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOrder::NameDescending => matching.sort_by(|a, b| b.name.cmp(&a.name)),
            SortOrder::DateAscending => matching.sort_by_key(|a| a.taken_at),
            SortOrder::DateDescending => matching.sort_by_key(|a| std::cmp::Reverse(a.taken_at)),
        }

        Ok(matching
            .into_iter()
            .map(|a| AssetRow {
                id: a.id,
                location: a.location,
                taken_at: a.taken_at,
            })
            .collect())
    }

    fn delete(&self, locator: &Locator) -> Result<(), StoreError> {
        let mut assets = self.assets.lock().unwrap();
        let kind = locator.collection().kind();
        let position = assets
            .iter()
            .position(|a| a.kind == kind && a.id == locator.id())
            .ok_or(StoreError::NotFound)?;
        assets.remove(position);
        self.deleted.lock().unwrap().push(*locator);
        Ok(())
    }
}

/// Shorthand for seeding an [`InMemoryStore`].
#[must_use]
pub fn store_with(assets: Vec<StoredAsset>) -> InMemoryStore {
    InMemoryStore::new(assets)
}

/// A store whose every operation fails with the given error.
#[derive(Debug)]
pub struct FailingStore {
    error: StoreError,
}

impl AssetStore for FailingStore {
    fn query(&self, _kind: MediaKind, _sort: SortOrder) -> Result<Vec<AssetRow>, StoreError> {
        Err(self.error.clone())
    }

    fn delete(&self, _locator: &Locator) -> Result<(), StoreError> {
        Err(self.error.clone())
    }
}

/// Builds a [`FailingStore`].
#[must_use]
pub fn failing_store(error: StoreError) -> FailingStore {
    FailingStore { error }
}

/// A gallery listener that records every dispatched intent.
#[derive(Debug, Default)]
pub struct RecordingListener {
    /// `(kind, locator)` per click, in order.
    pub activated: Vec<(MediaKind, Locator)>,
    /// `(is_empty, locator)` per deletion, in order.
    pub deletions: Vec<(bool, Locator)>,
}

impl GalleryListener for RecordingListener {
    fn item_activated(&mut self, kind: MediaKind, locator: Locator) {
        self.activated.push((kind, locator));
    }

    fn record_deleted(&mut self, is_empty: bool, locator: Locator) {
        self.deletions.push((is_empty, locator));
    }
}
