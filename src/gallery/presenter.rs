// SPDX-License-Identifier: MPL-2.0
//! The gallery presenter: holds the current record sequence for a grid or
//! pager view and dispatches click and delete intents to its owner.
//!
//! The presenter is not thread-safe by design; it must only be mutated from
//! one logical sequence (the UI one). Background scans hand their finished
//! record list over via [`ScanTask`](crate::application::query::ScanTask)
//! and the owner calls [`submit_list`](GalleryPresenter::submit_list) from
//! the UI sequence.

use crate::domain::media::{Locator, MediaKind, MediaRecord};
use crate::gallery::diff::{diff, ListUpdate};
use tracing::debug;

/// Receives the intents the presenter does not handle itself.
///
/// The presenter never navigates, plays media, or mutates the store; the
/// listener owner decides what a click means and issues the store-level
/// delete for removed records.
pub trait GalleryListener {
    /// A record was clicked. `kind` tells the owner whether to open a photo
    /// view or launch video playback for `locator`.
    fn item_activated(&mut self, kind: MediaKind, locator: Locator);

    /// A record was removed from the presented list. `is_empty` is true when
    /// the list is now empty (the owner typically navigates back); the owner
    /// is expected to issue the store-level delete for `locator`.
    fn record_deleted(&mut self, is_empty: bool, locator: Locator);
}

/// Adapts an ordered sequence of [`MediaRecord`]s into a displayable,
/// diffable list with click and delete dispatch.
#[derive(Debug)]
pub struct GalleryPresenter<L: GalleryListener> {
    records: Vec<MediaRecord>,
    listener: L,
}

impl<L: GalleryListener> GalleryPresenter<L> {
    /// Creates an empty presenter dispatching to `listener`.
    #[must_use]
    pub fn new(listener: L) -> Self {
        Self {
            records: Vec::new(),
            listener,
        }
    }

    /// Replaces the held sequence wholesale.
    ///
    /// Returns the structural diff against the previous sequence so the view
    /// re-binds only rows that actually changed.
    pub fn submit_list(&mut self, records: Vec<MediaRecord>) -> ListUpdate {
        let update = diff(&self.records, &records);
        self.records = records;
        update
    }

    /// The record at `position`, if in range.
    #[must_use]
    pub fn item_at(&self, position: usize) -> Option<&MediaRecord> {
        self.records.get(position)
    }

    /// Number of presented records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records are presented.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The full presented sequence, in order.
    #[must_use]
    pub fn records(&self) -> &[MediaRecord] {
        &self.records
    }

    /// Click dispatch: forwards `(kind, locator)` of the record at
    /// `position` to the listener. Out-of-range positions are ignored.
    pub fn activate(&mut self, position: usize) {
        if let Some(record) = self.records.get(position) {
            self.listener.item_activated(record.kind, record.locator);
        }
    }

    /// Removes the record at `position` from the presented list.
    ///
    /// Out-of-range positions are a no-op, not an error: a stale position
    /// may arrive after a concurrent update. On success the shortened list
    /// is resubmitted (diffed) and the listener receives
    /// `(is_empty, locator)` exactly once. The removal is optimistic; a
    /// later store-level delete failure does not roll it back.
    pub fn delete_at(&mut self, position: usize) -> ListUpdate {
        if position >= self.records.len() {
            return diff(&self.records, &self.records);
        }

        let mut shortened = self.records.clone();
        let removed = shortened.remove(position);
        let update = self.submit_list(shortened);

        debug!(position, locator = %removed.locator, "record removed from gallery");
        self.listener
            .record_deleted(self.records.is_empty(), removed.locator);
        update
    }

    /// Access to the listener, for owners that accumulate state in it.
    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutable access to the listener.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }
}
