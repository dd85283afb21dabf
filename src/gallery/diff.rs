// SPDX-License-Identifier: MPL-2.0
//! Structural list diff for gallery updates.
//!
//! Identity is locator equality; content is full-value equality. A view
//! applying a [`ListUpdate`] re-binds only positions marked changed; a view
//! that ignores the update and redraws everything is still correct, just
//! wasteful. Correctness never depends on the diff.

use crate::domain::media::MediaRecord;

/// How one position of the new list relates to the old list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowChange {
    /// Same locator, same content, same position. No re-bind needed.
    Unchanged,
    /// The locator existed before but its content or position changed.
    Rebind,
    /// The locator did not exist in the old list.
    Insert,
}

/// The result of diffing two record sequences, indexed by new-list position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListUpdate {
    /// Per-position classification, `changes[i]` describing new position `i`.
    pub changes: Vec<RowChange>,
    /// Number of old records whose locator no longer appears.
    pub removed: usize,
}

impl ListUpdate {
    /// Returns `true` if no row needs re-binding and nothing was removed.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.removed == 0 && self.changes.iter().all(|c| *c == RowChange::Unchanged)
    }

    /// Positions in the new list that need re-binding.
    pub fn changed_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.changes
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != RowChange::Unchanged)
            .map(|(i, _)| i)
    }
}

/// Computes the structural difference between `old` and `new`.
#[must_use]
pub fn diff(old: &[MediaRecord], new: &[MediaRecord]) -> ListUpdate {
    let changes = new
        .iter()
        .enumerate()
        .map(|(position, record)| {
            match old.iter().position(|o| o.locator == record.locator) {
                Some(old_position) if old_position == position && old[old_position] == *record => {
                    RowChange::Unchanged
                }
                Some(_) => RowChange::Rebind,
                None => RowChange::Insert,
            }
        })
        .collect();

    let removed = old
        .iter()
        .filter(|o| !new.iter().any(|n| n.locator == o.locator))
        .count();

    ListUpdate { changes, removed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::{Collection, MediaRecord};

    fn image(id: u64, captured_at: i64) -> MediaRecord {
        MediaRecord::from_row(Collection::Images, id, captured_at)
    }

    #[test]
    fn identical_lists_are_a_noop() {
        let list = vec![image(1, 100), image(2, 200)];
        let update = diff(&list, &list);

        assert!(update.is_noop());
        assert_eq!(update.changes, vec![RowChange::Unchanged; 2]);
        assert_eq!(update.removed, 0);
    }

    #[test]
    fn changed_content_rebinds_only_that_position() {
        let old = vec![image(1, 100), image(2, 200)];
        let new = vec![image(1, 100), image(2, 999)];

        let update = diff(&old, &new);

        assert_eq!(update.changes, vec![RowChange::Unchanged, RowChange::Rebind]);
        assert_eq!(update.changed_positions().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn unknown_locator_is_an_insert() {
        let old = vec![image(1, 100)];
        let new = vec![image(1, 100), image(2, 200)];

        let update = diff(&old, &new);

        assert_eq!(update.changes, vec![RowChange::Unchanged, RowChange::Insert]);
        assert_eq!(update.removed, 0);
    }

    #[test]
    fn removal_shifts_surviving_rows() {
        let old = vec![image(1, 100), image(2, 200), image(3, 300)];
        let new = vec![image(1, 100), image(3, 300)];

        let update = diff(&old, &new);

        // Position 0 untouched; position 1 now holds a moved survivor.
        assert_eq!(update.changes, vec![RowChange::Unchanged, RowChange::Rebind]);
        assert_eq!(update.removed, 1);
    }

    #[test]
    fn empty_to_empty_and_full_replacement() {
        assert!(diff(&[], &[]).is_noop());

        let old = vec![image(1, 100)];
        let new = vec![image(2, 200)];
        let update = diff(&old, &new);
        assert_eq!(update.changes, vec![RowChange::Insert]);
        assert_eq!(update.removed, 1);
    }
}
