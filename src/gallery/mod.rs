// SPDX-License-Identifier: MPL-2.0
//! Gallery presentation core.
//!
//! This module holds the UI-framework-free half of the gallery screen: the
//! [`GalleryPresenter`] that owns the currently displayed record sequence,
//! and the structural [`diff`] that lets a grid or pager re-bind only the
//! rows an update actually changed.
//!
//! The presenter performs no navigation, playback, or store mutation itself;
//! those are dispatched to the owner through [`GalleryListener`].

pub mod diff;
pub mod presenter;

// Re-export commonly used types
pub use diff::{diff, ListUpdate, RowChange};
pub use presenter::{GalleryListener, GalleryPresenter};
