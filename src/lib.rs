// SPDX-License-Identifier: MPL-2.0
//! `camera_roll` is the media-catalog and gallery-presentation core of a
//! camera application.
//!
//! It enumerates the captured assets a camera app owns inside a backing
//! media store, presents them as a diffable list for a grid or pager view,
//! and handles optimistic deletion of single records. Camera hardware,
//! rendering surfaces, permission prompts, and navigation stay outside this
//! crate, behind the [`application::port`] seams.

#![doc(html_root_url = "https://docs.rs/camera_roll/0.3.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod infrastructure;
pub mod test_utils;
