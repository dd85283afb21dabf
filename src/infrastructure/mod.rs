// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer - Concrete adapters behind the application ports.
//!
//! - [`fs_store`]: a filesystem-backed [`AssetStore`](crate::application::port::AssetStore)
//!   modeling the platform media index over a directory tree

pub mod fs_store;
