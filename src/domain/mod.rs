// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core media catalog types with ZERO external dependencies.
//!
//! This module contains pure value types and business rules. It has no
//! dependencies on infrastructure concerns (no filesystem paths, no store
//! handles) to ensure testability and architectural purity.
//!
//! # Modules
//!
//! - [`media`]: Catalog value types ([`MediaKind`](media::MediaKind),
//!   [`Locator`](media::Locator), [`MediaRecord`](media::MediaRecord))

pub mod media;
