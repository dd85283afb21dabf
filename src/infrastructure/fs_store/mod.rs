// SPDX-License-Identifier: MPL-2.0
//! Filesystem-backed asset store.
//!
//! [`DirectoryStore`] models the platform's media index over a directory
//! tree: every regular file under the root with a known image or video
//! extension is one asset row. The file's parent directory, relative to the
//! root and trailing-slash normalized, is its storage-relative location
//! (`DCIM/CameraRoll/`), which is what the catalog's ownership filter
//! compares against.
//!
//! Row ids must stay stable across queries so a locator handed to a
//! presenter earlier can still be deleted later. A directory tree has no row
//! ids of its own, so the store derives one as the FNV-1a hash of the
//! root-relative path and keeps an id-to-path index, refreshed on every
//! scan, for delete resolution.

use crate::application::port::store::{AssetRow, AssetStore, StoreError};
use crate::config::SortOrder;
use crate::domain::media::{Locator, MediaKind};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Image file extensions recognized as still-photo assets.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "dng", "webp", "bmp", "tiff", "tif"];

/// Video file extensions recognized as recording assets.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];

/// Returns the media kind a file would be indexed as, by extension.
#[must_use]
pub fn detect_media_kind(path: &Path) -> Option<MediaKind> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)?;

    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

struct ScannedAsset {
    id: u64,
    path: PathBuf,
    location: String,
    name: String,
    taken_at: i64,
}

/// An [`AssetStore`] over a directory tree.
#[derive(Debug)]
pub struct DirectoryStore {
    root: PathBuf,
    // id -> absolute path, for delete resolution. Refreshed on every scan.
    index: Mutex<HashMap<u64, PathBuf>>,
}

impl DirectoryStore {
    /// Opens a store rooted at `root`. The directory does not have to exist
    /// yet; queries against a missing root report the store as unavailable.
    #[must_use]
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            index: Mutex::new(HashMap::new()),
        }
    }

    /// The root directory this store indexes.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn scan(&self, kind: MediaKind) -> Result<Vec<ScannedAsset>, StoreError> {
        let mut assets = Vec::new();
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let entries = std::fs::read_dir(&dir).map_err(|e| {
                if dir == self.root && e.kind() == io::ErrorKind::NotFound {
                    StoreError::Unavailable(format!("media root missing: {}", self.root.display()))
                } else {
                    map_io_error(e)
                }
            })?;
            for entry in entries {
                let entry = entry.map_err(map_io_error)?;
                let path = entry.path();
                if path.is_dir() {
                    pending.push(path);
                } else if detect_media_kind(&path) == Some(kind) {
                    if let Some(asset) = self.scanned_asset(path) {
                        assets.push(asset);
                    }
                }
            }
        }

        let mut index = self.index.lock().unwrap();
        for asset in &assets {
            index.insert(asset.id, asset.path.clone());
        }

        Ok(assets)
    }

    fn scanned_asset(&self, path: PathBuf) -> Option<ScannedAsset> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let id = fnv1a(&relative_key(relative));
        let location = relative
            .parent()
            .map(relative_key)
            .filter(|l| !l.is_empty())
            .map(|l| format!("{l}/"))
            .unwrap_or_default();
        let name = path.file_name()?.to_string_lossy().into_owned();
        let taken_at = file_taken_at(&path);

        Some(ScannedAsset {
            id,
            path,
            location,
            name,
            taken_at,
        })
    }

    fn resolve(&self, locator: &Locator) -> Option<PathBuf> {
        self.index.lock().unwrap().get(&locator.id()).cloned()
    }
}

impl AssetStore for DirectoryStore {
    fn query(&self, kind: MediaKind, sort: SortOrder) -> Result<Vec<AssetRow>, StoreError> {
        let mut assets = self.scan(kind)?;

        match sort {
            SortOrder::NameAscending => assets.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOrder::NameDescending => assets.sort_by(|a, b| b.name.cmp(&a.name)),
            SortOrder::DateAscending => assets.sort_by_key(|a| a.taken_at),
            SortOrder::DateDescending => assets.sort_by_key(|a| std::cmp::Reverse(a.taken_at)),
        }

        debug!(kind = ?kind, count = assets.len(), root = %self.root.display(), "directory scan");
        Ok(assets
            .into_iter()
            .map(|a| AssetRow {
                id: a.id,
                location: a.location,
                taken_at: a.taken_at,
            })
            .collect())
    }

    fn delete(&self, locator: &Locator) -> Result<(), StoreError> {
        let path = match self.resolve(locator) {
            Some(path) => path,
            None => {
                // The id may predate this process or the last scan; one
                // rescan of the locator's collection settles it.
                self.scan(locator.collection().kind())?;
                self.resolve(locator).ok_or(StoreError::NotFound)?
            }
        };

        std::fs::remove_file(&path).map_err(map_io_error)?;
        self.index.lock().unwrap().remove(&locator.id());
        debug!(locator = %locator, path = %path.display(), "asset deleted");
        Ok(())
    }
}

/// Capture time: creation time where the platform reports one, otherwise
/// modification time, as Unix seconds. Unreadable metadata maps to epoch.
fn file_taken_at(path: &Path) -> i64 {
    path.metadata()
        .and_then(|m| m.created().or_else(|_| m.modified()))
        .map(|t| DateTime::<Utc>::from(t).timestamp())
        .unwrap_or(0)
}

/// Root-relative path rendered with `/` separators on every platform, so
/// ids and locations are portable across OSes.
fn relative_key(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn fnv1a(key: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in key.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

fn map_io_error(err: io::Error) -> StoreError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => StoreError::AccessDenied,
        io::ErrorKind::NotFound => StoreError::NotFound,
        _ => StoreError::Unavailable(err.to_string()),
    }
}
