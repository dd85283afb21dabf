// SPDX-License-Identifier: MPL-2.0
//! Command-line shell around the gallery core: lists the owned catalog of a
//! media root and optionally deletes one record by position.
//!
//! ```text
//! camera_roll [--root DIR] [--merged] [--delete POS]
//! ```

use camera_roll::application::port::store::AssetStore;
use camera_roll::application::query::catalog::{CatalogQuery, ScanTask};
use camera_roll::config;
use camera_roll::domain::media::{Locator, MediaKind};
use camera_roll::error::Result;
use camera_roll::gallery::presenter::{GalleryListener, GalleryPresenter};
use camera_roll::infrastructure::fs_store::DirectoryStore;
use chrono::DateTime;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// Issues store-level deletes for records the presenter drops and announces
/// list-empty transitions, the way a gallery screen would navigate back.
struct CliListener {
    store: Arc<DirectoryStore>,
}

impl GalleryListener for CliListener {
    fn item_activated(&mut self, kind: MediaKind, locator: Locator) {
        match kind {
            MediaKind::Image => println!("open image {locator}"),
            MediaKind::Video => println!("launch playback for {locator}"),
        }
    }

    fn record_deleted(&mut self, is_empty: bool, locator: Locator) {
        if let Err(err) = self.store.delete(&locator) {
            // Optimistic removal stands; the store failure is only reported.
            warn!(locator = %locator, error = %err, "store-level delete failed");
            eprintln!("could not delete {locator}: {err}");
        }
        if is_empty {
            println!("gallery is now empty");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let root: Option<PathBuf> = args.opt_value_from_str("--root").unwrap_or(None);
    let merged = args.contains("--merged");
    let delete_position: Option<usize> = args.opt_value_from_str("--delete").unwrap_or(None);

    let settings = config::load().unwrap_or_default();
    let root = root
        .or_else(dirs::picture_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    let store = Arc::new(DirectoryStore::open(root));
    let query = CatalogQuery::new(settings.owned_location.clone()).with_sort(settings.sort);

    let records = if merged {
        let store = Arc::clone(&store);
        let query = query.clone();
        tokio::task::spawn_blocking(move || query.run_merged(store.as_ref()))
            .await
            .unwrap_or_default()
    } else {
        ScanTask::spawn(store.clone() as Arc<dyn AssetStore>, query)
            .finished()
            .await
            .unwrap_or_default()
    };

    let mut presenter = GalleryPresenter::new(CliListener {
        store: Arc::clone(&store),
    });
    presenter.submit_list(records);

    if presenter.is_empty() {
        println!("no media in {}", settings.owned_location);
        return Ok(());
    }

    for (position, record) in presenter.records().iter().enumerate() {
        let kind = match record.kind {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        };
        let captured = DateTime::from_timestamp(record.captured_at, 0)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        println!("{position:>4}  {kind:<5}  {captured}  {}", record.locator);
    }

    if let Some(position) = delete_position {
        presenter.delete_at(position);
        println!("{} records remain", presenter.len());
    }

    Ok(())
}
