// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery list updates.
//!
//! Measures the performance of:
//! - Structural diffing of two record lists
//! - Full submit/delete cycles on the presenter

use camera_roll::domain::media::{Collection, MediaRecord};
use camera_roll::gallery::diff::diff;
use camera_roll::gallery::presenter::GalleryPresenter;
use camera_roll::test_utils::RecordingListener;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn record_list(len: u64) -> Vec<MediaRecord> {
    (0..len)
        .map(|id| MediaRecord::from_row(Collection::Images, id, 1_700_000_000 + id as i64))
        .collect()
}

/// Benchmark diffing a list against a one-record-shorter copy of itself,
/// the shape every gallery delete produces.
fn bench_diff_after_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_diff");

    for len in [100u64, 1_000] {
        let old = record_list(len);
        let mut new = old.clone();
        new.remove((len / 2) as usize);

        group.bench_function(format!("diff_after_delete/{len}"), |b| {
            b.iter(|| {
                let update = diff(black_box(&old), black_box(&new));
                black_box(update);
            });
        });
    }

    group.finish();
}

/// Benchmark the full presenter path: submit a fresh scan result over an
/// existing list of the same size.
fn bench_submit_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_diff");

    for len in [100u64, 1_000] {
        let records = record_list(len);

        group.bench_function(format!("submit_list/{len}"), |b| {
            b.iter(|| {
                let mut presenter = GalleryPresenter::new(RecordingListener::default());
                presenter.submit_list(black_box(records.clone()));
                let update = presenter.submit_list(black_box(records.clone()));
                black_box(update);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_diff_after_delete, bench_submit_list);
criterion_main!(benches);
