// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for lightbox transitions and payload normalization.
//!
//! The machine is pure state, so these mostly guard against accidental
//! allocation creeping into the hot navigation path.

use criterion::{criterion_group, criterion_main, Criterion};
use photowall::collection::{PhotoCollection, PhotoPayload};
use photowall::viewer::Lightbox;
use std::hint::black_box;

const COLLECTION_LEN: usize = 500;

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_transitions");

    group.bench_function("next_prev_sweep", |b| {
        b.iter(|| {
            let mut lightbox = Lightbox::new();
            lightbox.open(0, COLLECTION_LEN);
            for _ in 0..COLLECTION_LEN {
                lightbox.next(COLLECTION_LEN);
            }
            for _ in 0..COLLECTION_LEN {
                lightbox.prev();
            }
            black_box(&lightbox);
        });
    });

    group.bench_function("zoom_cycle", |b| {
        b.iter(|| {
            let mut lightbox = Lightbox::new();
            lightbox.open(0, COLLECTION_LEN);
            for _ in 0..8 {
                lightbox.zoom_in();
            }
            for _ in 0..8 {
                lightbox.zoom_out();
            }
            black_box(&lightbox);
        });
    });

    group.finish();
}

fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_transitions");

    let payload = serde_json::to_string(
        &(0..COLLECTION_LEN)
            .map(|i| format!("https://cdn.example/events/photo-{i}.jpg"))
            .collect::<Vec<_>>(),
    )
    .expect("payload should serialize");

    group.bench_function("normalize_payload", |b| {
        b.iter(|| {
            let decoded: PhotoPayload =
                serde_json::from_str(&payload).expect("payload should decode");
            black_box(PhotoCollection::from_payload(decoded));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_navigation, bench_normalization);
criterion_main!(benches);
