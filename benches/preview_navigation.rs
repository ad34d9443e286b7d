// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the preview controller.
//!
//! Measures:
//! - The fit algorithm in both modes
//! - Stepping through a large collection (next/previous)

use capture_viewer::app::config::FitMode;
use capture_viewer::capture::{CaptureId, Collection};
use capture_viewer::ui::preview::fit::{adjust_resolution, ViewportBudget};
use capture_viewer::ui::preview::{self, Effect};
use criterion::{criterion_group, criterion_main, Criterion};
use iced::widget::scrollable::RelativeOffset;
use iced::Size;
use std::hint::black_box;
use std::time::Instant;

fn collection(len: usize) -> Collection {
    (0..len)
        .map(|i| CaptureId::new(format!("capture-{i:05}.png")))
        .collect::<Vec<_>>()
        .into()
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview_fit");
    let budget = ViewportBudget::from_window(Size::new(1920.0, 1080.0), 200.0, 90.0);
    let sizes = [
        Size::new(6000.0, 4000.0),
        Size::new(1080.0, 2400.0),
        Size::new(640.0, 480.0),
    ];

    for (name, mode) in [("two_pass", FitMode::TwoPass), ("min_ratio", FitMode::MinRatio)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for size in sizes {
                    black_box(adjust_resolution(black_box(size), budget, mode));
                }
            });
        });
    }

    group.finish();
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview_navigation");
    let captures = collection(10_000);

    group.bench_function("next_through_collection", |b| {
        b.iter(|| {
            let mut state = preview::State::default();
            let _ = state.show(0, captures.clone(), RelativeOffset::START, Instant::now());
            let mut lookups = 0usize;
            for _ in 0..captures.len() {
                let effects = state.handle_message(preview::Message::NextPressed);
                lookups += effects
                    .iter()
                    .filter(|effect| matches!(effect, Effect::FindCapture { .. }))
                    .count();
            }
            black_box(lookups);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_fit, bench_navigate);
criterion_main!(benches);
