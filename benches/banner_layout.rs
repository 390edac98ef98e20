// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for per-frame banner work.
//!
//! Measures:
//! - Placement evaluation for a full show animation
//! - Transition progress sampling
//! - Raster icon template tinting

use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Color, Size};
use iced_banner::ui::banner::{Host, Placement, Position, RasterIcon, Transition};
use std::hint::black_box;
use std::time::{Duration, Instant};

const FRAMES: u32 = 30;

fn host() -> Host {
    Host::new(Size::new(420.0, 720.0), 20.0, 44.0)
}

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("banner_layout");

    for position in [Position::NavigationBar, Position::StatusBar] {
        let placement = Placement::new(position, &host());
        group.bench_function(format!("frames_{position:?}"), |b| {
            b.iter(|| {
                for frame in 0..=FRAMES {
                    let progress = frame as f32 / FRAMES as f32;
                    black_box(placement.frame(black_box(progress), 72.0));
                }
            });
        });
    }

    group.finish();
}

fn bench_transition(c: &mut Criterion) {
    let mut group = c.benchmark_group("banner_layout");
    let start = Instant::now();
    let mut transition = Transition::new(Duration::from_millis(500));
    transition.show(start);

    group.bench_function("transition_progress", |b| {
        b.iter(|| {
            for frame in 0..=FRAMES {
                let now = start + Duration::from_millis(u64::from(frame) * 16);
                black_box(transition.progress(black_box(now)));
            }
        });
    });

    group.finish();
}

fn bench_tint(c: &mut Criterion) {
    let mut group = c.benchmark_group("banner_layout");
    let icon = RasterIcon::from_rgba(64, 64, vec![128; 64 * 64 * 4]).expect("valid icon size");

    group.bench_function("tint_64x64", |b| {
        b.iter(|| black_box(icon.tinted(black_box(Color::BLACK))));
    });

    group.finish();
}

criterion_group!(benches, bench_placement, bench_transition, bench_tint);
criterion_main!(benches);
