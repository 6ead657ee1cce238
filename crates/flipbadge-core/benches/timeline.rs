//! Benchmarks for timeline advancement.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flipbadge_core::{Animator, Color, Easing, Property, Segment, Timeline, Track};
use std::time::Duration;

fn flip_tracks() -> Vec<Track> {
    let half = Duration::from_millis(100);
    vec![
        Track::new(Property::Rotation)
            .then(Segment::scalar(0.0, 90.0, half, Easing::EaseIn))
            .then(Segment::scalar(270.0, 360.0, half, Easing::EaseOut)),
        Track::keyframes(
            Property::Opacity,
            &[1.0, 0.3, 1.0],
            Duration::from_millis(200),
            Easing::Linear,
        ),
        Track::new(Property::BackgroundColor).then(Segment::color(
            Color::from_argb(0xFFFF_0000),
            Color::from_argb(0xFF00_FF00),
            Duration::from_millis(200),
            Easing::Linear,
        )),
    ]
}

fn bench_full_flip(c: &mut Criterion) {
    c.bench_function("timeline_full_flip_60fps", |b| {
        b.iter(|| {
            let mut timeline = Timeline::new();
            timeline.run_sequence(flip_tracks());
            let mut events = 0;
            while !timeline.is_empty() {
                events += timeline.advance(black_box(Duration::from_millis(16))).len();
            }
            events
        });
    });
}

fn bench_easing(c: &mut Criterion) {
    c.bench_function("easing_ease_out", |b| {
        b.iter(|| Easing::EaseOut.apply(black_box(0.37)));
    });
}

fn bench_color_lerp(c: &mut Criterion) {
    let from = Color::from_argb(0xFFFF_0000);
    let to = Color::from_argb(0xFF00_FF00);
    c.bench_function("color_lerp", |b| {
        b.iter(|| from.lerp(black_box(&to), black_box(0.5)));
    });
}

criterion_group!(benches, bench_full_flip, bench_easing, bench_color_lerp);
criterion_main!(benches);
