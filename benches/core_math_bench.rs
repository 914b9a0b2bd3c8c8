use criterion::{Criterion, criterion_group, criterion_main};
use fnplot::core::{FunctionId, Viewport, map_to_pixels, render_segments, sample};
use fnplot::render::{PlotStyle, build_plot_frame};
use std::hint::black_box;

fn bench_sample_10k(c: &mut Criterion) {
    c.bench_function("sample_sine_exp_10k", |b| {
        b.iter(|| {
            let _ = sample(
                black_box(&FunctionId::SineExp),
                black_box(-50.0),
                black_box(50.0),
                black_box(10_000),
            )
            .expect("sampling should succeed");
        })
    });
}

fn bench_map_and_clip_10k(c: &mut Criterion) {
    let series = sample(&FunctionId::SineExp, -50.0, 50.0, 10_000).expect("sample");
    let viewport = Viewport::square(2_000);

    c.bench_function("map_and_clip_10k", |b| {
        b.iter(|| {
            let mapping =
                map_to_pixels(black_box(&series), black_box(viewport), black_box(20.0))
                    .expect("mapping should succeed");
            let _ = render_segments(black_box(&mapping.points), black_box(viewport));
        })
    });
}

fn bench_plot_frame_1k(c: &mut Criterion) {
    let series = sample(&FunctionId::SineExp, -25.0, 25.0, 1_000).expect("sample");
    let viewport = Viewport::square(1_000);

    c.bench_function("plot_frame_1k", |b| {
        b.iter(|| {
            let _ = build_plot_frame(
                black_box(&series),
                black_box(viewport),
                black_box(20.0),
                black_box(PlotStyle::default()),
            )
            .expect("frame should build");
        })
    });
}

criterion_group!(
    benches,
    bench_sample_10k,
    bench_map_and_clip_10k,
    bench_plot_frame_1k
);
criterion_main!(benches);
