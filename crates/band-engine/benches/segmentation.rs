use band_charts_engine::{BandPipeline, ContinuityPolicy, PairSelection, RenderScales};
use band_charts_shared::Row;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic_rows(len: usize) -> Vec<Row> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            let mut row = Row::new(i as i64 * 86_400);
            // Every seventh reading of A is missing to exercise the
            // continuity resolver.
            if i % 7 != 0 {
                row = row.with_value("a", (t * 0.05).sin() * 10.0);
            }
            row.with_value("b", (t * 0.03).cos() * 8.0)
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let rows = synthetic_rows(10_000);
    let pair = PairSelection {
        a_key: "a",
        b_key: "b",
        a_policy: ContinuityPolicy::Interpolate,
        b_policy: ContinuityPolicy::ForwardFill,
    };
    let x_scale = |v: f64| (v / 86_400.0) as f32;
    let y_scale = |v: f64| (v * 25.0 + 400.0) as f32;
    let pipeline = BandPipeline::default();

    c.bench_function("segment_10k_rows", |b| {
        b.iter(|| {
            let scales = RenderScales {
                x: &x_scale,
                y: &y_scale,
            };
            black_box(pipeline.run(black_box(&rows), &pair, Some(&scales), "bench"))
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
