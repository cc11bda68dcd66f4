use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shadow_chart::{ChartEngine, DataPoint, Series, ViewConfig, Viewport};

fn build_series(n: usize) -> Series {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            let v = 1_420.0 + (i as f64 * 0.2).sin() * 320.0 + i as f64 * 8.0;
            DataPoint::new(start + Duration::days(i as i64), v.round())
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_scene");
    let cfg = ViewConfig::default();
    for &n in &[30usize, 90, 1_000] {
        group.bench_function(format!("days_{n}"), |b| {
            let series = build_series(n);
            let mut engine = ChartEngine::new();
            b.iter(|| {
                engine.render(&series, &cfg, Viewport::new(800.0, 320.0));
                black_box(engine.scene().nodes().len());
            });
        });
    }
    group.bench_function("svg_90", |b| {
        let series = build_series(90);
        let mut engine = ChartEngine::new();
        engine.render(&series, &cfg, Viewport::new(800.0, 320.0));
        b.iter(|| black_box(engine.to_svg()));
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
