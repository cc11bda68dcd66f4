use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shadow_chart::{ChartEngine, DataPoint, Series, ViewConfig, Viewport};

fn bench_hover(c: &mut Criterion) {
    let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let series: Series = (0..10_000)
        .map(|i| DataPoint::new(start + Duration::hours(i), (i % 97) as f64))
        .collect();
    let mut engine = ChartEngine::new();
    engine.render(&series, &ViewConfig::default(), Viewport::new(1_200.0, 400.0));

    c.bench_function("pointer_sweep_10k", |b| {
        b.iter(|| {
            let mut x = 52.0;
            while x < 1_184.0 {
                black_box(engine.pointer_move(x, 200.0).map(|f| f.index));
                x += 7.0;
            }
            engine.pointer_leave();
        });
    });
}

criterion_group!(benches, bench_hover);
criterion_main!(benches);
