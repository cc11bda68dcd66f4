// File: crates/chart-core/tests/autoscale.rs
// Purpose: Value-domain padding and nicing, plus time-scale inversion.

use chrono::{TimeZone, Utc};
use shadow_chart::scale::{value_padding, DEGENERATE_PADDING};
use shadow_chart::{ChartEngine, DataPoint, ScaleTransform, Series, TimeScale, ValueScale, ViewConfig, Viewport};

#[test]
fn padding_is_fifteen_percent_of_extent() {
    assert_eq!(value_padding(100.0, 200.0), 15.0);
    assert_eq!(value_padding(-50.0, 50.0), 15.0);
}

#[test]
fn degenerate_extent_pads_by_ten() {
    assert_eq!(value_padding(42.0, 42.0), DEGENERATE_PADDING);
    let y = ValueScale::padded(50.0, 50.0, 100.0, 0.0);
    assert_eq!(y.domain(), (40.0, 60.0));
}

#[test]
fn padded_domain_is_niced_and_strictly_contains_data() {
    let y = ValueScale::padded(100.0, 200.0, 148.0, 0.0);
    assert_eq!(y.domain(), (80.0, 220.0));

    for (lo, hi) in [(0.0, 1.0), (1420.0, 1980.0), (-3.5, 12.25), (0.001, 0.002)] {
        let (d0, d1) = ValueScale::padded(lo, hi, 100.0, 0.0).domain();
        assert!(d0 < lo && d1 > hi, "[{d0}, {d1}] does not strictly contain [{lo}, {hi}]");
    }
}

#[test]
fn value_scale_is_inverted_vertically() {
    let y = ValueScale::padded(100.0, 200.0, 148.0, 0.0);
    assert_eq!(y.to_px(80.0), 148.0);
    assert_eq!(y.to_px(220.0), 0.0);
    assert_eq!(y.invert(148.0), 80.0);
}

#[test]
fn time_scale_spans_full_extent() {
    let day = |d| Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap();
    let s = Series::from_points(vec![DataPoint::new(day(1), 1.0), DataPoint::new(day(5), 2.0)]);
    let x = TimeScale::for_series(&s, 400.0).expect("extent");
    assert_eq!(x.to_px_time(day(1)), 0.0);
    assert_eq!(x.to_px_time(day(5)), 400.0);
    assert_eq!(x.invert_time(100.0), Some(day(2)));
}

#[test]
fn engine_scales_follow_last_render() {
    let day = |d| Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap();
    let s = Series::from_points(vec![DataPoint::new(day(1), 0.0), DataPoint::new(day(2), 0.0)]);
    let mut engine = ChartEngine::new();
    engine.render(&s, &ViewConfig::default(), Viewport::new(400.0, 200.0));
    let (x, y) = engine.scales().expect("scales");
    assert_eq!(x.range(), (0.0, 332.0));
    assert_eq!(y.domain(), (-10.0, 10.0));
    assert_eq!(y.range(), (148.0, 0.0));
}

#[test]
fn invert_time_rounds_to_nearest_millisecond() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = start + chrono::Duration::milliseconds(1_000);
    let x = TimeScale::new(start, end, 0.0, 1_000.0);
    assert_eq!(x.invert_time(0.6), Some(start + chrono::Duration::milliseconds(1)));
    assert_eq!(x.invert_time(0.4), Some(start));
    assert_eq!(x.invert_time(999.7), Some(end));
}
