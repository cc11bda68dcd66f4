// File: crates/chart-core/tests/smoke.rs
// Purpose: End-to-end render of the three-day spend series and the no-op policy.

use chrono::{DateTime, TimeZone, Utc};
use shadow_chart::{ChartEngine, DataPoint, Role, Series, Shape, ViewConfig, Viewport};

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
}

fn three_days() -> Series {
    Series::from_points(vec![
        DataPoint::new(day(1), 100.0),
        DataPoint::new(day(2), 200.0),
        DataPoint::new(day(3), 150.0),
    ])
}

#[test]
fn renders_three_point_series() {
    let mut engine = ChartEngine::new();
    engine.render(&three_days(), &ViewConfig::default(), Viewport::new(400.0, 200.0));
    let scene = engine.scene();

    assert_eq!(scene.count(Role::Area), 1);
    assert_eq!(scene.count(Role::Line), 1);
    assert_eq!(scene.count(Role::Interaction), 1);
    assert_eq!(scene.gradients().len(), 1);
    assert_eq!(scene.texts(Role::AxisTitle), vec!["Value"]);

    let y_labels = scene.texts(Role::AxisY);
    assert_eq!(y_labels.first(), Some(&"$80"));
    assert_eq!(y_labels.last(), Some(&"$220"));

    let x_labels = scene.texts(Role::AxisX);
    assert_eq!(x_labels.first(), Some(&"Jan 01"));
    assert_eq!(x_labels.last(), Some(&"Jan 03"));

    let plot = engine.plot_area().expect("plot area");
    assert_eq!((plot.width(), plot.height()), (332.0, 148.0));
}

#[test]
fn hover_middle_day_shows_value() {
    let mut engine = ChartEngine::new();
    engine.render(&three_days(), &ViewConfig::default(), Viewport::new(400.0, 200.0));

    // 52 (left margin) + 332 / 2
    let focus = engine.pointer_move(218.0, 100.0).cloned().expect("focused");
    assert_eq!(focus.index, 1);
    assert_eq!(focus.tooltip.value_label, "$200");
    assert_eq!(focus.tooltip.date_label, "Jan 02, 2024");
    assert_eq!(focus.marker.x, 218.0);

    engine.pointer_leave();
    assert!(engine.focus().is_none());
}

#[test]
fn area_and_line_share_the_curve() {
    let mut engine = ChartEngine::new();
    engine.render(&three_days(), &ViewConfig::default(), Viewport::new(400.0, 200.0));
    let scene = engine.scene();

    let path_of = |role| match scene.by_role(role).next().map(|n| &n.shape) {
        Some(Shape::Path { path, .. }) => path.clone(),
        other => panic!("expected a path for {role:?}, got {other:?}"),
    };
    let line = path_of(Role::Line);
    let area = path_of(Role::Area);
    assert_eq!(line.segment_count(), 2);
    assert_eq!(&area.commands()[..line.commands().len()], line.commands());
    // area closes back along the baseline
    assert_eq!(area.commands().len(), line.commands().len() + 3);
}

#[test]
fn empty_and_single_point_series_draw_nothing() {
    let mut engine = ChartEngine::new();
    let vp = Viewport::new(400.0, 200.0);
    let cfg = ViewConfig::default();

    engine.render(&Series::new(), &cfg, vp);
    assert!(engine.scene().is_empty());

    engine.render(&Series::from_points(vec![DataPoint::new(day(1), 5.0)]), &cfg, vp);
    assert!(engine.scene().is_empty());
    assert!(engine.pointer_move(200.0, 100.0).is_none());
}

#[test]
fn zero_sized_viewport_draws_nothing() {
    let mut engine = ChartEngine::new();
    let cfg = ViewConfig::default();
    engine.render(&three_days(), &cfg, Viewport::new(400.0, 200.0));
    assert!(!engine.scene().is_empty());

    engine.render(&three_days(), &cfg, Viewport::new(0.0, 200.0));
    assert!(engine.scene().is_empty());
    engine.render(&three_days(), &cfg, Viewport::new(400.0, 0.0));
    assert!(engine.scene().is_empty());
    assert!(engine.plot_area().is_none());
}

#[test]
fn render_is_idempotent() {
    let mut engine = ChartEngine::new();
    let cfg = ViewConfig::default();
    let vp = Viewport::new(640.0, 320.0);
    engine.render(&three_days(), &cfg, vp);
    let first = engine.scene().clone();
    engine.render(&three_days(), &cfg, vp);
    assert_eq!(engine.scene(), &first);
}

#[test]
fn rerender_leaves_no_geometry_from_previous_series() {
    let june = |d| Utc.with_ymd_and_hms(2024, 6, d, 0, 0, 0).unwrap();
    let b = Series::from_points(vec![
        DataPoint::new(june(10), 5_000.0),
        DataPoint::new(june(11), 6_000.0),
    ]);
    let cfg = ViewConfig::default();
    let vp = Viewport::new(400.0, 200.0);

    let mut engine = ChartEngine::new();
    engine.render(&three_days(), &cfg, vp);
    engine.render(&b, &cfg, vp);

    let mut fresh = ChartEngine::new();
    fresh.render(&b, &cfg, vp);
    assert_eq!(engine.scene(), fresh.scene());
    assert!(engine.scene().texts(Role::AxisX).iter().all(|l| l.starts_with("Jun")));
}

#[test]
fn render_clears_focus() {
    let mut engine = ChartEngine::new();
    let cfg = ViewConfig::default();
    let vp = Viewport::new(400.0, 200.0);
    engine.render(&three_days(), &cfg, vp);
    assert!(engine.pointer_move(218.0, 100.0).is_some());
    engine.render(&three_days(), &cfg, vp);
    assert!(engine.focus().is_none());
}

#[test]
fn margins_larger_than_viewport_draw_nothing() {
    let mut engine = ChartEngine::new();
    let cfg = ViewConfig::default().with_margins(shadow_chart::Margins::new(10.0, 10.0, 10.0, 500.0));
    engine.render(&three_days(), &cfg, Viewport::new(400.0, 200.0));
    assert!(engine.scene().is_empty());
}
