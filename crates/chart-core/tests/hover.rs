// File: crates/chart-core/tests/hover.rs
// Purpose: Pointer resolution (nearest point, tie-break, out-of-plot) and tooltip placement.

use chrono::{DateTime, TimeZone, Utc};
use shadow_chart::focus::{nearest_index, place_tooltip};
use shadow_chart::{ChartEngine, DataPoint, Placement, Point, Series, TooltipStyle, ViewConfig, Viewport};

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
}

fn series(values: &[f64]) -> Series {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| DataPoint::new(day(1 + i as u32), v))
        .collect()
}

fn rendered(values: &[f64]) -> ChartEngine {
    let mut engine = ChartEngine::new();
    engine.render(&series(values), &ViewConfig::default(), Viewport::new(400.0, 200.0));
    engine
}

#[test]
fn exact_tie_resolves_to_earlier_point() {
    // 83 px into a 332 px plot spanning two days lands exactly on 12:00 of day one.
    let mut engine = rendered(&[100.0, 200.0, 150.0]);
    let focus = engine.pointer_move(52.0 + 83.0, 60.0).cloned().expect("focused");
    assert_eq!(focus.index, 0);

    let focus = engine.pointer_move(52.0 + 84.0, 60.0).cloned().expect("focused");
    assert_eq!(focus.index, 1);
}

#[test]
fn nearest_index_bisects_by_center() {
    let s = series(&[1.0, 2.0, 3.0, 4.0]);
    let ms = |d: u32| day(d).timestamp_millis() as f64;
    let hour = 3_600_000.0;

    assert_eq!(nearest_index(&s, ms(1) - hour), Some(0));
    assert_eq!(nearest_index(&s, ms(2) + 11.0 * hour), Some(1));
    assert_eq!(nearest_index(&s, ms(2) + 13.0 * hour), Some(2));
    assert_eq!(nearest_index(&s, ms(4) + 100.0 * hour), Some(3));
    assert_eq!(nearest_index(&Series::new(), ms(1)), None);
}

#[test]
fn pointer_outside_plot_acts_as_leave() {
    let mut engine = rendered(&[100.0, 200.0, 150.0]);
    assert!(engine.pointer_move(218.0, 100.0).is_some());

    // inside the left margin
    assert!(engine.pointer_move(10.0, 100.0).is_none());
    assert!(engine.focus().is_none());
}

#[test]
fn marker_tracks_focused_point() {
    let mut engine = rendered(&[100.0, 200.0, 150.0]);
    let focus = engine.pointer_move(383.0, 100.0).cloned().expect("focused");
    assert_eq!(focus.index, 2);
    assert_eq!(focus.marker.x, 384.0);
    assert_eq!(focus.tooltip.bounds.top, focus.marker.y - 20.0);
}

#[test]
fn tooltip_flips_left_near_right_edge() {
    let mut engine = rendered(&[100.0, 200.0, 150.0]);

    let right = engine.pointer_move(53.0, 100.0).cloned().expect("focused");
    assert_eq!(right.index, 0);
    assert_eq!(right.tooltip.placement, Placement::Right);
    assert_eq!(right.tooltip.bounds.left, 52.0 + 12.0);

    let left = engine.pointer_move(383.0, 100.0).cloned().expect("focused");
    assert_eq!(left.tooltip.placement, Placement::Left);
    let width = left.tooltip.bounds.width();
    assert_eq!(left.tooltip.bounds.left, 384.0 - width - 12.0);
    assert!(left.tooltip.bounds.right <= 400.0);
}

#[test]
fn place_tooltip_uses_measured_width() {
    let style = TooltipStyle::default();
    let fits = place_tooltip(Point::new(100.0, 50.0), "Jan 02, 2024".into(), "$200".into(), 400.0, &style);
    assert_eq!(fits.placement, Placement::Right);
    assert_eq!(fits.bounds.left, 112.0);
    assert_eq!(fits.bounds.top, 30.0);

    let w = fits.bounds.width();
    // exactly at the edge still fits; one pixel more flips
    let edge = place_tooltip(Point::new(400.0 - w - 12.0, 50.0), "Jan 02, 2024".into(), "$200".into(), 400.0, &style);
    assert_eq!(edge.placement, Placement::Right);
    let over = place_tooltip(Point::new(400.0 - w - 11.0, 50.0), "Jan 02, 2024".into(), "$200".into(), 400.0, &style);
    assert_eq!(over.placement, Placement::Left);
}

#[test]
fn custom_formatter_drives_tooltip_value() {
    let mut engine = ChartEngine::new();
    let cfg = ViewConfig::default().with_formatter(|v| format!("{v:.1} USD"));
    engine.render(&series(&[100.0, 200.0, 150.0]), &cfg, Viewport::new(400.0, 200.0));
    let focus = engine.pointer_move(218.0, 100.0).cloned().expect("focused");
    assert_eq!(focus.tooltip.value_label, "200.0 USD");
}

#[test]
fn frame_shows_overlay_only_while_focused() {
    use shadow_chart::Role;
    let mut engine = rendered(&[100.0, 200.0, 150.0]);

    let idle = engine.frame();
    assert!(idle.by_role(Role::FocusMarker).all(|n| !n.visible));
    assert!(idle.by_role(Role::Tooltip).all(|n| !n.visible));

    engine.pointer_move(218.0, 100.0);
    let hovered = engine.frame();
    assert!(hovered.by_role(Role::FocusMarker).all(|n| n.visible));
    assert!(hovered.texts(Role::Tooltip).contains(&"$200"));
}
