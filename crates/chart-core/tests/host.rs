// File: crates/chart-core/tests/host.rs
// Purpose: Mount/unmount lifecycle, resize-driven re-render and observer release.

use chrono::{TimeZone, Utc};
use shadow_chart::{ChartHost, Container, DataPoint, Role, Series, Subscription, ViewConfig, Viewport, VirtualContainer};
use std::cell::Cell;
use std::rc::Rc;

fn series() -> Series {
    (1..=5)
        .map(|d| DataPoint::new(Utc.with_ymd_and_hms(2024, 2, d, 0, 0, 0).unwrap(), 1_000.0 + d as f64 * 40.0))
        .collect()
}

#[test]
fn mount_renders_at_container_size() {
    let container = VirtualContainer::new(480.0, 240.0);
    let host = ChartHost::mount(&container, series(), ViewConfig::default());
    assert_eq!(host.viewport(), Viewport::new(480.0, 240.0));
    assert_eq!(container.observer_count(), 1);
    host.with_engine(|e| assert_eq!(e.scene().count(Role::Line), 1));
}

#[test]
fn resize_rerenders_with_new_viewport() {
    let container = VirtualContainer::new(0.0, 0.0);
    let host = ChartHost::mount(&container, series(), ViewConfig::default());
    host.with_engine(|e| assert!(e.scene().is_empty()));

    container.resize(600.0, 300.0);
    assert_eq!(host.viewport(), Viewport::new(600.0, 300.0));
    host.with_engine(|e| {
        assert_eq!(e.scene().viewport(), Viewport::new(600.0, 300.0));
        assert_eq!(e.plot_area().map(|p| p.width()), Some(600.0 - 52.0 - 16.0));
    });

    container.resize(600.0, 0.0);
    host.with_engine(|e| assert!(e.scene().is_empty()));
}

#[test]
fn set_series_keeps_last_viewport() {
    let container = VirtualContainer::new(400.0, 200.0);
    let host = ChartHost::mount(&container, Series::new(), ViewConfig::default());
    host.with_engine(|e| assert!(e.scene().is_empty()));

    host.set_series(series());
    host.with_engine(|e| assert_eq!(e.scene().viewport(), Viewport::new(400.0, 200.0)));
    host.with_engine(|e| assert!(!e.scene().is_empty()));

    host.set_config(ViewConfig::default().with_label("Daily spend"));
    host.with_engine(|e| assert_eq!(e.scene().texts(Role::AxisTitle), vec!["Daily spend"]));
}

#[test]
fn drop_releases_observer() {
    let container = VirtualContainer::new(400.0, 200.0);
    {
        let _host = ChartHost::mount(&container, series(), ViewConfig::default());
        assert_eq!(container.observer_count(), 1);
    }
    assert_eq!(container.observer_count(), 0);
    // nothing left to notify
    container.resize(800.0, 400.0);
}

#[test]
fn repeated_mount_unmount_does_not_leak() {
    let container = VirtualContainer::new(400.0, 200.0);
    for _ in 0..50 {
        let host = ChartHost::mount(&container, series(), ViewConfig::default());
        container.resize(420.0, 210.0);
        host.unmount();
    }
    assert_eq!(container.observer_count(), 0);
}

#[test]
fn pointer_events_forward_to_engine() {
    let container = VirtualContainer::new(400.0, 200.0);
    let host = ChartHost::mount(&container, series(), ViewConfig::default());
    let focus = host.pointer_move(52.0, 100.0).expect("focused");
    assert_eq!(focus.index, 0);
    assert_eq!(focus.tooltip.value_label, "$1,040");

    container.resize(400.0, 201.0);
    host.with_engine(|e| assert!(e.focus().is_none()));

    host.pointer_move(384.0, 100.0);
    host.pointer_leave();
    host.with_engine(|e| assert!(e.focus().is_none()));
}

#[test]
fn subscription_releases_once() {
    let count = Rc::new(Cell::new(0));
    let c = Rc::clone(&count);
    let sub = Subscription::new(move || c.set(c.get() + 1));
    sub.release();
    assert_eq!(count.get(), 1);

    let c = Rc::clone(&count);
    drop(Subscription::new(move || c.set(c.get() + 1)));
    assert_eq!(count.get(), 2);
}

#[test]
fn virtual_container_reports_size() {
    let container = VirtualContainer::new(-5.0, f64::NAN);
    assert_eq!(container.content_size(), Viewport::new(0.0, 0.0));
    container.resize(10.0, 20.0);
    assert_eq!(container.content_size(), Viewport { width: 10.0, height: 20.0 });
}

#[test]
fn named_containers_scope_gradient_ids() {
    let left = VirtualContainer::with_id("spend-trend", 400.0, 200.0);
    let right = VirtualContainer::with_id("budget-trend", 400.0, 200.0);
    let a = ChartHost::mount(&left, series(), ViewConfig::default());
    let b = ChartHost::mount(&right, series(), ViewConfig::default());

    let a_id = a.with_engine(|e| e.scene().gradients()[0].id.clone());
    let b_id = b.with_engine(|e| e.scene().gradients()[0].id.clone());
    assert_eq!(a_id, "spend-trend-area-grad-0");
    assert_eq!(b_id, "budget-trend-area-grad-0");

    let anonymous = VirtualContainer::new(400.0, 200.0);
    let c = ChartHost::mount(&anonymous, series(), ViewConfig::default());
    c.with_engine(|e| assert_eq!(e.id_prefix(), "chart"));
}

#[test]
fn resize_while_borrowed_applies_after_borrow_ends() {
    let container = VirtualContainer::new(400.0, 200.0);
    let host = ChartHost::mount(&container, series(), ViewConfig::default());

    host.with_engine(|e| {
        container.resize(600.0, 300.0);
        // still the old layout while the engine is held
        assert_eq!(e.scene().viewport(), Viewport::new(400.0, 200.0));
    });
    host.with_engine(|e| {
        assert_eq!(e.scene().viewport(), Viewport::new(600.0, 300.0));
        assert_eq!(e.plot_area().map(|p| p.width()), Some(600.0 - 52.0 - 16.0));
    });
    assert_eq!(host.viewport(), Viewport::new(600.0, 300.0));

    // latest parked size wins
    host.with_engine(|_| {
        container.resize(500.0, 250.0);
        container.resize(320.0, 160.0);
    });
    assert_eq!(host.viewport(), Viewport::new(320.0, 160.0));
    host.with_engine(|e| assert_eq!(e.scene().viewport(), Viewport::new(320.0, 160.0)));
}

#[test]
fn nested_borrows_defer_resize_to_outermost() {
    let container = VirtualContainer::new(400.0, 200.0);
    let host = ChartHost::mount(&container, series(), ViewConfig::default());
    let nested = host.with_engine(|_| {
        // an inner borrow cannot flush; the outer return does
        host.with_engine(|_| container.resize(640.0, 320.0));
        host.with_engine(|e| e.scene().viewport())
    });
    assert_eq!(nested, Viewport::new(400.0, 200.0));
    host.set_config(ViewConfig::default().with_label("Daily spend"));
    host.with_engine(|e| {
        assert_eq!(e.scene().viewport(), Viewport::new(640.0, 320.0));
        assert_eq!(e.scene().texts(Role::AxisTitle), vec!["Daily spend"]);
    });
}
