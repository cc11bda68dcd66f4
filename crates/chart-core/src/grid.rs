// File: crates/chart-core/src/grid.rs
// Summary: Horizontal grid lines at value ticks.

use crate::geometry::{Point, Rect};
use crate::scale::{ScaleTransform, ValueScale};
use crate::scene::{Node, Role, Scene, Shape, Stroke};
use crate::theme::Theme;

/// One full-width line per value tick across `plot`.
pub fn draw_horizontal(scale: &ValueScale, count: usize, plot: Rect, theme: &Theme, scene: &mut Scene) {
    let stroke = Stroke::new(theme.grid, 1.0);
    for v in scale.ticks(count) {
        let y = plot.top + scale.to_px(v);
        scene.push(Node::new(
            Role::Grid,
            Shape::Line {
                from: Point::new(plot.left, y),
                to: Point::new(plot.right, y),
                stroke,
            },
        ));
    }
}
