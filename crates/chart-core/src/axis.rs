// File: crates/chart-core/src/axis.rs
// Summary: Axis model (ticks, labels, tick geometry) for the bottom time axis and left value axis.

use crate::format;
use crate::geometry::Point;
use crate::path::Path;
use crate::scale::{ScaleTransform, TimeScale, ValueScale};
use crate::scene::{Fill, Node, Role, Scene, Shape, Stroke, TextAnchor};
use crate::theme::Theme;

/// Font size for tick labels and the axis title, in pixels.
pub const AXIS_FONT_PX: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Pixel offset along the axis, relative to the plot origin.
    pub offset: f64,
    pub label: String,
}

impl Tick {
    pub fn new(offset: f64, label: impl Into<String>) -> Self {
        Self { offset, label: label.into() }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: Orient,
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
}

impl Axis {
    pub fn new(orient: Orient, range: (f64, f64)) -> Self {
        Self { orient, range, ticks: Vec::new(), tick_size_inner: 6.0, tick_size_outer: 6.0, tick_padding: 3.0 }
    }

    /// Time axis with `%b %d` labels.
    pub fn time(scale: &TimeScale, count: usize) -> Self {
        let mut axis = Self::new(Orient::Bottom, scale.range());
        axis.ticks = scale
            .ticks(count)
            .into_iter()
            .map(|t| Tick::new(scale.to_px_time(t), format::axis_date(t)))
            .collect();
        axis
    }

    /// Value axis with `$` + SI labels.
    pub fn value(scale: &ValueScale, count: usize) -> Self {
        let mut axis = Self::new(Orient::Left, scale.range());
        axis.ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| Tick::new(scale.to_px(v), format::axis_value(v)))
            .collect();
        axis
    }

    fn role(&self) -> Role {
        match self.orient {
            Orient::Bottom => Role::AxisX,
            Orient::Left => Role::AxisY,
        }
    }

    /// Domain line, tick marks and labels, positioned from `origin`
    /// (the plot's bottom-left corner for `Bottom`, top-left for `Left`).
    pub fn draw(&self, origin: Point, theme: &Theme, scene: &mut Scene) {
        let role = self.role();
        let stroke = Stroke::new(theme.axis_line, 1.0);
        let (r0, r1) = self.range;
        let outer = self.tick_size_outer;
        let inner = self.tick_size_inner;
        let spacing = inner.max(0.0) + self.tick_padding;

        let mut domain = Path::new();
        match self.orient {
            Orient::Bottom => {
                domain.move_to(origin.offset(r0, outer));
                domain.line_to(origin.offset(r0, 0.0));
                domain.line_to(origin.offset(r1, 0.0));
                domain.line_to(origin.offset(r1, outer));
            }
            Orient::Left => {
                domain.move_to(origin.offset(-outer, r0));
                domain.line_to(origin.offset(0.0, r0));
                domain.line_to(origin.offset(0.0, r1));
                domain.line_to(origin.offset(-outer, r1));
            }
        }
        scene.push(Node::new(role, Shape::Path { path: domain, fill: Fill::None, stroke: Some(stroke) }));

        for tick in &self.ticks {
            let (from, to, at, anchor) = match self.orient {
                Orient::Bottom => {
                    let base = origin.offset(tick.offset, 0.0);
                    (base, base.offset(0.0, inner), base.offset(0.0, spacing + 0.71 * AXIS_FONT_PX), TextAnchor::Middle)
                }
                Orient::Left => {
                    let base = origin.offset(0.0, tick.offset);
                    (base, base.offset(-inner, 0.0), base.offset(-spacing, 0.32 * AXIS_FONT_PX), TextAnchor::End)
                }
            };
            scene.push(Node::new(role, Shape::Line { from, to, stroke }));
            scene.push(Node::new(
                role,
                Shape::Text {
                    at,
                    text: tick.label.clone(),
                    size: AXIS_FONT_PX,
                    color: theme.axis_text,
                    anchor,
                    rotation: 0.0,
                },
            ));
        }
    }
}
