// File: crates/chart-core/src/focus.rs
// Summary: Hover state: nearest-point lookup, focus marker position and tooltip layout.

use crate::geometry::{Point, Rect};
use crate::series::Series;
use crate::text::widest_px;

/// Tooltip metrics. The box is measured from its text, never from a live layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipStyle {
    pub label_px: f64,
    pub value_px: f64,
    pub padding: f64,
    pub line_gap: f64,
    /// Horizontal gap between the focused point and the tooltip edge.
    pub offset: f64,
    /// How far above the focused point the tooltip's top edge sits.
    pub lift: f64,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self { label_px: 11.0, value_px: 14.0, padding: 8.0, line_gap: 4.0, offset: 12.0, lift: 20.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Tooltip to the right of the point (default).
    Right,
    /// Flipped to the left because the right placement would overflow the container.
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub date_label: String,
    pub value_label: String,
    /// Box in surface coordinates.
    pub bounds: Rect,
    pub placement: Placement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Focus {
    pub index: usize,
    /// Marker center in surface coordinates.
    pub marker: Point,
    pub tooltip: Tooltip,
}

/// Currently hovered point, if any. Cleared on pointer leave and on every render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FocusState {
    current: Option<Focus>,
}

impl FocusState {
    pub fn get(&self) -> Option<&Focus> { self.current.as_ref() }
    pub fn set(&mut self, focus: Focus) { self.current = Some(focus); }
    pub fn clear(&mut self) { self.current = None; }
}

/// Index of the point whose timestamp is nearest to `target_ms`.
///
/// Lower-bound search over the first `len - 1` points, then a step back when the
/// previous point is at least as close, so an exact tie resolves to the earlier index.
pub fn nearest_index(series: &Series, target_ms: f64) -> Option<usize> {
    let points = series.points();
    if points.is_empty() || target_ms.is_nan() {
        return None;
    }
    let (mut lo, mut hi) = (0usize, points.len() - 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if points[mid].millis() < target_ms { lo = mid + 1 } else { hi = mid }
    }
    let i = lo;
    if i > 0 && target_ms - points[i - 1].millis() <= points[i].millis() - target_ms {
        Some(i - 1)
    } else {
        Some(i)
    }
}

/// Lay out the tooltip next to `anchor` (surface coordinates), flipping left when the
/// right-hand placement would cross `container_width`.
pub fn place_tooltip(
    anchor: Point,
    date_label: String,
    value_label: String,
    container_width: f64,
    style: &TooltipStyle,
) -> Tooltip {
    let text_w = widest_px([(date_label.as_str(), style.label_px), (value_label.as_str(), style.value_px)]);
    let width = text_w + 2.0 * style.padding;
    let height = style.label_px + style.line_gap + style.value_px + 2.0 * style.padding;
    let (left, placement) = if anchor.x + width + style.offset > container_width {
        (anchor.x - width - style.offset, Placement::Left)
    } else {
        (anchor.x + style.offset, Placement::Right)
    };
    Tooltip {
        date_label,
        value_label,
        bounds: Rect::from_ltwh(left, anchor.y - style.lift, width, height),
        placement,
    }
}
