// File: crates/chart-core/src/view.rs
// Summary: Viewport (drawing surface size) and the plot rectangle derived from it.

use crate::geometry::Rect;
use crate::types::Margins;

/// Current pixel size of the drawing surface.
///
/// Recomputed by the host whenever the container reports a new content box;
/// never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Non-finite or negative sizes collapse to zero.
    pub fn new(width: f64, height: f64) -> Self {
        let nn = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self { width: nn(width), height: nn(height) }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Plotted area in surface coordinates after applying `margins`.
    pub fn plot_rect(&self, margins: &Margins) -> Rect {
        Rect::from_ltrb(
            margins.left,
            margins.top,
            self.width - margins.right,
            self.height - margins.bottom,
        )
    }
}
