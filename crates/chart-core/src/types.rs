// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (margins, tick targets).

/// Target number of time ticks on the x axis.
pub const X_TICK_COUNT: usize = 6;
/// Target number of value ticks on the y axis and the horizontal grid.
pub const Y_TICK_COUNT: usize = 5;

/// Screen margins around the plotted area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    /// Create new margins; negative or NaN insets collapse to zero.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        let nn = |v: f64| if v > 0.0 { v } else { 0.0 };
        Self { top: nn(top), right: nn(right), bottom: nn(bottom), left: nn(left) }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(16.0, 16.0, 36.0, 52.0)
    }
}
