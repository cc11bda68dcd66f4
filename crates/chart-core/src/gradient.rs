// File: crates/chart-core/src/gradient.rs
// Summary: Engine-local registry handing out stable gradient ids per color.

use std::collections::HashMap;

use crate::scene::{GradientStop, LinearGradient};
use crate::theme::Color;

/// Opacity at the top of the area fill.
pub const AREA_TOP_OPACITY: f64 = 0.35;
/// Opacity at the baseline of the area fill.
pub const AREA_BOTTOM_OPACITY: f64 = 0.02;

/// Prefix used when the owner does not name itself.
pub const DEFAULT_ID_PREFIX: &str = "chart";

/// Maps a color to an id (`{prefix}-area-grad-0`, `{prefix}-area-grad-1`, ...) that stays
/// the same for the lifetime of the owning engine. Engines with distinct prefixes never
/// share an id, so their SVG documents can be inlined into one page.
#[derive(Debug)]
pub struct GradientRegistry {
    prefix: String,
    ids: HashMap<Color, String>,
}

impl Default for GradientRegistry {
    fn default() -> Self { Self::with_prefix(DEFAULT_ID_PREFIX) }
}

impl GradientRegistry {
    pub fn new() -> Self { Self::default() }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), ids: HashMap::new() }
    }

    pub fn prefix(&self) -> &str { &self.prefix }

    pub fn id_for(&mut self, color: Color) -> String {
        let next = self.ids.len();
        let prefix = &self.prefix;
        self.ids.entry(color).or_insert_with(|| format!("{prefix}-area-grad-{next}")).clone()
    }

    /// Vertical area gradient for `color`, fading from the top to the baseline.
    pub fn area_gradient(&mut self, color: Color) -> LinearGradient {
        LinearGradient {
            id: self.id_for(color),
            color,
            stops: vec![
                GradientStop { offset: 0.0, opacity: AREA_TOP_OPACITY },
                GradientStop { offset: 1.0, opacity: AREA_BOTTOM_OPACITY },
            ],
        }
    }
}
