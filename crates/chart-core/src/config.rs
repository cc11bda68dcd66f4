// File: crates/chart-core/src/config.rs
// Summary: Per-render view configuration (color, axis label, value formatter, margins).

use std::fmt;
use std::rc::Rc;

use crate::format;
use crate::theme::{Color, DEFAULT_SERIES_COLOR};
use crate::types::Margins;

/// Maps a value to its tooltip text. Shared so configs stay cheap to clone.
pub type ValueFormatter = Rc<dyn Fn(f64) -> String>;

#[derive(Clone)]
pub struct ViewConfig {
    pub color: Color,
    pub label: String,
    pub format_value: ValueFormatter,
    pub margins: Margins,
}

impl ViewConfig {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_formatter(mut self, f: impl Fn(f64) -> String + 'static) -> Self {
        self.format_value = Rc::new(f);
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn format(&self, value: f64) -> String {
        (self.format_value)(value)
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_SERIES_COLOR,
            label: "Value".to_string(),
            format_value: Rc::new(format::currency),
            margins: Margins::default(),
        }
    }
}

impl fmt::Debug for ViewConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewConfig")
            .field("color", &self.color)
            .field("label", &self.label)
            .field("margins", &self.margins)
            .finish_non_exhaustive()
    }
}
