// File: crates/chart-core/src/theme.rs
// Summary: Colors and light/dark theming for the chart chrome (grid, axes, tooltip).

use std::fmt;
use std::str::FromStr;

use crate::error::{ChartError, Result};

/// Opaque RGBA color; `a` is 0..=255.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional).
    pub fn parse_hex(s: &str) -> Result<Self> {
        let raw = s.trim();
        let hex = raw.strip_prefix('#').unwrap_or(raw);
        let bad = || ChartError::InvalidColor(s.to_string());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        match hex.len() {
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            3 => {
                let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17).map_err(|_| bad());
                Ok(Self::rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            _ => Err(bad()),
        }
    }

    /// `#rrggbb`, alpha dropped (see [`Color::opacity`]).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f64 { self.a as f64 / 255.0 }

    pub fn with_alpha(self, a: u8) -> Self { Self { a, ..self } }
}

impl FromStr for Color {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self> { Self::parse_hex(s) }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Default series color (ShadowStack primary blue).
pub const DEFAULT_SERIES_COLOR: Color = Color::rgb(0x63, 0xb3, 0xed);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub surface: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_text: Color,
    pub muted_text: Color,
    pub tooltip_background: Color,
    pub tooltip_border: Color,
    pub tooltip_text: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            surface: Color::rgb(0x1a, 0x20, 0x2c),
            grid: Color::rgba(0xff, 0xff, 0xff, 15),
            axis_line: Color::rgb(0x4a, 0x55, 0x68),
            axis_text: Color::rgb(0xa0, 0xae, 0xc0),
            muted_text: Color::rgb(0x71, 0x80, 0x96),
            tooltip_background: Color::rgb(0x2d, 0x37, 0x48),
            tooltip_border: Color::rgb(0x4a, 0x55, 0x68),
            tooltip_text: Color::rgb(0xed, 0xf2, 0xf7),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            surface: Color::rgb(0xff, 0xff, 0xff),
            grid: Color::rgba(0x1a, 0x20, 0x2c, 20),
            axis_line: Color::rgb(0xcb, 0xd5, 0xe0),
            axis_text: Color::rgb(0x4a, 0x55, 0x68),
            muted_text: Color::rgb(0x71, 0x80, 0x96),
            tooltip_background: Color::rgb(0xff, 0xff, 0xff),
            tooltip_border: Color::rgb(0xe2, 0xe8, 0xf0),
            tooltip_text: Color::rgb(0x1a, 0x20, 0x2c),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
