// File: crates/demo/src/settings.rs
// Summary: Optional TOML view settings (color, label, margins, theme) layered over defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use shadow_chart::theme::{self, Theme};
use shadow_chart::{Color, Margins, ViewConfig};
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub color: Option<String>,
    pub label: Option<String>,
    pub theme: Option<String>,
    pub margins: Option<MarginSettings>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarginSettings {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn view_config(&self) -> Result<ViewConfig> {
        let mut cfg = ViewConfig::default();
        if let Some(c) = &self.color {
            cfg = cfg.with_color(Color::parse_hex(c)?);
        }
        if let Some(label) = &self.label {
            cfg = cfg.with_label(label.clone());
        }
        if let Some(m) = &self.margins {
            cfg = cfg.with_margins(Margins::new(m.top, m.right, m.bottom, m.left));
        }
        Ok(cfg)
    }

    pub fn theme(&self) -> Theme {
        self.theme.as_deref().map(theme::find).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_overrides_defaults() {
        let s: Settings = toml::from_str(
            r##"
            color = "#f56565"
            theme = "light"
            [margins]
            top = 10.0
            right = 10.0
            bottom = 30.0
            left = 60.0
            "##,
        )
        .unwrap();
        let cfg = s.view_config().unwrap();
        assert_eq!(cfg.color, Color::rgb(0xf5, 0x65, 0x65));
        assert_eq!(cfg.label, "Value");
        assert_eq!(cfg.margins.left, 60.0);
        assert_eq!(s.theme().name, "light");
    }

    #[test]
    fn bad_color_is_an_error() {
        let s: Settings = toml::from_str(r#"color = "teal""#).unwrap();
        assert!(s.view_config().is_err());
    }
}
