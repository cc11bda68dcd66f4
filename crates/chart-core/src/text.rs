// File: crates/chart-core/src/text.rs
// Summary: Text measurement heuristic used for tooltip layout (no font shaping in the core).

/// Average glyph advance as a fraction of the font size.
const AVG_ADVANCE: f32 = 0.60;

/// Heuristic: estimate pixel width of `text` rendered at `font_px`.
pub fn estimate_text_width_px(text: &str, font_px: f64) -> f64 {
    ((text.chars().count() as f32) * (font_px as f32) * AVG_ADVANCE).ceil() as f64
}

/// Width of the widest line in `lines`.
pub fn widest_px<'a>(lines: impl IntoIterator<Item = (&'a str, f64)>) -> f64 {
    lines
        .into_iter()
        .map(|(text, px)| estimate_text_width_px(text, px))
        .fold(0.0, f64::max)
}
