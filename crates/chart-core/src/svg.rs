// File: crates/chart-core/src/svg.rs
// Summary: Serializes a Scene to a standalone SVG document.

use std::fmt::Write as _;

use crate::path::num;
use crate::scene::{Fill, Node, Role, Scene, Shape, Stroke, TextAnchor};
use crate::theme::Color;

/// Hidden tooltip group modifier class.
pub const TOOLTIP_HIDDEN_CLASS: &str = "tooltip--hidden";

impl Scene {
    /// Same as [`to_svg`].
    pub fn to_svg(&self, background: Color) -> String { to_svg(self, background) }
}

/// Render `scene` as SVG. Consecutive nodes sharing a role and visibility are
/// grouped under one `<g class="...">`; the tooltip group carries
/// `tooltip--hidden` while it is not shown.
pub fn to_svg(scene: &Scene, background: Color) -> String {
    let vp = scene.viewport();
    let (w, h) = (num(vp.width), num(vp.height));
    let label = scene.texts(Role::AxisTitle).first().copied().unwrap_or("chart").to_string();

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" preserveAspectRatio="none" role="img" aria-label="{}">"#,
        escape(&label)
    );
    if !scene.gradients().is_empty() {
        out.push_str("<defs>\n");
        for g in scene.gradients() {
            let _ = writeln!(out, r#"<linearGradient id="{}" x1="0" y1="0" x2="0" y2="1">"#, escape(&g.id));
            for stop in &g.stops {
                let _ = writeln!(
                    out,
                    r#"<stop offset="{}%" stop-color="{}" stop-opacity="{}"/>"#,
                    num(stop.offset * 100.0),
                    g.color.to_hex(),
                    num(stop.opacity)
                );
            }
            out.push_str("</linearGradient>\n");
        }
        out.push_str("</defs>\n");
    }
    let _ = writeln!(out, r#"<rect width="{w}" height="{h}"{}/>"#, fill_attrs(&Fill::Solid(background)));

    let mut open: Option<(Role, bool)> = None;
    for node in scene.nodes() {
        let key = (node.role, node.visible);
        if open != Some(key) {
            if open.is_some() {
                out.push_str("</g>\n");
            }
            let _ = writeln!(out, r#"<g{}>"#, group_attrs(node));
            open = Some(key);
        }
        write_shape(&mut out, &node.shape);
    }
    if open.is_some() {
        out.push_str("</g>\n");
    }
    out.push_str("</svg>\n");
    out
}

fn group_attrs(node: &Node) -> String {
    match (node.role, node.visible) {
        (Role::Tooltip, true) => r#" class="tooltip""#.to_string(),
        (Role::Tooltip, false) => format!(r#" class="tooltip {TOOLTIP_HIDDEN_CLASS}" visibility="hidden""#),
        (role, true) => format!(r#" class="{}""#, role.class()),
        (role, false) => format!(r#" class="{}" visibility="hidden""#, role.class()),
    }
}

fn write_shape(out: &mut String, shape: &Shape) {
    let _ = match shape {
        Shape::Line { from, to, stroke } => writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            num(from.x), num(from.y), num(to.x), num(to.y), stroke_attrs(Some(stroke))
        ),
        Shape::Text { at, text, size, color, anchor, rotation } => {
            let transform = if *rotation != 0.0 {
                format!(r#" transform="rotate({} {} {})""#, num(*rotation), num(at.x), num(at.y))
            } else {
                String::new()
            };
            writeln!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" text-anchor="{}"{}{}>{}</text>"#,
                num(at.x), num(at.y), num(*size), anchor_name(*anchor),
                fill_attrs(&Fill::Solid(*color)), transform, escape(text)
            )
        }
        Shape::Path { path, fill, stroke } => writeln!(
            out,
            r#"<path d="{}"{}{}/>"#,
            path.to_svg_d(), fill_attrs(fill), stroke_attrs(stroke.as_ref())
        ),
        Shape::Rect { rect, fill, stroke, radius } => {
            let rx = if *radius > 0.0 { format!(r#" rx="{}""#, num(*radius)) } else { String::new() };
            writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}"{}{}{}/>"#,
                num(rect.left), num(rect.top), num(rect.width()), num(rect.height()),
                rx, fill_attrs(fill), stroke_attrs(stroke.as_ref())
            )
        }
        Shape::Circle { center, radius, fill, stroke } => writeln!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}"{}{}/>"#,
            num(center.x), num(center.y), num(*radius), fill_attrs(fill), stroke_attrs(stroke.as_ref())
        ),
    };
}

fn anchor_name(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn fill_attrs(fill: &Fill) -> String {
    match fill {
        Fill::None => r#" fill="none""#.to_string(),
        Fill::Solid(c) if c.a == 255 => format!(r#" fill="{}""#, c.to_hex()),
        Fill::Solid(c) => format!(r#" fill="{}" fill-opacity="{}""#, c.to_hex(), num(c.opacity())),
        Fill::Gradient(id) => format!(r#" fill="url(#{})""#, escape(id)),
    }
}

fn stroke_attrs(stroke: Option<&Stroke>) -> String {
    match stroke {
        None => String::new(),
        Some(s) if s.color.a == 255 => format!(r#" stroke="{}" stroke-width="{}""#, s.color.to_hex(), num(s.width)),
        Some(s) => format!(
            r#" stroke="{}" stroke-opacity="{}" stroke-width="{}""#,
            s.color.to_hex(), num(s.color.opacity()), num(s.width)
        ),
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

