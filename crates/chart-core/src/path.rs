// File: crates/chart-core/src/path.rs
// Summary: Backend-neutral path commands with SVG `d` serialization.

use std::fmt::Write as _;

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self { Self { commands: Vec::new() } }

    pub fn move_to(&mut self, p: Point) { self.commands.push(PathCommand::MoveTo(p)); }
    pub fn line_to(&mut self, p: Point) { self.commands.push(PathCommand::LineTo(p)); }
    pub fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) {
        self.commands.push(PathCommand::CubicTo { c1, c2, to });
    }
    pub fn close(&mut self) { self.commands.push(PathCommand::Close); }

    pub fn commands(&self) -> &[PathCommand] { &self.commands }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Number of drawn segments (lines and curves), excluding moves and closes.
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_) | PathCommand::CubicTo { .. }))
            .count()
    }

    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for c in &self.commands {
            // Writing to a String cannot fail.
            let _ = match *c {
                PathCommand::MoveTo(p) => write!(d, "M{},{}", num(p.x), num(p.y)),
                PathCommand::LineTo(p) => write!(d, "L{},{}", num(p.x), num(p.y)),
                PathCommand::CubicTo { c1, c2, to } => write!(
                    d,
                    "C{},{},{},{},{},{}",
                    num(c1.x), num(c1.y), num(c2.x), num(c2.y), num(to.x), num(to.y)
                ),
                PathCommand::Close => write!(d, "Z"),
            };
        }
        d
    }
}

/// Compact number for SVG output: 3 decimals max, trailing zeros trimmed, no `-0`.
pub(crate) fn num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{rounded:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
