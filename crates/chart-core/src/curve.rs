// File: crates/chart-core/src/curve.rs
// Summary: Catmull-Rom smoothing through data points, emitted as cubic Bezier segments.
// Notes:
// - Parameterized by `alpha`: 0 uniform, 0.5 centripetal, 1 chordal. Tangents use
//   the chord lengths raised to `alpha`, so uneven spacing does not overshoot.
// - Two points degrade to a straight segment.

use crate::geometry::Point;
use crate::path::Path;

/// Alpha used by the spend chart's area and line.
pub const CENTRIPETAL_ALPHA: f64 = 0.5;

const EPSILON: f64 = 1e-12;

/// Append a smoothed curve through `points` to `path`, starting with a move.
pub fn catmull_rom(points: &[Point], alpha: f64, path: &mut Path) {
    let mut curve = CatmullRom::new(path, alpha);
    for &p in points {
        curve.point(p);
    }
    curve.finish();
}

struct CatmullRom<'a> {
    path: &'a mut Path,
    alpha: f64,
    seen: u8,
    p0: Point,
    p1: Point,
    p2: Point,
    l01_a: f64,
    l12_a: f64,
    l23_a: f64,
    l01_2a: f64,
    l12_2a: f64,
    l23_2a: f64,
}

impl<'a> CatmullRom<'a> {
    fn new(path: &'a mut Path, alpha: f64) -> Self {
        Self {
            path,
            alpha,
            seen: 0,
            p0: Point::default(),
            p1: Point::default(),
            p2: Point::default(),
            l01_a: 0.0,
            l12_a: 0.0,
            l23_a: 0.0,
            l01_2a: 0.0,
            l12_2a: 0.0,
            l23_2a: 0.0,
        }
    }

    fn point(&mut self, p: Point) {
        if self.seen > 0 {
            let (dx, dy) = (self.p2.x - p.x, self.p2.y - p.y);
            self.l23_2a = (dx * dx + dy * dy).powf(self.alpha);
            self.l23_a = self.l23_2a.sqrt();
        }
        match self.seen {
            0 => {
                self.seen = 1;
                self.path.move_to(p);
            }
            1 => self.seen = 2,
            _ => {
                self.seen = 3;
                self.segment_to(p);
            }
        }
        self.l01_a = self.l12_a;
        self.l12_a = self.l23_a;
        self.l01_2a = self.l12_2a;
        self.l12_2a = self.l23_2a;
        self.p0 = self.p1;
        self.p1 = self.p2;
        self.p2 = p;
    }

    /// Bezier from `p1` to `p2`, with `next` as the point after `p2`.
    fn segment_to(&mut self, next: Point) {
        let mut c1 = self.p1;
        let mut c2 = self.p2;
        if self.l01_a > EPSILON {
            let a = 2.0 * self.l01_2a + 3.0 * self.l01_a * self.l12_a + self.l12_2a;
            let n = 3.0 * self.l01_a * (self.l01_a + self.l12_a);
            c1.x = (c1.x * a - self.p0.x * self.l12_2a + self.p2.x * self.l01_2a) / n;
            c1.y = (c1.y * a - self.p0.y * self.l12_2a + self.p2.y * self.l01_2a) / n;
        }
        if self.l23_a > EPSILON {
            let b = 2.0 * self.l23_2a + 3.0 * self.l23_a * self.l12_a + self.l12_2a;
            let m = 3.0 * self.l23_a * (self.l23_a + self.l12_a);
            c2.x = (c2.x * b + self.p1.x * self.l23_2a - next.x * self.l12_2a) / m;
            c2.y = (c2.y * b + self.p1.y * self.l23_2a - next.y * self.l12_2a) / m;
        }
        self.path.cubic_to(c1, c2, self.p2);
    }

    fn finish(&mut self) {
        match self.seen {
            2 => self.path.line_to(self.p2),
            // Close the last span by repeating the final point as its own successor.
            3 => self.point(self.p2),
            _ => {}
        }
    }
}
