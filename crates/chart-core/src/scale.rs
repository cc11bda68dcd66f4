// File: crates/chart-core/src/scale.rs
// Summary: Time (X) and Value (Y) scale transforms between data and plot pixels.

use chrono::{DateTime, TimeZone, Utc};

use crate::series::Series;
use crate::ticks::{linear_ticks, nice_domain, time_ticks};

/// Fraction of the value extent added above and below the data.
pub const VALUE_PADDING_RATIO: f64 = 0.15;
/// Padding used when every value is equal (zero extent).
pub const DEGENERATE_PADDING: f64 = 10.0;
/// Tick target used when rounding the value domain outward.
pub const NICE_TICK_COUNT: usize = 10;

/// General scale transform operations between a numeric domain and pixels.
pub trait ScaleTransform {
    fn to_px(&self, v: f64) -> f64;
    fn invert(&self, px: f64) -> f64;
    fn range(&self) -> (f64, f64);
}

#[inline]
fn interpolate(v: f64, (d0, d1): (f64, f64), (r0, r1): (f64, f64)) -> f64 {
    let span = d1 - d0;
    // A collapsed domain maps everything to the middle of the range.
    let t = if span == 0.0 { 0.5 } else { (v - d0) / span };
    r0 + t * (r1 - r0)
}

/// Horizontal time scale over the full timestamp extent of a series.
/// Domain is held in epoch milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, range_start: f64, range_end: f64) -> Self {
        Self {
            domain: (start.timestamp_millis() as f64, end.timestamp_millis() as f64),
            range: (range_start, range_end),
        }
    }

    /// Scale covering `series`' time extent mapped to `[0, width]`.
    pub fn for_series(series: &Series, width: f64) -> Option<Self> {
        let (start, end) = series.time_extent()?;
        Some(Self::new(start, end, 0.0, width))
    }

    #[inline]
    pub fn to_px_time(&self, t: DateTime<Utc>) -> f64 {
        self.to_px(t.timestamp_millis() as f64)
    }

    /// Pixel back to an instant, rounded to the nearest millisecond.
    pub fn invert_time(&self, px: f64) -> Option<DateTime<Utc>> {
        let ms = self.invert(px);
        if !ms.is_finite() {
            return None;
        }
        Utc.timestamp_millis_opt(ms.round() as i64).single()
    }

    pub fn ticks(&self, count: usize) -> Vec<DateTime<Utc>> {
        let (d0, d1) = self.domain;
        match (
            Utc.timestamp_millis_opt(d0 as i64).single(),
            Utc.timestamp_millis_opt(d1 as i64).single(),
        ) {
            (Some(a), Some(b)) => time_ticks(a, b, count),
            _ => Vec::new(),
        }
    }
}

impl ScaleTransform for TimeScale {
    #[inline]
    fn to_px(&self, ms: f64) -> f64 { interpolate(ms, self.domain, self.range) }
    #[inline]
    fn invert(&self, px: f64) -> f64 { interpolate(px, self.range, self.domain) }
    fn range(&self) -> (f64, f64) { self.range }
}

/// Padding added to each side of `[min, max]` before nicing.
pub fn value_padding(min: f64, max: f64) -> f64 {
    let pad = (max - min) * VALUE_PADDING_RATIO;
    if pad == 0.0 || pad.is_nan() { DEGENERATE_PADDING } else { pad }
}

/// Vertical value scale mapping a data range to `[bottom, top]` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ValueScale {
    pub fn new_linear(vmin: f64, vmax: f64, range_start: f64, range_end: f64) -> Self {
        Self { domain: (vmin, vmax), range: (range_start, range_end) }
    }

    /// `[min - pad, max + pad]` rounded outward to nice tick boundaries.
    pub fn padded(min: f64, max: f64, range_start: f64, range_end: f64) -> Self {
        let pad = value_padding(min, max);
        Self::new_linear(min - pad, max + pad, range_start, range_end).nice(NICE_TICK_COUNT)
    }

    pub fn nice(self, count: usize) -> Self {
        let (d0, d1) = nice_domain(self.domain.0, self.domain.1, count);
        Self { domain: (d0, d1), ..self }
    }

    pub fn domain(&self) -> (f64, f64) { self.domain }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain.0, self.domain.1, count)
    }
}

impl ScaleTransform for ValueScale {
    #[inline]
    fn to_px(&self, v: f64) -> f64 { interpolate(v, self.domain, self.range) }
    #[inline]
    fn invert(&self, px: f64) -> f64 { interpolate(px, self.range, self.domain) }
    fn range(&self) -> (f64, f64) { self.range }
}
