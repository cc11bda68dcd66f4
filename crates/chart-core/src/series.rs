// File: crates/chart-core/src/series.rs
// Summary: Time-indexed series model (timestamp, value) with extent helpers.
// Notes:
// - Ordering is the caller's responsibility; the engine never sorts. `try_push`
//   exists for loaders that want to reject out-of-order input early.

use chrono::{DateTime, Utc};

use crate::error::{ChartError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl DataPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Timestamp as epoch milliseconds, the unit every scale works in.
    #[inline]
    pub fn millis(&self) -> f64 {
        self.timestamp.timestamp_millis() as f64
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_points(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    /// Push enforcing ascending timestamps (equal timestamps are allowed).
    pub fn try_push(&mut self, point: DataPoint) -> Result<()> {
        if let Some(last) = self.points.last() {
            if point.timestamp < last.timestamp {
                return Err(ChartError::OutOfOrder { prev: last.timestamp, next: point.timestamp });
            }
        }
        self.points.push(point);
        Ok(())
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn points(&self) -> &[DataPoint] { &self.points }
    pub fn get(&self, index: usize) -> Option<&DataPoint> { self.points.get(index) }
    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> { self.points.iter() }

    /// Last `n` points (the whole series when shorter), used by range presets.
    pub fn tail(&self, n: usize) -> Series {
        let start = self.points.len().saturating_sub(n);
        Series { points: self.points[start..].to_vec() }
    }

    /// (earliest, latest) timestamp, scanning every point.
    pub fn time_extent(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.points.first()?.timestamp;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (lo.min(p.timestamp), hi.max(p.timestamp))
        }))
    }

    /// (min, max) value; NaN values are skipped.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for p in &self.points {
            if p.value.is_nan() { continue; }
            lo = lo.min(p.value);
            hi = hi.max(p.value);
        }
        if lo <= hi { Some((lo, hi)) } else { None }
    }
}

impl From<Vec<DataPoint>> for Series {
    fn from(points: Vec<DataPoint>) -> Self { Self::from_points(points) }
}

impl FromIterator<DataPoint> for Series {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;
    fn into_iter(self) -> Self::IntoIter { self.points.iter() }
}
