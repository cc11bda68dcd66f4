// File: crates/demo/src/data.rs
// Summary: Daily spend input: CSV loading and the seeded mock generator.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shadow_chart::{DataPoint, Series};
use std::path::Path;

/// Mock generator defaults for the 30-day cost trend.
pub const MOCK_DAYS: usize = 30;
pub const MOCK_BASE: f64 = 1_420.0;
pub const MOCK_VARIANCE: f64 = 320.0;

/// `days` daily points ending at `end` (inclusive). Older days carry an upward
/// drift of 8 per day; noise is skewed slightly positive. Values are rounded and
/// never negative.
pub fn generate_daily_spend(days: usize, base: f64, variance: f64, end: DateTime<Utc>, seed: u64) -> Series {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..days)
        .rev()
        .map(|i| {
            let noise = (rng.gen::<f64>() - 0.45) * variance;
            let value = (base + noise + i as f64 * 8.0).max(0.0);
            DataPoint::new(end - Duration::days(i as i64), value.round())
        })
        .collect()
}

/// Load a `date,value` CSV (header names are matched case-insensitively).
/// Rows that fail to parse are skipped with a warning; rows out of time order are rejected.
pub fn load_csv(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    debug!("headers: {headers:?}");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["date", "day", "time", "timestamp", "datetime"]).context("no date/timestamp column")?;
    let i_value = idx(&["value", "spend", "cost", "amount"]).context("no value/spend column")?;

    let mut series = Series::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let t = rec.get(i_time).and_then(parse_time);
        let v = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok());
        match (t, v) {
            (Some(t), Some(v)) => series
                .try_push(DataPoint::new(t, v))
                .with_context(|| format!("row {}", row + 1))?,
            _ => warn!("skipping unparsable row {}", row + 1),
        }
    }
    Ok(series)
}

/// Epoch seconds or milliseconds, RFC 3339, or a bare `YYYY-MM-DD` (midnight UTC).
fn parse_time(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms vs sec
        return if n > 10_i64.pow(12) { Utc.timestamp_millis_opt(n).single() } else { Utc.timestamp_opt(n, 0).single() };
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|t| Utc.from_utc_datetime(&t))
}
