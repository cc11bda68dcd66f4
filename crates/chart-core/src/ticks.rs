// File: crates/chart-core/src/ticks.rs
// Summary: "Nice" tick generation for linear and time domains.
// Notes:
// - Linear ticks pick steps of 1, 2, 5 or 10 times a power of ten, splitting at
//   sqrt(50), sqrt(10) and sqrt(2) of the raw step's mantissa.
// - Time ticks choose a calendar interval (seconds .. years) closest to
//   span / count, in UTC.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Integer tick bounds and increment for `[start, stop]`.
/// A negative increment means "divide by -inc" (sub-unit steps), which keeps
/// ticks like 0.1 exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start { i1 += 1.0; }
        if i2 / inv > stop { i2 -= 1.0; }
        inc = -inv;
    } else {
        let fwd = 10f64.powf(power) * factor;
        i1 = (start / fwd).round();
        i2 = (stop / fwd).round();
        if i1 * fwd < start { i1 += 1.0; }
        if i2 * fwd > stop { i2 -= 1.0; }
        inc = fwd;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Nicely-rounded ticks covering `[start, stop]`, roughly `count` of them.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    let mut out: Vec<f64> = (0..n)
        .map(|k| {
            let i = i1 + k as f64;
            if inc < 0.0 { i / -inc } else { i * inc }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Signed tick increment; negative values are inverse steps (see [`tick_spec`]).
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).2
}

/// Plain step size between ticks (never inverted).
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let reverse = stop < start;
    let inc = if reverse { tick_increment(stop, start, count) } else { tick_increment(start, stop, count) };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// Extend `[start, stop]` outward so both ends land on tick boundaries.
pub fn nice_domain(start: f64, stop: f64, count: usize) -> (f64, f64) {
    let reverse = stop < start;
    let (mut lo, mut hi) = if reverse { (stop, start) } else { (start, stop) };
    let mut prestep = f64::NAN;
    for _ in 0..10 {
        let step = tick_increment(lo, hi, count);
        if step == prestep {
            break;
        } else if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else if step < 0.0 {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        } else {
            break;
        }
        prestep = step;
    }
    if reverse { (hi, lo) } else { (lo, hi) }
}

// ---- time ------------------------------------------------------------------

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// A calendar interval: `step` units of `unit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeInterval {
    pub unit: TimeUnit,
    pub step: i64,
}

const TICK_INTERVALS: [(TimeUnit, i64, i64); 18] = [
    (TimeUnit::Second, 1, SECOND),
    (TimeUnit::Second, 5, 5 * SECOND),
    (TimeUnit::Second, 15, 15 * SECOND),
    (TimeUnit::Second, 30, 30 * SECOND),
    (TimeUnit::Minute, 1, MINUTE),
    (TimeUnit::Minute, 5, 5 * MINUTE),
    (TimeUnit::Minute, 15, 15 * MINUTE),
    (TimeUnit::Minute, 30, 30 * MINUTE),
    (TimeUnit::Hour, 1, HOUR),
    (TimeUnit::Hour, 3, 3 * HOUR),
    (TimeUnit::Hour, 6, 6 * HOUR),
    (TimeUnit::Hour, 12, 12 * HOUR),
    (TimeUnit::Day, 1, DAY),
    (TimeUnit::Day, 2, 2 * DAY),
    (TimeUnit::Week, 1, WEEK),
    (TimeUnit::Month, 1, MONTH),
    (TimeUnit::Month, 3, 3 * MONTH),
    (TimeUnit::Year, 1, YEAR),
];

/// Pick the interval whose duration is closest (by ratio) to `span / count`.
pub fn time_interval(start_ms: i64, stop_ms: i64, count: usize) -> Option<TimeInterval> {
    let count = count.max(1);
    let target = (stop_ms - start_ms).abs() as f64 / count as f64;
    let i = TICK_INTERVALS.partition_point(|&(_, _, d)| (d as f64) <= target);
    if i == TICK_INTERVALS.len() {
        let step = tick_step(start_ms as f64 / YEAR as f64, stop_ms as f64 / YEAR as f64, count).floor();
        return (step >= 1.0).then_some(TimeInterval { unit: TimeUnit::Year, step: step as i64 });
    }
    if i == 0 {
        let step = tick_step(start_ms as f64, stop_ms as f64, count).max(1.0);
        return Some(TimeInterval { unit: TimeUnit::Millisecond, step: step.floor() as i64 });
    }
    let (prev, next) = (TICK_INTERVALS[i - 1], TICK_INTERVALS[i]);
    let (unit, step, _) = if target / (prev.2 as f64) < (next.2 as f64) / target { prev } else { next };
    Some(TimeInterval { unit, step })
}

/// Tick instants within `[start, stop]` (inclusive) for roughly `count` ticks.
pub fn time_ticks(start: DateTime<Utc>, stop: DateTime<Utc>, count: usize) -> Vec<DateTime<Utc>> {
    if count == 0 {
        return Vec::new();
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let (lo_ms, hi_ms) = (lo.timestamp_millis(), hi.timestamp_millis());
    let Some(interval) = time_interval(lo_ms, hi_ms, count) else { return Vec::new() };
    let ticks = interval_range(interval, lo_ms, hi_ms);
    if stop < start { ticks.into_iter().rev().collect() } else { ticks }
}

fn ceil_multiple(ms: i64, m: i64) -> i64 {
    let floor = ms.div_euclid(m) * m;
    if floor < ms { floor + m } else { floor }
}

fn from_millis(ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms).single()
}

fn month_start(year: i32, month0: u32) -> Option<DateTime<Utc>> {
    let date = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

fn interval_range(interval: TimeInterval, lo_ms: i64, hi_ms: i64) -> Vec<DateTime<Utc>> {
    let step = interval.step.max(1);
    let fixed = |unit_ms: i64| -> Vec<DateTime<Utc>> {
        let every = unit_ms * step;
        let mut out = Vec::new();
        let mut t = ceil_multiple(lo_ms, every);
        while t <= hi_ms {
            out.extend(from_millis(t));
            t += every;
        }
        out
    };
    match interval.unit {
        TimeUnit::Millisecond => fixed(1),
        TimeUnit::Second => fixed(SECOND),
        TimeUnit::Minute => fixed(MINUTE),
        TimeUnit::Hour => fixed(HOUR),
        TimeUnit::Day => {
            // every(k) keeps days whose day-of-month - 1 is a multiple of k
            let mut out = Vec::new();
            let mut t = ceil_multiple(lo_ms, DAY);
            while t <= hi_ms {
                if let Some(d) = from_millis(t) {
                    if (d.day0() as i64) % step == 0 {
                        out.push(d);
                    }
                }
                t += DAY;
            }
            out
        }
        TimeUnit::Week => {
            // Weeks start on Sunday; 1970-01-04 was the first Sunday after the epoch.
            let sunday = 3 * DAY;
            let mut out = Vec::new();
            let mut t = ceil_multiple(lo_ms - sunday, WEEK * step) + sunday;
            while t <= hi_ms {
                out.extend(from_millis(t));
                t += WEEK * step;
            }
            out
        }
        TimeUnit::Month => {
            let mut out = Vec::new();
            let Some(first) = from_millis(lo_ms) else { return out };
            let (mut year, mut month0) = (first.year(), first.month0());
            while let Some(t) = month_start(year, month0) {
                if t.timestamp_millis() > hi_ms {
                    break;
                }
                if t.timestamp_millis() >= lo_ms && (month0 as i64) % step == 0 {
                    out.push(t);
                }
                month0 += 1;
                if month0 == 12 {
                    month0 = 0;
                    year += 1;
                }
            }
            out
        }
        TimeUnit::Year => {
            let mut out = Vec::new();
            let Some(first) = from_millis(lo_ms) else { return out };
            let mut year = first.year();
            while let Some(t) = month_start(year, 0) {
                if t.timestamp_millis() > hi_ms {
                    break;
                }
                if t.timestamp_millis() >= lo_ms && (year as i64).rem_euclid(step) == 0 {
                    out.push(t);
                }
                year += 1;
            }
            out
        }
    }
}
