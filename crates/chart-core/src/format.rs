// File: crates/chart-core/src/format.rs
// Summary: Label formatters: grouped currency, SI-prefixed axis values, axis/tooltip dates.

use chrono::{DateTime, Utc};
use num_format::{Locale, ToFormattedString};

/// Minus sign used by SI-formatted labels (U+2212).
const MINUS: char = '\u{2212}';

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "\u{b5}", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Default value formatter: `$` + grouped en-US number with at most 3 fraction digits.
///
/// `200.0` → `$200`, `48291.0` → `$48,291`, `1234.5678` → `$1,234.568`.
pub fn currency(value: f64) -> String {
    format!("${}", grouped(value))
}

/// En-US grouping with up to 3 fraction digits, trailing zeros trimmed.
///
/// Rounds half away from zero on the shortest decimal form of `value`, so
/// `1.0005` gives `1.001` even though the nearest double sits just below it.
pub fn grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "\u{221e}".to_string() } else { "-\u{221e}".to_string() };
    }
    // f64 Display is the shortest round-trip decimal and never uses an exponent.
    let repr = value.abs().to_string();
    let (int_str, frac_str) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let (int_part, frac) = round_fraction(int_str, frac_str, 3);

    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac.is_empty()) {
        out.push('-');
    }
    match int_part.parse::<u128>() {
        Ok(n) => out.push_str(&n.to_formatted_string(&Locale::en)),
        Err(_) => out.push_str(&group_thousands(&int_part, Locale::en.separator())),
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

/// Round the decimal `int.frac` to `places` fraction digits, half away from zero.
/// Returns the integer digits and the fraction with trailing zeros removed.
fn round_fraction(int: &str, frac: &str, places: usize) -> (String, String) {
    let mut digits: Vec<u8> = int
        .bytes()
        .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(places))
        .map(|b| b - b'0')
        .collect();
    if frac.as_bytes().get(places).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }
    let split = digits.len() - places;
    let to_str = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    let int_digits = to_str(&digits[..split]);
    let int_digits = match int_digits.trim_start_matches('0') {
        "" => "0".to_string(),
        trimmed => trimmed.to_string(),
    };
    let frac_digits = to_str(&digits[split..]).trim_end_matches('0').to_string();
    (int_digits, frac_digits)
}

/// Insert `sep` every three digits from the right.
fn group_thousands(digits: &str, sep: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * sep.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(c);
    }
    out
}

/// Y-axis tick label: `$` followed by a 2-significant-digit SI value.
pub fn axis_value(value: f64) -> String {
    format!("${}", si_prefix(value, 2))
}

/// SI-prefixed number with `precision` significant digits (`1500` → `1.5k`, `200` → `200`).
pub fn si_prefix(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let p = precision.clamp(1, 21);
    let (digits, exponent) = decimal_parts(value, p);
    let prefix_exp = (exponent.div_euclid(3)).clamp(-8, 8);
    let i = exponent - prefix_exp * 3 + 1;
    let n = digits.len() as i32;
    let body = if i == n {
        digits.clone()
    } else if i > n {
        format!("{digits}{}", "0".repeat((i - n) as usize))
    } else if i > 0 {
        format!("{}.{}", &digits[..i as usize], &digits[i as usize..])
    } else {
        let (tail, _) = decimal_parts(value, (p as i32 + i - 1).max(1) as usize);
        format!("0.{}{tail}", "0".repeat((-i) as usize))
    };
    let negative = value < 0.0 && digits.bytes().any(|b| b != b'0');
    let mut out = String::with_capacity(body.len() + 4);
    if negative {
        out.push(MINUS);
    }
    out.push_str(&body);
    out.push_str(SI_PREFIXES[(8 + prefix_exp) as usize]);
    out
}

/// Significant digits of `|x|` rounded half-up to `p` digits, plus the decimal exponent
/// of the first digit: `200` with `p = 2` → (`"20"`, 2).
fn decimal_parts(x: f64, p: usize) -> (String, i32) {
    let x = x.abs();
    if x == 0.0 {
        return ("0".repeat(p), 0);
    }
    let p = p as i32;
    let mut exponent = x.log10().floor() as i32;
    let mut mantissa = round_half_up(x / 10f64.powi(exponent - (p - 1)));
    if mantissa >= 10f64.powi(p) {
        exponent += 1;
        mantissa = round_half_up(x / 10f64.powi(exponent - (p - 1)));
    } else if mantissa < 10f64.powi(p - 1) {
        exponent -= 1;
        mantissa = round_half_up(x / 10f64.powi(exponent - (p - 1)));
    }
    (format!("{mantissa:.0}"), exponent)
}

#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// X-axis tick label, e.g. `Jan 05`.
pub fn axis_date(t: DateTime<Utc>) -> String {
    t.format("%b %d").to_string()
}

/// Tooltip date, e.g. `Jan 05, 2024`.
pub fn tooltip_date(t: DateTime<Utc>) -> String {
    t.format("%b %d, %Y").to_string()
}
