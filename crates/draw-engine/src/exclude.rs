//! Free-form exclusion list parsing
//!
//! Turns text such as `"7, 13; 42"` into a set of integers. Tokens are
//! separated by any run of whitespace, commas or semicolons. Tokens that do
//! not read as an integer are dropped silently.

use std::collections::BTreeSet;

/// Parse an exclusion list
pub fn parse_exclusions(text: &str) -> BTreeSet<i64> {
    text.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|token| !token.is_empty())
        .filter_map(parse_integer)
        .collect()
}

/// Read one token as an integer.
///
/// Accepts plain decimals with an optional sign, `0x`/`0o`/`0b` literals,
/// and float notation whose value is integral (`"7.0"`, `"1e2"`).
fn parse_integer(token: &str) -> Option<i64> {
    if let Ok(v) = token.parse::<i64>() {
        return Some(v);
    }
    if let Some(v) = parse_radix(token) {
        return Some(v);
    }

    // `f64::from_str` also takes "inf"/"nan" spellings; is_finite drops them
    let v = token.parse::<f64>().ok()?;
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

fn parse_radix(token: &str) -> Option<i64> {
    let lower = token.to_ascii_lowercase();
    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else {
        return None;
    };
    // from_str_radix would accept a second sign here
    if digits.starts_with(['+', '-']) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}
