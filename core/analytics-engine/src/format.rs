//! FILENAME: core/analytics-engine/src/format.rs
//! PURPOSE: Number formatting helpers shared by the chart and card views.
//! CONTEXT: The views render en-US style figures: rounded integers with
//!          thousands separators for card values, compact "1.2M" notation
//!          for axis ticks, and one-decimal percentage shares in tooltips.

/// Formats a value as a rounded integer with thousands separators,
/// e.g. `1234567.8` -> `"1,234,568"`.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    if negative && rounded != 0.0 {
        format!("-{}", result)
    } else {
        result
    }
}

/// Formats a value in compact notation for axis ticks,
/// e.g. `1_300_000.0` -> `"1.3M"`, `42_000.0` -> `"42K"`.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e9 {
        (value / 1e9, "B")
    } else if abs >= 1e6 {
        (value / 1e6, "M")
    } else if abs >= 1e3 {
        (value / 1e3, "K")
    } else {
        return trim_decimal(format!("{:.1}", value));
    };

    format!("{}{}", trim_decimal(format!("{:.1}", scaled)), suffix)
}

/// Percentage share of `value` within `total`, rounded to one decimal.
/// Defined as 0 when the total is 0.
pub fn percentage_share(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        (value / total * 1000.0).round() / 10.0
    } else {
        0.0
    }
}

/// Drops a trailing ".0" left by one-decimal formatting.
fn trim_decimal(s: String) -> String {
    match s.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}
