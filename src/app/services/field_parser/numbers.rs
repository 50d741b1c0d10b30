//! Amount and quantity parsing
//!
//! Amounts keep only digits, `.`, `,` and `-`, treat every comma as a decimal
//! point, and read the longest leading number. There is no thousands
//! separator support: `"1.234,56"` becomes `"1.234.56"` and reads as `1.234`.
//!
//! Quantities always resolve to a usable number, defaulting to one.

use crate::constants::DEFAULT_QUANTITY;
use regex::Regex;
use std::sync::LazyLock;

/// Leading decimal literal: optional minus, then digits with an optional fraction
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)").unwrap()
});

/// Integer written as a lower bound, e.g. `12+`
static PLUS_QUANTITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)\+").unwrap());

/// First number in free text, with an optional `.` or `,` fraction
static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:[.,][0-9]+)?").unwrap());

/// True when a cell is empty or whitespace only
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Parse a money amount from a cell
///
/// Returns `None` for blank cells and for cells with no readable number.
/// Negative values are returned unchanged.
pub fn parse_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    LEADING_NUMBER
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Parse a unit quantity from a cell
///
/// Blank cells and cells without a number yield [`DEFAULT_QUANTITY`]. A cell
/// containing `+` only accepts the `N+` form; anything else falls back to the
/// default. The result is never negative.
pub fn parse_quantity(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return DEFAULT_QUANTITY;
    }

    if trimmed.contains('+') {
        return PLUS_QUANTITY
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .and_then(|digits| digits.as_str().parse::<f64>().ok())
            .unwrap_or(DEFAULT_QUANTITY);
    }

    FIRST_NUMBER
        .find(trimmed)
        .and_then(|m| m.as_str().replacen(',', ".", 1).parse::<f64>().ok())
        .unwrap_or(DEFAULT_QUANTITY)
}
