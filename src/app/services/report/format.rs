//! Locale formatting for report values
//!
//! Money follows Argentine conventions: `.` groups thousands, `,` separates
//! decimals, and trailing zero decimals are dropped.

use crate::Currency;

/// Format an amount as money in the document currency
///
/// Rounds to two decimals and prints between zero and two fraction digits,
/// e.g. `$ 1.234,5` for ARS and `US$ 1.234,5` for USD.
pub fn format_currency(amount: f64, currency: Currency) -> String {
    if !amount.is_finite() {
        return "--".to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    let mut formatted = format!("{sign}{} {}", currency.symbol(), group_thousands(integer));
    if !fraction.is_empty() {
        formatted.push(',');
        formatted.push_str(fraction);
    }
    formatted
}

/// Format a percentage with one decimal, or `--` when there is nothing to show
pub fn format_percentage(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "--".to_string();
    }
    format!("{value:.1}%")
}

/// Format a unit count without a trailing `.0`
pub fn format_quantity(value: f64) -> String {
    format!("{value}")
}

/// Shorten a product name for ranking labels
///
/// Names longer than `width` characters keep their first `width` characters
/// followed by `...`.
pub fn truncate_name(name: &str, width: usize) -> String {
    if name.chars().count() > width {
        let prefix: String = name.chars().take(width).collect();
        format!("{prefix}...")
    } else {
        name.to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}
