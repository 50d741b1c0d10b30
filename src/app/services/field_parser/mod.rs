//! Lenient field parsing for spreadsheet cells
//!
//! Spreadsheets filled in by hand mix currency symbols, decimal conventions
//! and shorthand such as `"12+"`. The functions here never fail: amounts
//! report an unparseable cell as `None`, quantities fall back to a default.
//!
//! ## Architecture
//!
//! - [`numbers`] - Amount and quantity parsing
//! - [`currency`] - Document-wide currency detection
//!
//! ## Usage
//!
//! ```rust
//! use product_metrics::app::services::field_parser::{detect_currency, parse_amount, parse_quantity};
//! use product_metrics::Currency;
//!
//! assert_eq!(parse_amount("$ 1500"), Some(1500.0));
//! assert_eq!(parse_quantity("12+"), 12.0);
//! assert_eq!(detect_currency("Costo (USD)\n10"), Currency::Usd);
//! ```

pub mod currency;
pub mod numbers;

#[cfg(test)]
pub mod tests;

pub use currency::detect_currency;
pub use numbers::{is_blank, parse_amount, parse_quantity};
