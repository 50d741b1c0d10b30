//! Row processing module for product spreadsheets
//!
//! This module turns raw spreadsheet rows into validated product rows with
//! derived metrics, collects human-readable diagnostics, and folds the valid
//! rows into summary statistics.
//!
//! # Architecture
//!
//! The module is organized into logical components:
//! - [`processor`] - Pipeline orchestration over the raw rows
//! - [`validation`] - Row issues, their labels and diagnostics
//! - [`metrics`] - Per-row derived metrics
//! - [`summary`] - Aggregation over the valid rows
//!
//! # Defect Policy
//!
//! A malformed row never aborts the batch:
//!
//! - **Excluded**: blank padding rows (silently) and rows without a product
//!   name (with a diagnostic)
//! - **Flagged**: rows with an unreadable amount or a bad or missing purchased
//!   quantity are emitted with `has_error` set and zeroed amounts
//! - **Noted**: a missing sold quantity only adds a diagnostic
//!
//! # Example Usage
//!
//! ```rust
//! use product_metrics::app::services::row_processor::process_sheet;
//! use product_metrics::RawRow;
//!
//! let rows = vec![RawRow::new("Bra A", "500", "1200", "10", "15")];
//! let sheet = process_sheet(&rows, "Producto,Costo\n");
//!
//! assert_eq!(sheet.products[0].profit, 7000.0);
//! assert_eq!(sheet.summary.total_profit, 7000.0);
//! assert!(sheet.errors.is_empty());
//! ```

pub mod metrics;
pub mod processor;
pub mod summary;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use metrics::{BaseValues, derive_product};
pub use processor::process_sheet;
pub use summary::summarize;
pub use validation::{RowAssessment, RowIssue};
