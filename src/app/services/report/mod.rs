//! Report building over processed sheets
//!
//! Turns a [`ProcessedSheet`](crate::ProcessedSheet) into the views a user
//! reads: a searchable, sortable, paginated product table, row highlights,
//! profit and recovery rankings, summary cards, a truncated diagnostics list
//! and a CSV export of the queried table.
//!
//! ## Architecture
//!
//! - [`table`] - Search, sort and pagination state
//! - [`highlight`] - Row highlight and recovery band classification
//! - [`rankings`] - Top products by profit and by recovery
//! - [`cards`] - Summary cards and the diagnostics list
//! - [`format`] - Locale formatting for money, percentages and quantities
//! - [`export`] - CSV export of table rows
//!
//! ## Usage
//!
//! ```rust
//! use product_metrics::app::services::report::{TableQuery, format_currency};
//! use product_metrics::{RawRow, process_sheet};
//!
//! let rows = vec![RawRow::new("Bra A", "500", "1200", "10", "15")];
//! let sheet = process_sheet(&rows, "");
//!
//! let page = TableQuery::default().page_of(&sheet.products);
//! assert_eq!(page.rows.len(), 1);
//! assert_eq!(format_currency(sheet.summary.total_profit, sheet.summary.currency), "$ 7.000");
//! ```

pub mod cards;
pub mod export;
pub mod format;
pub mod highlight;
pub mod rankings;
pub mod table;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use cards::{CardTone, DiagnosticsView, SummaryCard, summary_cards};
pub use export::{export_to_path, export_to_string, write_export};
pub use format::{format_currency, format_percentage, format_quantity, truncate_name};
pub use highlight::{RecoveryBand, RowHighlight, mean_profit};
pub use rankings::{ProfitEntry, RecoveryEntry, Rankings};
pub use table::{SortDirection, SortField, TablePage, TableQuery};
