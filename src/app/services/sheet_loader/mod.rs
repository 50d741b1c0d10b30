//! Spreadsheet export loader
//!
//! Reads the raw text of a CSV export, tokenizes it with the `csv` crate and
//! hands the processing core a sequence of [`RawRow`](crate::RawRow)s together
//! with the untouched source text.
//!
//! ## Architecture
//!
//! - [`column_mapping`] - Header analysis and required column checks
//! - [`loader`] - Document reading, tokenizing and row extraction
//!
//! ## Usage
//!
//! ```rust
//! use product_metrics::app::services::sheet_loader::load_sheet_text;
//!
//! # fn example() -> product_metrics::Result<()> {
//! let text = "Producto,Costo,PrecioVenta,CantidadVendida,CantidadComprada\nBra A,500,1200,10,15\n";
//! let loaded = load_sheet_text(text)?;
//! let sheet = loaded.process();
//!
//! println!("Loaded {} rows, {} products", loaded.rows.len(), sheet.product_count());
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod loader;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use loader::{LoadStats, LoadedSheet, load_sheet_file, load_sheet_text};
