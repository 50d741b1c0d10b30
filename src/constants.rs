//! Application constants for the product metrics processor
//!
//! This module contains column names, parsing defaults, issue labels and
//! display defaults used throughout the application.

// =============================================================================
// Spreadsheet Columns
// =============================================================================

/// Product name column
pub const COLUMN_PRODUCT: &str = "Producto";

/// Unit cost column
pub const COLUMN_COST: &str = "Costo";

/// Unit sale price column
pub const COLUMN_SALE_PRICE: &str = "PrecioVenta";

/// Units sold column
pub const COLUMN_UNITS_SOLD: &str = "CantidadVendida";

/// Units purchased column
pub const COLUMN_UNITS_PURCHASED: &str = "CantidadComprada";

/// Required header columns, in canonical order
pub const REQUIRED_COLUMNS: &[&str] = &[
    COLUMN_PRODUCT,
    COLUMN_COST,
    COLUMN_SALE_PRICE,
    COLUMN_UNITS_SOLD,
    COLUMN_UNITS_PURCHASED,
];

/// Offset between a data row's index and its spreadsheet line number
/// (one for 1-based numbering, one for the header line)
pub const ROW_NUMBER_OFFSET: usize = 2;

// =============================================================================
// Parsing Defaults
// =============================================================================

/// Quantity used when a quantity cell is blank or holds no number
pub const DEFAULT_QUANTITY: f64 = 1.0;

/// Currency probes, checked in this order against the whole document
pub const CURRENCY_PROBES: &[&str] = &["USD", "ARS", "$", "US$", "AR$"];

// =============================================================================
// Row Issue Labels
// =============================================================================

/// Labels that appear in a product row's error message and in diagnostics
pub mod issue_labels {
    pub const INVALID_COST: &str = "invalid cost";
    pub const INVALID_SALE_PRICE: &str = "invalid sale price";
    pub const INVALID_PURCHASED_QUANTITY: &str = "invalid purchased quantity";
    pub const INVALID_SOLD_QUANTITY: &str = "invalid sold quantity";
    pub const EMPTY_SOLD_QUANTITY: &str = "empty sold quantity";
    pub const EMPTY_PURCHASED_QUANTITY: &str = "empty purchased quantity";
    pub const EMPTY_PRODUCT: &str = "empty product";

    /// Separator used when joining labels into a row error message
    pub const SEPARATOR: &str = ", ";
}

// =============================================================================
// Display Defaults
// =============================================================================

/// Page sizes offered by the product table
pub const PAGE_SIZE_OPTIONS: &[usize] = &[10, 25, 50];

/// Default product table page size
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Number of diagnostics shown before collapsing the rest
pub const DEFAULT_DIAGNOSTICS_DISPLAY_LIMIT: usize = 5;

/// Number of products in the profit ranking
pub const DEFAULT_TOP_PROFIT_LIMIT: usize = 8;

/// Number of products in the recovery ranking
pub const DEFAULT_RECOVERY_RANKING_LIMIT: usize = 6;

/// Maximum name width in the profit ranking before truncation
pub const DEFAULT_PROFIT_NAME_WIDTH: usize = 12;

/// Maximum name width in the recovery ranking before truncation
pub const DEFAULT_RECOVERY_NAME_WIDTH: usize = 10;

/// Default polling interval for the watch command
pub const DEFAULT_WATCH_INTERVAL_SECS: u64 = 2;

/// Recovery percentage at or above which the investment counts as recovered
pub const RECOVERY_FULL_THRESHOLD: f64 = 100.0;

/// Recovery percentage at or above which recovery counts as partial
pub const RECOVERY_PARTIAL_THRESHOLD: f64 = 50.0;

/// Default file name for CSV exports
pub const DEFAULT_EXPORT_FILE_NAME: &str = "productos.csv";

/// Directory name used under the user's config directory
pub const CONFIG_DIR_NAME: &str = "product-metrics";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";
