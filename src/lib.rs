//! Product Metrics Library
//!
//! A Rust library for turning a spreadsheet export of retail products into
//! per-product and aggregate financial metrics.
//!
//! This library provides tools for:
//! - Parsing loosely formatted amounts and quantities (`"$ 1.500"`, `"12+"`, `"3,5"`)
//! - Detecting the document currency (ARS or USD)
//! - Validating each product row while keeping flagged rows in the output
//! - Deriving profit, margin, investment recovery and remaining inventory
//! - Aggregating summary statistics over the valid rows
//! - Building searchable, sortable, paginated product tables and rankings

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod field_parser;
        pub mod report;
        pub mod row_processor;
        pub mod sheet_loader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Currency, ProcessedSheet, ProductRow, RawRow, SummaryStats};
pub use app::services::row_processor::process_sheet;
pub use config::Config;

/// Result type alias for the product metrics library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for loading, configuring and reporting
///
/// The processing core never fails; these cover everything around it.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV tokenizing or writing error
    #[error("CSV error: {message}")]
    Csv {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// The source document holds no text
    #[error("The spreadsheet export is empty or contains no usable data")]
    EmptyDocument,

    /// The header was read but no data rows follow it
    #[error("No product rows found in the spreadsheet export")]
    NoDataRows,

    /// One or more required columns are absent from the header
    #[error(
        "Missing required columns: {}. The header must contain: Producto, Costo, PrecioVenta, CantidadVendida, CantidadComprada",
        missing.join(", ")
    )]
    MissingColumns { missing: Vec<String> },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Configuration file '{path}' is not valid TOML")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV error with context
    pub fn csv(message: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            message: message.into(),
            source,
        }
    }

    /// Create a missing columns error
    pub fn missing_columns(missing: Vec<String>) -> Self {
        Self::MissingColumns { missing }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration parse error
    pub fn config_parse(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv {
            message: "CSV processing failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
