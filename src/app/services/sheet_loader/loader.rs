//! Document reading and row extraction

use std::path::Path;
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use crate::app::services::row_processor::process_sheet;
use crate::{Error, ProcessedSheet, RawRow, Result};

/// Simple loading statistics
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Number of data records the tokenizer produced
    pub total_records: usize,

    /// Number of records turned into raw rows
    pub rows_loaded: usize,

    /// Number of records the tokenizer could not read
    pub records_skipped: usize,

    /// Records whose field count differs from the header
    pub ragged_records: usize,

    /// Tokenizer warnings for debugging
    pub warnings: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether every record was read
    pub fn is_complete(&self) -> bool {
        self.records_skipped == 0
    }
}

/// A tokenized export, ready for processing
#[derive(Debug, Clone)]
pub struct LoadedSheet {
    /// The document exactly as read, used for currency detection
    pub source_text: String,

    /// Raw rows in document order, header excluded
    pub rows: Vec<RawRow>,

    /// Header analysis
    pub columns: ColumnMapping,

    /// Loading statistics
    pub stats: LoadStats,
}

impl LoadedSheet {
    /// Run the processing core over the loaded rows
    pub fn process(&self) -> ProcessedSheet {
        process_sheet(&self.rows, &self.source_text)
    }
}

/// Tokenize document text into raw rows
///
/// Fails when the text is blank, when a required column is missing from the
/// header, or when no data rows follow the header. Blank lines are skipped by
/// the tokenizer; unreadable records are skipped with a warning.
pub fn load_sheet_text(text: &str) -> Result<LoadedSheet> {
    if text.trim().is_empty() {
        return Err(Error::EmptyDocument);
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::csv("Failed to read CSV header", e))?
        .clone();
    let columns = ColumnMapping::analyze(&headers)?;
    debug!(
        "Column mapping: {} columns ({} extra)",
        columns.column_count,
        columns.extra_column_count()
    );

    let mut stats = LoadStats::new();
    let mut rows = Vec::new();

    for result in csv_reader.records() {
        stats.total_records += 1;

        match result {
            Ok(record) => {
                if record.len() != columns.column_count {
                    stats.ragged_records += 1;
                    debug!(
                        "Record {} has {} fields, header has {}",
                        stats.total_records,
                        record.len(),
                        columns.column_count
                    );
                }
                rows.push(columns.extract_row(&record));
                stats.rows_loaded += 1;
            }
            Err(e) => {
                stats.records_skipped += 1;
                let message = format!("CSV parse error at record {}: {}", stats.total_records, e);
                warn!("{}", message);
                stats.warnings.push(message);
            }
        }
    }

    if rows.is_empty() {
        return Err(Error::NoDataRows);
    }

    info!(
        "Loaded {} rows from {} records ({} skipped)",
        stats.rows_loaded, stats.total_records, stats.records_skipped
    );

    Ok(LoadedSheet {
        source_text: text.to_string(),
        rows,
        columns,
        stats,
    })
}

/// Read an export file and tokenize it
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub async fn load_sheet_file(path: &Path) -> Result<LoadedSheet> {
    info!("Loading spreadsheet export: {}", path.display());

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;
    let text = String::from_utf8_lossy(&bytes);

    load_sheet_text(&text)
}
