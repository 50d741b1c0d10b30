//! Header analysis for spreadsheet exports
//!
//! Header names are matched after trimming whitespace and a leading byte order
//! mark. Extra columns are kept in the mapping but never read.

use crate::constants::REQUIRED_COLUMNS;
use crate::{Error, RawRow, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Column mapping for an export header
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    /// Column name to index mapping; a repeated name maps to its last position
    pub name_to_index: HashMap<String, usize>,

    /// Number of header fields
    pub column_count: usize,
}

impl ColumnMapping {
    /// Analyze column headers and require every product column
    pub fn analyze(headers: &StringRecord) -> Result<Self> {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            name_to_index.entry(normalize_header(header)).or_insert(index);
        }

        let mapping = ColumnMapping {
            name_to_index,
            column_count: headers.len(),
        };

        let missing = mapping.missing_columns();
        if !missing.is_empty() {
            return Err(Error::missing_columns(missing));
        }

        Ok(mapping)
    }

    /// Required columns absent from the header, in canonical order
    pub fn missing_columns(&self) -> Vec<String> {
        REQUIRED_COLUMNS
            .iter()
            .filter(|column| !self.has_column(column))
            .map(|column| column.to_string())
            .collect()
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Number of header columns beyond the required ones
    pub fn extra_column_count(&self) -> usize {
        self.name_to_index
            .keys()
            .filter(|name| !REQUIRED_COLUMNS.contains(&name.as_str()))
            .count()
    }

    /// Extract a raw row from a record; fields past the record's end stay absent
    pub fn extract_row(&self, record: &StringRecord) -> RawRow {
        let mut row = RawRow::default();
        for column in REQUIRED_COLUMNS {
            if let Some(value) = self.get_index(column).and_then(|index| record.get(index)) {
                row.set_field(column, value);
            }
        }
        row
    }
}

fn normalize_header(header: &str) -> String {
    header
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_string()
}
