//! Tests for the sheet loader module


use std::io::Write;
use tempfile::NamedTempFile;

/// Header line with every required column
pub const HEADER: &str = "Producto,Costo,PrecioVenta,CantidadVendida,CantidadComprada";

/// Build a document from the standard header and the given data lines
pub fn create_document(lines: &[&str]) -> String {
    let mut text = String::from(HEADER);
    for line in lines {
        text.push('\n');
        text.push_str(line);
    }
    text.push('\n');
    text
}

/// Write raw bytes to a temporary export file
pub fn create_temp_export(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
