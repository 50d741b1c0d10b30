//! CSV export of table rows
//!
//! Exports whatever the table currently matches, in display order, without
//! pagination.

use std::io::Write;
use std::path::Path;
use tracing::info;

use super::format::format_quantity;
use crate::{Error, ProductRow, Result};

/// Export column headers
pub const EXPORT_HEADERS: [&str; 8] = [
    "Producto",
    "Costo",
    "Precio Venta",
    "Unidades",
    "Ingresos",
    "Costo Total",
    "Ganancia",
    "Margen %",
];

/// Write the export to any writer
pub fn write_export<W: Write>(writer: W, rows: &[&ProductRow]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(EXPORT_HEADERS)
        .map_err(|e| Error::csv("Failed to write export header", e))?;

    for row in rows {
        csv_writer
            .write_record([
                row.product.clone(),
                format_quantity(row.unit_cost),
                format_quantity(row.sale_price),
                format_quantity(row.units_sold),
                format!("{:.2}", row.revenue),
                format!("{:.2}", row.total_cost),
                format!("{:.2}", row.profit),
                format!("{:.1}", row.profit_margin),
            ])
            .map_err(|e| Error::csv(format!("Failed to write export row for {}", row.product), e))?;
    }

    csv_writer
        .flush()
        .map_err(|e| Error::io("Failed to flush export", e))?;
    Ok(())
}

/// Render the export as a string
pub fn export_to_string(rows: &[&ProductRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_export(&mut buffer, rows)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the export to a file, returning the number of rows written
pub fn export_to_path(path: &Path, rows: &[&ProductRow]) -> Result<usize> {
    let file = std::fs::File::create(path)
        .map_err(|e| Error::io(format!("Failed to create export file {}", path.display()), e))?;
    write_export(file, rows)?;

    info!("Exported {} rows to {}", rows.len(), path.display());
    Ok(rows.len())
}
