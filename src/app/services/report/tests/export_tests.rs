//! Tests for CSV export

use super::*;
use crate::app::services::report::export::{export_to_path, export_to_string};
use crate::app::services::report::table::{SortDirection, SortField, TableQuery};
use tempfile::TempDir;

#[test]
fn test_export_headers_and_number_formats() {
    let products = vec![create_product("Bra A", 500.0, 1200.0, 10.0, 15.0)];
    let rows: Vec<_> = products.iter().collect();
    let text = export_to_string(&rows).unwrap();

    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines[0],
        "Producto,Costo,Precio Venta,Unidades,Ingresos,Costo Total,Ganancia,Margen %"
    );
    assert_eq!(lines[1], "Bra A,500,1200,10,12000.00,5000.00,7000.00,58.3");
}

#[test]
fn test_export_quotes_names_with_commas() {
    let products = vec![create_product("Bra, \"encaje\"", 9.99, 14.5, 2.5, 3.0)];
    let rows: Vec<_> = products.iter().collect();
    let text = export_to_string(&rows).unwrap();

    let line = text.lines().nth(1).unwrap();
    assert!(line.starts_with("\"Bra, \"\"encaje\"\"\",9.99,14.5,2.5,"));
}

#[test]
fn test_export_follows_query_order_without_pagination() {
    let products = create_catalogue();
    let query = TableQuery::new()
        .with_search("a")
        .with_sort(SortField::Product, SortDirection::Asc)
        .with_page_size(10);
    let rows = query.apply(&products);
    let text = export_to_string(&rows).unwrap();

    let exported: Vec<_> = text
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap().to_string())
        .collect();
    assert_eq!(exported, vec!["Bra A", "Camisón", "Flagged", "Tanga"]);
}

#[test]
fn test_export_to_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("productos.csv");

    let products = create_catalogue();
    let rows: Vec<_> = products.iter().collect();
    let written = export_to_path(&path, &rows).unwrap();

    assert_eq!(written, 5);
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 6);
}
