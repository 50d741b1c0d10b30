//! Tests for the report module

pub mod export_tests;
pub mod table_tests;

use crate::app::services::row_processor::metrics::{BaseValues, derive_product};
use crate::ProductRow;

/// Build a product row from its base values
pub fn create_product(
    name: &str,
    unit_cost: f64,
    sale_price: f64,
    units_sold: f64,
    units_purchased: f64,
) -> ProductRow {
    derive_product(
        name.to_string(),
        BaseValues {
            unit_cost,
            sale_price,
            units_sold,
            units_purchased,
        },
        false,
        String::new(),
    )
}

/// Build a flagged product row
pub fn create_flagged_product(name: &str, sale_price: f64, units_sold: f64) -> ProductRow {
    derive_product(
        name.to_string(),
        BaseValues {
            unit_cost: 0.0,
            sale_price,
            units_sold,
            units_purchased: 1.0,
        },
        true,
        "invalid cost".to_string(),
    )
}

/// A small catalogue with distinct profits
///
/// Profits: Bra A 7000, Tanga 1500, body -50, Camisón 0, Flagged 900
pub fn create_catalogue() -> Vec<ProductRow> {
    vec![
        create_product("Bra A", 500.0, 1200.0, 10.0, 15.0),
        create_product("Tanga", 100.0, 250.0, 10.0, 40.0),
        create_product("body", 100.0, 50.0, 1.0, 4.0),
        create_product("Camisón", 300.0, 300.0, 0.0, 2.0),
        create_flagged_product("Flagged", 900.0, 1.0),
    ]
}

pub fn names(rows: &[&ProductRow]) -> Vec<String> {
    rows.iter().map(|p| p.product.clone()).collect()
}
