//! Tests for the row processor module
//!
//! This module provides unit tests for validation, metrics, aggregation and
//! the full row processing pipeline.

pub mod metrics_tests;
pub mod validation_tests;

// Test helper functions and fixtures
use crate::RawRow;

/// Source text without any currency marker
pub const PLAIN_SOURCE: &str = "Producto,Costo,PrecioVenta,CantidadVendida,CantidadComprada";

/// Create a row with every field present
pub fn create_row(
    product: &str,
    cost: &str,
    price: &str,
    sold: &str,
    purchased: &str,
) -> RawRow {
    RawRow::new(product, cost, price, sold, purchased)
}

/// The reference product used across scenarios
pub fn create_reference_row() -> RawRow {
    create_row("Bra A", "500", "1200", "10", "15")
}

/// Assert two floats are equal within a small tolerance
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
