//! Tests for per-row derived metrics

use super::*;
use crate::app::services::row_processor::metrics::{BaseValues, derive_product};

fn base(unit_cost: f64, sale_price: f64, units_sold: f64, units_purchased: f64) -> BaseValues {
    BaseValues {
        unit_cost,
        sale_price,
        units_sold,
        units_purchased,
    }
}

#[test]
fn test_reference_product_metrics() {
    let row = derive_product("Bra A".to_string(), base(500.0, 1200.0, 10.0, 15.0), false, String::new());

    assert_eq!(row.total_cost, 5000.0);
    assert_eq!(row.total_investment, 7500.0);
    assert_eq!(row.revenue, 12000.0);
    assert_eq!(row.profit, 7000.0);
    assert_close(row.profit_margin, 58.333333333333336);
    assert_eq!(row.money_recovered, 12000.0);
    assert_close(row.recovery_percentage, 160.0);
    assert_eq!(row.remaining_inventory, 5.0);
    assert_eq!(row.remaining_inventory_value, 2500.0);
}

#[test]
fn test_zero_revenue_gives_zero_margin() {
    let row = derive_product("Free".to_string(), base(100.0, 0.0, 3.0, 5.0), false, String::new());

    assert_eq!(row.revenue, 0.0);
    assert_eq!(row.profit, -300.0);
    assert_eq!(row.profit_margin, 0.0);
}

#[test]
fn test_negative_revenue_gives_zero_margin() {
    let row = derive_product("Refund".to_string(), base(10.0, -5.0, 2.0, 2.0), false, String::new());

    assert_eq!(row.revenue, -10.0);
    assert_eq!(row.profit_margin, 0.0);
}

#[test]
fn test_zero_investment_gives_zero_recovery() {
    let row = derive_product("Gift".to_string(), base(0.0, 50.0, 2.0, 4.0), false, String::new());

    assert_eq!(row.total_investment, 0.0);
    assert_eq!(row.recovery_percentage, 0.0);
    assert_eq!(row.remaining_inventory_value, 0.0);
}

#[test]
fn test_oversold_inventory_floors_at_zero() {
    let row = derive_product("Hot".to_string(), base(10.0, 20.0, 12.0, 5.0), false, String::new());

    assert_eq!(row.remaining_inventory, 0.0);
    assert_eq!(row.remaining_inventory_value, 0.0);
}

#[test]
fn test_base_values_substitute_zero_for_invalid_amounts() {
    let values = BaseValues::from_parsed(None, Some(1200.0), 10.0, 15.0);
    assert_eq!(values.unit_cost, 0.0);
    assert_eq!(values.sale_price, 1200.0);

    let values = BaseValues::from_parsed(Some(-0.0), None, 1.0, 1.0);
    assert!(values.unit_cost.is_sign_positive());
    assert_eq!(values.sale_price, 0.0);
}

#[test]
fn test_flag_and_message_are_carried() {
    let row = derive_product(
        "Bra B".to_string(),
        base(0.0, 1200.0, 10.0, 15.0),
        true,
        "invalid cost".to_string(),
    );

    assert!(row.has_error);
    assert_eq!(row.error_message, "invalid cost");
    assert_eq!(row.profit, row.revenue);
}
