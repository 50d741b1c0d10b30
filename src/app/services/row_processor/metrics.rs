//! Per-row derived metrics

use crate::ProductRow;

/// Base values a product row's metrics are derived from
///
/// Amounts here are already zero-substituted; quantities already defaulted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseValues {
    pub unit_cost: f64,
    pub sale_price: f64,
    pub units_sold: f64,
    pub units_purchased: f64,
}

impl BaseValues {
    /// Build base values from parse results, substituting zero for invalid amounts
    pub fn from_parsed(
        unit_cost: Option<f64>,
        sale_price: Option<f64>,
        units_sold: f64,
        units_purchased: f64,
    ) -> Self {
        Self {
            unit_cost: zero_if_missing(unit_cost),
            sale_price: zero_if_missing(sale_price),
            units_sold,
            units_purchased: zero_if_missing(Some(units_purchased)),
        }
    }
}

/// Substitute zero for a missing value and fold negative zero into zero
fn zero_if_missing(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => 0.0,
    }
}

/// Percentage of `part` over `whole`, zero unless `whole` is positive
fn ratio_percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole) * 100.0
    } else {
        0.0
    }
}

/// Compute every derived metric and assemble the product row
pub fn derive_product(
    product: String,
    base: BaseValues,
    has_error: bool,
    error_message: String,
) -> ProductRow {
    let total_cost = base.unit_cost * base.units_sold;
    let total_investment = base.unit_cost * base.units_purchased;
    let revenue = base.sale_price * base.units_sold;
    let profit = revenue - total_cost;
    let profit_margin = ratio_percentage(profit, revenue);

    let money_recovered = revenue;
    let recovery_percentage = ratio_percentage(money_recovered, total_investment);
    let remaining_inventory = (base.units_purchased - base.units_sold).max(0.0);
    let remaining_inventory_value = remaining_inventory * base.unit_cost;

    ProductRow {
        product,
        unit_cost: base.unit_cost,
        sale_price: base.sale_price,
        units_sold: base.units_sold,
        units_purchased: base.units_purchased,
        total_cost,
        total_investment,
        revenue,
        profit,
        money_recovered,
        recovery_percentage,
        remaining_inventory,
        remaining_inventory_value,
        profit_margin,
        has_error,
        error_message,
    }
}
