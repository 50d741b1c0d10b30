//! Aggregation of product rows into summary statistics

use crate::{Currency, ProductRow, SummaryStats};

/// Fold the unflagged rows into summary statistics
///
/// Sums run in row order. Average margin and recovery are ratios of the
/// summed totals, so large and small products weigh by their economics.
pub fn summarize(products: &[ProductRow], currency: Currency) -> SummaryStats {
    let totals = products
        .iter()
        .filter(|p| !p.has_error)
        .fold(SummaryStats::default(), |mut acc, p| {
            acc.total_units_sold += p.units_sold;
            acc.total_units_purchased += p.units_purchased;
            acc.total_revenue += p.revenue;
            acc.total_cost += p.total_cost;
            acc.total_investment += p.total_investment;
            acc.total_remaining_inventory += p.remaining_inventory;
            acc.total_remaining_inventory_value += p.remaining_inventory_value;
            acc
        });

    let total_profit = totals.total_revenue - totals.total_cost;
    let total_money_recovered = totals.total_revenue;

    let average_recovery_percentage = if totals.total_investment > 0.0 {
        (total_money_recovered / totals.total_investment) * 100.0
    } else {
        0.0
    };

    let average_margin = if totals.total_revenue > 0.0 {
        (total_profit / totals.total_revenue) * 100.0
    } else {
        0.0
    };

    SummaryStats {
        total_profit,
        total_money_recovered,
        average_recovery_percentage,
        average_margin,
        currency,
        ..totals
    }
}
