//! Top products by profit and by investment recovery
//!
//! Both rankings consider only rows without defects and sort descending with
//! ties kept in sheet order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::format::truncate_name;
use super::highlight::RecoveryBand;
use crate::ProductRow;
use crate::config::RankingsConfig;

/// One bar of the profit ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitEntry {
    /// Truncated product name
    pub label: String,
    pub profit: f64,
    pub revenue: f64,
    pub total_cost: f64,
}

/// One bar of the recovery ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryEntry {
    /// Truncated product name
    pub label: String,
    pub recovery_percentage: f64,
    pub band: RecoveryBand,
}

/// Both rankings for one sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rankings {
    pub top_profit: Vec<ProfitEntry>,
    pub top_recovery: Vec<RecoveryEntry>,
}

impl Rankings {
    pub fn build(products: &[ProductRow], config: &RankingsConfig) -> Self {
        Self {
            top_profit: top_profit(products, config.top_profit_limit, config.profit_name_width),
            top_recovery: top_recovery(
                products,
                config.recovery_limit,
                config.recovery_name_width,
            ),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top_profit.is_empty() && self.top_recovery.is_empty()
    }
}

/// Most profitable valid products
pub fn top_profit(products: &[ProductRow], limit: usize, name_width: usize) -> Vec<ProfitEntry> {
    ranked(products.iter().filter(|p| !p.has_error), |p| p.profit)
        .into_iter()
        .take(limit)
        .map(|p| ProfitEntry {
            label: truncate_name(&p.product, name_width),
            profit: p.profit,
            revenue: p.revenue,
            total_cost: p.total_cost,
        })
        .collect()
}

/// Valid products that sold something, by share of investment recovered
pub fn top_recovery(
    products: &[ProductRow],
    limit: usize,
    name_width: usize,
) -> Vec<RecoveryEntry> {
    ranked(
        products.iter().filter(|p| !p.has_error && p.units_sold > 0.0),
        |p| p.recovery_percentage,
    )
    .into_iter()
    .take(limit)
    .map(|p| RecoveryEntry {
        label: truncate_name(&p.product, name_width),
        recovery_percentage: p.recovery_percentage,
        band: RecoveryBand::from_percentage(p.recovery_percentage),
    })
    .collect()
}

fn ranked<'a>(
    products: impl Iterator<Item = &'a ProductRow>,
    value: impl Fn(&ProductRow) -> f64,
) -> Vec<&'a ProductRow> {
    let mut rows: Vec<&ProductRow> = products.collect();
    rows.sort_by(|a, b| value(b).partial_cmp(&value(a)).unwrap_or(Ordering::Equal));
    rows
}
