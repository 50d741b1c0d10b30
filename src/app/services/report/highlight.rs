//! Row highlight and recovery band classification

use serde::{Deserialize, Serialize};

use crate::ProductRow;
use crate::constants::{RECOVERY_FULL_THRESHOLD, RECOVERY_PARTIAL_THRESHOLD};

/// Visual emphasis for a table row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowHighlight {
    /// Row carries a defect
    Error,
    /// Row loses money
    Loss,
    /// Row earns more than the average product
    AboveAverage,
    Normal,
}

impl RowHighlight {
    /// Classify a row against the mean profit of the whole table
    ///
    /// Checks run in order: defect, negative profit, above the mean.
    pub fn classify(product: &ProductRow, mean_profit: f64) -> Self {
        if product.has_error {
            Self::Error
        } else if product.profit < 0.0 {
            Self::Loss
        } else if product.profit > mean_profit {
            Self::AboveAverage
        } else {
            Self::Normal
        }
    }
}

/// Mean profit over every product, flagged rows included
pub fn mean_profit(products: &[ProductRow]) -> f64 {
    if products.is_empty() {
        return 0.0;
    }
    products.iter().map(|p| p.profit).sum::<f64>() / products.len() as f64
}

/// How much of the investment a product has earned back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecoveryBand {
    /// At least the full investment
    Recovered,
    /// At least half of it
    Partial,
    Low,
}

impl RecoveryBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= RECOVERY_FULL_THRESHOLD {
            Self::Recovered
        } else if percentage >= RECOVERY_PARTIAL_THRESHOLD {
            Self::Partial
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Recovered => "recovered",
            Self::Partial => "partial",
            Self::Low => "low",
        }
    }
}
