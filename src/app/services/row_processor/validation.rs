//! Row validation policy
//!
//! Each check is independent; several may fire on one row. Checks run in a
//! fixed order, which is also the order of the row's error labels and of the
//! diagnostics it contributes.

use crate::app::services::field_parser::is_blank;
use crate::constants::issue_labels;
use crate::RawRow;

/// A problem found on one spreadsheet row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIssue {
    /// Cost cell missing or unreadable
    InvalidCost,
    /// Sale price cell missing or unreadable
    InvalidSalePrice,
    /// Purchased quantity resolved to zero or less
    InvalidPurchasedQuantity,
    /// Sold quantity resolved below zero
    InvalidSoldQuantity,
    /// Sold quantity cell was blank and defaulted
    EmptySoldQuantity,
    /// Purchased quantity cell was blank
    ///
    /// Fires even though the quantity parser already defaulted the blank cell
    /// to one, so a blank purchase count always flags the row.
    EmptyPurchasedQuantity,
}

impl RowIssue {
    /// Label used in the row error message
    pub fn label(self) -> &'static str {
        match self {
            RowIssue::InvalidCost => issue_labels::INVALID_COST,
            RowIssue::InvalidSalePrice => issue_labels::INVALID_SALE_PRICE,
            RowIssue::InvalidPurchasedQuantity => issue_labels::INVALID_PURCHASED_QUANTITY,
            RowIssue::InvalidSoldQuantity => issue_labels::INVALID_SOLD_QUANTITY,
            RowIssue::EmptySoldQuantity => issue_labels::EMPTY_SOLD_QUANTITY,
            RowIssue::EmptyPurchasedQuantity => issue_labels::EMPTY_PURCHASED_QUANTITY,
        }
    }

    /// Whether the issue flags the row; notes only produce a diagnostic
    pub fn is_defect(self) -> bool {
        !matches!(self, RowIssue::EmptySoldQuantity)
    }

    /// Diagnostic line for this issue on a given row
    pub fn diagnostic(self, row_number: usize, product: &str) -> String {
        match self {
            RowIssue::EmptySoldQuantity => format!(
                "Row {}: {} for {} (assuming 1)",
                row_number,
                self.label(),
                product
            ),
            _ => format!("Row {}: {} for {}", row_number, self.label(), product),
        }
    }
}

/// Diagnostic for a row dropped because its product name is blank
pub fn empty_product_diagnostic(row_number: usize) -> String {
    format!("Row {}: {}", row_number, issue_labels::EMPTY_PRODUCT)
}

/// Outcome of validating one row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowAssessment {
    /// Every issue found, in check order
    pub issues: Vec<RowIssue>,
}

impl RowAssessment {
    /// Run the validation checks against the parsed and raw values of a row
    pub fn assess(
        raw: &RawRow,
        unit_cost: Option<f64>,
        sale_price: Option<f64>,
        units_sold: f64,
        units_purchased: f64,
    ) -> Self {
        let checks = [
            (unit_cost.is_none(), RowIssue::InvalidCost),
            (sale_price.is_none(), RowIssue::InvalidSalePrice),
            (units_purchased <= 0.0, RowIssue::InvalidPurchasedQuantity),
            (units_sold < 0.0, RowIssue::InvalidSoldQuantity),
            (is_blank(raw.units_sold_text()), RowIssue::EmptySoldQuantity),
            (
                is_blank(raw.units_purchased_text()),
                RowIssue::EmptyPurchasedQuantity,
            ),
        ];

        let issues = checks
            .into_iter()
            .filter_map(|(triggered, issue)| triggered.then_some(issue))
            .collect();

        Self { issues }
    }

    /// True when at least one issue flags the row
    pub fn has_error(&self) -> bool {
        self.issues.iter().any(|issue| issue.is_defect())
    }

    /// Defect labels joined for the row error message
    pub fn error_message(&self) -> String {
        self.issues
            .iter()
            .filter(|issue| issue.is_defect())
            .map(|issue| issue.label())
            .collect::<Vec<_>>()
            .join(issue_labels::SEPARATOR)
    }

    /// Diagnostics for every issue, notes included
    pub fn diagnostics(&self, row_number: usize, product: &str) -> Vec<String> {
        self.issues
            .iter()
            .map(|issue| issue.diagnostic(row_number, product))
            .collect()
    }
}
