//! Data models for product metrics processing
//!
//! This module contains the raw spreadsheet row, the validated product row with
//! its derived metrics, the aggregate summary, and the combined processing
//! result handed to presentation code.

use crate::constants::{
    COLUMN_COST, COLUMN_PRODUCT, COLUMN_SALE_PRICE, COLUMN_UNITS_PURCHASED, COLUMN_UNITS_SOLD,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Raw Spreadsheet Row
// =============================================================================

/// One spreadsheet line as text, before any parsing
///
/// Each field is `None` when the column was absent from the line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawRow {
    #[serde(rename = "Producto", default)]
    pub product: Option<String>,

    #[serde(rename = "Costo", default)]
    pub cost: Option<String>,

    #[serde(rename = "PrecioVenta", default)]
    pub sale_price: Option<String>,

    #[serde(rename = "CantidadVendida", default)]
    pub units_sold: Option<String>,

    #[serde(rename = "CantidadComprada", default)]
    pub units_purchased: Option<String>,
}

impl RawRow {
    /// Create a row with every field present
    pub fn new(
        product: impl Into<String>,
        cost: impl Into<String>,
        sale_price: impl Into<String>,
        units_sold: impl Into<String>,
        units_purchased: impl Into<String>,
    ) -> Self {
        Self {
            product: Some(product.into()),
            cost: Some(cost.into()),
            sale_price: Some(sale_price.into()),
            units_sold: Some(units_sold.into()),
            units_purchased: Some(units_purchased.into()),
        }
    }

    pub fn product_text(&self) -> &str {
        self.product.as_deref().unwrap_or_default()
    }

    pub fn cost_text(&self) -> &str {
        self.cost.as_deref().unwrap_or_default()
    }

    pub fn sale_price_text(&self) -> &str {
        self.sale_price.as_deref().unwrap_or_default()
    }

    pub fn units_sold_text(&self) -> &str {
        self.units_sold.as_deref().unwrap_or_default()
    }

    pub fn units_purchased_text(&self) -> &str {
        self.units_purchased.as_deref().unwrap_or_default()
    }

    /// Look up a field by its spreadsheet column name
    pub fn field(&self, column: &str) -> Option<&str> {
        match column {
            COLUMN_PRODUCT => self.product.as_deref(),
            COLUMN_COST => self.cost.as_deref(),
            COLUMN_SALE_PRICE => self.sale_price.as_deref(),
            COLUMN_UNITS_SOLD => self.units_sold.as_deref(),
            COLUMN_UNITS_PURCHASED => self.units_purchased.as_deref(),
            _ => None,
        }
    }

    /// Set a field by its spreadsheet column name, ignoring unknown columns
    pub fn set_field(&mut self, column: &str, value: impl Into<String>) {
        let slot = match column {
            COLUMN_PRODUCT => &mut self.product,
            COLUMN_COST => &mut self.cost,
            COLUMN_SALE_PRICE => &mut self.sale_price,
            COLUMN_UNITS_SOLD => &mut self.units_sold,
            COLUMN_UNITS_PURCHASED => &mut self.units_purchased,
            _ => return,
        };
        *slot = Some(value.into());
    }

    /// True when the line is spreadsheet padding
    ///
    /// Units sold is deliberately not consulted. Whitespace counts as content.
    pub fn is_blank(&self) -> bool {
        self.product_text().is_empty()
            && self.cost_text().is_empty()
            && self.sale_price_text().is_empty()
            && self.units_purchased_text().is_empty()
    }
}

// =============================================================================
// Currency
// =============================================================================

/// Currency detected for a whole document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Currency {
    /// Argentine peso
    #[default]
    #[serde(rename = "ARS")]
    Ars,

    /// US dollar
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    /// ISO 4217 code
    pub fn code(self) -> &'static str {
        match self {
            Currency::Ars => "ARS",
            Currency::Usd => "USD",
        }
    }

    /// Symbol used when formatting amounts in the es-AR locale
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Ars => "$",
            Currency::Usd => "US$",
        }
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ARS" => Ok(Currency::Ars),
            "USD" => Ok(Currency::Usd),
            _ => Err(Error::configuration(format!(
                "Unknown currency '{}': must be ARS or USD",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Product Row
// =============================================================================

/// A validated product with its derived metrics
///
/// Rows with defects are kept and flagged with `has_error`; their metrics are
/// computed from zero-substituted amounts so every field is always populated.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductRow {
    /// Display name as it appeared in the sheet (not unique)
    #[serde(rename = "producto")]
    pub product: String,

    #[serde(rename = "costo")]
    pub unit_cost: f64,

    #[serde(rename = "precioVenta")]
    pub sale_price: f64,

    #[serde(rename = "cantidadVendida")]
    pub units_sold: f64,

    #[serde(rename = "cantidadComprada")]
    pub units_purchased: f64,

    /// Cost of the units sold
    #[serde(rename = "costoTotal")]
    pub total_cost: f64,

    /// Cost of every unit purchased
    #[serde(rename = "inversionTotal")]
    pub total_investment: f64,

    #[serde(rename = "ingresos")]
    pub revenue: f64,

    #[serde(rename = "ganancia")]
    pub profit: f64,

    #[serde(rename = "dineroRecuperado")]
    pub money_recovered: f64,

    #[serde(rename = "porcentajeRecuperacion")]
    pub recovery_percentage: f64,

    /// Purchased minus sold, floored at zero
    #[serde(rename = "inventarioRestante")]
    pub remaining_inventory: f64,

    #[serde(rename = "valorInventarioRestante")]
    pub remaining_inventory_value: f64,

    #[serde(rename = "margenProfit")]
    pub profit_margin: f64,

    #[serde(rename = "hasError")]
    pub has_error: bool,

    /// Comma-joined defect labels, empty when the row is clean
    #[serde(rename = "errorMessage")]
    pub error_message: String,
}

impl ProductRow {
    /// Case-insensitive name match used by table search
    pub fn matches_search(&self, term: &str) -> bool {
        self.product
            .to_lowercase()
            .contains(&term.to_lowercase())
    }

    /// Share of purchased units already sold, as a percentage
    pub fn sell_through(&self) -> f64 {
        if self.units_purchased > 0.0 {
            (self.units_sold / self.units_purchased) * 100.0
        } else {
            0.0
        }
    }
}

// =============================================================================
// Summary Statistics
// =============================================================================

/// Aggregate figures over the rows without defects
///
/// The two percentage fields are ratios of the summed totals.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SummaryStats {
    #[serde(rename = "totalUnidades")]
    pub total_units_sold: f64,

    #[serde(rename = "totalCompradas")]
    pub total_units_purchased: f64,

    #[serde(rename = "ingresosTotales")]
    pub total_revenue: f64,

    #[serde(rename = "costoTotal")]
    pub total_cost: f64,

    #[serde(rename = "inversionTotal")]
    pub total_investment: f64,

    #[serde(rename = "gananciaTotal")]
    pub total_profit: f64,

    #[serde(rename = "dineroRecuperadoTotal")]
    pub total_money_recovered: f64,

    #[serde(rename = "porcentajeRecuperacionPromedio")]
    pub average_recovery_percentage: f64,

    #[serde(rename = "inventarioRestanteTotal")]
    pub total_remaining_inventory: f64,

    #[serde(rename = "valorInventarioRestanteTotal")]
    pub total_remaining_inventory_value: f64,

    #[serde(rename = "margenPromedio")]
    pub average_margin: f64,

    pub currency: Currency,
}

impl SummaryStats {
    /// Share of purchased units sold across the valid rows, as a percentage
    ///
    /// Not finite when nothing was purchased; callers format it with
    /// [`format_percentage`](crate::app::services::report::format_percentage).
    pub fn sold_percentage(&self) -> f64 {
        (self.total_units_sold / self.total_units_purchased) * 100.0
    }
}

// =============================================================================
// Processing Result
// =============================================================================

/// Everything the pipeline produces for one document
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProcessedSheet {
    /// One entry per emitted row, in sheet order, flagged rows included
    pub products: Vec<ProductRow>,

    /// Aggregates over the unflagged rows
    pub summary: SummaryStats,

    /// Human-readable diagnostics in encounter order
    pub errors: Vec<String>,
}

impl ProcessedSheet {
    /// Number of product rows emitted
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Rows that contribute to the summary
    pub fn valid_products(&self) -> impl Iterator<Item = &ProductRow> {
        self.products.iter().filter(|p| !p.has_error)
    }

    /// Number of rows flagged with a defect
    pub fn flagged_count(&self) -> usize {
        self.products.iter().filter(|p| p.has_error).count()
    }

    /// Number of diagnostics collected
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// True when no row was flagged and no diagnostic was raised
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.flagged_count() == 0
    }

    /// Get summary string for logging
    pub fn summary_line(&self) -> String {
        format!(
            "{} products ({} flagged) | revenue {:.2} {} | profit {:.2} | {} diagnostics",
            self.product_count(),
            self.flagged_count(),
            self.summary.total_revenue,
            self.summary.currency,
            self.summary.total_profit,
            self.error_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_product(name: &str, has_error: bool) -> ProductRow {
        ProductRow {
            product: name.to_string(),
            unit_cost: 100.0,
            sale_price: 150.0,
            units_sold: 4.0,
            units_purchased: 8.0,
            total_cost: 400.0,
            total_investment: 800.0,
            revenue: 600.0,
            profit: 200.0,
            money_recovered: 600.0,
            recovery_percentage: 75.0,
            remaining_inventory: 4.0,
            remaining_inventory_value: 400.0,
            profit_margin: 200.0 / 600.0 * 100.0,
            has_error,
            error_message: if has_error {
                "invalid cost".to_string()
            } else {
                String::new()
            },
        }
    }

    mod raw_row_tests {
        use super::*;

        #[test]
        fn test_raw_row_blank_detection() {
            assert!(RawRow::default().is_blank());

            let mut row = RawRow::default();
            row.units_sold = Some("3".to_string());
            assert!(row.is_blank(), "units sold alone does not make a row");

            row.product = Some(" ".to_string());
            assert!(!row.is_blank(), "whitespace counts as content");
        }

        #[test]
        fn test_raw_row_field_access_by_column() {
            let mut row = RawRow::default();
            row.set_field("Costo", "500");
            row.set_field("Unknown", "ignored");

            assert_eq!(row.field("Costo"), Some("500"));
            assert_eq!(row.cost_text(), "500");
            assert_eq!(row.field("Producto"), None);
            assert_eq!(row.product_text(), "");
            assert_eq!(row.field("Unknown"), None);
        }
    }

    mod currency_tests {
        use super::*;

        #[test]
        fn test_currency_codes_and_symbols() {
            assert_eq!(Currency::default(), Currency::Ars);
            assert_eq!(Currency::Ars.code(), "ARS");
            assert_eq!(Currency::Usd.symbol(), "US$");
            assert_eq!(Currency::Usd.to_string(), "USD");
        }

        #[test]
        fn test_currency_from_str() {
            assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
            assert_eq!(" ARS ".parse::<Currency>().unwrap(), Currency::Ars);
            assert!("EUR".parse::<Currency>().is_err());
        }

        #[test]
        fn test_currency_serializes_as_code() {
            let json = serde_json::to_string(&Currency::Usd).unwrap();
            assert_eq!(json, "\"USD\"");
        }
    }

    mod product_tests {
        use super::*;

        #[test]
        fn test_product_search_is_case_insensitive() {
            let product = create_test_product("Bra Encaje Negro", false);
            assert!(product.matches_search("encaje"));
            assert!(product.matches_search("BRA"));
            assert!(product.matches_search(""));
            assert!(!product.matches_search("tanga"));
        }

        #[test]
        fn test_product_serializes_with_sheet_names() {
            let product = create_test_product("Bra A", false);
            let value = serde_json::to_value(&product).unwrap();
            assert_eq!(value["producto"], "Bra A");
            assert_eq!(value["precioVenta"], 150.0);
            assert_eq!(value["inventarioRestante"], 4.0);
            assert_eq!(value["hasError"], false);
        }

        #[test]
        fn test_sell_through() {
            let mut product = create_test_product("Bra A", false);
            assert_eq!(product.sell_through(), 50.0);

            product.units_purchased = 0.0;
            assert_eq!(product.sell_through(), 0.0);
        }
    }

    mod sheet_tests {
        use super::*;

        #[test]
        fn test_processed_sheet_counts() {
            let sheet = ProcessedSheet {
                products: vec![
                    create_test_product("A", false),
                    create_test_product("B", true),
                    create_test_product("C", false),
                ],
                summary: SummaryStats::default(),
                errors: vec!["Row 3: invalid cost for B".to_string()],
            };

            assert_eq!(sheet.product_count(), 3);
            assert_eq!(sheet.flagged_count(), 1);
            assert_eq!(sheet.valid_products().count(), 2);
            assert_eq!(sheet.error_count(), 1);
            assert!(!sheet.is_clean());
        }

        #[test]
        fn test_sold_percentage_without_purchases_is_not_finite() {
            let summary = SummaryStats::default();
            assert!(!summary.sold_percentage().is_finite());
        }
    }
}
