//! Pipeline orchestration over raw spreadsheet rows
//!
//! [`process_sheet`] is a pure function of its inputs: no state is kept
//! between calls and the same input always yields the same output.

use crate::app::services::field_parser::{detect_currency, is_blank, parse_amount, parse_quantity};
use crate::constants::ROW_NUMBER_OFFSET;
use crate::{ProcessedSheet, RawRow};
use tracing::{debug, info};

use super::{
    metrics::{BaseValues, derive_product},
    summary::summarize,
    validation::{RowAssessment, empty_product_diagnostic},
};

/// Process raw rows into product rows, summary statistics and diagnostics
///
/// # Arguments
///
/// * `rows` - Raw rows in sheet order, header excluded
/// * `source_text` - The full document text, used only for currency detection
///
/// # Returns
///
/// A [`ProcessedSheet`]; this never fails. Defective rows are flagged, rows
/// without a product name are dropped, and every problem is described in
/// `errors`.
pub fn process_sheet(rows: &[RawRow], source_text: &str) -> ProcessedSheet {
    let currency = detect_currency(source_text);
    let mut products = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();

    info!(
        "Processing {} spreadsheet rows (currency {})",
        rows.len(),
        currency
    );

    for (index, raw) in rows.iter().enumerate() {
        let row_number = index + ROW_NUMBER_OFFSET;

        if raw.is_blank() {
            debug!("Row {}: blank, skipped", row_number);
            continue;
        }

        if is_blank(raw.product_text()) {
            debug!("Row {}: no product name, dropped", row_number);
            errors.push(empty_product_diagnostic(row_number));
            continue;
        }

        let product = raw.product_text().to_string();
        let unit_cost = parse_amount(raw.cost_text());
        let sale_price = parse_amount(raw.sale_price_text());
        let units_sold = parse_quantity(raw.units_sold_text());
        let units_purchased = parse_quantity(raw.units_purchased_text());

        let assessment =
            RowAssessment::assess(raw, unit_cost, sale_price, units_sold, units_purchased);
        errors.extend(assessment.diagnostics(row_number, &product));

        let has_error = assessment.has_error();
        if has_error {
            debug!(
                "Row {}: '{}' flagged ({})",
                row_number,
                product,
                assessment.error_message()
            );
        }

        let base = BaseValues::from_parsed(unit_cost, sale_price, units_sold, units_purchased);
        products.push(derive_product(
            product,
            base,
            has_error,
            assessment.error_message(),
        ));
    }

    let summary = summarize(&products, currency);
    let sheet = ProcessedSheet {
        products,
        summary,
        errors,
    };

    info!("Row processing complete: {}", sheet.summary_line());
    sheet
}
