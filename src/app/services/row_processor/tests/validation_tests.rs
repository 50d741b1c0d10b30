//! Tests for row validation policy

use super::*;
use crate::app::services::row_processor::validation::{
    RowAssessment, RowIssue, empty_product_diagnostic,
};

#[test]
fn test_issue_labels() {
    assert_eq!(RowIssue::InvalidCost.label(), "invalid cost");
    assert_eq!(RowIssue::InvalidSalePrice.label(), "invalid sale price");
    assert_eq!(
        RowIssue::InvalidPurchasedQuantity.label(),
        "invalid purchased quantity"
    );
    assert_eq!(RowIssue::InvalidSoldQuantity.label(), "invalid sold quantity");
    assert_eq!(
        RowIssue::EmptyPurchasedQuantity.label(),
        "empty purchased quantity"
    );
}

#[test]
fn test_only_empty_sold_quantity_is_a_note() {
    assert!(!RowIssue::EmptySoldQuantity.is_defect());
    for issue in [
        RowIssue::InvalidCost,
        RowIssue::InvalidSalePrice,
        RowIssue::InvalidPurchasedQuantity,
        RowIssue::InvalidSoldQuantity,
        RowIssue::EmptyPurchasedQuantity,
    ] {
        assert!(issue.is_defect(), "{issue:?} should flag the row");
    }
}

#[test]
fn test_diagnostic_text() {
    assert_eq!(
        RowIssue::InvalidCost.diagnostic(4, "Bra A"),
        "Row 4: invalid cost for Bra A"
    );
    assert_eq!(
        RowIssue::EmptySoldQuantity.diagnostic(7, "Tanga"),
        "Row 7: empty sold quantity for Tanga (assuming 1)"
    );
    assert_eq!(empty_product_diagnostic(3), "Row 3: empty product");
}

#[test]
fn test_assess_clean_row() {
    let raw = create_reference_row();
    let assessment = RowAssessment::assess(&raw, Some(500.0), Some(1200.0), 10.0, 15.0);

    assert!(assessment.issues.is_empty());
    assert!(!assessment.has_error());
    assert_eq!(assessment.error_message(), "");
    assert!(assessment.diagnostics(2, "Bra A").is_empty());
}

#[test]
fn test_assess_reports_issues_in_check_order() {
    let raw = create_row("Bra A", "x", "", "", "");
    let assessment = RowAssessment::assess(&raw, None, None, 1.0, 0.0);

    assert_eq!(
        assessment.issues,
        vec![
            RowIssue::InvalidCost,
            RowIssue::InvalidSalePrice,
            RowIssue::InvalidPurchasedQuantity,
            RowIssue::EmptySoldQuantity,
            RowIssue::EmptyPurchasedQuantity,
        ]
    );
    assert_eq!(
        assessment.error_message(),
        "invalid cost, invalid sale price, invalid purchased quantity, empty purchased quantity"
    );
    assert_eq!(assessment.diagnostics(5, "Bra A").len(), 5);
}

#[test]
fn test_assess_negative_sold_quantity() {
    let raw = create_reference_row();
    let assessment = RowAssessment::assess(&raw, Some(1.0), Some(2.0), -1.0, 3.0);

    assert_eq!(assessment.issues, vec![RowIssue::InvalidSoldQuantity]);
    assert!(assessment.has_error());
}

#[test]
fn test_assess_empty_sold_quantity_does_not_flag() {
    let raw = create_row("Bra A", "500", "1200", "  ", "15");
    let assessment = RowAssessment::assess(&raw, Some(500.0), Some(1200.0), 1.0, 15.0);

    assert_eq!(assessment.issues, vec![RowIssue::EmptySoldQuantity]);
    assert!(!assessment.has_error());
    assert_eq!(assessment.error_message(), "");
}

#[test]
fn test_assess_missing_purchased_field_flags_despite_default() {
    let mut raw = create_reference_row();
    raw.units_purchased = None;
    let assessment = RowAssessment::assess(&raw, Some(500.0), Some(1200.0), 10.0, 1.0);

    assert_eq!(assessment.issues, vec![RowIssue::EmptyPurchasedQuantity]);
    assert!(assessment.has_error());
}
