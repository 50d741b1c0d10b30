//! Tests for table search, sort and pagination

use super::*;
use crate::app::services::report::table::{SortDirection, SortField, TableQuery};

#[test]
fn test_default_query_sorts_by_profit_descending() {
    let products = create_catalogue();
    let query = TableQuery::default();

    assert_eq!(query.page, 1);
    assert_eq!(query.page_size, 25);
    assert_eq!(
        names(&query.apply(&products)),
        vec!["Bra A", "Tanga", "Flagged", "Camisón", "body"]
    );
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let products = create_catalogue();
    let query = TableQuery::new().with_search("BRA");

    assert_eq!(names(&query.apply(&products)), vec!["Bra A"]);

    let query = TableQuery::new().with_search("a");
    assert_eq!(query.apply(&products).len(), 4);
}

#[test]
fn test_product_sort_ignores_case() {
    let products = create_catalogue();
    let query = TableQuery::new().with_sort(SortField::Product, SortDirection::Asc);

    assert_eq!(
        names(&query.apply(&products)),
        vec!["body", "Bra A", "Camisón", "Flagged", "Tanga"]
    );
}

#[test]
fn test_sort_is_stable_for_ties() {
    let products = vec![
        create_product("First", 1.0, 2.0, 1.0, 1.0),
        create_product("Second", 5.0, 6.0, 1.0, 1.0),
        create_product("Third", 9.0, 10.0, 1.0, 1.0),
    ];

    let desc = TableQuery::new();
    assert_eq!(names(&desc.apply(&products)), vec!["First", "Second", "Third"]);

    let asc = TableQuery::new().with_sort(SortField::Profit, SortDirection::Asc);
    assert_eq!(names(&asc.apply(&products)), vec!["First", "Second", "Third"]);
}

#[test]
fn test_toggle_sort() {
    let mut query = TableQuery::new().with_page(3);

    query.toggle_sort(SortField::Profit);
    assert_eq!(query.sort_direction, SortDirection::Asc);
    assert_eq!(query.page, 1);

    query.toggle_sort(SortField::Profit);
    assert_eq!(query.sort_direction, SortDirection::Desc);

    query.toggle_sort(SortField::Profit);
    query.toggle_sort(SortField::Revenue);
    assert_eq!(query.sort_field, SortField::Revenue);
    assert_eq!(query.sort_direction, SortDirection::Desc);
}

#[test]
fn test_search_and_page_size_reset_page() {
    let mut query = TableQuery::new().with_page(4);
    query.set_search("bra");
    assert_eq!(query.page, 1);

    query.page = 2;
    query.set_page_size(10).unwrap();
    assert_eq!(query.page, 1);
    assert_eq!(query.page_size, 10);

    assert!(query.set_page_size(30).is_err());
    assert_eq!(query.page_size, 10);
}

#[test]
fn test_pagination_bounds() {
    let products: Vec<_> = (0..27)
        .map(|i| create_product(&format!("P{i:02}"), 1.0, 2.0, i as f64, 30.0))
        .collect();

    let query = TableQuery::new().with_page_size(10).with_page(3);
    let page = query.page_of(&products);

    assert_eq!(page.total_matches, 27);
    assert_eq!(page.total_pages(), 3);
    assert_eq!(page.rows.len(), 7);
    assert_eq!(page.showing_from(), 21);
    assert_eq!(page.showing_to(), 27);
    assert_eq!(page.previous_page(), 2);
    assert_eq!(page.next_page(), 3);
    assert!(!page.has_next());
    assert_eq!(page.summary_line(), "Showing 21 to 27 of 27 products (page 3 of 3)");

    let first = TableQuery::new().with_page_size(10).page_of(&products);
    assert_eq!(first.previous_page(), 1);
    assert_eq!(first.next_page(), 2);
    assert_eq!(first.showing_to(), 10);
}

#[test]
fn test_page_past_the_end_shows_last_page() {
    let products: Vec<_> = (0..27)
        .map(|i| create_product(&format!("P{i:02}"), 100.0, 200.0, 1.0, 1.0))
        .collect();

    let page = TableQuery::new()
        .with_page_size(10)
        .with_page(9)
        .page_of(&products);
    assert_eq!(page.page, 3);
    assert_eq!(page.rows.len(), 7);
    assert_eq!(page.showing_from(), 21);

    let query = TableQuery::new().with_page(usize::MAX);
    assert!(query.validate().is_ok());
    let page = query.page_of(&products);
    assert_eq!(page.page, 2);
    assert_eq!(page.rows.len(), 2);
    assert_eq!(page.showing_to(), 27);
    assert!(!page.has_next());
}

#[test]
fn test_page_with_no_matches() {
    let products = create_catalogue();
    let page = TableQuery::new().with_search("zzz").page_of(&products);

    assert!(page.rows.is_empty());
    assert_eq!(page.total_pages(), 0);
    assert_eq!(page.summary_line(), "No products match");
}

#[test]
fn test_query_validation() {
    assert!(TableQuery::default().validate().is_ok());
    assert!(TableQuery::new().with_page_size(7).validate().is_err());
}
