//! Search, sort and pagination over product rows
//!
//! A [`TableQuery`] holds the interactive table state. Every state change
//! other than moving between pages sends the user back to page 1.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::constants::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use crate::{Error, ProductRow, Result};

/// Sortable table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    Product,
    Cost,
    SalePrice,
    UnitsPurchased,
    UnitsSold,
    Investment,
    Recovered,
    Revenue,
    #[default]
    Profit,
    Margin,
    RecoveryPercentage,
    RemainingInventory,
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl SortField {
    /// Column header shown in tables
    pub fn title(self) -> &'static str {
        match self {
            Self::Product => "Product",
            Self::Cost => "Cost",
            Self::SalePrice => "Price",
            Self::UnitsPurchased => "Bought",
            Self::UnitsSold => "Sold",
            Self::Investment => "Investment",
            Self::Recovered => "Recovered",
            Self::Revenue => "Revenue",
            Self::Profit => "Profit",
            Self::Margin => "Margin",
            Self::RecoveryPercentage => "% Recov.",
            Self::RemainingInventory => "Stock",
        }
    }

    fn numeric_value(self, product: &ProductRow) -> f64 {
        match self {
            Self::Product => 0.0,
            Self::Cost => product.unit_cost,
            Self::SalePrice => product.sale_price,
            Self::UnitsPurchased => product.units_purchased,
            Self::UnitsSold => product.units_sold,
            Self::Investment => product.total_investment,
            Self::Recovered => product.money_recovered,
            Self::Revenue => product.revenue,
            Self::Profit => product.profit,
            Self::Margin => product.profit_margin,
            Self::RecoveryPercentage => product.recovery_percentage,
            Self::RemainingInventory => product.remaining_inventory,
        }
    }

    /// Compare two rows on this column in ascending order
    ///
    /// Product names compare case-insensitively.
    pub fn compare(self, a: &ProductRow, b: &ProductRow) -> Ordering {
        match self {
            Self::Product => a.product.to_lowercase().cmp(&b.product.to_lowercase()),
            _ => self
                .numeric_value(a)
                .partial_cmp(&self.numeric_value(b))
                .unwrap_or(Ordering::Equal),
        }
    }
}

/// Interactive table state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableQuery {
    /// Case-insensitive product name filter; empty matches everything
    pub search: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term (builder pattern)
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the sort column and direction (builder pattern)
    pub fn with_sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.sort_direction = direction;
        self
    }

    /// Set the page number (builder pattern)
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Set the page size (builder pattern)
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Check the page size against the offered options
    pub fn validate(&self) -> Result<()> {
        if !PAGE_SIZE_OPTIONS.contains(&self.page_size) {
            return Err(Error::configuration(format!(
                "Page size must be one of {:?}, got {}",
                PAGE_SIZE_OPTIONS, self.page_size
            )));
        }
        if self.page == 0 {
            return Err(Error::configuration("Page numbers start at 1"));
        }
        Ok(())
    }

    /// Sort by a column the way a header click does
    ///
    /// Clicking the current column flips the direction; a new column starts
    /// descending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if field == self.sort_field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Desc;
        }
        self.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            return Err(Error::configuration(format!(
                "Page size must be one of {:?}, got {}",
                PAGE_SIZE_OPTIONS, page_size
            )));
        }
        self.page_size = page_size;
        self.page = 1;
        Ok(())
    }

    /// Filter by the search term and sort; the sort is stable
    pub fn apply<'a>(&self, products: &'a [ProductRow]) -> Vec<&'a ProductRow> {
        let mut rows: Vec<&ProductRow> = products
            .iter()
            .filter(|p| p.matches_search(&self.search))
            .collect();

        rows.sort_by(|a, b| {
            let ordering = self.sort_field.compare(a, b);
            match self.sort_direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        rows
    }

    /// Filter, sort and cut out the current page
    ///
    /// A page past the end is clamped to the last page.
    pub fn page_of<'a>(&self, products: &'a [ProductRow]) -> TablePage<'a> {
        let matches = self.apply(products);
        let total_matches = matches.len();
        let page_size = self.page_size.max(1);
        let last_page = total_matches.div_ceil(page_size).max(1);
        let page = self.page.clamp(1, last_page);
        let start = (page - 1) * page_size;

        let rows = matches.into_iter().skip(start).take(page_size).collect();

        TablePage {
            rows,
            page,
            page_size,
            total_matches,
        }
    }
}

/// One page of the queried table
#[derive(Debug, Clone)]
pub struct TablePage<'a> {
    pub rows: Vec<&'a ProductRow>,
    pub page: usize,
    pub page_size: usize,
    /// Rows matching the search across all pages
    pub total_matches: usize,
}

impl TablePage<'_> {
    pub fn total_pages(&self) -> usize {
        self.total_matches.div_ceil(self.page_size)
    }

    fn start_index(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// 1-based position of the first row on this page
    pub fn showing_from(&self) -> usize {
        self.start_index() + 1
    }

    /// 1-based position of the last row on this page
    pub fn showing_to(&self) -> usize {
        self.start_index()
            .saturating_add(self.page_size)
            .min(self.total_matches)
    }

    pub fn previous_page(&self) -> usize {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> usize {
        self.page.saturating_add(1).min(self.total_pages()).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Pagination footer line
    pub fn summary_line(&self) -> String {
        if self.total_matches == 0 {
            return "No products match".to_string();
        }
        format!(
            "Showing {} to {} of {} products (page {} of {})",
            self.showing_from(),
            self.showing_to(),
            self.total_matches,
            self.page,
            self.total_pages()
        )
    }
}
