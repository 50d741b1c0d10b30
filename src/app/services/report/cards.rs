//! Summary cards and the diagnostics list

use serde::{Deserialize, Serialize};

use super::format::{format_currency, format_percentage, format_quantity};
use crate::SummaryStats;

/// Color hint for a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardTone {
    Neutral,
    Positive,
    Negative,
}

/// One headline figure with a caption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCard {
    pub title: String,
    pub value: String,
    pub subtitle: String,
    pub tone: CardTone,
}

impl SummaryCard {
    fn new(
        title: &str,
        value: impl Into<String>,
        subtitle: impl Into<String>,
        tone: CardTone,
    ) -> Self {
        Self {
            title: title.to_string(),
            value: value.into(),
            subtitle: subtitle.into(),
            tone,
        }
    }
}

/// Headline cards for a summary, plus an error card when diagnostics exist
pub fn summary_cards(summary: &SummaryStats, error_count: usize) -> Vec<SummaryCard> {
    let currency = summary.currency;
    let profit_tone = if summary.total_profit >= 0.0 {
        CardTone::Positive
    } else {
        CardTone::Negative
    };

    let mut cards = vec![
        SummaryCard::new(
            "Units Sold",
            format!(
                "{} / {}",
                format_quantity(summary.total_units_sold),
                format_quantity(summary.total_units_purchased)
            ),
            format!("{} sold", format_percentage(summary.sold_percentage())),
            CardTone::Neutral,
        ),
        SummaryCard::new(
            "Total Investment",
            format_currency(summary.total_investment, currency),
            format!(
                "{} units purchased",
                format_quantity(summary.total_units_purchased)
            ),
            CardTone::Neutral,
        ),
        SummaryCard::new(
            "Money Recovered",
            format_currency(summary.total_money_recovered, currency),
            format!(
                "{} of investment",
                format_percentage(summary.average_recovery_percentage)
            ),
            CardTone::Positive,
        ),
        SummaryCard::new(
            "Remaining Inventory",
            format!(
                "{} units",
                format_quantity(summary.total_remaining_inventory)
            ),
            format_currency(summary.total_remaining_inventory_value, currency),
            CardTone::Neutral,
        ),
        SummaryCard::new(
            "Total Profit",
            format_currency(summary.total_profit, currency),
            format!("Margin: {}", format_percentage(summary.average_margin)),
            profit_tone,
        ),
    ];

    if error_count > 0 {
        cards.push(SummaryCard::new(
            "Errors Found",
            error_count.to_string(),
            "Review the table to fix them",
            CardTone::Negative,
        ));
    }

    cards
}

/// The first few diagnostics and a count of the rest
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticsView<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

impl<'a> DiagnosticsView<'a> {
    pub fn new(errors: &'a [String], limit: usize) -> Self {
        let shown = &errors[..errors.len().min(limit)];
        Self {
            shown,
            hidden: errors.len() - shown.len(),
        }
    }

    /// `...and N more errors`, when anything was cut
    pub fn overflow_line(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("...and {} more errors", self.hidden))
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }
}
