//! Report command implementation
//!
//! Renders a processed sheet as a terminal report, a JSON document or the CSV
//! export of the queried table.

use super::shared::{CommandOutcome, load_and_process, load_configuration};
use crate::app::services::report::{
    CardTone, DiagnosticsView, Rankings, RecoveryBand, RowHighlight, SortDirection, TableQuery,
    export_to_string, format_currency, format_percentage, format_quantity, mean_profit,
    summary_cards, truncate_name,
};
use crate::cli::args::{OutputFormat, ReportArgs};
use crate::config::Config;
use crate::{Currency, ProcessedSheet, ProductRow, Result, SummaryStats};
use chrono::{DateTime, Local, Utc};
use colored::*;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

const PRODUCT_COLUMN_WIDTH: usize = 24;

/// Report command runner
pub async fn run_report(args: ReportArgs) -> Result<CommandOutcome> {
    let start_time = Instant::now();
    debug!("Report arguments: {:?}", args);

    let config = load_configuration(&args.common)?;
    let query = args.query.build_query(&config)?;

    let (_, sheet) = load_and_process(&args.input).await?;

    let rendered = render_report(
        &args.input,
        &sheet,
        &query,
        &config,
        args.format,
        args.all_rows,
    )?;
    print!("{}", rendered);

    let outcome = CommandOutcome::from_sheet(&sheet).with_elapsed(start_time.elapsed());
    info!(
        "Report completed in {:.2}s",
        outcome.elapsed.as_secs_f64()
    );
    Ok(outcome)
}

/// Render a processed sheet in the requested format
pub fn render_report(
    source: &Path,
    sheet: &ProcessedSheet,
    query: &TableQuery,
    config: &Config,
    format: OutputFormat,
    all_rows: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(render_human_report(source, sheet, query, config, all_rows)),
        OutputFormat::Json => render_json_report(source, sheet, query, config, all_rows),
        OutputFormat::Csv => export_to_string(&query.apply(&sheet.products)),
    }
}

/// Pagination details carried in the JSON document
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    page: usize,
    page_size: usize,
    total_pages: usize,
    total_matches: usize,
}

/// JSON report document
///
/// `products`, `summary` and `errors` keep the processing result's field
/// names; `products` holds the queried rows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportDocument<'a> {
    source: String,
    generated_at: DateTime<Utc>,
    query: &'a TableQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<PageInfo>,
    products: Vec<&'a ProductRow>,
    summary: &'a SummaryStats,
    errors: &'a [String],
    rankings: Rankings,
}

fn render_json_report(
    source: &Path,
    sheet: &ProcessedSheet,
    query: &TableQuery,
    config: &Config,
    all_rows: bool,
) -> Result<String> {
    let (products, page) = if all_rows {
        (query.apply(&sheet.products), None)
    } else {
        let table_page = query.page_of(&sheet.products);
        let info = PageInfo {
            page: table_page.page,
            page_size: table_page.page_size,
            total_pages: table_page.total_pages(),
            total_matches: table_page.total_matches,
        };
        (table_page.rows, Some(info))
    };

    let document = ReportDocument {
        source: source.display().to_string(),
        generated_at: Utc::now(),
        query,
        page,
        products,
        summary: &sheet.summary,
        errors: &sheet.errors,
        rankings: Rankings::build(&sheet.products, &config.rankings),
    };

    let mut json = serde_json::to_string_pretty(&document)?;
    json.push('\n');
    Ok(json)
}

/// Render the terminal report
pub fn render_human_report(
    source: &Path,
    sheet: &ProcessedSheet,
    query: &TableQuery,
    config: &Config,
    all_rows: bool,
) -> String {
    let mut out = String::new();
    let currency = sheet.summary.currency;

    let _ = writeln!(
        out,
        "{}  {}",
        "Product Report".bright_green().bold(),
        source.display()
    );
    let _ = writeln!(
        out,
        "Generated {} | Currency: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        currency
    );

    write_summary_cards(&mut out, sheet);
    write_product_table(&mut out, sheet, query, all_rows);
    write_rankings(&mut out, sheet, config, currency);
    write_diagnostics(&mut out, &sheet.errors, config.display.diagnostics_limit);

    out
}

fn write_summary_cards(out: &mut String, sheet: &ProcessedSheet) {
    let _ = writeln!(out, "\n{}", "Summary".bright_white().bold());

    for card in summary_cards(&sheet.summary, sheet.error_count()) {
        let value = format!("{:<18}", card.value);
        let value = match card.tone {
            CardTone::Positive => value.green(),
            CardTone::Negative => value.red(),
            CardTone::Neutral => value.normal(),
        };
        let _ = writeln!(
            out,
            "  {:<20} {} {}",
            card.title,
            value.bold(),
            card.subtitle.dimmed()
        );
    }
}

fn write_product_table(
    out: &mut String,
    sheet: &ProcessedSheet,
    query: &TableQuery,
    all_rows: bool,
) {
    let direction = match query.sort_direction {
        SortDirection::Asc => "ascending",
        SortDirection::Desc => "descending",
    };
    let _ = write!(
        out,
        "\n{} (sorted by {}, {}",
        "Products".bright_white().bold(),
        query.sort_field.title(),
        direction
    );
    if !query.search.is_empty() {
        let _ = write!(out, ", matching \"{}\"", query.search);
    }
    let _ = writeln!(out, ")");

    let _ = writeln!(
        out,
        "   {:<width$} {:>12} {:>12} {:>7} {:>7} {:>14} {:>14} {:>14} {:>9} {:>6}",
        "Product",
        "Cost",
        "Price",
        "Bought",
        "Sold",
        "Investment",
        "Recovered",
        "Profit",
        "% Recov.",
        "Stock",
        width = PRODUCT_COLUMN_WIDTH
    );

    let mean = mean_profit(&sheet.products);
    let currency = sheet.summary.currency;

    let (rows, footer) = if all_rows {
        let rows = query.apply(&sheet.products);
        let footer = format!("{} products", rows.len());
        (rows, footer)
    } else {
        let page = query.page_of(&sheet.products);
        let footer = page.summary_line();
        (page.rows, footer)
    };

    for product in rows {
        let _ = writeln!(out, "{}", format_product_line(product, mean, currency));
        if product.has_error {
            let _ = writeln!(out, "     {}", product.error_message.red());
        }
    }

    let _ = writeln!(out, "{}", footer.dimmed());
}

fn format_product_line(product: &ProductRow, mean: f64, currency: Currency) -> String {
    let marker = match RowHighlight::classify(product, mean) {
        RowHighlight::Error => "!".red().bold(),
        RowHighlight::Loss => "-".red(),
        RowHighlight::AboveAverage => "+".green(),
        RowHighlight::Normal => " ".normal(),
    };

    let profit = format!("{:>14}", format_currency(product.profit, currency));
    let profit = if product.profit < 0.0 {
        profit.red()
    } else {
        profit.green()
    };

    let recovery = format!("{:>9}", format_percentage(product.recovery_percentage));
    let recovery = colorize_band(recovery, RecoveryBand::from_percentage(product.recovery_percentage));

    format!(
        " {} {:<width$} {:>12} {:>12} {:>7} {:>7} {:>14} {:>14} {} {} {:>6}",
        marker,
        truncate_name(&product.product, PRODUCT_COLUMN_WIDTH - 3),
        format_currency(product.unit_cost, currency),
        format_currency(product.sale_price, currency),
        format_quantity(product.units_purchased),
        format_quantity(product.units_sold),
        format_currency(product.total_investment, currency),
        format_currency(product.money_recovered, currency),
        profit,
        recovery,
        format_quantity(product.remaining_inventory),
        width = PRODUCT_COLUMN_WIDTH
    )
}

fn colorize_band(text: String, band: RecoveryBand) -> ColoredString {
    match band {
        RecoveryBand::Recovered => text.green(),
        RecoveryBand::Partial => text.yellow(),
        RecoveryBand::Low => text.red(),
    }
}

fn write_rankings(out: &mut String, sheet: &ProcessedSheet, config: &Config, currency: Currency) {
    let rankings = Rankings::build(&sheet.products, &config.rankings);
    if rankings.is_empty() {
        return;
    }

    if !rankings.top_profit.is_empty() {
        let _ = writeln!(out, "\n{}", "Top Profit".bright_white().bold());
        for entry in &rankings.top_profit {
            let _ = writeln!(
                out,
                "  {:<18} {:>14}  revenue {}  cost {}",
                entry.label,
                format_currency(entry.profit, currency),
                format_currency(entry.revenue, currency),
                format_currency(entry.total_cost, currency)
            );
        }
    }

    if !rankings.top_recovery.is_empty() {
        let _ = writeln!(out, "\n{}", "Best Recovery".bright_white().bold());
        for entry in &rankings.top_recovery {
            let percentage = format!("{:>9}", format_percentage(entry.recovery_percentage));
            let _ = writeln!(
                out,
                "  {:<18} {}  {}",
                entry.label,
                colorize_band(percentage, entry.band),
                entry.band.label()
            );
        }
    }
}

fn write_diagnostics(out: &mut String, errors: &[String], limit: usize) {
    let view = DiagnosticsView::new(errors, limit);
    if view.is_empty() {
        return;
    }

    let _ = writeln!(
        out,
        "\n{} ({})",
        "Diagnostics".bright_yellow().bold(),
        errors.len()
    );
    for diagnostic in view.shown {
        let _ = writeln!(out, "  {}", diagnostic);
    }
    if let Some(line) = view.overflow_line() {
        let _ = writeln!(out, "  {}", line.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RawRow, process_sheet};
    use std::path::PathBuf;

    fn create_sheet() -> ProcessedSheet {
        let rows = vec![
            RawRow::new("Bra A", "500", "1200", "10", "15"),
            RawRow::new("Tanga", "", "250", "", "10"),
            RawRow::new("Body", "100", "50", "1", "4"),
        ];
        process_sheet(&rows, "Producto,Costo")
    }

    #[test]
    fn test_human_report_sections() {
        colored::control::set_override(false);
        let sheet = create_sheet();
        let config = Config::default();
        let text = render_human_report(
            &PathBuf::from("productos.csv"),
            &sheet,
            &config.table_query(),
            &config,
            false,
        );

        assert!(text.contains("Product Report  productos.csv"));
        assert!(text.contains("Currency: ARS"));
        assert!(text.contains("Total Profit"));
        assert!(text.contains("Errors Found"));
        assert!(text.contains("Showing 1 to 3 of 3 products (page 1 of 1)"));
        assert!(text.contains("invalid cost"));
        assert!(text.contains("Top Profit"));
        assert!(text.contains("Best Recovery"));
        assert!(text.contains("Diagnostics (2)"));
        assert!(text.contains("Row 3: empty sold quantity for Tanga (assuming 1)"));
    }

    #[test]
    fn test_human_report_truncates_diagnostics() {
        colored::control::set_override(false);
        let sheet = create_sheet();
        let config = Config::default().with_diagnostics_limit(1);
        let text = render_human_report(
            &PathBuf::from("productos.csv"),
            &sheet,
            &config.table_query(),
            &config,
            true,
        );

        assert!(text.contains("Row 3: invalid cost for Tanga"));
        assert!(text.contains("...and 1 more errors"));
        assert!(text.contains("3 products"));
    }

    #[test]
    fn test_json_report_uses_wire_names() {
        let sheet = create_sheet();
        let config = Config::default();
        let json = render_report(
            &PathBuf::from("productos.csv"),
            &sheet,
            &config.table_query(),
            &config,
            OutputFormat::Json,
            false,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["source"], "productos.csv");
        assert_eq!(value["products"][0]["producto"], "Bra A");
        assert_eq!(value["products"][0]["ganancia"], 7000.0);
        assert_eq!(value["summary"]["currency"], "ARS");
        assert_eq!(value["errors"].as_array().unwrap().len(), 2);
        assert_eq!(value["page"]["totalMatches"], 3);
        assert!(value["rankings"]["topProfit"].is_array());
        assert!(value["rankings"]["topRecovery"].is_array());
        assert_eq!(value["rankings"]["topProfit"][0]["totalCost"], 5000.0);
        assert_eq!(value["query"]["sortField"], "profit");
        assert_eq!(value["query"]["pageSize"], 25);
        assert!(value["rankings"].get("top_profit").is_none());
    }

    #[test]
    fn test_csv_report_exports_all_matches() {
        let sheet = create_sheet();
        let config = Config::default();
        let query = config.table_query().with_search("a");
        let csv = render_report(
            &PathBuf::from("productos.csv"),
            &sheet,
            &query,
            &config,
            OutputFormat::Csv,
            false,
        )
        .unwrap();

        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Bra A,"));
        assert!(lines[2].starts_with("Tanga,"));
    }
}
