use anyhow::Context;
use clap::Parser;
use product_metrics::cli::{
    args::{Args, Commands},
    commands,
};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let watching = matches!(args.command, Some(Commands::Watch(_)));

    let runtime = build_runtime().unwrap_or_else(|e| {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    eprintln!("Failed to listen for CTRL+C: {}", e);
                }
                eprintln!("\nReceived CTRL+C, shutting down...");
                if watching {
                    Ok(commands::CommandOutcome::default())
                } else {
                    Err(product_metrics::Error::processing_interrupted(
                        "Processing interrupted by user",
                    ))
                }
            }
        }
    });

    match result {
        Ok(outcome) if outcome.check_failed => process::exit(1),
        Ok(_) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn build_runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().context("Failed to create async runtime")
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Product Metrics - Spreadsheet Profit and Inventory Reports");
    println!("===========================================================");
    println!();
    println!("Reads a CSV export with Producto, Costo, PrecioVenta, CantidadVendida and");
    println!("CantidadComprada columns and reports profit, margin, investment recovery");
    println!("and remaining inventory per product and in total.");
    println!();
    println!("USAGE:");
    println!("    product-metrics <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    report      Print the product report for an export");
    println!("    validate    Check an export and list its diagnostics");
    println!("    export      Write the queried product table to a CSV file");
    println!("    watch       Reprint the report whenever the export changes");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Report sorted by recovery, ten rows per page:");
    println!("    product-metrics report productos.csv --sort recovery-percentage --page-size 10");
    println!();
    println!("    # Machine-readable output:");
    println!("    product-metrics report productos.csv --format json --all");
    println!();
    println!("    # Fail when any row needs fixing:");
    println!("    product-metrics validate productos.csv --strict");
    println!();
    println!("    # Export matching products:");
    println!("    product-metrics export productos.csv --search bra -o bras.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    product-metrics <COMMAND> --help");
}
