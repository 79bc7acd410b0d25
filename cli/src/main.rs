//! CLI entrypoint for Clarity Hub
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use clarity_application::CatalogPort;
use clarity_infrastructure::{init_file_logging, ConfigLoader, StaticCatalog};
use clarity_presentation::{Cli, ReportFormatter, ReportStyle, TuiApp, TuiOptions};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging level based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // Catalog listing runs without the TUI, so log to the console
    if cli.list_tools {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
        let catalog = StaticCatalog::from_config(&config);
        print!("{}", ReportFormatter::format_catalog(catalog.tools()));
        return Ok(());
    }

    // The TUI owns the terminal; logs go to a file. The guard must live
    // until exit so buffered lines are flushed.
    let _log_guard = init_file_logging(filter)?;
    info!("Starting Clarity Hub");

    // === Dependency Injection ===
    let catalog = Arc::new(StaticCatalog::from_config(&config));
    let options = TuiOptions {
        show_dots: config.tui.show_dots,
        flex_threshold: config.tui.flex_threshold,
    };

    let mut app = TuiApp::new(catalog, options);
    if let Some(name) = &cli.tool {
        info!(tool = %name, "starting directly in questionnaire");
        app = app.with_start_tool(name);
    }

    let report = app.run().await?;

    // Echo the finished report now that the terminal is back to normal
    if let Some(report) = report {
        let output = match cli.output {
            ReportStyle::Full => ReportFormatter::format(&report),
            ReportStyle::Summary => ReportFormatter::format_summary(&report),
            ReportStyle::Json => ReportFormatter::format_json(&report),
        };
        println!("{}", output);
    }

    Ok(())
}
