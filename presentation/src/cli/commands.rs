//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output style for the report echoed after the TUI exits
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportStyle {
    /// Tally plus the full question/answer listing
    Full,
    /// Tally only
    Summary,
    /// JSON output
    Json,
}

/// CLI arguments for clarity-hub
#[derive(Parser, Debug)]
#[command(name = "clarity-hub")]
#[command(author, version, about = "Business diagnostics - pick a tool, answer yes/no, get a report")]
#[command(long_about = r#"
Clarity Hub runs short yes/no business diagnostics in your terminal.

Pick one of the built-in tools (Data Hygiene, Marketing Effectiveness,
Cash Flow) or define your own in configuration, answer each question,
and read the summary report. Finish a diagnostic and quit from the
report screen to have the report echoed to stdout as well.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./clarity.toml      Project-level config
3. ~/.config/clarity-hub/config.toml   Global config

Example:
  clarity-hub
  clarity-hub --tool "Cash Flow & Financial Clarity Diagnostic"
  clarity-hub --list-tools
"#)]
pub struct Cli {
    /// Skip the landing and picker screens, starting directly in the named
    /// tool's questionnaire
    #[arg(short, long, value_name = "NAME")]
    pub tool: Option<String>,

    /// List the available tools and exit
    #[arg(long)]
    pub list_tools: bool,

    /// Style of the report echoed on exit
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: ReportStyle,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
