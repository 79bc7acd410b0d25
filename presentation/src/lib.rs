//! Presentation layer for clarity-hub
//!
//! This crate contains CLI definitions, the ratatui TUI, and the console
//! report formatters.

pub mod cli;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, ReportStyle};
pub use output::console::ReportFormatter;
pub use tui::{TuiApp, TuiOptions};
