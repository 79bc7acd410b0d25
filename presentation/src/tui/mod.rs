//! TUI (Text User Interface) module for clarity-hub
//!
//! A terminal UI built with ratatui: landing screen, tool picker,
//! questionnaire, and report, all driven by the application controller.

mod app;
mod keymap;
mod state;
mod widgets;

pub use app::{TuiApp, TuiOptions};
