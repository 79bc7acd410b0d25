//! Infrastructure layer for clarity-hub
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading and log file setup.

pub mod catalog;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use catalog::StaticCatalog;
pub use config::{
    ConfigError, ConfigLoader, FileCatalogConfig, FileConfig, FileToolConfig, FileTuiConfig,
};
pub use logging::init_file_logging;
