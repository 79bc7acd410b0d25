//! Configuration file loading for clarity-hub
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./clarity.toml` or `./.clarity.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/clarity-hub/config.toml`
//! 4. Fallback: `~/.config/clarity-hub/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileCatalogConfig, FileConfig, FileToolConfig, FileTuiConfig};
pub use loader::{ConfigError, ConfigLoader};
