//! Catalog assembly
//!
//! Builds the read-only tool catalog offered to the user: the built-in
//! diagnostics merged with tools defined in configuration. Invalid or
//! duplicate definitions are skipped with a log line, never fatal.

use clarity_application::CatalogPort;
use clarity_domain::{builtin_tools, DiagnosticTool};
use tracing::warn;

use crate::config::FileConfig;

/// The assembled, immutable tool catalog
pub struct StaticCatalog {
    tools: Vec<DiagnosticTool>,
}

impl StaticCatalog {
    /// Assemble the catalog from configuration.
    ///
    /// Built-ins come first (unless disabled), then configured tools in
    /// definition order. A configured tool is dropped when its definition
    /// has a fatal issue or its name collides with an earlier tool.
    pub fn from_config(config: &FileConfig) -> Self {
        let mut tools: Vec<DiagnosticTool> = if config.catalog.include_builtin {
            builtin_tools()
        } else {
            Vec::new()
        };

        for entry in &config.catalog.tools {
            let tool = entry.to_tool();

            let issues = tool.validate();
            if let Some(fatal) = issues.iter().find(|i| i.is_fatal()) {
                warn!(tool = tool.name(), "skipping configured tool: {}", fatal.message);
                continue;
            }
            for issue in &issues {
                warn!(tool = tool.name(), "{}", issue.message);
            }

            if tools.iter().any(|t| t.name() == tool.name()) {
                warn!(
                    tool = tool.name(),
                    "skipping configured tool: name already in catalog"
                );
                continue;
            }

            tools.push(tool);
        }

        Self { tools }
    }

    /// Catalog with only the built-in diagnostics
    pub fn builtin() -> Self {
        Self {
            tools: builtin_tools(),
        }
    }
}

impl CatalogPort for StaticCatalog {
    fn tools(&self) -> &[DiagnosticTool] {
        &self.tools
    }
}
