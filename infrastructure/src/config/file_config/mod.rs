//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types where
//! appropriate.

use clarity_domain::{ConfigIssue, ConfigIssueCode, DiagnosticTool, Severity};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// TUI settings
    pub tui: FileTuiConfig,
    /// Catalog settings
    pub catalog: FileCatalogConfig,
}

impl FileConfig {
    /// Validate the configured catalog entries, returning all detected
    /// issues. Issues never abort startup; fatal ones cause the affected
    /// tool to be skipped during catalog assembly.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for tool in &self.catalog.tools {
            issues.extend(tool.to_tool().validate());
        }

        // Duplicates within the configured list
        for (i, tool) in self.catalog.tools.iter().enumerate() {
            if self.catalog.tools[..i].iter().any(|t| t.name == tool.name) {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::DuplicateToolName,
                    message: format!("tool '{}' is defined more than once", tool.name),
                });
            }
        }

        issues
    }
}

/// TUI configuration from TOML (`[tui]` section)
///
/// # Example
///
/// ```toml
/// [tui]
/// show_dots = true
/// flex_threshold = 90
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Whether to render the per-question dot row (default: true)
    pub show_dots: bool,
    /// Terminal width below which the questionnaire drops its side padding
    pub flex_threshold: u16,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            show_dots: true,
            flex_threshold: 90,
        }
    }
}

/// Catalog configuration from TOML (`[catalog]` section)
///
/// # Example
///
/// ```toml
/// [catalog]
/// include_builtin = true
///
/// [[catalog.tools]]
/// name = "Team Health Diagnostic"
/// description = "Check in on how the team is doing."
/// questions = [
///     "Do you hold regular one-on-ones?",
///     "Does everyone know this quarter's goals?",
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Whether the three built-in diagnostics are offered (default: true)
    pub include_builtin: bool,
    /// Additional tools defined in configuration
    pub tools: Vec<FileToolConfig>,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            tools: Vec::new(),
        }
    }
}

/// One configured tool definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolConfig {
    pub name: String,
    pub description: String,
    pub questions: Vec<String>,
}

impl FileToolConfig {
    /// Convert to the domain representation
    pub fn to_tool(&self) -> DiagnosticTool {
        DiagnosticTool::new(
            self.name.clone(),
            self.description.clone(),
            self.questions.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_clean() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_empty_custom_tool_is_flagged() {
        let config = FileConfig {
            catalog: FileCatalogConfig {
                tools: vec![FileToolConfig {
                    name: "Broken".into(),
                    description: "desc".into(),
                    questions: vec![],
                }],
                ..Default::default()
            },
            ..Default::default()
        };
        let issues = config.validate();
        assert!(issues
            .iter()
            .any(|i| i.code == ConfigIssueCode::NoQuestions && i.is_fatal()));
    }

    #[test]
    fn test_duplicate_names_are_flagged() {
        let tool = FileToolConfig {
            name: "Twice".into(),
            description: "desc".into(),
            questions: vec!["Q?".into()],
        };
        let config = FileConfig {
            catalog: FileCatalogConfig {
                tools: vec![tool.clone(), tool],
                ..Default::default()
            },
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(
            issues
                .iter()
                .filter(|i| i.code == ConfigIssueCode::DuplicateToolName)
                .count(),
            1
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_src = r#"
[tui]
show_dots = false
flex_threshold = 100

[catalog]
include_builtin = false

[[catalog.tools]]
name = "Custom"
description = "A custom diagnostic."
questions = ["One?", "Two?"]
"#;
        let config: FileConfig = toml::from_str(toml_src).unwrap();
        assert!(!config.tui.show_dots);
        assert_eq!(config.tui.flex_threshold, 100);
        assert!(!config.catalog.include_builtin);
        assert_eq!(config.catalog.tools[0].questions.len(), 2);
    }
}
