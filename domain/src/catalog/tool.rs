//! Diagnostic tool value object

use serde::{Deserialize, Serialize};

use crate::validation::{ConfigIssue, ConfigIssueCode, Severity};

/// A named diagnostic: an ordered list of yes/no questions (Value Object)
///
/// The name is the unique key used for selection; questions are identified
/// only by their position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticTool {
    name: String,
    description: String,
    questions: Vec<String>,
}

impl DiagnosticTool {
    /// Create a new diagnostic tool
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            questions,
        }
    }

    /// Get the tool name (unique key)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the one-line description shown in the tool picker
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the questions in presentation order
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Number of questions in this diagnostic
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Validate this tool definition, returning all detected issues.
    ///
    /// A tool with any `Error`-severity issue is unusable and should be
    /// skipped by catalog assembly.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyToolName,
                message: "tool has an empty name".to_string(),
            });
        }

        if self.questions.is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::NoQuestions,
                message: format!("tool '{}' has no questions", self.name),
            });
        }

        for (i, question) in self.questions.iter().enumerate() {
            if question.trim().is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyQuestion,
                    message: format!("tool '{}': question {} is empty", self.name, i + 1),
                });
            }
        }

        if self.description.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::EmptyDescription,
                message: format!("tool '{}' has no description", self.name),
            });
        }

        issues
    }
}

impl std::fmt::Display for DiagnosticTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(questions: Vec<&str>) -> DiagnosticTool {
        DiagnosticTool::new(
            "Sample Diagnostic",
            "A sample.",
            questions.into_iter().map(String::from).collect(),
        )
    }

    #[test]
    fn test_accessors() {
        let t = tool(vec!["First?", "Second?"]);
        assert_eq!(t.name(), "Sample Diagnostic");
        assert_eq!(t.description(), "A sample.");
        assert_eq!(t.question_count(), 2);
        assert_eq!(t.questions()[1], "Second?");
    }

    #[test]
    fn test_valid_tool_has_no_issues() {
        assert!(tool(vec!["First?"]).validate().is_empty());
    }

    #[test]
    fn test_empty_name_is_error() {
        let t = DiagnosticTool::new("  ", "desc", vec!["Q?".into()]);
        let issues = t.validate();
        assert!(issues
            .iter()
            .any(|i| i.code == ConfigIssueCode::EmptyToolName && i.severity == Severity::Error));
    }

    #[test]
    fn test_no_questions_is_error() {
        let t = DiagnosticTool::new("T", "desc", vec![]);
        let issues = t.validate();
        assert!(issues.iter().any(|i| i.code == ConfigIssueCode::NoQuestions));
    }

    #[test]
    fn test_blank_question_is_error() {
        let t = tool(vec!["First?", "   "]);
        let issues = t.validate();
        assert!(issues
            .iter()
            .any(|i| i.code == ConfigIssueCode::EmptyQuestion));
        assert!(issues[0].message.contains("question 2"));
    }

    #[test]
    fn test_missing_description_is_warning() {
        let t = DiagnosticTool::new("T", "", vec!["Q?".into()]);
        let issues = t.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }
}
