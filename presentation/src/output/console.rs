//! Console output formatter for diagnostic reports
//!
//! Used for `--list-tools` and for echoing the final report to stdout once
//! the TUI has released the terminal.

use chrono::Local;
use colored::Colorize;
use clarity_domain::{DiagnosticTool, ReportSummary};
use serde_json::json;

/// Formats diagnostic reports for console display
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format the complete report: tally plus the question/answer listing
    pub fn format(report: &ReportSummary) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Diagnostic Report"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Tool:".cyan().bold(),
            report.tool_name()
        ));
        output.push_str(&format!(
            "{} {}\n\n",
            "Generated:".cyan().bold(),
            Local::now().format("%Y-%m-%d %H:%M")
        ));

        output.push_str(&Self::tally_line(report));

        if !report.answers().is_empty() {
            output.push_str(&Self::section_header("Answers"));
            for (i, answer) in report.answers().iter().enumerate() {
                let mark = if answer.choice().is_yes() {
                    "Yes".green().bold()
                } else {
                    "No".red().bold()
                };
                output.push_str(&format!("{:>3}. [{}] {}\n", i + 1, mark, answer.question()));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the tally only (concise output)
    pub fn format_summary(report: &ReportSummary) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n\n",
            "=== Diagnostic Summary ===".cyan().bold()
        ));
        output.push_str(&format!("{} {}\n\n", "Tool:".bold(), report.tool_name()));
        output.push_str(&Self::tally_line(report));
        output
    }

    /// Format as JSON
    pub fn format_json(report: &ReportSummary) -> String {
        let value = json!({
            "tool": report.tool_name(),
            "generated_at": Local::now().to_rfc3339(),
            "question_count": report.question_count(),
            "answered": report.answered(),
            "yes": report.yes_count(),
            "no": report.no_count(),
            "yes_percent": report.yes_percent(),
            "answers": report.answers(),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the tool catalog for `--list-tools`
    pub fn format_catalog(tools: &[DiagnosticTool]) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n\n", "Available diagnostic tools:".bold()));
        for tool in tools {
            output.push_str(&format!(
                "  {} {}\n    {}\n",
                "*".green(),
                format!("{} ({} questions)", tool.name(), tool.question_count()).bold(),
                tool.description().dimmed()
            ));
        }
        output
    }

    fn tally_line(report: &ReportSummary) -> String {
        format!(
            "{} {} of {} answered — {} yes, {} no ({}% yes)\n",
            "Tally:".cyan().bold(),
            report.answered(),
            report.question_count(),
            report.yes_count().to_string().green(),
            report.no_count().to_string().red(),
            report.yes_percent()
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clarity_domain::{Answer, AnswerChoice, AnswerSet};

    fn report() -> ReportSummary {
        let answers: AnswerSet = vec![
            Answer::new("First?", AnswerChoice::Yes),
            Answer::new("Second?", AnswerChoice::No),
        ]
        .into_iter()
        .collect();
        ReportSummary::new("Sample Diagnostic", 2, answers)
    }

    #[test]
    fn test_full_format_lists_answers() {
        colored::control::set_override(false);
        let out = ReportFormatter::format(&report());
        assert!(out.contains("Sample Diagnostic"));
        assert!(out.contains("1. [Yes] First?"));
        assert!(out.contains("2. [No] Second?"));
        assert!(out.contains("1 yes, 1 no (50% yes)"));
    }

    #[test]
    fn test_summary_omits_listing() {
        colored::control::set_override(false);
        let out = ReportFormatter::format_summary(&report());
        assert!(out.contains("Tally:"));
        assert!(!out.contains("First?"));
    }

    #[test]
    fn test_json_shape() {
        let out = ReportFormatter::format_json(&report());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["tool"], "Sample Diagnostic");
        assert_eq!(value["yes"], 1);
        assert_eq!(value["answers"][0]["answer"], "Yes");
    }

    #[test]
    fn test_catalog_listing() {
        colored::control::set_override(false);
        let tools = clarity_domain::builtin_tools();
        let out = ReportFormatter::format_catalog(&tools);
        for tool in &tools {
            assert!(out.contains(tool.name()));
        }
        assert!(out.contains("(10 questions)"));
    }
}
