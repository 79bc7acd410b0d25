//! Report summary value object
//!
//! Pure function of a finished run: no state of its own, no recomputation
//! after construction.

use serde::{Deserialize, Serialize};

use crate::questionnaire::answer::AnswerSet;

/// Summary of one completed diagnostic run (Value Object)
///
/// Holds the tool name, the question count of the tool that was run, and
/// the final answers. The tally is a plain yes/no count; there is no
/// weighting or scoring rubric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    tool_name: String,
    question_count: usize,
    answers: AnswerSet,
}

impl ReportSummary {
    pub fn new(tool_name: impl Into<String>, question_count: usize, answers: AnswerSet) -> Self {
        Self {
            tool_name: tool_name.into(),
            question_count,
            answers,
        }
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn yes_count(&self) -> usize {
        self.answers.yes_count()
    }

    pub fn no_count(&self) -> usize {
        self.answers.no_count()
    }

    /// Share of Yes responses among recorded answers, 0..=100.
    /// Zero recorded answers yields 0.
    pub fn yes_percent(&self) -> u16 {
        if self.answers.is_empty() {
            return 0;
        }
        (self.answers.yes_count() * 100 / self.answers.len()) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::answer::{Answer, AnswerChoice};

    fn answers(choices: &[AnswerChoice]) -> AnswerSet {
        choices
            .iter()
            .enumerate()
            .map(|(i, c)| Answer::new(format!("Question {}?", i + 1), *c))
            .collect()
    }

    #[test]
    fn test_tally() {
        use AnswerChoice::{No, Yes};
        let report = ReportSummary::new("Sample", 4, answers(&[Yes, No, Yes, Yes]));
        assert_eq!(report.answered(), 4);
        assert_eq!(report.yes_count(), 3);
        assert_eq!(report.no_count(), 1);
        assert_eq!(report.yes_percent(), 75);
    }

    #[test]
    fn test_empty_report() {
        let report = ReportSummary::new("Unknown Tool", 0, AnswerSet::new());
        assert_eq!(report.answered(), 0);
        assert_eq!(report.yes_percent(), 0);
    }

    #[test]
    fn test_round_trips_through_json() {
        use AnswerChoice::Yes;
        let report = ReportSummary::new("Sample", 1, answers(&[Yes]));
        let json = serde_json::to_string(&report).unwrap();
        let back: ReportSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
