//! Questionnaire session state machine
//!
//! One in-progress run of a diagnostic. Invariant: `current_index` equals
//! `answers.len()` whenever an unanswered question is being viewed; the
//! final answer is recorded without advancing, so a completed session has
//! `answers.len() == question_count` with `current_index` still on the last
//! question.

use super::answer::{Answer, AnswerChoice, AnswerSet};
use crate::catalog::tool::DiagnosticTool;

/// Result of submitting an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// More questions remain; the session advanced to the next one.
    Advanced,
    /// That was the last question. The caller should hand the answer set to
    /// the report and discard the session.
    Completed(AnswerSet),
}

/// Result of asking to leave the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Nothing answered yet; leave immediately.
    Exit,
    /// Progress would be lost; an explicit confirmation is required first.
    ConfirmationRequired,
}

/// Display state of one question's progress dot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionDot {
    Answered,
    Current,
    Upcoming,
}

/// One in-progress questionnaire run
///
/// Owned by a single view; destroyed on any exit back to the tool picker.
/// All operations are total: calls that a well-behaved caller would not
/// make (answering a finished session, undoing at the first question) are
/// absorbed rather than turned into errors.
#[derive(Debug, Clone)]
pub struct QuestionnaireSession {
    tool_name: String,
    questions: Vec<String>,
    current_index: usize,
    answers: AnswerSet,
    exit_pending: bool,
}

impl QuestionnaireSession {
    /// Start a session over an explicit question list.
    ///
    /// An empty list yields a session that is complete from the start; the
    /// caller is expected to notice via [`is_complete`](Self::is_complete)
    /// and skip straight to the report with zero answers.
    pub fn new(tool_name: impl Into<String>, questions: Vec<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            questions,
            current_index: 0,
            answers: AnswerSet::new(),
            exit_pending: false,
        }
    }

    /// Start a session for a catalog tool
    pub fn for_tool(tool: &DiagnosticTool) -> Self {
        Self::new(tool.name(), tool.questions().to_vec())
    }

    // -- Queries --

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based question number for display ("Question 3 of 10")
    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn current_question(&self) -> Option<&str> {
        self.questions.get(self.current_index).map(String::as_str)
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.questions.len()
    }

    /// Whether an exit request is waiting on confirmation
    pub fn exit_pending(&self) -> bool {
        self.exit_pending
    }

    // -- Operations --

    /// Record a choice for the current question.
    ///
    /// Advances to the next question, or reports completion on the last one
    /// without advancing. Submitting to an already-complete session returns
    /// the completion outcome again with the answer set unchanged.
    pub fn submit_answer(&mut self, choice: AnswerChoice) -> SubmitOutcome {
        if self.is_complete() {
            return SubmitOutcome::Completed(self.answers.clone());
        }

        let question = self.questions[self.current_index].clone();
        self.answers.push(Answer::new(question, choice));

        if self.current_index < self.questions.len() - 1 {
            self.current_index += 1;
            SubmitOutcome::Advanced
        } else {
            SubmitOutcome::Completed(self.answers.clone())
        }
    }

    /// Step back one question, discarding the answer to the question being
    /// returned to. Strict LIFO undo: repeated calls walk backwards one
    /// step at a time. Returns false (and changes nothing) at the first
    /// question.
    pub fn previous_question(&mut self) -> bool {
        if self.answers.len() > self.current_index {
            // Completed without advancing; drop the final answer only.
            self.answers.pop();
            true
        } else if self.current_index > 0 {
            self.current_index -= 1;
            self.answers.pop();
            true
        } else {
            false
        }
    }

    /// Ask to leave the questionnaire.
    ///
    /// With no answers recorded the exit is immediate; otherwise a
    /// confirmation becomes pending until [`decline_exit`](Self::decline_exit)
    /// clears it or the caller acts on the confirmation and discards the
    /// session.
    pub fn request_exit(&mut self) -> ExitOutcome {
        if self.answers.is_empty() {
            ExitOutcome::Exit
        } else {
            self.exit_pending = true;
            ExitOutcome::ConfirmationRequired
        }
    }

    /// Keep going: dismiss the pending exit confirmation, leaving the
    /// session untouched.
    pub fn decline_exit(&mut self) {
        self.exit_pending = false;
    }

    // -- Derived values --

    /// Percentage of questions answered, 0..=100.
    ///
    /// An empty question list counts as fully complete.
    pub fn progress_percent(&self) -> u16 {
        if self.questions.is_empty() {
            return 100;
        }
        (self.answers.len() * 100 / self.questions.len()) as u16
    }

    /// Questions still unanswered
    pub fn remaining(&self) -> usize {
        self.questions.len() - self.answers.len()
    }

    /// Per-question dot indicator states, in question order
    pub fn dots(&self) -> Vec<QuestionDot> {
        (0..self.questions.len())
            .map(|i| {
                if i < self.answers.len() {
                    QuestionDot::Answered
                } else if i == self.current_index {
                    QuestionDot::Current
                } else {
                    QuestionDot::Upcoming
                }
            })
            .collect()
    }
}
