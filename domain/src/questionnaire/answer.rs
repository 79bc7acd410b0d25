//! Answer value objects

use serde::{Deserialize, Serialize};

/// A single yes/no choice (Value Object)
///
/// The closed two-value interface is what makes answering infallible: there
/// is no invalid input to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerChoice {
    Yes,
    No,
}

impl AnswerChoice {
    /// Display label for this choice
    pub fn label(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl std::fmt::Display for AnswerChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A recorded response to one question, immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    question: String,
    answer: AnswerChoice,
}

impl Answer {
    pub fn new(question: impl Into<String>, answer: AnswerChoice) -> Self {
        Self {
            question: question.into(),
            answer,
        }
    }

    /// The question text this answer responds to
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The recorded choice
    pub fn choice(&self) -> AnswerChoice {
        self.answer
    }
}

/// Ordered list of recorded answers.
///
/// Always in question order: entry `i` answers question `i` of the active
/// tool. Never sparse, never reordered — mutation is append plus a single
/// last-entry removal, both reserved to the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(Vec<Answer>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Answer> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Answer> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Answer] {
        &self.0
    }

    /// Count of Yes responses
    pub fn yes_count(&self) -> usize {
        self.0.iter().filter(|a| a.choice().is_yes()).count()
    }

    /// Count of No responses
    pub fn no_count(&self) -> usize {
        self.0.len() - self.yes_count()
    }

    pub(crate) fn push(&mut self, answer: Answer) {
        self.0.push(answer);
    }

    pub(crate) fn pop(&mut self) -> Option<Answer> {
        self.0.pop()
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AnswerSet {
    type Item = &'a Answer;
    type IntoIter = std::slice::Iter<'a, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
