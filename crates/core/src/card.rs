//! Question and answer value types.

use std::fmt;
use thiserror::Error;

/// Rejected card text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("answer text cannot be empty")]
    EmptyAnswer,
}

/// The prompt side of a flashcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    /// Wrap question text; blank text is rejected.
    pub fn new(text: impl Into<String>) -> Result<Self, CardError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(CardError::EmptyQuestion);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The expected answer of a flashcard, compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer(String);

impl Answer {
    /// Wrap answer text; blank text is rejected.
    pub fn new(text: impl Into<String>) -> Result<Self, CardError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(CardError::EmptyAnswer);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether an attempted answer matches, byte for byte.
    pub fn matches(&self, attempted_answer: &str) -> bool {
        attempted_answer == self.0
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
