//! Hydrated collection and flashcard entities
//!
//! Entities are per-session views of store state. Every mutation goes
//! through the owning [`Store`] handle and updates the in-memory cache
//! in the same call, so the two never drift within a session.

use crate::error::Result;
use crate::store::Store;
use mnemo_core::{Answer, Question};
use std::fmt;

/// A named group of flashcards loaded from the store
pub struct Collection {
    id: i64,
    name: String,
    flashcards: Vec<Flashcard>,
    store: Store,
}

impl Collection {
    pub(crate) fn new(id: i64, name: impl Into<String>, flashcards: Vec<Flashcard>, store: Store) -> Self {
        Self { id, name: name.into(), flashcards, store }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }

    /// Flashcards in ascending id order.
    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    pub fn flashcards_mut(&mut self) -> &mut [Flashcard] {
        &mut self.flashcards
    }

    /// Whether a flashcard with this id is currently loaded.
    pub fn contains(&self, flashcard_id: i64) -> bool {
        self.flashcards.iter().any(|f| f.id == flashcard_id)
    }

    /// Add a flashcard to this collection and the store.
    pub fn add_flashcard(&mut self, question: Question, answer: Answer) -> Result<()> {
        let flashcard = self.store.add_flashcard(self.id, &question, &answer)?;
        self.flashcards.push(flashcard);
        Ok(())
    }

    /// Delete a flashcard from the store and this collection's cache.
    pub fn delete_flashcard(&mut self, flashcard_id: i64) -> Result<()> {
        self.store.delete_flashcard(flashcard_id)?;
        self.flashcards.retain(|f| f.id != flashcard_id);
        Ok(())
    }

    /// Change the question and/or answer of a flashcard.
    pub fn edit_flashcard(
        &mut self,
        flashcard_id: i64,
        question: Option<Question>,
        answer: Option<Answer>,
    ) -> Result<()> {
        self.store.edit_flashcard(flashcard_id, question.as_ref(), answer.as_ref())?;
        if let Some(flashcard) = self.flashcards.iter_mut().find(|f| f.id == flashcard_id) {
            if let Some(question) = question {
                flashcard.question = question;
            }
            if let Some(answer) = answer {
                flashcard.answer = answer;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A question/answer pair with its attempt history
pub struct Flashcard {
    id: i64,
    question: Question,
    answer: Answer,
    history: AttemptHistory,
}

impl Flashcard {
    pub(crate) fn new(id: i64, question: Question, answer: Answer, history: AttemptHistory) -> Self {
        Self { id, question, answer, history }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    pub fn history(&self) -> &AttemptHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut AttemptHistory {
        &mut self.history
    }
}

/// Listings show a flashcard as `<id> | <question>`.
impl fmt::Display for Flashcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.id, self.question)
    }
}

/// Success/failure counters tied to one flashcard
pub struct AttemptHistory {
    flashcard_id: i64,
    successful_attempts: i64,
    failed_attempts: i64,
    store: Store,
}

impl AttemptHistory {
    pub(crate) fn new(flashcard_id: i64, successful_attempts: i64, failed_attempts: i64, store: Store) -> Self {
        Self { flashcard_id, successful_attempts, failed_attempts, store }
    }

    pub fn successful_attempts(&self) -> i64 {
        self.successful_attempts
    }

    pub fn failed_attempts(&self) -> i64 {
        self.failed_attempts
    }

    pub fn total_attempts(&self) -> i64 {
        self.successful_attempts + self.failed_attempts
    }

    /// Count one correct answer, in memory and in the store.
    pub fn record_success(&mut self) -> Result<()> {
        self.store.record_success(self.flashcard_id)?;
        self.successful_attempts += 1;
        Ok(())
    }

    /// Count one wrong answer, in memory and in the store.
    pub fn record_failure(&mut self) -> Result<()> {
        self.store.record_failure(self.flashcard_id)?;
        self.failed_attempts += 1;
        Ok(())
    }
}
