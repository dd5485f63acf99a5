//! Error types for the flashcard store

use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the flashcard store
#[derive(Debug, Error)]
pub enum Error {
    /// The database could not be opened or bootstrapped
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// No collection with the given name
    #[error("collection not found: {0}")]
    CollectionNotFound(String),

    /// A collection with the given name already exists
    #[error("collection already exists: {0}")]
    CollectionAlreadyExists(String),

    /// A flashcard with the given question text already exists somewhere
    /// in the store
    #[error("duplicate question: {0}")]
    DuplicateQuestion(String),

    /// Stored card text failed validation
    #[error(transparent)]
    Card(#[from] mnemo_core::CardError),

    /// SQLite database error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl Error {
    /// Create an unavailable error with a message
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unavailable("cannot open /nope/flashcards.db");
        assert_eq!(err.to_string(), "store unavailable: cannot open /nope/flashcards.db");

        let err = Error::CollectionNotFound("Spanish".to_string());
        assert_eq!(err.to_string(), "collection not found: Spanish");

        let err = Error::CollectionAlreadyExists("Spanish".to_string());
        assert_eq!(err.to_string(), "collection already exists: Spanish");

        let err = Error::DuplicateQuestion("hola".to_string());
        assert_eq!(err.to_string(), "duplicate question: hola");
    }

    #[test]
    fn test_error_from_sqlite() {
        let sqlite_err = rusqlite::Error::InvalidPath("bad path".into());
        let err: Error = sqlite_err.into();
        assert!(matches!(err, Error::Sqlite(_)));
    }

    #[test]
    fn test_error_from_card_error() {
        let err: Error = mnemo_core::CardError::EmptyQuestion.into();
        assert_eq!(err.to_string(), "question text cannot be empty");
    }
}
