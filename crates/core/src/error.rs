use thiserror::Error;

/// Result type alias for mnemo-core
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types shared across the mnemo crates
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error for file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),
}
