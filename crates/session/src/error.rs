use mnemo_core::CardError;
use mnemo_core::console::PromptError;
use thiserror::Error;

/// Result type for session flows
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that abort a session
///
/// Abandonment never surfaces here; every loop that prompts catches
/// [`PromptError::Abandoned`] itself.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] mnemo_store::Error),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Card(#[from] CardError),
}
