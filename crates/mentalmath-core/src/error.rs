//! Game error types.

use thiserror::Error;

/// Errors that can occur while playing a session.
#[derive(Debug, Error)]
pub enum GameError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A difficulty name that is not easy, medium, or hard.
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}
