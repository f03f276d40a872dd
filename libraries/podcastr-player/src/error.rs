//! Error types for the player library
//!
//! Player commands themselves never fail. These errors come from the edges:
//! reading and parsing episode catalogues.

use thiserror::Error;

/// Player errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Episode catalogue could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Episode catalogue is not valid JSON
    #[error("Invalid episode data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
