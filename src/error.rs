//! Error types for backup-console.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Errors surfaced by the console.
///
/// Request-path errors never escape the backup flow; they are projected
/// into a displayed status message instead. The variants still flow
/// through this enum so the message construction lives in one place.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response without a server-provided error message.
    #[error("request failed with status code {0}")]
    Status(reqwest::StatusCode),

    /// Error message reported by the server in the response body.
    #[error("{0}")]
    Server(String),

    #[error("keyring error: {0}")]
    Keyring(String),
}
