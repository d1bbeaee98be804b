//! Error types for the repository client.

use thiserror::Error;

/// Result type for repository operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Domain errors raised when a transport envelope reports failure.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The update target does not exist on the server.
    #[error("item not found")]
    NotFound,

    /// Any other failure reported by the server, message verbatim.
    #[error("{0}")]
    Request(String),

    /// A payload failed to encode or a response failed to decode.
    #[error("payload codec error: {0}")]
    Codec(#[from] serde_json::Error),
}
