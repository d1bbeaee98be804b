//! The transport result envelope.
//!
//! Every mock-transport request resolves to an `Envelope`: success with a
//! payload, or failure with a human-readable message. The envelope is the
//! only channel through which the transport reports outcomes; it never
//! panics or returns a raw error across that boundary. Only the repository
//! client is allowed to turn a failure envelope into a raised error.

use serde::{Deserialize, Serialize};

/// Uniform success/failure wrapper returned by the mock transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    /// The request succeeded; `data` carries the response payload.
    Ok { data: T },
    /// The request failed; `error` carries the message to surface.
    Err { error: String },
}

impl<T> Envelope<T> {
    /// Wraps a successful payload.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self::Ok { data }
    }

    /// Wraps a failure message.
    #[must_use]
    pub fn err(error: impl Into<String>) -> Self {
        Self::Err {
            error: error.into(),
        }
    }

    /// Whether this envelope is a success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// Whether this envelope is a failure.
    #[must_use]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Unwraps into a `Result`, discarding the envelope shape.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Ok { data } => Ok(data),
            Self::Err { error } => Err(error),
        }
    }

    /// Maps the success payload, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        match self {
            Self::Ok { data } => Envelope::Ok { data: f(data) },
            Self::Err { error } => Envelope::Err { error },
        }
    }
}
