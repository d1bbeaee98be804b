//! Error types for the reconciler.

use stockroom_client::ClientError;
use stockroom_store::StoreError;
use thiserror::Error;

/// Result type for reconciler operations.
pub type StateResult<T> = Result<T, StateError>;

/// Errors surfaced by reconciler operations.
///
/// Every operation fully handles its own failure: whichever variant it
/// returns, `items` and the editing pointer hold their last known-good
/// values (or, after a confirmed server mutation, the confirmed state).
#[derive(Debug, Error)]
pub enum StateError {
    /// Input rejected before any transport or store call.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The repository client reported a failure.
    #[error(transparent)]
    Request(#[from] ClientError),

    /// The store mirror could not be written.
    #[error("persistence failed: {0}")]
    Persistence(#[from] StoreError),
}
