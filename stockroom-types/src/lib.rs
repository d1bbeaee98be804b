//! Core type definitions for Stockroom.
//!
//! This crate defines the fundamental types shared across the inventory
//! core:
//! - Item identifiers (UUID v7, assigned by the mock server on create)
//! - The item record plus its create/update request bodies
//! - The transport result envelope
//!
//! Everything UI-facing (rendering, form wiring, banners) lives outside
//! the core and is not represented here.

mod envelope;
mod ids;
mod item;

pub use envelope::Envelope;
pub use ids::ItemId;
pub use item::{Item, ItemDraft, ItemPatch};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid item id: {0}")]
    InvalidId(#[from] uuid::Error),
}
