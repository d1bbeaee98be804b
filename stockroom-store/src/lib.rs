//! Persistent storage layer for Stockroom.
//!
//! Models browser persistent storage as a synchronous, atomic-per-call
//! key-value store, with the item collection serialized as one JSON
//! record under a well-known key.
//!
//! # Architecture
//!
//! - `KeyValueStore` is the backend seam: `MemoryStore` for tests and
//!   the default mock-transport backing, `FileStore` for durability on
//!   disk.
//! - `InventoryRecord` is the adapter the rest of the system talks to:
//!   `load()` never fails (absent or corrupt data reads as empty),
//!   `save()` surfaces persistence failures.

mod error;
mod kv;
mod record;

pub use error::{StoreError, StoreResult};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use record::{InventoryRecord, RECORD_KEY};
