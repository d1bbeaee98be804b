//! The inventory record adapter.
//!
//! Serializes the full item collection to a single well-known key in the
//! backing store. Loads are infallible by contract: a missing record or
//! one that no longer parses reads as an empty collection (logged, never
//! raised). Saves propagate storage failures to the caller.

use crate::error::StoreResult;
use crate::kv::KeyValueStore;
use std::sync::Arc;
use stockroom_types::Item;
use tracing::warn;

/// Well-known key under which the item collection is stored.
pub const RECORD_KEY: &str = "stockroom.items";

/// Adapter binding one item collection to one key in a shared store.
#[derive(Debug, Clone)]
pub struct InventoryRecord<S> {
    store: Arc<S>,
}

impl<S: KeyValueStore> InventoryRecord<S> {
    /// Creates an adapter over a shared store handle.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Loads the item collection, preserving stored order.
    ///
    /// Missing record, backend read failure, and unparseable content all
    /// read as an empty collection, never a fatal error.
    #[must_use]
    pub fn load(&self) -> Vec<Item> {
        let raw = match self.store.get(RECORD_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "inventory record unreadable, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "inventory record corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    /// Serializes and overwrites the stored collection.
    pub fn save(&self, items: &[Item]) -> StoreResult<()> {
        let raw = serde_json::to_string(items)?;
        self.store.set(RECORD_KEY, &raw)
    }
}
