//! The mock transport: an HTTP-shaped request cycle over the store.
//!
//! Each request sleeps for the configured latency (modeling the network
//! round trip), then runs its store read-modify-write synchronously.
//! Keeping that section free of await points is what makes GET-then-POST
//! style sequences inside one call race-free under the cooperative
//! scheduler.
//!
//! `request` is infallible: every fault inside dispatch (bad body,
//! unknown path, storage failure) is folded into a failure envelope.
//! A transport call always resolves; nothing is silently dropped.

use crate::paths::{Method, id_from_path, is_collection_path};
use serde_json::Value;
use std::time::Duration;
use stockroom_store::{InventoryRecord, KeyValueStore};
use stockroom_types::{Envelope, Item, ItemDraft, ItemId, ItemPatch};
use tracing::{debug, warn};

/// Baseline artificial round-trip latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(150);

/// Failure message for an update whose target does not exist.
///
/// Deliberately asymmetric with DELETE, which treats an absent target as
/// an idempotent success.
pub const NOT_FOUND_ERROR: &str = "Item not found";

/// Configuration for the mock transport.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Artificial delay inserted before any store access.
    pub latency: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
        }
    }
}

/// Emulated request/response cycle over a shared store.
#[derive(Debug, Clone)]
pub struct MockTransport<S> {
    record: InventoryRecord<S>,
    config: TransportConfig,
}

impl<S: KeyValueStore> MockTransport<S> {
    /// Creates a transport with the default latency.
    #[must_use]
    pub fn new(record: InventoryRecord<S>) -> Self {
        Self::with_config(record, TransportConfig::default())
    }

    /// Creates a transport with an explicit configuration.
    #[must_use]
    pub fn with_config(record: InventoryRecord<S>, config: TransportConfig) -> Self {
        Self { record, config }
    }

    /// Returns the configured latency.
    #[must_use]
    pub fn latency(&self) -> Duration {
        self.config.latency
    }

    /// Runs one request cycle and resolves to an envelope.
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Envelope<Value> {
        debug!(%method, path, "mock request");
        tokio::time::sleep(self.config.latency).await;

        // No await below this line: the store read-modify-write must not
        // be interleaved with another transport call.
        match self.dispatch(method, path, body) {
            Ok(data) => Envelope::ok(data),
            Err(error) => {
                warn!(%method, path, %error, "mock request failed");
                Envelope::err(error)
            }
        }
    }

    fn dispatch(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, String> {
        match method {
            Method::Get => self.get_all(path),
            Method::Post => self.create(path, body),
            Method::Put => self.update(path, body),
            Method::Delete => self.delete(path),
        }
    }

    fn get_all(&self, path: &str) -> Result<Value, String> {
        expect_collection_path(path)?;
        to_json(&self.record.load())
    }

    fn create(&self, path: &str, body: Option<Value>) -> Result<Value, String> {
        expect_collection_path(path)?;
        let draft: ItemDraft = decode_body(body)?;
        let item = Item {
            id: ItemId::new(),
            name: draft.name,
            quantity: draft.quantity,
        };

        let mut items = self.record.load();
        items.push(item.clone());
        self.record.save(&items).map_err(|e| e.to_string())?;
        to_json(&item)
    }

    fn update(&self, path: &str, body: Option<Value>) -> Result<Value, String> {
        expect_member_path(path)?;
        let patch: ItemPatch = decode_body(body)?;

        let mut items = self.record.load();
        let Some(existing) = items.iter_mut().find(|i| i.id == patch.id) else {
            return Err(NOT_FOUND_ERROR.to_string());
        };
        *existing = existing.merged(&patch);
        let merged = existing.clone();

        self.record.save(&items).map_err(|e| e.to_string())?;
        to_json(&merged)
    }

    fn delete(&self, path: &str) -> Result<Value, String> {
        expect_member_path(path)?;
        // An unparseable final segment matches no stored item; deleting
        // an absent id is a defined no-op, so both read as success.
        let target = id_from_path(path);

        let mut items = self.record.load();
        if let Some(id) = target {
            items.retain(|i| i.id != id);
        }
        self.record.save(&items).map_err(|e| e.to_string())?;
        Ok(Value::Null)
    }
}

fn expect_collection_path(path: &str) -> Result<(), String> {
    if is_collection_path(path) {
        Ok(())
    } else {
        Err(format!("unknown path: {path}"))
    }
}

fn expect_member_path(path: &str) -> Result<(), String> {
    let under_root = path
        .strip_prefix(crate::paths::ITEMS_PATH)
        .is_some_and(|rest| rest.starts_with('/'));
    if under_root && !is_collection_path(path) {
        Ok(())
    } else {
        Err(format!("unknown path: {path}"))
    }
}

fn decode_body<T: serde::de::DeserializeOwned>(body: Option<Value>) -> Result<T, String> {
    let body = body.ok_or_else(|| "missing request body".to_string())?;
    serde_json::from_value(body).map_err(|e| format!("invalid request body: {e}"))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}
