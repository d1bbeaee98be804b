//! Typed verb methods over the mock transport.
//!
//! This is the only layer allowed to turn a failure envelope into a
//! raised error. Everything above it handles `ClientError` through
//! ordinary `Result` plumbing and never inspects envelopes.

use crate::error::{ClientError, ClientResult};
use serde_json::Value;
use stockroom_store::KeyValueStore;
use stockroom_transport::{ITEMS_PATH, Method, MockTransport, NOT_FOUND_ERROR, item_path};
use stockroom_types::{Envelope, Item, ItemDraft, ItemId, ItemPatch};

/// Repository client for the item collection.
#[derive(Debug, Clone)]
pub struct ItemsClient<S> {
    transport: MockTransport<S>,
}

impl<S: KeyValueStore> ItemsClient<S> {
    /// Wraps a transport.
    #[must_use]
    pub fn new(transport: MockTransport<S>) -> Self {
        Self { transport }
    }

    /// Fetches the full item collection.
    pub async fn get_all(&self) -> ClientResult<Vec<Item>> {
        let envelope = self.transport.request(Method::Get, ITEMS_PATH, None).await;
        let data = unwrap_envelope(envelope, "could not load items")?;
        Ok(serde_json::from_value(data)?)
    }

    /// Creates a new item; the server assigns the id.
    pub async fn create(&self, draft: &ItemDraft) -> ClientResult<Item> {
        let body = serde_json::to_value(draft)?;
        let envelope = self
            .transport
            .request(Method::Post, ITEMS_PATH, Some(body))
            .await;
        let data = unwrap_envelope(envelope, "could not create item")?;
        Ok(serde_json::from_value(data)?)
    }

    /// Applies a patch to an existing item, returning the merged record.
    pub async fn update(&self, patch: &ItemPatch) -> ClientResult<Item> {
        let body = serde_json::to_value(patch)?;
        let envelope = self
            .transport
            .request(Method::Put, &item_path(patch.id), Some(body))
            .await;
        let data = unwrap_envelope(envelope, "could not update item")?;
        Ok(serde_json::from_value(data)?)
    }

    /// Deletes an item by id. Deleting an absent id succeeds.
    pub async fn delete(&self, id: ItemId) -> ClientResult<()> {
        let envelope = self
            .transport
            .request(Method::Delete, &item_path(id), None)
            .await;
        unwrap_envelope(envelope, "could not delete item")?;
        Ok(())
    }
}

/// Converts an envelope into a result, classifying the failure message.
/// A failure with an empty message falls back to the verb-specific
/// default so callers always get something surfaceable.
fn unwrap_envelope(envelope: Envelope<Value>, default_message: &str) -> ClientResult<Value> {
    match envelope {
        Envelope::Ok { data } => Ok(data),
        Envelope::Err { error } if error == NOT_FOUND_ERROR => Err(ClientError::NotFound),
        Envelope::Err { error } if error.is_empty() => {
            Err(ClientError::Request(default_message.to_string()))
        }
        Envelope::Err { error } => Err(ClientError::Request(error)),
    }
}
