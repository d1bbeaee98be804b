//! The application state reconciler.
//!
//! Owns the in-memory item list and the editing pointer, drives the
//! repository client, and mirrors confirmed state back to the store after
//! every mutation so memory and store stay convergent.
//!
//! Ordering invariant: memory is mutated before the store mirror is
//! written. A mirror failure after a confirmed server mutation therefore
//! leaves memory consistent with the server, with only durability of the
//! mirror lagging; the failure is still surfaced to the caller.

use crate::error::{StateError, StateResult};
use crate::quantity::coerce_quantity;
use std::sync::Arc;
use stockroom_client::ItemsClient;
use stockroom_store::{InventoryRecord, KeyValueStore};
use stockroom_transport::{MockTransport, TransportConfig};
use stockroom_types::{Item, ItemDraft, ItemId, ItemPatch};
use tracing::{debug, warn};

/// In-memory application state plus the plumbing to keep it convergent
/// with the persistent store.
///
/// The editing pointer is a two-state machine: Idle (`None`) and Editing
/// (`Some(id)`). A successful update submit, an explicit cancel, or the
/// removal of the edited item all return it to Idle.
#[derive(Debug)]
pub struct Inventory<S> {
    items: Vec<Item>,
    editing_id: Option<ItemId>,
    client: ItemsClient<S>,
    record: InventoryRecord<S>,
}

impl<S: KeyValueStore> Inventory<S> {
    /// Opens the inventory over a shared store, loading the initial item
    /// list (empty if no record exists).
    #[must_use]
    pub fn open(store: Arc<S>) -> Self {
        Self::open_with_config(store, TransportConfig::default())
    }

    /// Opens with an explicit transport configuration.
    #[must_use]
    pub fn open_with_config(store: Arc<S>, config: TransportConfig) -> Self {
        let record = InventoryRecord::new(store.clone());
        let transport = MockTransport::with_config(InventoryRecord::new(store), config);
        Self {
            items: record.load(),
            editing_id: None,
            client: ItemsClient::new(transport),
            record,
        }
    }

    // ── Read access ──────────────────────────────────────────────

    /// Current item list, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Id of the item currently targeted for update, if any.
    #[must_use]
    pub fn editing_id(&self) -> Option<ItemId> {
        self.editing_id
    }

    /// Whether an edit is in progress.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    // ── Editing pointer ──────────────────────────────────────────

    /// Targets an item for update. No-op if the id is not in the list.
    pub fn begin_edit(&mut self, id: ItemId) {
        if self.items.iter().any(|i| i.id == id) {
            self.editing_id = Some(id);
        } else {
            debug!(%id, "begin_edit ignored, id not in list");
        }
    }

    /// Returns the editing pointer to Idle without touching the list.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
    }

    // ── Operations ───────────────────────────────────────────────

    /// Replaces the item list wholesale from the server and re-mirrors.
    ///
    /// On failure the prior list is left untouched.
    pub async fn load_all(&mut self) -> StateResult<()> {
        let fetched = self.client.get_all().await?;
        self.items = fetched;
        self.mirror()
    }

    /// Submits the form: creates a new item when Idle, updates the
    /// edited item when Editing.
    ///
    /// An empty (post-trim) name is rejected before any transport call
    /// and changes nothing. The quantity never rejects; see
    /// [`coerce_quantity`].
    pub async fn submit(&mut self, name: &str, quantity: &str) -> StateResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StateError::Validation("name must not be empty".to_string()));
        }
        let quantity = coerce_quantity(quantity);

        match self.editing_id {
            Some(id) => {
                let patch = ItemPatch::for_item(id)
                    .with_name(name)
                    .with_quantity(quantity);
                let updated = self.client.update(&patch).await?;
                // Reconcile against the resolved envelope and the CURRENT
                // list, never a snapshot captured before the request.
                if let Some(slot) = self.items.iter_mut().find(|i| i.id == updated.id) {
                    *slot = updated;
                }
                self.editing_id = None;
                self.mirror()
            }
            None => {
                let created = self.client.create(&ItemDraft::new(name, quantity)).await?;
                self.items.push(created);
                self.mirror()
            }
        }
    }

    /// Deletes an item and drops it from the list. Deleting an absent id
    /// succeeds and changes nothing. If the removed item was being
    /// edited, the edit is cancelled.
    ///
    /// Any confirmation prompt is the UI's job; once invoked, removal is
    /// unconditional.
    pub async fn remove(&mut self, id: ItemId) -> StateResult<()> {
        self.client.delete(id).await?;
        self.items.retain(|i| i.id != id);
        if self.editing_id == Some(id) {
            debug!(%id, "edited item removed, cancelling edit");
            self.editing_id = None;
        }
        self.mirror()
    }

    /// Writes the current list back to the store.
    fn mirror(&self) -> StateResult<()> {
        self.record.save(&self.items).map_err(|e| {
            warn!(error = %e, "store mirror failed, memory holds confirmed state");
            StateError::from(e)
        })
    }
}
