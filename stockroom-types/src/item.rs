//! The inventory item record and its request-body shapes.
//!
//! `Item` is the stored record. `ItemDraft` is what a create request
//! carries (no id; the server assigns one). `ItemPatch` is what an
//! update request carries: absent fields are preserved on the existing
//! record, so a quantity-only patch never erases the name.

use crate::ItemId;
use serde::{Deserialize, Serialize};

/// A single tracked inventory item.
///
/// Identity is `id`; `name` and `quantity` are mutable via update.
/// `quantity` is non-negative by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: u64,
}

impl Item {
    /// Creates an item with a freshly assigned id.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            quantity,
        }
    }

    /// Applies a patch over this record, shallow-merge style: fields the
    /// patch leaves out keep their current value.
    #[must_use]
    pub fn merged(&self, patch: &ItemPatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            quantity: patch.quantity.unwrap_or(self.quantity),
        }
    }
}

/// Body of a create request. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: u64,
}

impl ItemDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Body of an update request.
///
/// `None` fields are omitted on the wire and preserved on the target
/// record (the merge law).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub id: ItemId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
}

impl ItemPatch {
    /// An empty patch for the given item; builders add the fields.
    #[must_use]
    pub fn for_item(id: ItemId) -> Self {
        Self {
            id,
            name: None,
            quantity: None,
        }
    }

    /// Sets the replacement name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement quantity.
    #[must_use]
    pub fn with_quantity(mut self, quantity: u64) -> Self {
        self.quantity = Some(quantity);
        self
    }
}
