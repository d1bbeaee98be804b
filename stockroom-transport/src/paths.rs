//! Request verbs and path handling.
//!
//! The mock API exposes one collection: `/api/items` for GET/POST, and
//! `/api/items/<id>` for PUT/DELETE. DELETE reads the target id from the
//! final path segment; PUT reads it from the body.

use std::fmt;
use stockroom_types::ItemId;

/// Root path of the item collection.
pub const ITEMS_PATH: &str = "/api/items";

/// Request verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// Builds the member path for an item, `/api/items/<id>`.
#[must_use]
pub fn item_path(id: ItemId) -> String {
    format!("{ITEMS_PATH}/{id}")
}

/// Whether `path` addresses the collection root.
#[must_use]
pub fn is_collection_path(path: &str) -> bool {
    path.trim_end_matches('/') == ITEMS_PATH
}

/// Extracts the item id from the final segment of a member path.
///
/// Returns `None` when the path is not under the collection root or the
/// segment does not parse as an id. For DELETE that simply means the id
/// matches nothing, which is a defined no-op.
#[must_use]
pub fn id_from_path(path: &str) -> Option<ItemId> {
    let rest = path.strip_prefix(ITEMS_PATH)?.strip_prefix('/')?;
    let segment = rest.trim_end_matches('/');
    ItemId::parse(segment).ok()
}
