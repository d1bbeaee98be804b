//! Mock network transport for Stockroom.
//!
//! Emulates an HTTP-like request/response cycle (verb, path, JSON body)
//! over the persistent store, with a fixed artificial latency so the UI's
//! loading states are exercised realistically. Outcomes travel exclusively
//! in the `Envelope` type; a raw fault never crosses the transport
//! boundary.

mod paths;
mod transport;

pub use paths::{ITEMS_PATH, Method, id_from_path, is_collection_path, item_path};
pub use transport::{DEFAULT_LATENCY, MockTransport, NOT_FOUND_ERROR, TransportConfig};
