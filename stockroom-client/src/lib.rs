//! Repository client for Stockroom.
//!
//! One typed method per verb, each awaiting the mock transport and
//! unwrapping its envelope: success payloads decode into domain types,
//! failure envelopes become `ClientError` values.

mod client;
mod error;

pub use client::ItemsClient;
pub use error::{ClientError, ClientResult};
