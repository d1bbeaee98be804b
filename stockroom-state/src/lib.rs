//! Application state reconciler for Stockroom.
//!
//! The `Inventory` owns `{items, editing_id}`, exposes the operations the
//! UI layer calls (`load_all`, `submit`, `begin_edit`, `cancel_edit`,
//! `remove`), and keeps memory and the persistent store convergent after
//! every confirmed operation. It emits no events; callers re-query state
//! after each awaited call completes.

mod error;
mod inventory;
mod quantity;

pub use error::{StateError, StateResult};
pub use inventory::Inventory;
pub use quantity::coerce_quantity;
