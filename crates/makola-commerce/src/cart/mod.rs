//! Shopping cart module.
//!
//! [`CartState`] is the pure state machine: items, derived totals, and the
//! five transitions. [`CartStore`] wraps it with restore-at-startup and
//! ordered fire-and-forget persistence.

mod item;
mod state;
mod store;

pub use item::{CartItem, ProductSnapshot};
pub use state::CartState;
pub use store::{CartStore, CART_KEY};
