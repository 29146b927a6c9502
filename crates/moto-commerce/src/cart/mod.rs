//! Shopping cart module.
//!
//! Contains the cart line type and the persistent cart store.

mod line;
mod store;

pub use line::CartLine;
pub use store::{CartEvent, CartSnapshot, CartStore, CartSummary, CART_STORAGE_KEY};
