//! `neokicks-cart` — the shopping cart store.
//!
//! Single source of truth for the quantities of products the user intends
//! to purchase. One instance per session, owned by the session shell.

pub mod store;

pub use store::{CartLine, CartStore};
