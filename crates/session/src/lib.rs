//! `neokicks-session` — the storefront session shell.
//!
//! Owns one instance of every store for the life of a browser session and
//! applies UI events to them strictly in arrival order. The presentation
//! layer pushes [`SessionEvent`]s in and pulls derived values out; nothing
//! in here ever calls back into presentation.

pub mod event;
pub mod session;

pub use event::SessionEvent;
pub use session::{CheckoutRequest, Session, SessionConfig};
