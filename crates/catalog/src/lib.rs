//! `neokicks-catalog` — the catalog query pipeline.
//!
//! Projects the user's current [`QuerySpec`] onto the read-only catalog to
//! produce the list the product grid renders, without blocking interaction:
//! expensive recomputes are deferred behind a generation-guarded view so a
//! keystroke may lag one step while cheap updates always land immediately.

pub mod query;
pub mod suggestions;
pub mod view;

pub use query::{QuerySpec, SortOrder};
pub use suggestions::Submission;
pub use view::{CatalogView, RecomputeResult, RecomputeTask};
