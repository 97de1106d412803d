//! UI events the session applies.

use neokicks_catalog::SortOrder;
use neokicks_core::{Catalog, ProductId};
use neokicks_reveal::TimerGeneration;

/// A discrete external event: user input, a timer firing, a visibility
/// observer callback, or the catalog arriving.
///
/// Events represent **intent**; they are transient and applied exactly once,
/// in arrival order, by [`crate::Session::dispatch`].
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The external catalog source delivered its products.
    CatalogArrived(Catalog),

    AddToCart(ProductId),
    SetQuantity { product_id: ProductId, quantity: u32 },
    RemoveFromCart(ProductId),
    /// Presentation emptied the cart after handing off to checkout.
    ClearCart,

    /// A category chip was clicked (`None` is "All").
    CategorySelected(Option<String>),
    /// A keystroke in the search box (compute-bound path).
    SearchEdited(String),
    /// The search was submitted (enter key or suggestion click).
    SearchSubmitted(String),
    SortSelected(Option<SortOrder>),
    FiltersReset,

    HeroMounted,
    /// Viewport observer: is the hero region intersecting?
    HeroVisibility(bool),
    SettleTimerFired(TimerGeneration),
    HeroResourceReady,
    HeroResourceFailed,

    /// Session login flag flipped (flag only, no authentication logic).
    SignedIn(bool),
}

impl SessionEvent {
    /// Stable event name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionEvent::CatalogArrived(_) => "catalog.arrived",
            SessionEvent::AddToCart(_) => "cart.add",
            SessionEvent::SetQuantity { .. } => "cart.set_quantity",
            SessionEvent::RemoveFromCart(_) => "cart.remove",
            SessionEvent::ClearCart => "cart.clear",
            SessionEvent::CategorySelected(_) => "query.category_selected",
            SessionEvent::SearchEdited(_) => "query.search_edited",
            SessionEvent::SearchSubmitted(_) => "query.search_submitted",
            SessionEvent::SortSelected(_) => "query.sort_selected",
            SessionEvent::FiltersReset => "query.filters_reset",
            SessionEvent::HeroMounted => "hero.mounted",
            SessionEvent::HeroVisibility(_) => "hero.visibility",
            SessionEvent::SettleTimerFired(_) => "hero.settle_timer_fired",
            SessionEvent::HeroResourceReady => "hero.resource_ready",
            SessionEvent::HeroResourceFailed => "hero.resource_failed",
            SessionEvent::SignedIn(_) => "session.signed_in",
        }
    }
}
