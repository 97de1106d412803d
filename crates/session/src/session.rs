//! The session: one owned instance of every store, serialized dispatch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use neokicks_cart::{CartLine, CartStore};
use neokicks_catalog::{suggestions, CatalogView, QuerySpec, Submission};
use neokicks_core::{Catalog, Product, SessionId};
use neokicks_reveal::{ResourceState, RevealConfig, RevealController, RevealState, TimerRequest};

use crate::event::SessionEvent;

/// Session-wide configuration.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub reveal: RevealConfig,
}

impl SessionConfig {
    pub fn with_reveal(mut self, reveal: RevealConfig) -> Self {
        self.reveal = reveal;
        self
    }
}

/// Hand-off payload for the external checkout boundary.
///
/// The core's whole contract with checkout: a subtotal and a non-empty
/// guarantee. It knows nothing of the payment outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub subtotal: u64,
    pub item_count: u64,
}

/// One storefront session.
///
/// All mutation goes through [`Session::dispatch`], which applies events
/// one at a time in arrival order — no reordering, no batching. Everything
/// the presentation layer reads is a pull-style query recomputed from
/// current state.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    started_at: DateTime<Utc>,
    catalog: Catalog,
    cart: CartStore,
    view: CatalogView,
    reveal: RevealController,
    signed_in: bool,
    sequence: u64,
    last_event_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let id = SessionId::new();
        tracing::info!(session = %id, "session started");

        Self {
            id,
            started_at: Utc::now(),
            catalog: Catalog::empty(),
            cart: CartStore::new(),
            view: CatalogView::new(),
            reveal: RevealController::new(config.reveal),
            signed_in: false,
            sequence: 0,
            last_event_at: None,
        }
    }

    /// Apply one event. Returns a settle-timer request when the reveal
    /// controller armed one; the host must schedule it and feed
    /// [`SessionEvent::SettleTimerFired`] back.
    pub fn dispatch(&mut self, event: SessionEvent) -> Option<TimerRequest> {
        self.sequence += 1;
        self.last_event_at = Some(Utc::now());
        let event_id = Uuid::now_v7();
        tracing::debug!(
            session = %self.id,
            sequence = self.sequence,
            event_id = %event_id,
            event = event.kind(),
            "dispatching"
        );

        match event {
            SessionEvent::CatalogArrived(catalog) => {
                tracing::info!(session = %self.id, products = catalog.len(), "catalog arrived");
                self.catalog = catalog;
                self.view.refresh(&self.catalog);
                None
            }

            SessionEvent::AddToCart(product_id) => {
                self.cart.add(&self.catalog, product_id);
                None
            }
            SessionEvent::SetQuantity {
                product_id,
                quantity,
            } => {
                self.cart.set_quantity(product_id, quantity);
                None
            }
            SessionEvent::RemoveFromCart(product_id) => {
                self.cart.remove(product_id);
                None
            }
            SessionEvent::ClearCart => {
                self.cart.clear();
                None
            }

            SessionEvent::CategorySelected(category) => {
                let spec = self.view.spec().clone().with_category(category);
                self.view.set_spec(&self.catalog, spec);
                None
            }
            SessionEvent::SearchEdited(text) => {
                let spec = self.view.spec().clone().with_search_text(text);
                self.view.set_spec_deferred(spec);
                None
            }
            SessionEvent::SearchSubmitted(text) => {
                let spec = match suggestions::resolve_submission(&text) {
                    Submission::Category(category) => self
                        .view
                        .spec()
                        .clone()
                        .with_category(Some(category.to_string()))
                        .with_search_text(""),
                    Submission::FreeText(text) => {
                        self.view.spec().clone().with_search_text(text)
                    }
                };
                self.view.set_spec(&self.catalog, spec);
                None
            }
            SessionEvent::SortSelected(sort_order) => {
                let spec = self.view.spec().clone().with_sort_order(sort_order);
                self.view.set_spec(&self.catalog, spec);
                None
            }
            SessionEvent::FiltersReset => {
                self.view.reset(&self.catalog);
                None
            }

            SessionEvent::HeroMounted => {
                self.reveal.mount();
                None
            }
            SessionEvent::HeroVisibility(intersecting) => self.reveal.set_visible(intersecting),
            SessionEvent::SettleTimerFired(generation) => {
                self.reveal.timer_fired(generation);
                None
            }
            SessionEvent::HeroResourceReady => {
                self.reveal.resource_ready();
                None
            }
            SessionEvent::HeroResourceFailed => {
                self.reveal.resource_failed();
                None
            }

            SessionEvent::SignedIn(signed_in) => {
                self.signed_in = signed_in;
                None
            }
        }
    }

    /// Execute at most one pending catalog recompute.
    ///
    /// The host calls this when its event loop is idle; draining pending
    /// work is what resolves the query view's lag to the latest spec.
    /// Returns whether any work was done.
    pub fn run_pending_recompute(&mut self) -> bool {
        match self.view.take_pending() {
            Some(task) => {
                let result = task.execute(&self.catalog);
                self.view.complete(result);
                true
            }
            None => false,
        }
    }

    // Queries, re-read by presentation on every render pass.

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn last_event_at(&self) -> Option<DateTime<Utc>> {
        self.last_event_at
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn subtotal(&self) -> u64 {
        self.cart.subtotal(&self.catalog)
    }

    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// The rows the product grid renders.
    pub fn grid_rows(&self) -> &[Product] {
        self.view.rows()
    }

    pub fn query_spec(&self) -> &QuerySpec {
        self.view.spec()
    }

    /// Whether the grid reflects the latest accepted spec.
    pub fn view_is_current(&self) -> bool {
        self.view.is_current()
    }

    pub fn reveal_state(&self) -> RevealState {
        self.reveal.state()
    }

    pub fn hero_resource_state(&self) -> ResourceState {
        self.reveal.resource_state()
    }

    pub fn reveal_config(&self) -> &RevealConfig {
        self.reveal.config()
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    /// Checkout boundary: `Some` only when the cart is non-empty.
    pub fn checkout_request(&self) -> Option<CheckoutRequest> {
        if self.cart.is_empty() {
            return None;
        }
        Some(CheckoutRequest {
            subtotal: self.subtotal(),
            item_count: self.item_count(),
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
