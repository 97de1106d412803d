//! Black-box test: a whole storefront visit driven only through the
//! public session surface.

use neokicks_catalog::SortOrder;
use neokicks_core::{Catalog, ProductId};
use neokicks_reveal::RevealState;
use neokicks_session::{Session, SessionConfig, SessionEvent};

const CATALOG_JSON: &str = r#"[
    {"id": 1, "name": "Air Zoom", "price": 5000, "stock": 4,
     "category": "Men", "description": "Lightweight trainer for the track",
     "image": "/images/air-zoom.webp"},
    {"id": 2, "name": "Street Flex", "price": 15000, "stock": 2,
     "category": "Women", "description": "Everyday casual",
     "image": "/images/street-flex.webp"},
    {"id": 3, "name": "Court Classic", "price": 9000, "stock": 6,
     "category": "Men", "description": "Retro court shoe",
     "image": "/images/court-classic.webp"},
    {"id": 4, "name": "Trail Runner", "price": 12000, "stock": 0,
     "category": "Sports", "description": "Grippy trail sole",
     "image": "/images/trail-runner.webp"}
]"#;

fn arrived_session() -> Session {
    neokicks_observability::init();

    let catalog = Catalog::from_json(CATALOG_JSON).expect("fixture catalog must parse");
    let mut session = Session::new(SessionConfig::default());
    session.dispatch(SessionEvent::CatalogArrived(catalog));
    session
}

fn id(raw: u64) -> ProductId {
    ProductId::new(raw)
}

#[test]
fn full_visit_browse_cart_and_checkout() {
    let mut session = arrived_session();

    // Landing: hero mounts, scrolls into view, settles, reveals.
    session.dispatch(SessionEvent::HeroMounted);
    let timer = session
        .dispatch(SessionEvent::HeroVisibility(true))
        .expect("entering the viewport arms the settle timer");
    session.dispatch(SessionEvent::HeroResourceReady);
    session.dispatch(SessionEvent::SettleTimerFired(timer.generation));
    assert_eq!(session.reveal_state(), RevealState::Revealed);

    // Browsing: type, submit an exact vocabulary term, sort.
    session.dispatch(SessionEvent::SearchEdited("me".to_string()));
    session.dispatch(SessionEvent::SearchSubmitted("men".to_string()));
    session.dispatch(SessionEvent::SortSelected(Some(SortOrder::PriceLowHigh)));

    let names: Vec<&str> = session.grid_rows().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Air Zoom", "Court Classic"]);
    assert!(session.view_is_current());

    // Cart: the aggregation scenario end to end.
    session.dispatch(SessionEvent::AddToCart(id(1)));
    assert_eq!(session.subtotal(), 5_000);

    session.dispatch(SessionEvent::SetQuantity {
        product_id: id(1),
        quantity: 3,
    });
    assert_eq!(session.subtotal(), 15_000);

    session.dispatch(SessionEvent::AddToCart(id(2)));
    assert_eq!(session.subtotal(), 30_000);

    // Repeat add must not disturb the chosen quantity.
    session.dispatch(SessionEvent::AddToCart(id(1)));
    assert_eq!(session.subtotal(), 30_000);

    session.dispatch(SessionEvent::RemoveFromCart(id(1)));
    assert_eq!(session.subtotal(), 15_000);
    assert_eq!(session.item_count(), 1);

    // Checkout boundary: non-empty cart hands off subtotal and count.
    let checkout = session.checkout_request().expect("cart is non-empty");
    assert_eq!(checkout.subtotal, 15_000);
    assert_eq!(checkout.item_count, 1);

    session.dispatch(SessionEvent::ClearCart);
    assert_eq!(session.checkout_request(), None);
}

#[test]
fn scroll_away_and_back_reveals_exactly_once() {
    let mut session = arrived_session();
    session.dispatch(SessionEvent::HeroMounted);

    // First approach: leaves before the settle delay elapses.
    let first = session.dispatch(SessionEvent::HeroVisibility(true)).unwrap();
    session.dispatch(SessionEvent::HeroVisibility(false));
    session.dispatch(SessionEvent::SettleTimerFired(first.generation));
    assert_eq!(session.reveal_state(), RevealState::PosterShown);

    // Second approach: stays put.
    let second = session.dispatch(SessionEvent::HeroVisibility(true)).unwrap();
    session.dispatch(SessionEvent::SettleTimerFired(second.generation));
    assert_eq!(session.reveal_state(), RevealState::Revealed);

    // Terminal: leaving and re-entering changes nothing, and no new timer
    // is ever armed.
    assert!(session.dispatch(SessionEvent::HeroVisibility(false)).is_none());
    assert!(session.dispatch(SessionEvent::HeroVisibility(true)).is_none());
    assert_eq!(session.reveal_state(), RevealState::Revealed);
}

#[test]
fn hero_resource_failure_keeps_the_poster_up() {
    let mut session = arrived_session();
    session.dispatch(SessionEvent::HeroMounted);

    let timer = session.dispatch(SessionEvent::HeroVisibility(true)).unwrap();
    session.dispatch(SessionEvent::HeroResourceFailed);
    session.dispatch(SessionEvent::SettleTimerFired(timer.generation));

    assert_eq!(session.reveal_state(), RevealState::Warming);
}

#[test]
fn typing_lags_but_converges_once_idle() {
    let mut session = arrived_session();

    for prefix in ["t", "tr", "tra", "trai", "trail"] {
        session.dispatch(SessionEvent::SearchEdited(prefix.to_string()));
    }
    assert!(!session.view_is_current());
    assert_eq!(session.grid_rows().len(), 4);

    // Idle: drain pending recomputes until none remain.
    while session.run_pending_recompute() {}

    assert!(session.view_is_current());
    let names: Vec<&str> = session.grid_rows().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Trail Runner"]);
}

#[test]
fn unknown_product_ids_never_corrupt_the_cart() {
    let mut session = arrived_session();

    session.dispatch(SessionEvent::AddToCart(id(99)));
    session.dispatch(SessionEvent::SetQuantity {
        product_id: id(99),
        quantity: 5,
    });
    session.dispatch(SessionEvent::RemoveFromCart(id(99)));

    assert!(session.cart_lines().is_empty());
    assert_eq!(session.checkout_request(), None);
}
