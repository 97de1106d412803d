//! Cart store: product-id → quantity mapping with derived totals.

use serde::{Deserialize, Serialize};

use neokicks_core::{Catalog, ProductId};

/// One product's quantity entry in the cart.
///
/// Quantity is always ≥ 1: a line reduced below 1 is deleted, never stored
/// at zero. Price is *not* carried here; totals join against the catalog at
/// read time so source price changes propagate immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// In-memory cart, insertion-ordered by first `add`.
///
/// Command surface is silent-rejection: invalid commands (quantity below 1,
/// unknown product id) change nothing and raise nothing — a corrupted cart
/// is worse than a missed click. Rejections are logged at debug level.
///
/// No internal locking: the host's event dispatch is serialized, so there
/// is exactly one caller at a time.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product with quantity 1.
    ///
    /// No-op if a line for this product already exists (repeat add never
    /// auto-increments; growth goes through [`CartStore::set_quantity`]).
    /// No-op if the id is unknown to the catalog.
    pub fn add(&mut self, catalog: &Catalog, product_id: ProductId) {
        if !catalog.contains(product_id) {
            tracing::debug!(%product_id, "ignoring add for unknown product");
            return;
        }
        if self.position(product_id).is_some() {
            tracing::debug!(%product_id, "ignoring repeat add for product already in cart");
            return;
        }

        self.lines.push(CartLine {
            product_id,
            quantity: 1,
        });
    }

    /// Replace a line's quantity in place.
    ///
    /// Rejected if `quantity < 1` — deleting a line is `remove`'s job, so a
    /// decrement below 1 must never be expressible here. No-op if no line
    /// exists for the product.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity < 1 {
            tracing::debug!(%product_id, quantity, "rejecting set_quantity below 1");
            return;
        }
        let Some(pos) = self.position(product_id) else {
            tracing::debug!(%product_id, "ignoring set_quantity for product not in cart");
            return;
        };

        self.lines[pos].quantity = quantity;
    }

    /// Delete the line for a product. Idempotent when absent.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Empty the cart (after a completed checkout hand-off).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Read-only snapshot, insertion order of first `add`.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Quantity for a product, if a line exists.
    pub fn quantity_of(&self, product_id: ProductId) -> Option<u32> {
        self.position(product_id).map(|pos| self.lines[pos].quantity)
    }

    /// Total number of items, recomputed on every read.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Σ quantity × current catalog price, recomputed on every read.
    ///
    /// A line whose product has vanished from the catalog contributes 0:
    /// the line still records the user's intent (and counts in
    /// `item_count`), but there is no price to resolve.
    pub fn subtotal(&self, catalog: &Catalog) -> u64 {
        self.lines
            .iter()
            .map(|line| {
                catalog
                    .price_of(line.product_id)
                    .map_or(0, |price| price * u64::from(line.quantity))
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.product_id == product_id)
    }
}
