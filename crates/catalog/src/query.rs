//! Query spec and the fixed filter → search → sort projection.

use serde::{Deserialize, Serialize};

use neokicks_core::{Catalog, Product};

/// Price sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    PriceLowHigh,
    PriceHighLow,
}

/// The user's current category / search / sort selection.
///
/// Pure value: any UI change replaces the whole spec, there is no
/// incremental mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    /// `None` means "All".
    pub category: Option<String>,
    pub search_text: String,
    pub sort_order: Option<SortOrder>,
}

impl QuerySpec {
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn with_search_text(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = search_text.into();
        self
    }

    pub fn with_sort_order(mut self, sort_order: Option<SortOrder>) -> Self {
        self.sort_order = sort_order;
        self
    }
}

/// Run a spec against the catalog.
///
/// The combination order is fixed: filter by category, then by search text,
/// then sort. Sorting is stable, so `sort_order: None` and price ties both
/// preserve the filtered order (which itself preserves catalog order).
pub fn run(catalog: &Catalog, spec: &QuerySpec) -> Vec<Product> {
    let category = spec
        .category
        .as_deref()
        .map(|c| c.to_lowercase());
    let needle = spec.search_text.to_lowercase();

    let mut rows: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|p| match &category {
            None => true,
            Some(wanted) => p.category.to_lowercase() == *wanted,
        })
        .filter(|p| {
            if needle.is_empty() {
                return true;
            }
            let haystack =
                format!("{} {} {}", p.name, p.description, p.category).to_lowercase();
            haystack.contains(&needle)
        })
        .cloned()
        .collect();

    match spec.sort_order {
        Some(SortOrder::PriceLowHigh) => rows.sort_by(|a, b| a.price.cmp(&b.price)),
        Some(SortOrder::PriceHighLow) => rows.sort_by(|a, b| b.price.cmp(&a.price)),
        None => {}
    }

    rows
}
