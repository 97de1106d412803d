//! Read-only product catalog.
//!
//! The catalog is supplied once per session by an external source (it may
//! arrive late; a session that has not received one yet behaves as if the
//! catalog were empty). The core only ever reads it.

use std::collections::HashMap;

use anyhow::Context;

use crate::id::ProductId;
use crate::product::{Product, ProductRecord};

/// Immutable, ordered sequence of products with an id index.
///
/// Source order is preserved: the query pipeline's "unsorted" output and the
/// cart's price joins both rely on this being the canonical ordering.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// An empty catalog ("not yet arrived").
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from raw source records.
    ///
    /// Malformed records and duplicate ids are skipped with a warning; one
    /// bad record never fails the whole load. Source order is kept.
    pub fn from_records(records: Vec<ProductRecord>) -> Self {
        let mut products: Vec<Product> = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());

        for record in records {
            let record_id = record.id;
            match Product::try_from(record) {
                Ok(product) => {
                    if index.contains_key(&product.id) {
                        tracing::warn!(id = %product.id, "skipping duplicate product id");
                        continue;
                    }
                    index.insert(product.id, products.len());
                    products.push(product);
                }
                Err(err) => {
                    tracing::warn!(id = record_id, %err, "skipping malformed product record");
                }
            }
        }

        Self { products, index }
    }

    /// Parse a catalog from the source's JSON payload.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let records: Vec<ProductRecord> =
            serde_json::from_str(json).context("failed to parse catalog JSON")?;
        Ok(Self::from_records(records))
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&pos| &self.products[pos])
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.index.contains_key(&id)
    }

    /// Price of a product, if it is (still) in the catalog.
    pub fn price_of(&self, id: ProductId) -> Option<u64> {
        self.get(id).map(|p| p.price)
    }

    /// Products in source order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, name: &str) -> ProductRecord {
        ProductRecord {
            id,
            name: name.to_string(),
            price: 5000,
            stock: 3,
            category: "Men".to_string(),
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn preserves_source_order() {
        let catalog =
            Catalog::from_records(vec![record(3, "c"), record(1, "a"), record(2, "b")]);

        let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::from_records(vec![record(1, "a"), record(2, "b")]);

        assert_eq!(catalog.get(ProductId::new(2)).unwrap().name, "b");
        assert!(catalog.get(ProductId::new(9)).is_none());
        assert!(catalog.contains(ProductId::new(1)));
        assert_eq!(catalog.price_of(ProductId::new(1)), Some(5000));
    }

    #[test]
    fn malformed_records_are_skipped_not_fatal() {
        let mut bad = record(2, "");
        bad.price = -10;

        let catalog = Catalog::from_records(vec![record(1, "a"), bad, record(3, "c")]);

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(ProductId::new(1)));
        assert!(!catalog.contains(ProductId::new(2)));
        assert!(catalog.contains(ProductId::new(3)));
    }

    #[test]
    fn duplicate_ids_keep_first_record() {
        let catalog = Catalog::from_records(vec![record(1, "first"), record(1, "second")]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(ProductId::new(1)).unwrap().name, "first");
    }

    #[test]
    fn from_json_round_trip() {
        let json = r#"[
            {"id": 1, "name": "Air Zoom", "price": 5000, "stock": 4,
             "category": "Men", "description": "Lightweight trainer",
             "image": "/images/air-zoom.webp"},
            {"id": 2, "name": "Street Flex", "price": 15000, "stock": 2,
             "category": "Women"}
        ]"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.price_of(ProductId::new(2)), Some(15000));
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(Catalog::from_json("not json").is_err());
    }

    #[test]
    fn empty_catalog_answers_nothing() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert!(!catalog.contains(ProductId::new(1)));
    }
}
