//! Product record and its validation boundary.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::ProductId;

/// Raw product record as supplied by the catalog source.
///
/// This is the wire shape: untrusted, loosely typed. It is converted into
/// [`Product`] at the catalog boundary; nothing downstream ever sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u64,
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: i64,
    pub stock: i64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "image_ref", alias = "imageRef")]
    pub image: String,
}

/// A validated, fixed-shape product. Read-only to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    pub stock: u32,
    pub category: String,
    pub description: String,
    pub image_ref: String,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> DomainResult<Self> {
        let name = record.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("product name must not be empty"));
        }

        let category = record.category.trim();
        if category.is_empty() {
            return Err(DomainError::validation(
                "product category must not be empty",
            ));
        }

        if record.price < 0 {
            return Err(DomainError::validation("price must be non-negative"));
        }

        if record.stock < 0 {
            return Err(DomainError::validation("stock must be non-negative"));
        }
        let stock = u32::try_from(record.stock)
            .map_err(|_| DomainError::validation("stock out of range"))?;

        Ok(Product {
            id: ProductId::new(record.id),
            name: name.to_string(),
            price: record.price as u64,
            stock,
            category: category.to_string(),
            description: record.description.trim().to_string(),
            image_ref: record.image.trim().to_string(),
        })
    }
}
