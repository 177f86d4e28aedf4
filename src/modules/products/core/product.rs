use serde::{Deserialize, Serialize};

/// A product as stored in the catalog and returned over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub description: String,
}

/// Validated input for create and update. Carries everything but the id,
/// which only the catalog store assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl ProductDraft {
    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            sku: self.sku,
            name: self.name,
            price: self.price,
            description: self.description,
        }
    }
}
