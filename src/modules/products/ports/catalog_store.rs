// Port for the catalog store: the sole owner of product state and id assignment.
//
// Adapters implement this trait. Use case handlers code against it, so the
// in-memory store can be swapped for another backend without touching them.

use crate::modules::products::core::product::{Product, ProductDraft};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogStoreError {
    #[error("Product with SKU '{0}' already exists")]
    AlreadyExists(String),

    #[error("Product with SKU '{0}' not found")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Stores a new product under its SKU and assigns the next id.
    async fn create(&self, draft: ProductDraft) -> Result<Product, CatalogStoreError>;

    async fn get(&self, sku: &str) -> Result<Product, CatalogStoreError>;

    /// Overwrites every field of an existing product except its id.
    async fn update(&self, sku: &str, draft: ProductDraft) -> Result<Product, CatalogStoreError>;

    async fn delete(&self, sku: &str) -> Result<(), CatalogStoreError>;
}
