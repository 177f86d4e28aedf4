// In memory implementation of the CatalogStore port.
//
// Purpose
// - Back the service for local development and tests without a database.
//
// Responsibilities
// - Keep products in a map keyed by SKU.
// - Assign ids from a counter that starts at 1 and never goes back.
// - Serialize every read-modify-write behind one mutex, so the uniqueness
//   check and the insert are a single step.

use crate::modules::products::core::product::{Product, ProductDraft};
use crate::modules::products::ports::catalog_store::{CatalogStore, CatalogStoreError};
use std::collections::HashMap;
use tokio::sync::Mutex;

const FIRST_ID: u64 = 1;

struct CatalogState {
    products: HashMap<String, Product>,
    next_id: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            products: HashMap::new(),
            next_id: FIRST_ID,
        }
    }
}

#[derive(Default)]
pub struct InMemoryCatalogStore {
    state: Mutex<CatalogState>,
    is_offline: bool,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates losing the database connection: every call fails with a
    /// backend error until toggled back.
    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Drops every product and restarts id assignment at 1.
    /// Only for tests; no route reaches it.
    pub async fn reset(&self) {
        *self.state.lock().await = CatalogState::default();
    }

    fn ensure_online(&self) -> Result<(), CatalogStoreError> {
        if self.is_offline {
            return Err(CatalogStoreError::Backend("Catalog store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn create(&self, draft: ProductDraft) -> Result<Product, CatalogStoreError> {
        self.ensure_online()?;
        let mut state = self.state.lock().await;
        if state.products.contains_key(&draft.sku) {
            return Err(CatalogStoreError::AlreadyExists(draft.sku));
        }
        let product = draft.into_product(state.next_id);
        state.next_id += 1;
        state.products.insert(product.sku.clone(), product.clone());
        Ok(product)
    }

    async fn get(&self, sku: &str) -> Result<Product, CatalogStoreError> {
        self.ensure_online()?;
        self.state
            .lock()
            .await
            .products
            .get(sku)
            .cloned()
            .ok_or_else(|| CatalogStoreError::NotFound(sku.to_string()))
    }

    async fn update(&self, sku: &str, draft: ProductDraft) -> Result<Product, CatalogStoreError> {
        self.ensure_online()?;
        let mut state = self.state.lock().await;
        let existing = state
            .products
            .get_mut(sku)
            .ok_or_else(|| CatalogStoreError::NotFound(sku.to_string()))?;
        let updated = ProductDraft {
            sku: sku.to_string(),
            ..draft
        }
        .into_product(existing.id);
        *existing = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, sku: &str) -> Result<(), CatalogStoreError> {
        self.ensure_online()?;
        self.state
            .lock()
            .await
            .products
            .remove(sku)
            .map(|_| ())
            .ok_or_else(|| CatalogStoreError::NotFound(sku.to_string()))
    }
}
