use crate::modules::products::core::product::Product;
use crate::modules::products::core::validation::ProductPayload;
use crate::modules::products::ports::catalog_store::CatalogStore;
use crate::modules::products::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct UpdateProductHandler<TStore>
where
    TStore: CatalogStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UpdateProductHandler<TStore>
where
    TStore: CatalogStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Replaces an existing product. Never creates one.
    pub async fn handle(
        &self,
        sku: &str,
        payload: ProductPayload,
    ) -> Result<Product, ApplicationError> {
        let draft = payload.validate_for_sku(sku)?;
        let product = self.store.update(sku, draft).await?;
        tracing::info!(sku, id = product.id, "product updated");
        Ok(product)
    }
}
