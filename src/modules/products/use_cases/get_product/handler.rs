use crate::modules::products::core::product::Product;
use crate::modules::products::ports::catalog_store::CatalogStore;
use crate::modules::products::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct GetProductHandler<TStore>
where
    TStore: CatalogStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GetProductHandler<TStore>
where
    TStore: CatalogStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, sku: &str) -> Result<Product, ApplicationError> {
        let product = self.store.get(sku).await?;
        tracing::debug!(sku, id = product.id, "product fetched");
        Ok(product)
    }
}
