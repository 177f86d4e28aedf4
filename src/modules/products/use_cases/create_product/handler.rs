use crate::modules::products::core::product::Product;
use crate::modules::products::core::validation::ProductPayload;
use crate::modules::products::ports::catalog_store::CatalogStore;
use crate::modules::products::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct CreateProductHandler<TStore>
where
    TStore: CatalogStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateProductHandler<TStore>
where
    TStore: CatalogStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, payload: ProductPayload) -> Result<Product, ApplicationError> {
        let draft = payload.validate()?;
        let product = self.store.create(draft).await?;
        tracing::info!(sku = %product.sku, id = product.id, "product created");
        Ok(product)
    }
}
