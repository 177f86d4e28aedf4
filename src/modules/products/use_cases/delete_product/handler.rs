use crate::modules::products::ports::catalog_store::CatalogStore;
use crate::modules::products::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct DeleteProductHandler<TStore>
where
    TStore: CatalogStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteProductHandler<TStore>
where
    TStore: CatalogStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, sku: &str) -> Result<(), ApplicationError> {
        self.store.delete(sku).await?;
        tracing::info!(sku, "product deleted");
        Ok(())
    }
}
