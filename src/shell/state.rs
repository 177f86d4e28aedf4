use crate::modules::products::ports::catalog_store::CatalogStore;
use crate::modules::products::use_cases::create_product::handler::CreateProductHandler;
use crate::modules::products::use_cases::delete_product::handler::DeleteProductHandler;
use crate::modules::products::use_cases::get_product::handler::GetProductHandler;
use crate::modules::products::use_cases::update_product::handler::UpdateProductHandler;
use crate::shared::infrastructure::rate_limiter::RateLimiter;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_handler: Arc<CreateProductHandler<dyn CatalogStore>>,
    pub get_handler: Arc<GetProductHandler<dyn CatalogStore>>,
    pub update_handler: Arc<UpdateProductHandler<dyn CatalogStore>>,
    pub delete_handler: Arc<DeleteProductHandler<dyn CatalogStore>>,
    pub rate_limiter: Option<Arc<dyn RateLimiter>>,
}

impl AppState {
    /// Wires every use case to the same catalog store.
    pub fn new(store: Arc<dyn CatalogStore>, rate_limiter: Option<Arc<dyn RateLimiter>>) -> Self {
        Self {
            create_handler: Arc::new(CreateProductHandler::new(store.clone())),
            get_handler: Arc::new(GetProductHandler::new(store.clone())),
            update_handler: Arc::new(UpdateProductHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteProductHandler::new(store)),
            rate_limiter,
        }
    }
}
