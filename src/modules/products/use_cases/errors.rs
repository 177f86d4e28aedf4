use crate::modules::products::core::validation::ValidationErrors;
use crate::modules::products::ports::catalog_store::CatalogStoreError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Product with SKU '{0}' already exists")]
    AlreadyExists(String),

    #[error("Product with SKU '{0}' not found")]
    NotFound(String),

    #[error("Rate limit exceeded")]
    RateLimited { retry_after: Duration },

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<CatalogStoreError> for ApplicationError {
    fn from(err: CatalogStoreError) -> Self {
        match err {
            CatalogStoreError::AlreadyExists(sku) => ApplicationError::AlreadyExists(sku),
            CatalogStoreError::NotFound(sku) => ApplicationError::NotFound(sku),
            CatalogStoreError::Backend(reason) => ApplicationError::Unexpected(reason),
        }
    }
}
