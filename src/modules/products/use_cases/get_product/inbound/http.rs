use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::products::core::product::Product;
use crate::modules::products::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<Product>, ApplicationError> {
    let product = state.get_handler.handle(&sku).await?;
    Ok(Json(product))
}
