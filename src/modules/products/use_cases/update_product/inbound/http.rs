use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::modules::products::adapters::inbound::http_errors::from_json_rejection;
use crate::modules::products::core::product::Product;
use crate::modules::products::core::validation::ProductPayload;
use crate::modules::products::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(sku): Path<String>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>, ApplicationError> {
    let Json(payload) = body.map_err(from_json_rejection)?;
    let product = state.update_handler.handle(&sku, payload).await?;
    Ok(Json(product))
}
