use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::modules::products::adapters::inbound::http_errors::from_json_rejection;
use crate::modules::products::core::product::Product;
use crate::modules::products::core::validation::ProductPayload;
use crate::modules::products::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApplicationError> {
    let Json(payload) = body.map_err(from_json_rejection)?;
    let product = state.create_handler.handle(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}
