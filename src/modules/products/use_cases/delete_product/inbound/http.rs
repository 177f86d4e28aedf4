use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::modules::products::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<StatusCode, ApplicationError> {
    state.delete_handler.handle(&sku).await?;
    Ok(StatusCode::NO_CONTENT)
}
