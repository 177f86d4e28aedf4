use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::modules::products::use_cases::create_product::inbound::http as create_http;
use crate::modules::products::use_cases::delete_product::inbound::http as delete_http;
use crate::modules::products::use_cases::get_product::inbound::http as get_http;
use crate::modules::products::use_cases::get_product::inbound::rate_limit;
use crate::modules::products::use_cases::update_product::inbound::http as update_http;
use crate::shell::state::AppState;

/// Only the read route is rate limited.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/products", post(create_http::handle))
        .route(
            "/products/{sku}",
            get(get_http::handle)
                .route_layer(from_fn_with_state(state.clone(), rate_limit::enforce)),
        )
        .route(
            "/products/{sku}",
            put(update_http::handle).delete(delete_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
