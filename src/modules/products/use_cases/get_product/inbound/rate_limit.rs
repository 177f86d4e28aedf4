// Rate limit gate for the read path.
//
// Clients are keyed by peer IP. Requests that arrive without connection info
// (in-process callers, tests) share a single anonymous window.

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::modules::products::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::rate_limiter::RateLimitDecision;
use crate::shell::state::AppState;

pub const ANONYMOUS_CLIENT: &str = "anonymous";

pub async fn enforce(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let Some(limiter) = state.rate_limiter.as_ref() else {
        return next.run(request).await;
    };

    let client = client_key(&request);
    match limiter.check(&client).await {
        RateLimitDecision::Allowed { .. } => next.run(request).await,
        RateLimitDecision::Denied { retry_after } => {
            tracing::warn!(%client, path = %request.uri().path(), "rate limit exceeded");
            ApplicationError::RateLimited { retry_after }.into_response()
        }
    }
}

fn client_key(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| ANONYMOUS_CLIENT.to_string())
}
