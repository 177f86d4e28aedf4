use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use product_catalog::modules::products::adapters::outbound::catalog_store_in_memory::InMemoryCatalogStore;
use product_catalog::shared::infrastructure::rate_limiter::RateLimiter;
use product_catalog::shared::infrastructure::rate_limiter::in_memory::SlidingWindowRateLimiter;
use product_catalog::shell::config::AppConfig;
use product_catalog::shell::http::router;
use product_catalog::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()?;

    // In-memory store for now
    let store = Arc::new(InMemoryCatalogStore::new());
    let rate_limiter = config.rate_limit.as_ref().map(|rate_limit| {
        tracing::info!(
            max_requests = rate_limit.policy.max_requests,
            window_ms = rate_limit.policy.window.as_millis() as u64,
            "rate limiting GET /products/{{sku}}"
        );
        Arc::new(SlidingWindowRateLimiter::new(
            rate_limit.policy,
            rate_limit.max_tracked_clients,
        )) as Arc<dyn RateLimiter>
    });

    let app = router(AppState::new(store, rate_limiter));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Product catalog listening on http://{}", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;
    tracing::info!("Product catalog stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
