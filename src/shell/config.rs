// Process configuration, read from the environment once at startup.

use anyhow::{Context, bail};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::shared::infrastructure::rate_limiter::RateLimitPolicy;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub rate_limit: Option<RateLimitConfig>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub policy: RateLimitPolicy,
    pub max_tracked_clients: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = parse_or(&lookup, "CATALOG_HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port = parse_or(&lookup, "CATALOG_PORT", 8080u16)?;

        let rate_limit = if parse_or(&lookup, "CATALOG_RATE_LIMIT_ENABLED", true)? {
            let defaults = RateLimitPolicy::default();
            let max_requests = parse_or(
                &lookup,
                "CATALOG_RATE_LIMIT_MAX_REQUESTS",
                defaults.max_requests,
            )?;
            let window_ms = parse_or(
                &lookup,
                "CATALOG_RATE_LIMIT_WINDOW_MS",
                defaults.window.as_millis() as u64,
            )?;
            let max_tracked_clients =
                parse_or(&lookup, "CATALOG_RATE_LIMIT_MAX_CLIENTS", 10_000usize)?;
            if max_requests == 0 || window_ms == 0 || max_tracked_clients == 0 {
                bail!("rate limit settings must be greater than zero");
            }
            Some(RateLimitConfig {
                policy: RateLimitPolicy {
                    max_requests,
                    window: Duration::from_millis(window_ms),
                },
                max_tracked_clients,
            })
        } else {
            None
        };

        Ok(Self {
            host,
            port,
            rate_limit,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}
