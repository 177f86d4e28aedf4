// Sliding window rate limiter held in memory.
//
// Each key owns a ring buffer of at most `max_requests` timestamps. On every
// check, timestamps older than the window are dropped; a full buffer means
// the request is denied and nothing is recorded.

use crate::shared::infrastructure::rate_limiter::{RateLimitDecision, RateLimitPolicy, RateLimiter};
use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use tokio::sync::Mutex;

pub struct SlidingWindowRateLimiter {
    policy: RateLimitPolicy,
    max_tracked_keys: usize,
    windows: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl SlidingWindowRateLimiter {
    pub fn new(policy: RateLimitPolicy, max_tracked_keys: usize) -> Self {
        Self {
            policy,
            max_tracked_keys,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub async fn check_at(&self, key: &str, now: Instant) -> RateLimitDecision {
        let mut windows = self.windows.lock().await;
        if windows.len() >= self.max_tracked_keys && !windows.contains_key(key) {
            self.purge_idle(&mut windows, now);
        }

        let window = windows
            .entry(key.to_string())
            .or_insert_with(|| VecDeque::with_capacity(self.policy.max_requests));
        while let Some(&oldest) = window.front() {
            if now.saturating_duration_since(oldest) >= self.policy.window {
                window.pop_front();
            } else {
                break;
            }
        }

        if window.len() >= self.policy.max_requests {
            let retry_after = window
                .front()
                .map(|&oldest| self.policy.window - now.saturating_duration_since(oldest))
                .unwrap_or(self.policy.window);
            return RateLimitDecision::Denied { retry_after };
        }

        window.push_back(now);
        RateLimitDecision::Allowed {
            remaining: self.policy.max_requests - window.len(),
        }
    }

    pub async fn tracked_keys(&self) -> usize {
        self.windows.lock().await.len()
    }

    fn purge_idle(&self, windows: &mut HashMap<String, VecDeque<Instant>>, now: Instant) {
        let window = self.policy.window;
        windows.retain(|_, timestamps| {
            timestamps
                .back()
                .is_some_and(|&latest| now.saturating_duration_since(latest) < window)
        });
        tracing::debug!(remaining = windows.len(), "purged idle rate limit windows");
    }
}

#[async_trait::async_trait]
impl RateLimiter for SlidingWindowRateLimiter {
    async fn check(&self, key: &str) -> RateLimitDecision {
        self.check_at(key, Instant::now()).await
    }
}
