/// Per-IP sliding-window rate limiting for the public form endpoints.
///
/// In-memory and per-instance; every submission from one address within the
/// window counts against the same budget.

use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use dashmap::DashMap;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::time::sleep;

#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per window
    pub max_requests: u32,
    pub window: Duration,
}

impl RateLimitConfig {
    /// Form submissions: `per_minute` requests per rolling minute.
    pub fn forms(per_minute: u32) -> Self {
        Self {
            max_requests: per_minute.max(1),
            window: Duration::from_secs(60),
        }
    }
}

struct IpTracker {
    requests: Vec<Instant>,
    last_seen: Instant,
}

impl IpTracker {
    fn new() -> Self {
        Self {
            requests: Vec::new(),
            last_seen: Instant::now(),
        }
    }

    /// Drops requests outside the window, then records this one if under the limit.
    fn check_limit(&mut self, config: &RateLimitConfig) -> bool {
        let now = Instant::now();

        self.requests
            .retain(|&req_time| now.duration_since(req_time) < config.window);
        self.last_seen = now;

        if self.requests.len() >= config.max_requests as usize {
            return false;
        }

        self.requests.push(now);
        true
    }

    fn retry_after(&self, config: &RateLimitConfig) -> u64 {
        match self.requests.first() {
            Some(&oldest) => {
                let remaining = config.window.saturating_sub(oldest.elapsed());
                remaining.as_secs().max(1)
            }
            None => 0,
        }
    }
}

pub struct RateLimiter {
    trackers: Arc<DashMap<String, IpTracker>>,
    config: RateLimitConfig,
}

impl RateLimiter {
    /// Must be called inside a Tokio runtime; spawns the idle-tracker sweep.
    pub fn new(config: RateLimitConfig) -> Self {
        let window = config.window;
        let limiter = Self {
            trackers: Arc::new(DashMap::new()),
            config,
        };

        let trackers = Arc::downgrade(&limiter.trackers);
        tokio::spawn(async move {
            loop {
                sleep(Duration::from_secs(300)).await;
                let Some(trackers) = trackers.upgrade() else {
                    break;
                };
                trackers.retain(|_, tracker| tracker.last_seen.elapsed() < window * 2);
            }
        });

        limiter
    }

    /// `Err(retry_after_secs)` when `ip` is over its budget.
    pub fn check(&self, ip: &str) -> Result<(), u64> {
        let mut entry = self.trackers.entry(ip.to_string()).or_insert_with(IpTracker::new);

        if entry.check_limit(&self.config) {
            Ok(())
        } else {
            Err(entry.retry_after(&self.config))
        }
    }
}

/// Peer address when the server was started with connect info, otherwise the
/// first `x-forwarded-for` hop.
fn client_ip(request: &Request) -> String {
    if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }

    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

pub async fn rate_limit_middleware(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let ip = client_ip(&request);

    match limiter.check(&ip) {
        Ok(()) => next.run(request).await,
        Err(retry_after) => {
            tracing::warn!("Rate limit exceeded for IP: {}", ip);
            (
                StatusCode::TOO_MANY_REQUESTS,
                [("Retry-After", retry_after.to_string())],
                Json(json!({
                    "error": format!("Rate limit exceeded. Try again in {} seconds.", retry_after),
                    "status": StatusCode::TOO_MANY_REQUESTS.as_u16()
                })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, routing::post, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_rate_limiter_allows_under_limit() {
        let limiter = RateLimiter::new(RateLimitConfig {
            max_requests: 3,
            window: Duration::from_secs(1),
        });

        assert!(limiter.check("127.0.0.1").is_ok());
        assert!(limiter.check("127.0.0.1").is_ok());
        assert!(limiter.check("127.0.0.1").is_ok());
    }

    #[tokio::test]
    async fn test_rate_limiter_blocks_over_limit() {
        let limiter = RateLimiter::new(RateLimitConfig {
            max_requests: 2,
            window: Duration::from_secs(10),
        });

        assert!(limiter.check("192.168.1.1").is_ok());
        assert!(limiter.check("192.168.1.1").is_ok());
        assert!(limiter.check("192.168.1.1").is_err());
    }

    #[tokio::test]
    async fn test_different_ips_independent() {
        let limiter = RateLimiter::new(RateLimitConfig::forms(1));

        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.2").is_ok());
    }

    #[tokio::test]
    async fn test_window_expiration() {
        let limiter = RateLimiter::new(RateLimitConfig {
            max_requests: 1,
            window: Duration::from_millis(100),
        });

        assert!(limiter.check("172.16.0.1").is_ok());
        assert!(limiter.check("172.16.0.1").is_err());

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(limiter.check("172.16.0.1").is_ok());
    }

    #[tokio::test]
    async fn test_middleware_returns_429_with_retry_after() {
        let limiter = Arc::new(RateLimiter::new(RateLimitConfig::forms(1)));
        let app = Router::new()
            .route("/", post(|| async { "OK" }))
            .layer(axum::middleware::from_fn_with_state(limiter, rate_limit_middleware));

        let request = || {
            axum::http::Request::builder()
                .method("POST")
                .uri("/")
                .header("x-forwarded-for", "203.0.113.7")
                .body(Body::empty())
                .unwrap()
        };

        let first = app.clone().oneshot(request()).await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app.oneshot(request()).await.unwrap();
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(second.headers().contains_key("retry-after"));
    }
}
