pub mod config;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::handlers::{admin, inquiries, showcase, site};
use crate::middleware::{
    admin_middleware, auth_middleware, metrics_handler, metrics_middleware,
    rate_limit_middleware, request_id_middleware, RateLimitConfig, RateLimiter,
};
use crate::repositories::DynSiteStore;

/// Shared handler state: settings plus the store every service is built on.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: DynSiteStore,
}

impl AppState {
    pub fn new(config: AppConfig, store: DynSiteStore) -> Self {
        Self { config, store }
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    for origin in &config.cors_origins {
        if origin.starts_with("http://") && !origin.contains("localhost") {
            tracing::warn!(
                "⚠️  Insecure HTTP origin in CORS: {} (use HTTPS in production!)",
                origin
            );
        }
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("❌ Invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    tracing::info!("✅ CORS configured with {} allowed origins", origins.len());

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
}

/// Builds the full router. Must be called inside a Tokio runtime because the
/// form rate limiter starts its sweep task here.
pub fn create_app(state: AppState) -> Router {
    let form_limiter = Arc::new(RateLimiter::new(RateLimitConfig::forms(
        state.config.form_rate_limit_per_minute,
    )));

    // Public form submissions, rate limited per client IP
    let forms = Router::new()
        .route("/contact-inquiries", post(inquiries::create_contact_inquiry))
        .route("/service-inquiries", post(inquiries::create_service_inquiry))
        .route("/newsletter/subscribers", post(inquiries::subscribe_newsletter))
        .layer(axum_middleware::from_fn_with_state(form_limiter, rate_limit_middleware));

    // Public read endpoints
    let public = Router::new()
        .route("/portfolio", get(showcase::list_portfolio))
        .route("/testimonials", get(showcase::list_testimonials))
        .route("/site/form-options", get(site::form_options))
        .route("/site/services", get(site::services));

    // Admin endpoints. The last layer runs first: auth sets the claims that
    // admin_middleware checks.
    let admin_routes = Router::new()
        .route("/dashboard", get(admin::get_dashboard))
        .route("/portfolio", post(admin::create_portfolio_project))
        .route(
            "/portfolio/:id",
            put(admin::update_portfolio_project).delete(admin::delete_portfolio_project),
        )
        .route("/testimonials", post(admin::create_testimonial))
        .route(
            "/testimonials/:id",
            put(admin::update_testimonial).delete(admin::delete_testimonial),
        )
        .route("/contact-inquiries/:id/status", put(admin::update_contact_status))
        .route("/service-inquiries/:id/status", put(admin::update_service_status))
        .route(
            "/newsletter-subscribers/:id/unsubscribe",
            post(admin::unsubscribe_subscriber),
        )
        .layer(axum_middleware::from_fn(admin_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    let cors = cors_layer(&state.config);

    Router::new()
        .nest("/api", forms.merge(public))
        .nest("/api/admin", admin_routes)
        .route("/health", get(site::health_check))
        .route("/metrics", get(metrics_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(request_id_middleware))
                .layer(axum_middleware::from_fn(metrics_middleware))
                .layer(cors),
        )
        .with_state(state)
}
