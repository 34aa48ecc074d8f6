use axum::{response::IntoResponse, Json};

use crate::models::site_content::{service_catalog, FormOptions, ServiceOffering};

/// GET /api/site/form-options
pub async fn form_options() -> Json<FormOptions> {
    Json(FormOptions::current())
}

/// GET /api/site/services
pub async fn services() -> Json<Vec<ServiceOffering>> {
    Json(service_catalog())
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now(),
    }))
}
