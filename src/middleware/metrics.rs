// ============================================================================
// Prometheus Metrics
// ============================================================================
//
// Metrics:
//   bl_http_request_duration_seconds    histogram  method, path, status
//   bl_http_requests_total              counter    method, path, status
//   bl_form_submissions_total           counter    form, outcome
//   bl_dashboard_table_failures_total   counter    table
//   bl_auth_failures_total              counter    reason
//
// Scraped from GET /metrics.
//
// ============================================================================

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec, TextEncoder,
};
use std::time::Instant;

lazy_static! {
    pub static ref HTTP_REQUEST_DURATION: HistogramVec = register_histogram_vec!(
        "bl_http_request_duration_seconds",
        "HTTP request latency in seconds",
        &["method", "path", "status"],
        vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0]
    ).unwrap();

    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = register_counter_vec!(
        "bl_http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    ).unwrap();

    /// Form submissions by form name and outcome
    /// (submitted, failed, already_subscribed, blocked).
    pub static ref FORM_SUBMISSIONS_TOTAL: CounterVec = register_counter_vec!(
        "bl_form_submissions_total",
        "Form submissions by form and outcome",
        &["form", "outcome"]
    ).unwrap();

    pub static ref DASHBOARD_TABLE_FAILURES_TOTAL: CounterVec = register_counter_vec!(
        "bl_dashboard_table_failures_total",
        "Admin dashboard table fetches that failed",
        &["table"]
    ).unwrap();

    pub static ref AUTH_FAILURES_TOTAL: CounterVec = register_counter_vec!(
        "bl_auth_failures_total",
        "Rejected admin requests by reason",
        &["reason"]
    ).unwrap();
}

/// Collapses id segments so paths stay low-cardinality.
///
/// Example: /api/admin/portfolio/550e8400-e29b-41d4-a716-446655440000 -> /api/admin/portfolio/:id
fn normalize_path(path: &str) -> String {
    let normalized: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if uuid::Uuid::parse_str(segment).is_ok() || segment.parse::<i64>().is_ok() {
                ":id"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", normalized.join("/"))
}

pub async fn metrics_middleware(
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = normalize_path(request.uri().path());

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status().as_u16().to_string();

    HTTP_REQUEST_DURATION
        .with_label_values(&[method.as_str(), &path, &status])
        .observe(duration.as_secs_f64());

    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method.as_str(), &path, &status])
        .inc();

    tracing::debug!(
        target: "metrics",
        method = %method,
        path = %path,
        status = %status,
        duration_ms = %duration.as_millis(),
        "HTTP request completed"
    );

    response
}

/// Prometheus text exposition of the default registry.
pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];

    match encoder.encode(&metric_families, &mut buffer) {
        Ok(_) => (
            StatusCode::OK,
            [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            buffer,
        ),
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4")],
                b"Failed to encode metrics".to_vec(),
            )
        }
    }
}

pub fn record_form_submission(form: &str, outcome: &str) {
    FORM_SUBMISSIONS_TOTAL.with_label_values(&[form, outcome]).inc();
}

pub fn record_dashboard_failure(table: &str) {
    DASHBOARD_TABLE_FAILURES_TOTAL.with_label_values(&[table]).inc();
}

pub fn record_auth_failure(reason: &str) {
    AUTH_FAILURES_TOTAL.with_label_values(&[reason]).inc();
    tracing::warn!(target: "security", reason = %reason, "Admin request rejected");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_metrics_endpoint() {
        let response = metrics_handler().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path("/api/admin/portfolio/550e8400-e29b-41d4-a716-446655440000"),
            "/api/admin/portfolio/:id"
        );
        assert_eq!(normalize_path("/api/contact-inquiries"), "/api/contact-inquiries");
        assert_eq!(normalize_path("/"), "/");
    }

    #[test]
    fn test_form_submission_counter() {
        let before = FORM_SUBMISSIONS_TOTAL
            .with_label_values(&["metrics_test", "submitted"])
            .get();
        record_form_submission("metrics_test", "submitted");
        let after = FORM_SUBMISSIONS_TOTAL
            .with_label_values(&["metrics_test", "submitted"])
            .get();
        assert_eq!(after, before + 1.0);
    }
}
