// Admin API: token checks, dashboard aggregation and content management.
// Run with: cargo test --test admin_api

use std::sync::Arc;

use axum::http::{header, HeaderValue, StatusCode};
use axum_test::{TestRequest, TestServer};
use serde_json::{json, Value};
use uuid::Uuid;

use bl_interiors::config::AppConfig;
use bl_interiors::middleware::JwtService;
use bl_interiors::models::{NewContactInquiry, NewSubscriber, UserRole};
use bl_interiors::repositories::{MemoryStore, SiteStore, SiteTable};
use bl_interiors::{create_app, AppState};

const SECRET: &str = "admin-api-secret";

fn server(store: &MemoryStore) -> TestServer {
    let state = AppState::new(AppConfig::for_tests(SECRET), Arc::new(store.clone()));
    TestServer::new(create_app(state)).unwrap()
}

fn token(role: UserRole, audience: &str) -> String {
    JwtService::new(SECRET, audience)
        .generate_token(Uuid::new_v4(), Some("owner@blinteriors.in"), role, chrono::Duration::hours(1))
        .unwrap()
}

fn bearer(request: TestRequest, token: &str) -> TestRequest {
    request.add_header(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    )
}

fn admin(request: TestRequest) -> TestRequest {
    bearer(request, &token(UserRole::Admin, "authenticated"))
}

async fn seed_contact(store: &MemoryStore, name: &str) -> Uuid {
    store
        .insert_contact_inquiry(NewContactInquiry {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
            subject: None,
            message: "Looking to redo our living room".to_string(),
        })
        .await
        .unwrap()
        .id
}

fn portfolio_body(title: &str, status: &str) -> Value {
    json!({
        "title": title,
        "category": "showroom",
        "client_name": "Maruti Suzuki",
        "featured": true,
        "status": status
    })
}

// ============================================================================
// Access control
// ============================================================================

#[tokio::test]
async fn dashboard_requires_a_token() {
    let store = MemoryStore::new();
    let response = server(&store).get("/api/admin/dashboard").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Unauthorized");
    assert_eq!(body["status"], 401);
    assert_eq!(store.max_in_flight(), 0);
}

#[tokio::test]
async fn dashboard_rejects_wrong_audience() {
    let store = MemoryStore::new();
    let server = server(&store);

    let response = bearer(server.get("/api/admin/dashboard"), &token(UserRole::Admin, "someone-else")).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["error"], "Invalid token");
}

#[tokio::test]
async fn non_admin_is_forbidden_and_nothing_is_fetched() {
    let store = MemoryStore::new();
    let server = server(&store);

    let response = bearer(server.get("/api/admin/dashboard"), &token(UserRole::User, "authenticated")).await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["error"], "Admin access required");
    assert_eq!(body["status"], 403);
    assert_eq!(store.max_in_flight(), 0);
}

// ============================================================================
// Dashboard
// ============================================================================

#[tokio::test]
async fn dashboard_counts_match_rows_and_carry_badges() {
    let store = MemoryStore::new();
    seed_contact(&store, "Asha").await;
    seed_contact(&store, "Vikram").await;
    store
        .insert_newsletter_subscriber(NewSubscriber { email: "reader@example.com".into(), name: None })
        .await
        .unwrap();
    let server = server(&store);

    let response = admin(server.get("/api/admin/dashboard")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["counts"]["contact_inquiries"], 2);
    assert_eq!(body["counts"]["newsletter_subscribers"], 1);
    assert_eq!(body["counts"]["portfolio_projects"], 0);
    assert_eq!(body["contact_inquiries"]["state"], "loaded");
    assert_eq!(body["contact_inquiries"]["rows"][0]["name"], "Vikram");
    assert_eq!(body["contact_inquiries"]["rows"][0]["badge"], "destructive");
    assert_eq!(body["newsletter_subscribers"]["rows"][0]["badge"], "default");
    assert!(body["notification"].is_null());
}

#[tokio::test]
async fn one_failing_table_is_reported_alone() {
    let store = MemoryStore::new();
    seed_contact(&store, "Asha").await;
    store.set_failing(SiteTable::Testimonials, true).await;
    let server = server(&store);

    let response = admin(server.get("/api/admin/dashboard")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["testimonials"]["state"], "failed");
    assert!(body["counts"]["testimonials"].is_null());
    assert_eq!(body["counts"]["contact_inquiries"], 1);
    assert_eq!(body["notification"]["title"], "Error loading data");
    assert!(body["notification"]["description"]
        .as_str()
        .unwrap()
        .contains("testimonials"));
}

// ============================================================================
// Content management
// ============================================================================

#[tokio::test]
async fn portfolio_crud_round() {
    let store = MemoryStore::new();
    let server = server(&store);

    let created = admin(server.post("/api/admin/portfolio"))
        .json(&portfolio_body("Maruti Suzuki Showroom", "draft"))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let id = created.json::<Value>()["id"].as_str().unwrap().to_string();

    let public: Vec<Value> = server.get("/api/portfolio").await.json();
    assert!(public.is_empty());

    let updated = admin(server.put(&format!("/api/admin/portfolio/{}", id)))
        .json(&portfolio_body("Maruti Suzuki Showroom", "active"))
        .await;
    updated.assert_status_ok();

    let public: Vec<Value> = server.get("/api/portfolio").await.json();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0]["id"], id.as_str());

    let deleted = admin(server.delete(&format!("/api/admin/portfolio/{}", id))).await;
    assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);

    let again = admin(server.delete(&format!("/api/admin/portfolio/{}", id))).await;
    assert_eq!(again.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_testimonial_is_rejected() {
    let store = MemoryStore::new();
    let server = server(&store);

    let response = admin(server.post("/api/admin/testimonials"))
        .json(&json!({ "client_name": "Rajesh Kumar", "testimonial_text": "Superb", "rating": 9 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(store.insert_calls(SiteTable::Testimonials), 0);
}

#[tokio::test]
async fn testimonial_becomes_public_when_active() {
    let store = MemoryStore::new();
    let server = server(&store);

    admin(server.post("/api/admin/testimonials"))
        .json(&json!({
            "client_name": "Priya Sharma",
            "client_title": "Facility Head",
            "company_name": "Maruti Suzuki",
            "testimonial_text": "Working with BL Interiors on our showroom project was exceptional.",
            "rating": 5,
            "featured": true,
            "status": "active"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let featured: Vec<Value> = server
        .get("/api/testimonials")
        .add_query_param("featured", "true")
        .await
        .json();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0]["company_name"], "Maruti Suzuki");
}

#[tokio::test]
async fn contact_status_update() {
    let store = MemoryStore::new();
    let id = seed_contact(&store, "Asha").await;
    let server = server(&store);

    let response = admin(server.put(&format!("/api/admin/contact-inquiries/{}/status", id)))
        .json(&json!({ "status": "contacted" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "contacted");

    let missing = admin(server.put(&format!("/api/admin/contact-inquiries/{}/status", Uuid::new_v4())))
        .json(&json!({ "status": "completed" }))
        .await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_id_is_a_json_400() {
    let store = MemoryStore::new();
    let server = server(&store);

    let response = admin(server.delete("/api/admin/portfolio/not-a-uuid")).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid path parameter");
    assert_eq!(body["status"], 400);
    assert_eq!(store.insert_calls(SiteTable::PortfolioProjects), 0);
}

#[tokio::test]
async fn unsubscribe_flips_subscriber_status() {
    let store = MemoryStore::new();
    let subscriber = store
        .insert_newsletter_subscriber(NewSubscriber { email: "reader@example.com".into(), name: None })
        .await
        .unwrap();
    let server = server(&store);

    let response = admin(server.post(&format!(
        "/api/admin/newsletter-subscribers/{}/unsubscribe",
        subscriber.id
    )))
    .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "unsubscribed");
}
