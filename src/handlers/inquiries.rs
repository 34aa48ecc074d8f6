// ============================================================================
// Public Form Handlers - contact, service inquiry, newsletter
// ============================================================================
//
// Each request drives a fresh form controller with the posted fields, so the
// HTTP path and the controllers share one set of rules: required fields,
// blank optionals stored as NULL, one insert per accepted submission.
//
// ============================================================================

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::forms::{ContactForm, NewsletterSignup, ServiceInquiryForm};
use crate::middleware::error_handling::Result;
use crate::models::{
    ContactInquiry, CreateContactInquiryRequest, CreateServiceInquiryRequest,
    NewsletterSubscriber, ServiceInquiry, SubscribeRequest,
};
use crate::services::{InquiryService, NewsletterService};
use crate::AppState;
use super::{submission_reply, SubmissionResponse};

/// POST /api/contact-inquiries
pub async fn create_contact_inquiry(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateContactInquiryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmissionResponse<ContactInquiry>>)> {
    let Json(request) = payload?;
    request.validate()?;

    let form = ContactForm::new(InquiryService::new(state.store.clone()));
    form.set_fields(request.into()).await;

    submission_reply(form.submit().await)
}

/// POST /api/service-inquiries
pub async fn create_service_inquiry(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateServiceInquiryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmissionResponse<ServiceInquiry>>)> {
    let Json(request) = payload?;
    request.validate()?;

    let form = ServiceInquiryForm::new(InquiryService::new(state.store.clone()));
    form.set_fields(request.into()).await;

    submission_reply(form.submit().await)
}

/// POST /api/newsletter/subscribers
///
/// 409 when the email is already on the list.
pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SubscribeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmissionResponse<NewsletterSubscriber>>)> {
    let Json(request) = payload?;
    request.validate()?;

    let signup = NewsletterSignup::new(NewsletterService::new(state.store.clone()))
        .with_name_field()
        .with_confirmation_delay(state.config.newsletter_confirmation);
    signup.set_fields(request.into()).await;

    submission_reply(signup.submit().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::repositories::{MemoryStore, SiteStore, SiteTable};
    use axum::{body::Body, http::Request, routing::post, Router};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router(store: &MemoryStore) -> Router {
        let state = AppState::new(AppConfig::for_tests("test-secret"), Arc::new(store.clone()));
        Router::new()
            .route("/contact", post(create_contact_inquiry))
            .route("/newsletter", post(subscribe_newsletter))
            .with_state(state)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_contact_created() {
        let store = MemoryStore::new();
        let response = router(&store)
            .oneshot(post_json("/contact", r#"{"name":"A","email":"a@b.com","phone":"","message":"hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let rows = store.list_contact_inquiries().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].phone, None);
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected_before_store() {
        let store = MemoryStore::new();
        let response = router(&store)
            .oneshot(post_json("/contact", r#"{"name":"A","email":"nope","message":"hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.insert_calls(SiteTable::ContactInquiries), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let store = MemoryStore::new();
        let response = router(&store)
            .oneshot(post_json("/newsletter", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_repeat_newsletter_email_is_409() {
        let store = MemoryStore::new();
        let app = router(&store);

        let first = app
            .clone()
            .oneshot(post_json("/newsletter", r#"{"email":"x@y.com"}"#))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app
            .oneshot(post_json("/newsletter", r#"{"email":"x@y.com"}"#))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }
}
