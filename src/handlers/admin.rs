// ============================================================================
// Admin Handlers - dashboard and content management
// ============================================================================
//
// Every route here sits behind auth_middleware and admin_middleware. The
// handlers still derive AdminAccess from the claims themselves, so a route
// mounted without the middleware fails closed.
//
// ============================================================================

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path, State,
    },
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::middleware::{
    error_handling::{AppError, Result},
    Claims,
};
use crate::models::{
    ContactInquiry, NewsletterSubscriber, PortfolioProject, PortfolioProjectInput,
    ServiceInquiry, Testimonial, TestimonialInput, UpdateContactStatusRequest,
    UpdateServiceInquiryStatusRequest,
};
use crate::services::{
    AdminAccess, AdminDashboard, DashboardService, DashboardSnapshot, DashboardView,
    InquiryService, NewsletterService, ShowcaseService,
};
use crate::utils::CancelSignal;
use crate::AppState;

// ============================================================================
// DASHBOARD
// ============================================================================

/// GET /api/admin/dashboard
///
/// Always 200 once access is granted; tables that failed to load are marked
/// per table and named in the notification.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<DashboardSnapshot>> {
    let mut dashboard = AdminDashboard::new(
        DashboardService::new(state.store.clone()),
        AdminAccess::from_claims(&claims),
    );
    dashboard.mount(&CancelSignal::never()).await?;

    match dashboard.into_view() {
        DashboardView::Ready(snapshot) => Ok(Json(*snapshot)),
        DashboardView::AccessDenied => {
            Err(AppError::Forbidden("Admin access required".to_string()))
        }
        DashboardView::Loading => Err(AppError::Cancelled),
    }
}

// ============================================================================
// PORTFOLIO
// ============================================================================

/// POST /api/admin/portfolio
pub async fn create_portfolio_project(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: std::result::Result<Json<PortfolioProjectInput>, JsonRejection>,
) -> Result<(StatusCode, Json<PortfolioProject>)> {
    let Json(input) = payload?;
    input.validate()?;

    let project = ShowcaseService::new(state.store.clone())
        .create_project(input, claims.sub)
        .await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/admin/portfolio/:id
pub async fn update_portfolio_project(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
    payload: std::result::Result<Json<PortfolioProjectInput>, JsonRejection>,
) -> Result<Json<PortfolioProject>> {
    let Path(id) = id?;
    let Json(input) = payload?;
    input.validate()?;

    let project = ShowcaseService::new(state.store.clone())
        .replace_project(id, input, claims.sub)
        .await?;
    Ok(Json(project))
}

/// DELETE /api/admin/portfolio/:id
pub async fn delete_portfolio_project(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode> {
    let Path(id) = id?;
    ShowcaseService::new(state.store.clone())
        .delete_project(id, claims.sub)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// TESTIMONIALS
// ============================================================================

/// POST /api/admin/testimonials
pub async fn create_testimonial(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: std::result::Result<Json<TestimonialInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Testimonial>)> {
    let Json(input) = payload?;
    input.validate()?;

    let testimonial = ShowcaseService::new(state.store.clone())
        .create_testimonial(input, claims.sub)
        .await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// PUT /api/admin/testimonials/:id
pub async fn update_testimonial(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
    payload: std::result::Result<Json<TestimonialInput>, JsonRejection>,
) -> Result<Json<Testimonial>> {
    let Path(id) = id?;
    let Json(input) = payload?;
    input.validate()?;

    let testimonial = ShowcaseService::new(state.store.clone())
        .replace_testimonial(id, input, claims.sub)
        .await?;
    Ok(Json(testimonial))
}

/// DELETE /api/admin/testimonials/:id
pub async fn delete_testimonial(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode> {
    let Path(id) = id?;
    ShowcaseService::new(state.store.clone())
        .delete_testimonial(id, claims.sub)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// INQUIRIES & SUBSCRIBERS
// ============================================================================

/// PUT /api/admin/contact-inquiries/:id/status
pub async fn update_contact_status(
    State(state): State<AppState>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
    payload: std::result::Result<Json<UpdateContactStatusRequest>, JsonRejection>,
) -> Result<Json<ContactInquiry>> {
    let Path(id) = id?;
    let Json(request) = payload?;

    let inquiry = InquiryService::new(state.store.clone())
        .update_contact_status(id, request.status)
        .await?;
    Ok(Json(inquiry))
}

/// PUT /api/admin/service-inquiries/:id/status
pub async fn update_service_status(
    State(state): State<AppState>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
    payload: std::result::Result<Json<UpdateServiceInquiryStatusRequest>, JsonRejection>,
) -> Result<Json<ServiceInquiry>> {
    let Path(id) = id?;
    let Json(request) = payload?;

    let inquiry = InquiryService::new(state.store.clone())
        .update_service_status(id, request.status)
        .await?;
    Ok(Json(inquiry))
}

/// POST /api/admin/newsletter-subscribers/:id/unsubscribe
pub async fn unsubscribe_subscriber(
    State(state): State<AppState>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
) -> Result<Json<NewsletterSubscriber>> {
    let Path(id) = id?;
    let subscriber = NewsletterService::new(state.store.clone())
        .unsubscribe(id)
        .await?;
    Ok(Json(subscriber))
}
