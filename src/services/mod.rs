pub mod dashboard_service;
pub mod feed;
pub mod inquiry_service;
pub mod newsletter_service;
pub mod showcase_service;

use thiserror::Error;

use crate::repositories::StoreError;

pub use dashboard_service::{
    AdminAccess, AdminDashboard, DashboardCounts, DashboardRow, DashboardService,
    DashboardSnapshot, DashboardView, TableSection,
};
pub use feed::{Feed, PortfolioFeed, ShowcaseItem, TestimonialFeed};
pub use inquiry_service::InquiryService;
pub use newsletter_service::NewsletterService;
pub use showcase_service::ShowcaseService;

/// Why a form submission did not produce a row.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("email is already subscribed")]
    AlreadySubscribed,

    #[error(transparent)]
    Backend(#[from] StoreError),
}
