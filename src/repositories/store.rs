use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    ContactInquiry, ContactStatus, NewContactInquiry, NewServiceInquiry, NewSubscriber,
    NewsletterSubscriber, PortfolioProject, PortfolioProjectInput, ServiceInquiry,
    ServiceInquiryStatus, Testimonial, TestimonialInput,
};

/// PostgreSQL SQLSTATE for unique_violation.
pub const UNIQUE_VIOLATION_CODE: &str = "23505";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("row not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, StoreError::UniqueViolation { .. })
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(ref db_err)
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION_CODE) =>
            {
                StoreError::UniqueViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                }
            }
            other => StoreError::Database(other),
        }
    }
}

/// The five tables the site reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteTable {
    ContactInquiries,
    ServiceInquiries,
    PortfolioProjects,
    Testimonials,
    NewsletterSubscribers,
}

impl SiteTable {
    pub const ALL: [SiteTable; 5] = [
        SiteTable::ContactInquiries,
        SiteTable::ServiceInquiries,
        SiteTable::PortfolioProjects,
        SiteTable::Testimonials,
        SiteTable::NewsletterSubscribers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SiteTable::ContactInquiries => "contact_inquiries",
            SiteTable::ServiceInquiries => "service_inquiries",
            SiteTable::PortfolioProjects => "portfolio_projects",
            SiteTable::Testimonials => "testimonials",
            SiteTable::NewsletterSubscribers => "newsletter_subscribers",
        }
    }
}

impl std::fmt::Display for SiteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// The site's handle to its relational backend. Every insert and query the
/// site performs goes through this trait, addressed per table.
#[async_trait]
pub trait SiteStore: Send + Sync {
    async fn insert_contact_inquiry(&self, inquiry: NewContactInquiry) -> StoreResult<ContactInquiry>;
    /// All contact inquiries, newest first.
    async fn list_contact_inquiries(&self) -> StoreResult<Vec<ContactInquiry>>;
    async fn update_contact_status(&self, id: Uuid, status: ContactStatus) -> StoreResult<ContactInquiry>;

    async fn insert_service_inquiry(&self, inquiry: NewServiceInquiry) -> StoreResult<ServiceInquiry>;
    /// All service inquiries, newest first.
    async fn list_service_inquiries(&self) -> StoreResult<Vec<ServiceInquiry>>;
    async fn update_service_status(&self, id: Uuid, status: ServiceInquiryStatus) -> StoreResult<ServiceInquiry>;

    /// Active projects, featured first then newest first.
    async fn list_active_portfolio_projects(&self) -> StoreResult<Vec<PortfolioProject>>;
    /// Every project regardless of status, newest first.
    async fn list_portfolio_projects(&self) -> StoreResult<Vec<PortfolioProject>>;
    async fn create_portfolio_project(&self, input: PortfolioProjectInput) -> StoreResult<PortfolioProject>;
    async fn replace_portfolio_project(&self, id: Uuid, input: PortfolioProjectInput) -> StoreResult<PortfolioProject>;
    async fn delete_portfolio_project(&self, id: Uuid) -> StoreResult<()>;

    /// Active testimonials, featured first then newest first.
    async fn list_active_testimonials(&self) -> StoreResult<Vec<Testimonial>>;
    /// Every testimonial regardless of status, newest first.
    async fn list_testimonials(&self) -> StoreResult<Vec<Testimonial>>;
    async fn create_testimonial(&self, input: TestimonialInput) -> StoreResult<Testimonial>;
    async fn replace_testimonial(&self, id: Uuid, input: TestimonialInput) -> StoreResult<Testimonial>;
    async fn delete_testimonial(&self, id: Uuid) -> StoreResult<()>;

    /// Fails with `UniqueViolation` when the email is already subscribed.
    async fn insert_newsletter_subscriber(&self, subscriber: NewSubscriber) -> StoreResult<NewsletterSubscriber>;
    /// All subscribers, most recently subscribed first.
    async fn list_newsletter_subscribers(&self) -> StoreResult<Vec<NewsletterSubscriber>>;
    async fn unsubscribe(&self, id: Uuid) -> StoreResult<NewsletterSubscriber>;
}

pub type DynSiteStore = Arc<dyn SiteStore>;
