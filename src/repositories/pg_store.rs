use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{
    ContactInquiry, ContactStatus, NewContactInquiry, NewServiceInquiry, NewSubscriber,
    NewsletterSubscriber, PortfolioProject, PortfolioProjectInput, PublicationStatus,
    ServiceInquiry, ServiceInquiryStatus, Testimonial, TestimonialInput,
};
use super::{
    ContactInquiryRepository, NewsletterRepository, PortfolioRepository,
    ServiceInquiryRepository, SiteStore, StoreResult, TestimonialRepository,
};

/// `SiteStore` over PostgreSQL: one repository per table sharing a pool.
#[derive(Clone)]
pub struct PgSiteStore {
    contacts: ContactInquiryRepository,
    service_inquiries: ServiceInquiryRepository,
    portfolio: PortfolioRepository,
    testimonials: TestimonialRepository,
    newsletter: NewsletterRepository,
}

impl PgSiteStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            contacts: ContactInquiryRepository::new(pool.clone()),
            service_inquiries: ServiceInquiryRepository::new(pool.clone()),
            portfolio: PortfolioRepository::new(pool.clone()),
            testimonials: TestimonialRepository::new(pool.clone()),
            newsletter: NewsletterRepository::new(pool),
        }
    }
}

#[async_trait]
impl SiteStore for PgSiteStore {
    async fn insert_contact_inquiry(&self, inquiry: NewContactInquiry) -> StoreResult<ContactInquiry> {
        self.contacts.insert(&inquiry).await
    }

    async fn list_contact_inquiries(&self) -> StoreResult<Vec<ContactInquiry>> {
        self.contacts.list_newest_first().await
    }

    async fn update_contact_status(&self, id: Uuid, status: ContactStatus) -> StoreResult<ContactInquiry> {
        self.contacts.update_status(id, status).await
    }

    async fn insert_service_inquiry(&self, inquiry: NewServiceInquiry) -> StoreResult<ServiceInquiry> {
        self.service_inquiries.insert(&inquiry).await
    }

    async fn list_service_inquiries(&self) -> StoreResult<Vec<ServiceInquiry>> {
        self.service_inquiries.list_newest_first().await
    }

    async fn update_service_status(&self, id: Uuid, status: ServiceInquiryStatus) -> StoreResult<ServiceInquiry> {
        self.service_inquiries.update_status(id, status).await
    }

    async fn list_active_portfolio_projects(&self) -> StoreResult<Vec<PortfolioProject>> {
        self.portfolio.list_by_status_showcase_order(PublicationStatus::Active).await
    }

    async fn list_portfolio_projects(&self) -> StoreResult<Vec<PortfolioProject>> {
        self.portfolio.list_newest_first().await
    }

    async fn create_portfolio_project(&self, input: PortfolioProjectInput) -> StoreResult<PortfolioProject> {
        self.portfolio.create(&input).await
    }

    async fn replace_portfolio_project(&self, id: Uuid, input: PortfolioProjectInput) -> StoreResult<PortfolioProject> {
        self.portfolio.replace(id, &input).await
    }

    async fn delete_portfolio_project(&self, id: Uuid) -> StoreResult<()> {
        self.portfolio.delete(id).await
    }

    async fn list_active_testimonials(&self) -> StoreResult<Vec<Testimonial>> {
        self.testimonials.list_by_status_showcase_order(PublicationStatus::Active).await
    }

    async fn list_testimonials(&self) -> StoreResult<Vec<Testimonial>> {
        self.testimonials.list_newest_first().await
    }

    async fn create_testimonial(&self, input: TestimonialInput) -> StoreResult<Testimonial> {
        self.testimonials.create(&input).await
    }

    async fn replace_testimonial(&self, id: Uuid, input: TestimonialInput) -> StoreResult<Testimonial> {
        self.testimonials.replace(id, &input).await
    }

    async fn delete_testimonial(&self, id: Uuid) -> StoreResult<()> {
        self.testimonials.delete(id).await
    }

    async fn insert_newsletter_subscriber(&self, subscriber: NewSubscriber) -> StoreResult<NewsletterSubscriber> {
        self.newsletter.insert(&subscriber).await
    }

    async fn list_newsletter_subscribers(&self) -> StoreResult<Vec<NewsletterSubscriber>> {
        self.newsletter.list_recent_first().await
    }

    async fn unsubscribe(&self, id: Uuid) -> StoreResult<NewsletterSubscriber> {
        self.newsletter.unsubscribe(id).await
    }
}
