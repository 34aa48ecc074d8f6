use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    showcase_order, ContactInquiry, ContactStatus, NewContactInquiry, NewServiceInquiry,
    NewSubscriber, NewsletterSubscriber, PortfolioProject, PortfolioProjectInput,
    PublicationStatus, ServiceInquiry, ServiceInquiryStatus, SubscriberStatus, Testimonial,
    TestimonialInput,
};
use super::{SiteStore, SiteTable, StoreError, StoreResult};

#[derive(Debug, Default)]
struct MemoryTables {
    contact_inquiries: Vec<ContactInquiry>,
    service_inquiries: Vec<ServiceInquiry>,
    portfolio_projects: Vec<PortfolioProject>,
    testimonials: Vec<Testimonial>,
    newsletter_subscribers: Vec<NewsletterSubscriber>,
}

#[derive(Debug, Default)]
struct CallStats {
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    inserts: HashMap<SiteTable, AtomicUsize>,
}

/// In-process `SiteStore` with the same ordering and uniqueness rules as the
/// PostgreSQL schema. Supports injected latency and per-table failures, and
/// records call statistics.
#[derive(Clone)]
pub struct MemoryStore {
    tables: Arc<RwLock<MemoryTables>>,
    failing: Arc<RwLock<HashSet<SiteTable>>>,
    latency: Option<Duration>,
    stats: Arc<CallStats>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Decrements the in-flight counter when a call finishes or is dropped.
struct InFlight<'a>(&'a CallStats);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        let stats = CallStats {
            inserts: SiteTable::ALL
                .into_iter()
                .map(|table| (table, AtomicUsize::new(0)))
                .collect(),
            ..CallStats::default()
        };

        Self {
            tables: Arc::new(RwLock::new(MemoryTables::default())),
            failing: Arc::new(RwLock::new(HashSet::new())),
            latency: None,
            stats: Arc::new(stats),
        }
    }

    /// Every call waits this long before touching the tables.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub async fn set_failing(&self, table: SiteTable, failing: bool) {
        let mut failing_tables = self.failing.write().await;
        if failing {
            failing_tables.insert(table);
        } else {
            failing_tables.remove(&table);
        }
    }

    /// Insert attempts against `table`, including rejected ones.
    pub fn insert_calls(&self, table: SiteTable) -> usize {
        self.stats
            .inserts
            .get(&table)
            .map(|count| count.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Highest number of calls observed in flight at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.stats.max_in_flight.load(Ordering::SeqCst)
    }

    pub async fn put_portfolio_project(&self, project: PortfolioProject) {
        self.tables.write().await.portfolio_projects.push(project);
    }

    pub async fn put_testimonial(&self, testimonial: Testimonial) {
        self.tables.write().await.testimonials.push(testimonial);
    }

    async fn enter(&self, table: SiteTable) -> StoreResult<InFlight<'_>> {
        let now = self.stats.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.stats.max_in_flight.fetch_max(now, Ordering::SeqCst);
        let guard = InFlight(&self.stats);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        if self.failing.read().await.contains(&table) {
            return Err(StoreError::Unavailable(format!("{} is unavailable", table)));
        }

        Ok(guard)
    }

    async fn enter_insert(&self, table: SiteTable) -> StoreResult<InFlight<'_>> {
        if let Some(count) = self.stats.inserts.get(&table) {
            count.fetch_add(1, Ordering::SeqCst);
        }
        self.enter(table).await
    }
}

/// Newest first; rows inserted later win ties.
fn newest_first<T: Clone>(rows: &[T], key: impl Fn(&T) -> chrono::DateTime<Utc>) -> Vec<T> {
    let mut sorted: Vec<T> = rows.iter().rev().cloned().collect();
    sorted.sort_by(|a, b| key(b).cmp(&key(a)));
    sorted
}

fn active_showcase<T: Clone + crate::models::Showcased>(rows: &[T]) -> Vec<T> {
    let mut active: Vec<T> = rows
        .iter()
        .rev()
        .filter(|row| row.status() == PublicationStatus::Active)
        .cloned()
        .collect();
    active.sort_by(showcase_order);
    active
}

#[async_trait]
impl SiteStore for MemoryStore {
    async fn insert_contact_inquiry(&self, inquiry: NewContactInquiry) -> StoreResult<ContactInquiry> {
        let _call = self.enter_insert(SiteTable::ContactInquiries).await?;
        let now = Utc::now();
        let row = ContactInquiry {
            id: Uuid::new_v4(),
            name: inquiry.name,
            email: inquiry.email,
            phone: inquiry.phone,
            subject: inquiry.subject,
            message: inquiry.message,
            status: ContactStatus::New,
            created_at: now,
            updated_at: now,
        };
        self.tables.write().await.contact_inquiries.push(row.clone());
        Ok(row)
    }

    async fn list_contact_inquiries(&self) -> StoreResult<Vec<ContactInquiry>> {
        let _call = self.enter(SiteTable::ContactInquiries).await?;
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.contact_inquiries, |row| row.created_at))
    }

    async fn update_contact_status(&self, id: Uuid, status: ContactStatus) -> StoreResult<ContactInquiry> {
        let _call = self.enter(SiteTable::ContactInquiries).await?;
        let mut tables = self.tables.write().await;
        let row = tables
            .contact_inquiries
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(StoreError::NotFound)?;
        row.status = status;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn insert_service_inquiry(&self, inquiry: NewServiceInquiry) -> StoreResult<ServiceInquiry> {
        let _call = self.enter_insert(SiteTable::ServiceInquiries).await?;
        let now = Utc::now();
        let row = ServiceInquiry {
            id: Uuid::new_v4(),
            name: inquiry.name,
            email: inquiry.email,
            phone: inquiry.phone,
            service_type: inquiry.service_type,
            project_type: inquiry.project_type,
            budget_range: inquiry.budget_range,
            project_timeline: inquiry.project_timeline,
            location: inquiry.location,
            project_details: inquiry.project_details,
            status: ServiceInquiryStatus::New,
            created_at: now,
            updated_at: now,
        };
        self.tables.write().await.service_inquiries.push(row.clone());
        Ok(row)
    }

    async fn list_service_inquiries(&self) -> StoreResult<Vec<ServiceInquiry>> {
        let _call = self.enter(SiteTable::ServiceInquiries).await?;
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.service_inquiries, |row| row.created_at))
    }

    async fn update_service_status(&self, id: Uuid, status: ServiceInquiryStatus) -> StoreResult<ServiceInquiry> {
        let _call = self.enter(SiteTable::ServiceInquiries).await?;
        let mut tables = self.tables.write().await;
        let row = tables
            .service_inquiries
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(StoreError::NotFound)?;
        row.status = status;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn list_active_portfolio_projects(&self) -> StoreResult<Vec<PortfolioProject>> {
        let _call = self.enter(SiteTable::PortfolioProjects).await?;
        let tables = self.tables.read().await;
        Ok(active_showcase(&tables.portfolio_projects))
    }

    async fn list_portfolio_projects(&self) -> StoreResult<Vec<PortfolioProject>> {
        let _call = self.enter(SiteTable::PortfolioProjects).await?;
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.portfolio_projects, |row| row.created_at))
    }

    async fn create_portfolio_project(&self, input: PortfolioProjectInput) -> StoreResult<PortfolioProject> {
        let _call = self.enter_insert(SiteTable::PortfolioProjects).await?;
        let now = Utc::now();
        let row = PortfolioProject {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            category: input.category,
            client_name: input.client_name,
            location: input.location,
            completion_date: input.completion_date,
            project_size: input.project_size,
            image_url: input.image_url,
            gallery_images: input.gallery_images,
            featured: input.featured,
            status: input.status,
            created_at: now,
            updated_at: now,
        };
        self.tables.write().await.portfolio_projects.push(row.clone());
        Ok(row)
    }

    async fn replace_portfolio_project(&self, id: Uuid, input: PortfolioProjectInput) -> StoreResult<PortfolioProject> {
        let _call = self.enter(SiteTable::PortfolioProjects).await?;
        let mut tables = self.tables.write().await;
        let row = tables
            .portfolio_projects
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(StoreError::NotFound)?;
        row.title = input.title;
        row.description = input.description;
        row.category = input.category;
        row.client_name = input.client_name;
        row.location = input.location;
        row.completion_date = input.completion_date;
        row.project_size = input.project_size;
        row.image_url = input.image_url;
        row.gallery_images = input.gallery_images;
        row.featured = input.featured;
        row.status = input.status;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete_portfolio_project(&self, id: Uuid) -> StoreResult<()> {
        let _call = self.enter(SiteTable::PortfolioProjects).await?;
        let mut tables = self.tables.write().await;
        let before = tables.portfolio_projects.len();
        tables.portfolio_projects.retain(|row| row.id != id);
        if tables.portfolio_projects.len() == before {
            return Err(StoreError::NotFound);
        }
        for testimonial in tables
            .testimonials
            .iter_mut()
            .filter(|t| t.project_id == Some(id))
        {
            testimonial.project_id = None;
        }
        Ok(())
    }

    async fn list_active_testimonials(&self) -> StoreResult<Vec<Testimonial>> {
        let _call = self.enter(SiteTable::Testimonials).await?;
        let tables = self.tables.read().await;
        Ok(active_showcase(&tables.testimonials))
    }

    async fn list_testimonials(&self) -> StoreResult<Vec<Testimonial>> {
        let _call = self.enter(SiteTable::Testimonials).await?;
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.testimonials, |row| row.created_at))
    }

    async fn create_testimonial(&self, input: TestimonialInput) -> StoreResult<Testimonial> {
        let _call = self.enter_insert(SiteTable::Testimonials).await?;
        let now = Utc::now();
        let row = Testimonial {
            id: Uuid::new_v4(),
            client_name: input.client_name,
            client_title: input.client_title,
            company_name: input.company_name,
            testimonial_text: input.testimonial_text,
            rating: input.rating,
            project_id: input.project_id,
            image_url: input.image_url,
            featured: input.featured,
            status: input.status,
            created_at: now,
            updated_at: now,
        };
        self.tables.write().await.testimonials.push(row.clone());
        Ok(row)
    }

    async fn replace_testimonial(&self, id: Uuid, input: TestimonialInput) -> StoreResult<Testimonial> {
        let _call = self.enter(SiteTable::Testimonials).await?;
        let mut tables = self.tables.write().await;
        let row = tables
            .testimonials
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(StoreError::NotFound)?;
        row.client_name = input.client_name;
        row.client_title = input.client_title;
        row.company_name = input.company_name;
        row.testimonial_text = input.testimonial_text;
        row.rating = input.rating;
        row.project_id = input.project_id;
        row.image_url = input.image_url;
        row.featured = input.featured;
        row.status = input.status;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete_testimonial(&self, id: Uuid) -> StoreResult<()> {
        let _call = self.enter(SiteTable::Testimonials).await?;
        let mut tables = self.tables.write().await;
        let before = tables.testimonials.len();
        tables.testimonials.retain(|row| row.id != id);
        if tables.testimonials.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn insert_newsletter_subscriber(&self, subscriber: NewSubscriber) -> StoreResult<NewsletterSubscriber> {
        let _call = self.enter_insert(SiteTable::NewsletterSubscribers).await?;
        let mut tables = self.tables.write().await;

        let taken = tables
            .newsletter_subscribers
            .iter()
            .any(|row| row.email.eq_ignore_ascii_case(&subscriber.email));
        if taken {
            return Err(StoreError::UniqueViolation {
                constraint: "newsletter_subscribers_email_key".to_string(),
            });
        }

        let row = NewsletterSubscriber {
            id: Uuid::new_v4(),
            email: subscriber.email,
            name: subscriber.name,
            subscribed_at: Utc::now(),
            status: SubscriberStatus::Active,
        };
        tables.newsletter_subscribers.push(row.clone());
        Ok(row)
    }

    async fn list_newsletter_subscribers(&self) -> StoreResult<Vec<NewsletterSubscriber>> {
        let _call = self.enter(SiteTable::NewsletterSubscribers).await?;
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.newsletter_subscribers, |row| row.subscribed_at))
    }

    async fn unsubscribe(&self, id: Uuid) -> StoreResult<NewsletterSubscriber> {
        let _call = self.enter(SiteTable::NewsletterSubscribers).await?;
        let mut tables = self.tables.write().await;
        let row = tables
            .newsletter_subscribers
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(StoreError::NotFound)?;
        row.status = SubscriberStatus::Unsubscribed;
        Ok(row.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscriber(email: &str) -> NewSubscriber {
        NewSubscriber { email: email.to_string(), name: None }
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let store = MemoryStore::new();
        store.insert_newsletter_subscriber(subscriber("a@b.com")).await.unwrap();

        let err = store
            .insert_newsletter_subscriber(subscriber("A@B.com"))
            .await
            .unwrap_err();
        assert!(err.is_unique_violation());
        assert_eq!(store.insert_calls(SiteTable::NewsletterSubscribers), 2);
        assert_eq!(store.list_newsletter_subscribers().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_default_store_counts_inserts() {
        let store = MemoryStore::default();
        store.insert_newsletter_subscriber(subscriber("a@b.com")).await.unwrap();

        assert_eq!(store.insert_calls(SiteTable::NewsletterSubscribers), 1);
        assert_eq!(store.insert_calls(SiteTable::ContactInquiries), 0);
    }

    #[tokio::test]
    async fn test_failing_table_only_affects_that_table() {
        let store = MemoryStore::new();
        store.set_failing(SiteTable::Testimonials, true).await;

        assert!(matches!(
            store.list_testimonials().await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(store.list_contact_inquiries().await.is_ok());

        store.set_failing(SiteTable::Testimonials, false).await;
        assert!(store.list_testimonials().await.is_ok());
    }

    #[tokio::test]
    async fn test_deleting_project_unlinks_its_testimonials() {
        let store = MemoryStore::new();
        let project = store
            .create_portfolio_project(
                serde_json::from_value(serde_json::json!({
                    "title": "Arena Showroom",
                    "category": "showroom",
                    "featured": false,
                    "status": "active"
                }))
                .unwrap(),
            )
            .await
            .unwrap();
        let testimonial = store
            .create_testimonial(
                serde_json::from_value(serde_json::json!({
                    "client_name": "Priya",
                    "testimonial_text": "Lovely work",
                    "project_id": project.id,
                    "featured": false,
                    "status": "active"
                }))
                .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(testimonial.project_id, Some(project.id));

        store.delete_portfolio_project(project.id).await.unwrap();

        let testimonials = store.list_testimonials().await.unwrap();
        assert_eq!(testimonials.len(), 1);
        assert_eq!(testimonials[0].project_id, None);
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.delete_portfolio_project(Uuid::new_v4()).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_contacts_listed_newest_first() {
        let store = MemoryStore::new();
        for name in ["first", "second", "third"] {
            store
                .insert_contact_inquiry(NewContactInquiry {
                    name: name.to_string(),
                    email: "a@b.com".to_string(),
                    phone: None,
                    subject: None,
                    message: "hi".to_string(),
                })
                .await
                .unwrap();
        }

        let names: Vec<String> = store
            .list_contact_inquiries()
            .await
            .unwrap()
            .into_iter()
            .map(|row| row.name)
            .collect();
        assert_eq!(names, vec!["third", "second", "first"]);
    }
}
