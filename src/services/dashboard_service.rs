/// Admin Dashboard Service
///
/// Loads every row of the five site tables for the admin dashboard. The five
/// queries are issued together and awaited together; each table keeps its
/// own result so one failing query does not hide the others.

use serde::Serialize;
use uuid::Uuid;

use crate::forms::Notification;
use crate::middleware::auth::Claims;
use crate::middleware::metrics::record_dashboard_failure;
use crate::models::{
    BadgeVariant, ContactInquiry, NewsletterSubscriber, PortfolioProject, ServiceInquiry,
    StatusBadge, Testimonial,
};
use crate::repositories::{DynSiteStore, SiteTable, StoreResult};
use crate::utils::{cancel::Cancelled, CancelSignal};

/// Proof that the caller may read the dashboard. Only obtainable from
/// verified admin claims or an explicit admin flag.
#[derive(Debug, Clone)]
pub struct AdminAccess {
    granted_to: Option<Uuid>,
}

impl AdminAccess {
    pub fn from_claims(claims: &Claims) -> Option<Self> {
        claims.is_admin().then(|| Self { granted_to: Some(claims.sub) })
    }

    pub fn from_flag(is_admin: bool) -> Option<Self> {
        is_admin.then_some(Self { granted_to: None })
    }

    pub fn granted_to(&self) -> Option<Uuid> {
        self.granted_to
    }
}

/// A row together with the badge its status is shown with.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardRow<T> {
    #[serde(flatten)]
    pub row: T,
    pub badge: BadgeVariant,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TableSection<T> {
    Loaded { rows: Vec<T> },
    Failed { error: String },
}

impl<T> TableSection<T> {
    pub fn rows(&self) -> &[T] {
        match self {
            TableSection::Loaded { rows } => rows,
            TableSection::Failed { .. } => &[],
        }
    }

    /// Row count, or `None` when the table could not be loaded.
    pub fn count(&self) -> Option<usize> {
        match self {
            TableSection::Loaded { rows } => Some(rows.len()),
            TableSection::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TableSection::Failed { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardCounts {
    pub contact_inquiries: Option<usize>,
    pub service_inquiries: Option<usize>,
    pub portfolio_projects: Option<usize>,
    pub testimonials: Option<usize>,
    pub newsletter_subscribers: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub counts: DashboardCounts,
    pub contact_inquiries: TableSection<DashboardRow<ContactInquiry>>,
    pub service_inquiries: TableSection<DashboardRow<ServiceInquiry>>,
    pub portfolio_projects: TableSection<DashboardRow<PortfolioProject>>,
    pub testimonials: TableSection<DashboardRow<Testimonial>>,
    pub newsletter_subscribers: TableSection<DashboardRow<NewsletterSubscriber>>,
    /// Set when at least one table failed to load.
    pub notification: Option<Notification>,
}

impl DashboardSnapshot {
    pub fn failed_tables(&self) -> Vec<SiteTable> {
        [
            (SiteTable::ContactInquiries, self.contact_inquiries.is_failed()),
            (SiteTable::ServiceInquiries, self.service_inquiries.is_failed()),
            (SiteTable::PortfolioProjects, self.portfolio_projects.is_failed()),
            (SiteTable::Testimonials, self.testimonials.is_failed()),
            (SiteTable::NewsletterSubscribers, self.newsletter_subscribers.is_failed()),
        ]
        .into_iter()
        .filter_map(|(table, failed)| failed.then_some(table))
        .collect()
    }
}

fn section<T>(
    table: SiteTable,
    result: StoreResult<Vec<T>>,
    status_of: impl Fn(&T) -> BadgeVariant,
) -> TableSection<DashboardRow<T>> {
    match result {
        Ok(rows) => TableSection::Loaded {
            rows: rows
                .into_iter()
                .map(|row| DashboardRow { badge: status_of(&row), row })
                .collect(),
        },
        Err(e) => {
            tracing::error!("Dashboard fetch of {} failed: {}", table, e);
            record_dashboard_failure(table.as_str());
            TableSection::Failed { error: e.to_string() }
        }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    store: DynSiteStore,
}

impl DashboardService {
    pub fn new(store: DynSiteStore) -> Self {
        Self { store }
    }

    /// Fetches all five tables concurrently. Cancellation drops every
    /// in-flight query and returns `Cancelled`.
    pub async fn snapshot(&self, access: &AdminAccess, cancel: &CancelSignal) -> Result<DashboardSnapshot, Cancelled> {
        tracing::debug!(admin = ?access.granted_to(), "Loading admin dashboard");

        let store = self.store.as_ref();
        let (contacts, services, projects, testimonials, subscribers) = cancel
            .run(async {
                tokio::join!(
                    store.list_contact_inquiries(),
                    store.list_service_inquiries(),
                    store.list_portfolio_projects(),
                    store.list_testimonials(),
                    store.list_newsletter_subscribers()
                )
            })
            .await?;

        let contact_inquiries = section(SiteTable::ContactInquiries, contacts, |r| r.status.badge());
        let service_inquiries = section(SiteTable::ServiceInquiries, services, |r| r.status.badge());
        let portfolio_projects = section(SiteTable::PortfolioProjects, projects, |r| r.status.badge());
        let testimonials = section(SiteTable::Testimonials, testimonials, |r| r.status.badge());
        let newsletter_subscribers = section(SiteTable::NewsletterSubscribers, subscribers, |r| r.status.badge());

        let counts = DashboardCounts {
            contact_inquiries: contact_inquiries.count(),
            service_inquiries: service_inquiries.count(),
            portfolio_projects: portfolio_projects.count(),
            testimonials: testimonials.count(),
            newsletter_subscribers: newsletter_subscribers.count(),
        };

        let mut snapshot = DashboardSnapshot {
            counts,
            contact_inquiries,
            service_inquiries,
            portfolio_projects,
            testimonials,
            newsletter_subscribers,
            notification: None,
        };

        let failed = snapshot.failed_tables();
        if !failed.is_empty() {
            snapshot.notification = Some(Notification::dashboard_load_failed(&failed));
        }

        Ok(snapshot)
    }
}

#[derive(Debug, Clone)]
pub enum DashboardView {
    AccessDenied,
    Loading,
    Ready(Box<DashboardSnapshot>),
}

/// The dashboard page: gated on `AdminAccess`, loads on mount, reloads on
/// `refetch`.
pub struct AdminDashboard {
    service: DashboardService,
    access: Option<AdminAccess>,
    view: DashboardView,
}

impl AdminDashboard {
    pub fn new(service: DashboardService, access: Option<AdminAccess>) -> Self {
        let view = if access.is_some() {
            DashboardView::Loading
        } else {
            DashboardView::AccessDenied
        };

        Self { service, access, view }
    }

    pub async fn mount(&mut self, cancel: &CancelSignal) -> Result<(), Cancelled> {
        if matches!(self.view, DashboardView::Loading) {
            self.refetch(cancel).await?;
        }
        Ok(())
    }

    /// Without access this does nothing. A cancelled refetch keeps the
    /// current view.
    pub async fn refetch(&mut self, cancel: &CancelSignal) -> Result<(), Cancelled> {
        let Some(access) = self.access.as_ref() else {
            return Ok(());
        };

        let snapshot = self.service.snapshot(access, cancel).await?;
        self.view = DashboardView::Ready(Box::new(snapshot));
        Ok(())
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn into_view(self) -> DashboardView {
        self.view
    }
}
