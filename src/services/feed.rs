use async_trait::async_trait;

use crate::models::{PortfolioProject, ProjectCategory, Showcased, Testimonial};
use crate::repositories::{DynSiteStore, SiteStore, StoreResult};
use crate::utils::{cancel::Cancelled, CancelSignal};

/// Public showcase content a feed can load: active rows, featured first then
/// newest first.
#[async_trait]
pub trait ShowcaseItem: Showcased + Clone + Send + Sync + 'static {
    const KIND: &'static str;

    async fn fetch_active(store: &dyn SiteStore) -> StoreResult<Vec<Self>>;
}

#[async_trait]
impl ShowcaseItem for PortfolioProject {
    const KIND: &'static str = "portfolio projects";

    async fn fetch_active(store: &dyn SiteStore) -> StoreResult<Vec<Self>> {
        store.list_active_portfolio_projects().await
    }
}

#[async_trait]
impl ShowcaseItem for Testimonial {
    const KIND: &'static str = "testimonials";

    async fn fetch_active(store: &dyn SiteStore) -> StoreResult<Vec<Self>> {
        store.list_active_testimonials().await
    }
}

/// Read-side view of one showcase collection.
///
/// `load` queries once; `refetch` always queries again. A failed query keeps
/// whatever list was already held and records the error. A cancelled query
/// changes nothing except clearing `loading`.
pub struct Feed<T: ShowcaseItem> {
    store: DynSiteStore,
    items: Vec<T>,
    loading: bool,
    loaded: bool,
    error: Option<String>,
}

pub type PortfolioFeed = Feed<PortfolioProject>;
pub type TestimonialFeed = Feed<Testimonial>;

impl<T: ShowcaseItem> Feed<T> {
    pub fn new(store: DynSiteStore) -> Self {
        Self {
            store,
            items: Vec::new(),
            loading: true,
            loaded: false,
            error: None,
        }
    }

    /// First load. Later calls are no-ops once a query has completed.
    pub async fn load(&mut self, cancel: &CancelSignal) -> Result<(), Cancelled> {
        if self.loaded {
            return Ok(());
        }
        self.refetch(cancel).await
    }

    pub async fn refetch(&mut self, cancel: &CancelSignal) -> Result<(), Cancelled> {
        self.loading = true;
        let outcome = cancel.run(T::fetch_active(self.store.as_ref())).await;
        self.loading = false;

        match outcome? {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Error fetching {}: {}", T::KIND, e);
                self.error = Some(e.to_string());
            }
        }
        self.loaded = true;

        Ok(())
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Featured subset, in feed order.
    pub fn featured(&self) -> Vec<T> {
        self.items
            .iter()
            .filter(|item| item.is_featured())
            .cloned()
            .collect()
    }
}

impl Feed<PortfolioProject> {
    /// Projects in `category`, or every project when no category is given.
    pub fn by_category(&self, category: Option<ProjectCategory>) -> Vec<PortfolioProject> {
        match category {
            None => self.items.clone(),
            Some(category) => self
                .items
                .iter()
                .filter(|project| project.category == category)
                .cloned()
                .collect(),
        }
    }
}
