use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use crate::middleware::error_handling::{AppError, Result};
use crate::models::{PortfolioProject, ProjectCategory, Testimonial};
use crate::services::{Feed, PortfolioFeed, ShowcaseItem, TestimonialFeed};
use crate::utils::CancelSignal;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PortfolioQuery {
    pub featured: Option<bool>,
    pub category: Option<ProjectCategory>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TestimonialQuery {
    pub featured: Option<bool>,
}

/// Loads a feed once; a failed query becomes a 500 rather than an empty list.
async fn loaded<T: ShowcaseItem>(mut feed: Feed<T>) -> Result<Feed<T>> {
    feed.load(&CancelSignal::never()).await?;
    if let Some(error) = feed.error() {
        return Err(AppError::Internal(anyhow::anyhow!("{} feed failed: {}", T::KIND, error)));
    }
    Ok(feed)
}

/// GET /api/portfolio?featured=&category=
pub async fn list_portfolio(
    State(state): State<AppState>,
    query: std::result::Result<Query<PortfolioQuery>, QueryRejection>,
) -> Result<Json<Vec<PortfolioProject>>> {
    let Query(query) = query?;
    let feed = loaded(PortfolioFeed::new(state.store.clone())).await?;

    let mut projects = feed.by_category(query.category);
    if let Some(featured) = query.featured {
        projects.retain(|project| project.featured == featured);
    }

    Ok(Json(projects))
}

/// GET /api/testimonials?featured=
pub async fn list_testimonials(
    State(state): State<AppState>,
    query: std::result::Result<Query<TestimonialQuery>, QueryRejection>,
) -> Result<Json<Vec<Testimonial>>> {
    let Query(query) = query?;
    let feed = loaded(TestimonialFeed::new(state.store.clone())).await?;

    let testimonials = match query.featured {
        Some(true) => feed.featured(),
        Some(false) => feed.items().iter().filter(|t| !t.featured).cloned().collect(),
        None => feed.items().to_vec(),
    };

    Ok(Json(testimonials))
}
