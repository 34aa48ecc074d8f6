use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::{validate_not_blank, PublicationStatus, Showcased};
use super::service_inquiry::ProjectType;

/// Portfolio categories use the same closed set as inquiry project types.
pub type ProjectCategory = ProjectType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PortfolioProject {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: ProjectCategory,
    pub client_name: Option<String>,
    pub location: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub project_size: Option<String>,
    pub image_url: Option<String>,
    pub gallery_images: Vec<String>,
    pub featured: bool,
    pub status: PublicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Showcased for PortfolioProject {
    fn is_featured(&self) -> bool {
        self.featured
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn status(&self) -> PublicationStatus {
        self.status
    }
}

/// Full project body used by admin create and replace.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PortfolioProjectInput {
    #[validate(length(min = 1, max = 200, message = "Title is required"), custom(function = validate_not_blank))]
    pub title: String,
    #[validate(length(max = 5000, message = "Description too long"))]
    pub description: Option<String>,
    pub category: ProjectCategory,
    #[validate(length(max = 200, message = "Client name too long"))]
    pub client_name: Option<String>,
    #[validate(length(max = 200, message = "Location too long"))]
    pub location: Option<String>,
    pub completion_date: Option<NaiveDate>,
    #[validate(length(max = 100, message = "Project size too long"))]
    pub project_size: Option<String>,
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_draft")]
    pub status: PublicationStatus,
}

fn default_draft() -> PublicationStatus {
    PublicationStatus::Draft
}
