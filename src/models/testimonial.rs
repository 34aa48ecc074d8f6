use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::{validate_not_blank, PublicationStatus, Showcased};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Testimonial {
    pub id: Uuid,
    pub client_name: String,
    pub client_title: Option<String>,
    pub company_name: Option<String>,
    pub testimonial_text: String,
    pub rating: Option<i16>,
    pub project_id: Option<Uuid>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub status: PublicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Showcased for Testimonial {
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

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TestimonialInput {
    #[validate(length(min = 1, max = 200, message = "Client name is required"), custom(function = validate_not_blank))]
    pub client_name: String,
    #[validate(length(max = 200, message = "Client title too long"))]
    pub client_title: Option<String>,
    #[validate(length(max = 200, message = "Company name too long"))]
    pub company_name: Option<String>,
    #[validate(length(min = 1, max = 5000, message = "Testimonial text is required"), custom(function = validate_not_blank))]
    pub testimonial_text: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i16>,
    pub project_id: Option<Uuid>,
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_draft")]
    pub status: PublicationStatus,
}

fn default_draft() -> PublicationStatus {
    PublicationStatus::Draft
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_out_of_range_is_rejected() {
        let input: TestimonialInput = serde_json::from_str(
            r#"{"client_name":"Rajesh Kumar","testimonial_text":"Great work","rating":6}"#,
        )
        .unwrap();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("rating"));
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let input: TestimonialInput = serde_json::from_str(
            r#"{"client_name":"Rajesh Kumar","testimonial_text":"   "}"#,
        )
        .unwrap();
        assert!(input.validate().is_err());
    }
}
