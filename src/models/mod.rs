pub mod badge;
pub mod contact;
pub mod newsletter;
pub mod portfolio;
pub mod service_inquiry;
pub mod site_content;
pub mod testimonial;
pub mod user;

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::ValidationError;

pub use badge::{BadgeVariant, StatusBadge};
pub use contact::*;
pub use newsletter::*;
pub use portfolio::*;
pub use service_inquiry::*;
pub use testimonial::*;
pub use user::UserRole;

// Validation function - shared by every request with free-text required fields
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

/// Publication state of public showcase content (portfolio, testimonials).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PublicationStatus {
    Active,
    Draft,
    Archived,
}

/// Content shown on the public site in featured-first order.
pub trait Showcased {
    fn is_featured(&self) -> bool;
    fn created_at(&self) -> DateTime<Utc>;
    fn status(&self) -> PublicationStatus;
}

/// Featured items first, then newest first.
pub fn showcase_order<T: Showcased>(a: &T, b: &T) -> Ordering {
    b.is_featured()
        .cmp(&a.is_featured())
        .then_with(|| b.created_at().cmp(&a.created_at()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Item {
        featured: bool,
        created_at: DateTime<Utc>,
    }

    impl Showcased for Item {
        fn is_featured(&self) -> bool {
            self.featured
        }

        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }

        fn status(&self) -> PublicationStatus {
            PublicationStatus::Active
        }
    }

    #[test]
    fn test_showcase_order_featured_then_newest() {
        let day = |d| Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap();
        let mut items = vec![
            Item { featured: false, created_at: day(3) },
            Item { featured: true, created_at: day(1) },
            Item { featured: false, created_at: day(5) },
            Item { featured: true, created_at: day(2) },
        ];
        items.sort_by(showcase_order);

        let order: Vec<(bool, u32)> = items
            .iter()
            .map(|i| (i.featured, chrono::Datelike::day(&i.created_at)))
            .collect();
        assert_eq!(order, vec![(true, 2), (true, 1), (false, 5), (false, 3)]);
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("hi").is_ok());
        assert!(validate_not_blank(" \t").is_err());
    }
}
