use sqlx::{query_as, PgPool};
use uuid::Uuid;

use crate::models::{ContactInquiry, ContactStatus, NewContactInquiry};
use super::store::StoreResult;

const CONTACT_COLUMNS: &str =
    "id, name, email, phone, subject, message, status, created_at, updated_at";

#[derive(Clone)]
pub struct ContactInquiryRepository {
    pool: PgPool,
}

impl ContactInquiryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, inquiry: &NewContactInquiry) -> StoreResult<ContactInquiry> {
        let sql = format!(
            r#"
            INSERT INTO contact_inquiries (name, email, phone, subject, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CONTACT_COLUMNS}
            "#
        );

        let row = query_as::<_, ContactInquiry>(&sql)
            .bind(&inquiry.name)
            .bind(&inquiry.email)
            .bind(&inquiry.phone)
            .bind(&inquiry.subject)
            .bind(&inquiry.message)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn list_newest_first(&self) -> StoreResult<Vec<ContactInquiry>> {
        let sql = format!("SELECT {CONTACT_COLUMNS} FROM contact_inquiries ORDER BY created_at DESC");

        let rows = query_as::<_, ContactInquiry>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn update_status(&self, id: Uuid, status: ContactStatus) -> StoreResult<ContactInquiry> {
        let sql = format!(
            r#"
            UPDATE contact_inquiries
            SET status = $1, updated_at = CURRENT_TIMESTAMP
            WHERE id = $2
            RETURNING {CONTACT_COLUMNS}
            "#
        );

        // fetch_one on zero rows maps to StoreError::NotFound
        let row = query_as::<_, ContactInquiry>(&sql)
            .bind(status)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }
}
