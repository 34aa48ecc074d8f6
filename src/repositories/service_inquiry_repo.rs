use sqlx::{query_as, PgPool};
use uuid::Uuid;

use crate::models::{NewServiceInquiry, ServiceInquiry, ServiceInquiryStatus};
use super::store::StoreResult;

const SERVICE_INQUIRY_COLUMNS: &str = "id, name, email, phone, service_type, project_type, \
     budget_range, project_timeline, location, project_details, status, created_at, updated_at";

#[derive(Clone)]
pub struct ServiceInquiryRepository {
    pool: PgPool,
}

impl ServiceInquiryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, inquiry: &NewServiceInquiry) -> StoreResult<ServiceInquiry> {
        let sql = format!(
            r#"
            INSERT INTO service_inquiries (
                name, email, phone, service_type, project_type,
                budget_range, project_timeline, location, project_details
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {SERVICE_INQUIRY_COLUMNS}
            "#
        );

        let row = query_as::<_, ServiceInquiry>(&sql)
            .bind(&inquiry.name)
            .bind(&inquiry.email)
            .bind(&inquiry.phone)
            .bind(inquiry.service_type)
            .bind(inquiry.project_type)
            .bind(inquiry.budget_range)
            .bind(inquiry.project_timeline)
            .bind(&inquiry.location)
            .bind(&inquiry.project_details)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn list_newest_first(&self) -> StoreResult<Vec<ServiceInquiry>> {
        let sql = format!(
            "SELECT {SERVICE_INQUIRY_COLUMNS} FROM service_inquiries ORDER BY created_at DESC"
        );

        let rows = query_as::<_, ServiceInquiry>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn update_status(&self, id: Uuid, status: ServiceInquiryStatus) -> StoreResult<ServiceInquiry> {
        let sql = format!(
            r#"
            UPDATE service_inquiries
            SET status = $1, updated_at = CURRENT_TIMESTAMP
            WHERE id = $2
            RETURNING {SERVICE_INQUIRY_COLUMNS}
            "#
        );

        let row = query_as::<_, ServiceInquiry>(&sql)
            .bind(status)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }
}
