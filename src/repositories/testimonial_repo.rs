use sqlx::{query, query_as, PgPool};
use uuid::Uuid;

use crate::models::{PublicationStatus, Testimonial, TestimonialInput};
use super::store::{StoreError, StoreResult};

const TESTIMONIAL_COLUMNS: &str = "id, client_name, client_title, company_name, testimonial_text, \
     rating, project_id, image_url, featured, status, created_at, updated_at";

#[derive(Clone)]
pub struct TestimonialRepository {
    pool: PgPool,
}

impl TestimonialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_status_showcase_order(&self, status: PublicationStatus) -> StoreResult<Vec<Testimonial>> {
        let sql = format!(
            r#"
            SELECT {TESTIMONIAL_COLUMNS}
            FROM testimonials
            WHERE status = $1
            ORDER BY featured DESC, created_at DESC
            "#
        );

        let rows = query_as::<_, Testimonial>(&sql)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn list_newest_first(&self) -> StoreResult<Vec<Testimonial>> {
        let sql = format!("SELECT {TESTIMONIAL_COLUMNS} FROM testimonials ORDER BY created_at DESC");

        let rows = query_as::<_, Testimonial>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn create(&self, input: &TestimonialInput) -> StoreResult<Testimonial> {
        let sql = format!(
            r#"
            INSERT INTO testimonials (
                client_name, client_title, company_name, testimonial_text,
                rating, project_id, image_url, featured, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {TESTIMONIAL_COLUMNS}
            "#
        );

        let row = query_as::<_, Testimonial>(&sql)
            .bind(&input.client_name)
            .bind(&input.client_title)
            .bind(&input.company_name)
            .bind(&input.testimonial_text)
            .bind(input.rating)
            .bind(input.project_id)
            .bind(&input.image_url)
            .bind(input.featured)
            .bind(input.status)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn replace(&self, id: Uuid, input: &TestimonialInput) -> StoreResult<Testimonial> {
        let sql = format!(
            r#"
            UPDATE testimonials
            SET client_name = $1, client_title = $2, company_name = $3, testimonial_text = $4,
                rating = $5, project_id = $6, image_url = $7, featured = $8, status = $9,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $10
            RETURNING {TESTIMONIAL_COLUMNS}
            "#
        );

        let row = query_as::<_, Testimonial>(&sql)
            .bind(&input.client_name)
            .bind(&input.client_title)
            .bind(&input.company_name)
            .bind(&input.testimonial_text)
            .bind(input.rating)
            .bind(input.project_id)
            .bind(&input.image_url)
            .bind(input.featured)
            .bind(input.status)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let result = query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
