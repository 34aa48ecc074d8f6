use sqlx::{query, query_as, PgPool};
use uuid::Uuid;

use crate::models::{PortfolioProject, PortfolioProjectInput, PublicationStatus};
use super::store::{StoreError, StoreResult};

const PORTFOLIO_COLUMNS: &str = "id, title, description, category, client_name, location, \
     completion_date, project_size, image_url, COALESCE(gallery_images, '{}') AS gallery_images, \
     featured, status, created_at, updated_at";

#[derive(Clone)]
pub struct PortfolioRepository {
    pool: PgPool,
}

impl PortfolioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_status_showcase_order(&self, status: PublicationStatus) -> StoreResult<Vec<PortfolioProject>> {
        let sql = format!(
            r#"
            SELECT {PORTFOLIO_COLUMNS}
            FROM portfolio_projects
            WHERE status = $1
            ORDER BY featured DESC, created_at DESC
            "#
        );

        let rows = query_as::<_, PortfolioProject>(&sql)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn list_newest_first(&self) -> StoreResult<Vec<PortfolioProject>> {
        let sql = format!("SELECT {PORTFOLIO_COLUMNS} FROM portfolio_projects ORDER BY created_at DESC");

        let rows = query_as::<_, PortfolioProject>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn create(&self, input: &PortfolioProjectInput) -> StoreResult<PortfolioProject> {
        let sql = format!(
            r#"
            INSERT INTO portfolio_projects (
                title, description, category, client_name, location, completion_date,
                project_size, image_url, gallery_images, featured, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {PORTFOLIO_COLUMNS}
            "#
        );

        let row = query_as::<_, PortfolioProject>(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category)
            .bind(&input.client_name)
            .bind(&input.location)
            .bind(input.completion_date)
            .bind(&input.project_size)
            .bind(&input.image_url)
            .bind(&input.gallery_images)
            .bind(input.featured)
            .bind(input.status)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn replace(&self, id: Uuid, input: &PortfolioProjectInput) -> StoreResult<PortfolioProject> {
        let sql = format!(
            r#"
            UPDATE portfolio_projects
            SET title = $1, description = $2, category = $3, client_name = $4, location = $5,
                completion_date = $6, project_size = $7, image_url = $8, gallery_images = $9,
                featured = $10, status = $11, updated_at = CURRENT_TIMESTAMP
            WHERE id = $12
            RETURNING {PORTFOLIO_COLUMNS}
            "#
        );

        let row = query_as::<_, PortfolioProject>(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category)
            .bind(&input.client_name)
            .bind(&input.location)
            .bind(input.completion_date)
            .bind(&input.project_size)
            .bind(&input.image_url)
            .bind(&input.gallery_images)
            .bind(input.featured)
            .bind(input.status)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let result = query("DELETE FROM portfolio_projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
