use sqlx::{query_as, PgPool};
use uuid::Uuid;

use crate::models::{NewSubscriber, NewsletterSubscriber};
use super::store::StoreResult;

const SUBSCRIBER_COLUMNS: &str = "id, email, name, subscribed_at, status";

#[derive(Clone)]
pub struct NewsletterRepository {
    pool: PgPool,
}

impl NewsletterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The unique index on `lower(email)` rejects repeats; the violation is
    /// mapped to `StoreError::UniqueViolation` by the `From<sqlx::Error>` impl.
    pub async fn insert(&self, subscriber: &NewSubscriber) -> StoreResult<NewsletterSubscriber> {
        let sql = format!(
            r#"
            INSERT INTO newsletter_subscribers (email, name)
            VALUES ($1, $2)
            RETURNING {SUBSCRIBER_COLUMNS}
            "#
        );

        let row = query_as::<_, NewsletterSubscriber>(&sql)
            .bind(&subscriber.email)
            .bind(&subscriber.name)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn list_recent_first(&self) -> StoreResult<Vec<NewsletterSubscriber>> {
        let sql = format!(
            "SELECT {SUBSCRIBER_COLUMNS} FROM newsletter_subscribers ORDER BY subscribed_at DESC"
        );

        let rows = query_as::<_, NewsletterSubscriber>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn unsubscribe(&self, id: Uuid) -> StoreResult<NewsletterSubscriber> {
        let sql = format!(
            r#"
            UPDATE newsletter_subscribers
            SET status = 'unsubscribed'
            WHERE id = $1
            RETURNING {SUBSCRIBER_COLUMNS}
            "#
        );

        let row = query_as::<_, NewsletterSubscriber>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }
}
