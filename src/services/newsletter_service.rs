use uuid::Uuid;

use crate::models::{NewSubscriber, NewsletterSubscriber};
use crate::repositories::{DynSiteStore, StoreError};
use crate::utils::log_sanitizer::mask_email;
use super::SubmissionError;

#[derive(Clone)]
pub struct NewsletterService {
    store: DynSiteStore,
}

impl NewsletterService {
    pub fn new(store: DynSiteStore) -> Self {
        Self { store }
    }

    /// Inserts the subscriber. A repeated email comes back as
    /// `SubmissionError::AlreadySubscribed`, every other store failure as
    /// `SubmissionError::Backend`.
    pub async fn subscribe(&self, subscriber: NewSubscriber) -> Result<NewsletterSubscriber, SubmissionError> {
        let email = mask_email(&subscriber.email);

        match self.store.insert_newsletter_subscriber(subscriber).await {
            Ok(row) => {
                tracing::info!(subscriber_id = %row.id, email = %email, "Newsletter subscription created");
                Ok(row)
            }
            Err(e) if e.is_unique_violation() => {
                tracing::info!(email = %email, "Newsletter email already subscribed");
                Err(SubmissionError::AlreadySubscribed)
            }
            Err(e) => {
                tracing::error!(email = %email, "Error subscribing to newsletter: {}", e);
                Err(SubmissionError::Backend(e))
            }
        }
    }

    pub async fn unsubscribe(&self, id: Uuid) -> Result<NewsletterSubscriber, StoreError> {
        let row = self.store.unsubscribe(id).await?;
        tracing::info!(subscriber_id = %id, "Newsletter subscriber unsubscribed");
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubscriberStatus;
    use crate::repositories::{MemoryStore, SiteTable};
    use std::sync::Arc;

    fn subscriber(email: &str) -> NewSubscriber {
        NewSubscriber { email: email.to_string(), name: None }
    }

    #[tokio::test]
    async fn test_repeat_email_is_already_subscribed() {
        let service = NewsletterService::new(Arc::new(MemoryStore::new()));
        service.subscribe(subscriber("x@y.com")).await.unwrap();

        let err = service.subscribe(subscriber("x@y.com")).await.unwrap_err();
        assert!(matches!(err, SubmissionError::AlreadySubscribed));
    }

    #[tokio::test]
    async fn test_outage_is_not_reported_as_duplicate() {
        let store = MemoryStore::new();
        store.set_failing(SiteTable::NewsletterSubscribers, true).await;
        let service = NewsletterService::new(Arc::new(store));

        let err = service.subscribe(subscriber("x@y.com")).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Backend(StoreError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_unsubscribe_flips_status() {
        let service = NewsletterService::new(Arc::new(MemoryStore::new()));
        let row = service.subscribe(subscriber("x@y.com")).await.unwrap();
        assert_eq!(row.status, SubscriberStatus::Active);

        let row = service.unsubscribe(row.id).await.unwrap();
        assert_eq!(row.status, SubscriberStatus::Unsubscribed);
    }
}
