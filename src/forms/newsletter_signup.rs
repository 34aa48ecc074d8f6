use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::config::DEFAULT_NEWSLETTER_CONFIRMATION_SECS;
use crate::models::{NewSubscriber, NewsletterSubscriber, SubscribeRequest};
use crate::services::{NewsletterService, SubmissionError};
use super::{optional_field, BlockReason, Notification, SubmitGate, SubmitOutcome};

const FORM: &str = "newsletter";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterFields {
    pub email: String,
    pub name: String,
}

impl From<SubscribeRequest> for NewsletterFields {
    fn from(request: SubscribeRequest) -> Self {
        Self {
            email: request.email,
            name: request.name.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterPhase {
    Form,
    /// Showing the thank-you message until `until`.
    Confirmed { until: Instant },
}

/// Newsletter signup box. After a successful signup it shows its
/// confirmation for a fixed delay, then returns to the empty form.
pub struct NewsletterSignup {
    service: NewsletterService,
    show_name: bool,
    confirmation: Duration,
    fields: Mutex<NewsletterFields>,
    confirmed_until: Mutex<Option<Instant>>,
    gate: SubmitGate,
}

impl NewsletterSignup {
    pub fn new(service: NewsletterService) -> Self {
        Self {
            service,
            show_name: false,
            confirmation: Duration::from_secs(DEFAULT_NEWSLETTER_CONFIRMATION_SECS),
            fields: Mutex::new(NewsletterFields::default()),
            confirmed_until: Mutex::new(None),
            gate: SubmitGate::default(),
        }
    }

    /// Shows the optional name field; without it the name is never sent.
    pub fn with_name_field(mut self) -> Self {
        self.show_name = true;
        self
    }

    pub fn with_confirmation_delay(mut self, delay: Duration) -> Self {
        self.confirmation = delay;
        self
    }

    pub async fn set_fields(&self, fields: NewsletterFields) {
        *self.fields.lock().await = fields;
    }

    pub async fn fields(&self) -> NewsletterFields {
        self.fields.lock().await.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.gate.is_submitting()
    }

    pub async fn phase(&self) -> NewsletterPhase {
        match *self.confirmed_until.lock().await {
            Some(until) if Instant::now() < until => NewsletterPhase::Confirmed { until },
            _ => NewsletterPhase::Form,
        }
    }

    /// Submit is disabled while submitting, while confirmed, or while the
    /// email is empty.
    pub async fn can_submit(&self) -> bool {
        !self.is_submitting()
            && self.phase().await == NewsletterPhase::Form
            && !self.fields.lock().await.email.trim().is_empty()
    }

    pub async fn submit(&self) -> SubmitOutcome<NewsletterSubscriber> {
        self.try_submit().await.recorded(FORM)
    }

    async fn try_submit(&self) -> SubmitOutcome<NewsletterSubscriber> {
        let _submitting = match self.gate.enter() {
            Ok(guard) => guard,
            Err(reason) => return SubmitOutcome::Blocked(reason),
        };

        if matches!(self.phase().await, NewsletterPhase::Confirmed { .. }) {
            return SubmitOutcome::Blocked(BlockReason::Confirmed);
        }

        let subscriber = {
            let fields = self.fields.lock().await;
            if fields.email.trim().is_empty() {
                return SubmitOutcome::Blocked(BlockReason::MissingFields(vec!["email"]));
            }
            NewSubscriber {
                email: fields.email.trim().to_string(),
                name: if self.show_name { optional_field(&fields.name) } else { None },
            }
        };

        match self.service.subscribe(subscriber).await {
            Ok(row) => {
                *self.fields.lock().await = NewsletterFields::default();
                *self.confirmed_until.lock().await = Some(Instant::now() + self.confirmation);
                SubmitOutcome::Submitted {
                    row,
                    notification: Notification::success(
                        "Successfully subscribed!",
                        "You'll receive our latest updates and project insights.",
                    ),
                }
            }
            Err(SubmissionError::AlreadySubscribed) => SubmitOutcome::AlreadySubscribed {
                notification: Notification::failure(
                    "Already subscribed!",
                    "This email is already subscribed to our newsletter.",
                ),
            },
            Err(error) => SubmitOutcome::Failed {
                notification: Notification::failure("Subscription failed", "Please try again later."),
                error,
            },
        }
    }
}
