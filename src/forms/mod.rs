//! Form controllers for the public site.
//!
//! Each controller owns its field values, refuses to submit while required
//! fields are empty or while a submission is already in flight, performs
//! exactly one insert per accepted submission and reports the outcome as a
//! notification. Field state sits behind a `tokio::sync::Mutex` that is
//! never held across a store call.

pub mod contact_form;
pub mod newsletter_signup;
pub mod service_inquiry_form;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::middleware::metrics::record_form_submission;
use crate::repositories::SiteTable;
use crate::services::SubmissionError;

pub use contact_form::{ContactFields, ContactForm};
pub use newsletter_signup::{NewsletterFields, NewsletterPhase, NewsletterSignup};
pub use service_inquiry_form::{ServiceInquiryFields, ServiceInquiryForm};

/// Empty and whitespace-only inputs become `None`; anything else is trimmed.
pub fn optional_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// A toast shown to the visitor after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn failure(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn dashboard_load_failed(tables: &[SiteTable]) -> Self {
        let names: Vec<&str> = tables.iter().map(SiteTable::as_str).collect();
        Self::failure(
            "Error loading data",
            &format!(
                "Please refresh the page and try again. ({} could not be loaded)",
                names.join(", ")
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockReason {
    /// Required fields left empty, by field name.
    MissingFields(Vec<&'static str>),
    AlreadySubmitting,
    /// The newsletter signup is showing its confirmation.
    Confirmed,
}

#[derive(Debug)]
pub enum SubmitOutcome<T> {
    Submitted { row: T, notification: Notification },
    AlreadySubscribed { notification: Notification },
    Failed { notification: Notification, error: SubmissionError },
    /// Nothing was sent to the store.
    Blocked(BlockReason),
}

impl<T> SubmitOutcome<T> {
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            SubmitOutcome::Submitted { notification, .. }
            | SubmitOutcome::AlreadySubscribed { notification }
            | SubmitOutcome::Failed { notification, .. } => Some(notification),
            SubmitOutcome::Blocked(_) => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted { .. })
    }

    fn metric_label(&self) -> &'static str {
        match self {
            SubmitOutcome::Submitted { .. } => "submitted",
            SubmitOutcome::AlreadySubscribed { .. } => "already_subscribed",
            SubmitOutcome::Failed { .. } => "failed",
            SubmitOutcome::Blocked(_) => "blocked",
        }
    }

    pub(crate) fn recorded(self, form: &str) -> Self {
        record_form_submission(form, self.metric_label());
        self
    }
}

/// Called after a successful submission, once the fields are cleared.
pub type SuccessCallback = Arc<dyn Fn() + Send + Sync>;

/// The submitting flag shared by all controllers.
#[derive(Debug, Default)]
pub(crate) struct SubmitGate {
    submitting: AtomicBool,
}

/// Holds the gate closed; dropping it reopens the gate, including when the
/// submission future is dropped mid-flight.
pub(crate) struct Submitting<'a> {
    gate: &'a SubmitGate,
}

impl Drop for Submitting<'_> {
    fn drop(&mut self) {
        self.gate.submitting.store(false, Ordering::SeqCst);
    }
}

impl SubmitGate {
    pub(crate) fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    pub(crate) fn enter(&self) -> Result<Submitting<'_>, BlockReason> {
        self.submitting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map(|_| Submitting { gate: self })
            .map_err(|_| BlockReason::AlreadySubmitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_field() {
        assert_eq!(optional_field(""), None);
        assert_eq!(optional_field("   "), None);
        assert_eq!(optional_field(" +91 98765 43210 "), Some("+91 98765 43210".to_string()));
    }

    #[test]
    fn test_gate_blocks_second_entry_until_dropped() {
        let gate = SubmitGate::default();
        let first = gate.enter().unwrap();
        assert!(gate.is_submitting());
        assert_eq!(gate.enter().err(), Some(BlockReason::AlreadySubmitting));

        drop(first);
        assert!(!gate.is_submitting());
        assert!(gate.enter().is_ok());
    }

    #[test]
    fn test_dashboard_notification_names_tables() {
        let n = Notification::dashboard_load_failed(&[SiteTable::Testimonials, SiteTable::ContactInquiries]);
        assert_eq!(n.title, "Error loading data");
        assert!(n.description.starts_with("Please refresh the page and try again."));
        assert!(n.description.contains("testimonials, contact_inquiries"));
        assert_eq!(n.variant, NotificationVariant::Destructive);
    }
}
