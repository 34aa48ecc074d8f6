use tokio::sync::Mutex;

use crate::models::{ContactInquiry, CreateContactInquiryRequest, NewContactInquiry};
use crate::services::InquiryService;
use super::{
    optional_field, BlockReason, Notification, SubmitGate, SubmitOutcome, SuccessCallback,
};

const FORM: &str = "contact";

/// Raw field values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn missing_required(&self) -> Vec<&'static str> {
        [("name", &self.name), ("email", &self.email), ("message", &self.message)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    fn to_insert(&self) -> NewContactInquiry {
        NewContactInquiry {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional_field(&self.phone),
            subject: optional_field(&self.subject),
            message: self.message.clone(),
        }
    }
}

impl From<CreateContactInquiryRequest> for ContactFields {
    fn from(request: CreateContactInquiryRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone.unwrap_or_default(),
            subject: request.subject.unwrap_or_default(),
            message: request.message,
        }
    }
}

pub struct ContactForm {
    service: InquiryService,
    fields: Mutex<ContactFields>,
    gate: SubmitGate,
    on_success: Option<SuccessCallback>,
}

impl ContactForm {
    pub fn new(service: InquiryService) -> Self {
        Self {
            service,
            fields: Mutex::new(ContactFields::default()),
            gate: SubmitGate::default(),
            on_success: None,
        }
    }

    pub fn with_on_success(mut self, callback: SuccessCallback) -> Self {
        self.on_success = Some(callback);
        self
    }

    pub async fn set_fields(&self, fields: ContactFields) {
        *self.fields.lock().await = fields;
    }

    pub async fn fields(&self) -> ContactFields {
        self.fields.lock().await.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.gate.is_submitting()
    }

    pub async fn submit(&self) -> SubmitOutcome<ContactInquiry> {
        self.try_submit().await.recorded(FORM)
    }

    async fn try_submit(&self) -> SubmitOutcome<ContactInquiry> {
        let _submitting = match self.gate.enter() {
            Ok(guard) => guard,
            Err(reason) => return SubmitOutcome::Blocked(reason),
        };

        let insert = {
            let fields = self.fields.lock().await;
            let missing = fields.missing_required();
            if !missing.is_empty() {
                return SubmitOutcome::Blocked(BlockReason::MissingFields(missing));
            }
            fields.to_insert()
        };

        match self.service.submit_contact(insert).await {
            Ok(row) => {
                *self.fields.lock().await = ContactFields::default();
                if let Some(callback) = &self.on_success {
                    callback();
                }
                SubmitOutcome::Submitted {
                    row,
                    notification: Notification::success(
                        "Message sent successfully!",
                        "We'll get back to you within 24 hours.",
                    ),
                }
            }
            Err(error) => SubmitOutcome::Failed {
                notification: Notification::failure(
                    "Failed to send message",
                    "Please try again or contact us directly.",
                ),
                error,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MemoryStore, SiteStore, SiteTable};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn form(store: &MemoryStore) -> ContactForm {
        ContactForm::new(InquiryService::new(Arc::new(store.clone())))
    }

    fn filled() -> ContactFields {
        ContactFields {
            name: "A".into(),
            email: "a@b.com".into(),
            message: "hi".into(),
            ..ContactFields::default()
        }
    }

    #[tokio::test]
    async fn test_submit_inserts_one_row_and_clears_fields() {
        let store = MemoryStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let form = form(&store).with_on_success(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        form.set_fields(filled()).await;

        let outcome = form.submit().await;

        let SubmitOutcome::Submitted { row, notification } = outcome else {
            panic!("expected a submitted outcome");
        };
        assert_eq!(row.name, "A");
        assert_eq!(row.email, "a@b.com");
        assert_eq!(row.message, "hi");
        assert_eq!(row.phone, None);
        assert_eq!(row.subject, None);
        assert_eq!(notification.title, "Message sent successfully!");

        assert_eq!(store.list_contact_inquiries().await.unwrap().len(), 1);
        assert_eq!(form.fields().await, ContactFields::default());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_missing_required_fields_never_reach_store() {
        let store = MemoryStore::new();
        let form = form(&store);
        form.set_fields(ContactFields {
            name: "A".into(),
            message: "   ".into(),
            ..ContactFields::default()
        })
        .await;

        let outcome = form.submit().await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Blocked(BlockReason::MissingFields(ref fields)) if fields == &vec!["email", "message"]
        ));
        assert_eq!(store.insert_calls(SiteTable::ContactInquiries), 0);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_blank_optionals_are_sent_as_none() {
        let store = MemoryStore::new();
        let form = form(&store);
        form.set_fields(ContactFields {
            phone: "  ".into(),
            subject: " Kitchen remodel ".into(),
            ..filled()
        })
        .await;

        let SubmitOutcome::Submitted { row, .. } = form.submit().await else {
            panic!("expected a submitted outcome");
        };
        assert_eq!(row.phone, None);
        assert_eq!(row.subject.as_deref(), Some("Kitchen remodel"));
    }

    #[tokio::test]
    async fn test_failure_keeps_fields_and_reports_generic_message() {
        let store = MemoryStore::new();
        store.set_failing(SiteTable::ContactInquiries, true).await;
        let form = form(&store);
        form.set_fields(filled()).await;

        let outcome = form.submit().await;

        let notification = outcome.notification().cloned().unwrap();
        assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
        assert_eq!(notification.title, "Failed to send message");
        assert_eq!(notification.description, "Please try again or contact us directly.");
        assert_eq!(form.fields().await, filled());
        assert!(!form.is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_while_in_flight_is_blocked() {
        let store = MemoryStore::new().with_latency(Duration::from_millis(200));
        let form = Arc::new(form(&store));
        form.set_fields(filled()).await;

        let first = tokio::spawn({
            let form = form.clone();
            async move { form.submit().await }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(form.is_submitting());

        let second = form.submit().await;
        assert!(matches!(second, SubmitOutcome::Blocked(BlockReason::AlreadySubmitting)));

        assert!(first.await.unwrap().is_submitted());
        assert_eq!(store.insert_calls(SiteTable::ContactInquiries), 1);
    }
}
