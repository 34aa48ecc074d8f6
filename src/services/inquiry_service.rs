use uuid::Uuid;

use crate::models::{
    ContactInquiry, ContactStatus, NewContactInquiry, NewServiceInquiry, ServiceInquiry,
    ServiceInquiryStatus,
};
use crate::repositories::{DynSiteStore, StoreError};
use crate::utils::log_sanitizer::{mask_email, sanitize_for_log};
use super::SubmissionError;

/// Contact and service inquiries: one insert per submission, status updates
/// from the admin side.
#[derive(Clone)]
pub struct InquiryService {
    store: DynSiteStore,
}

impl InquiryService {
    pub fn new(store: DynSiteStore) -> Self {
        Self { store }
    }

    pub async fn submit_contact(&self, inquiry: NewContactInquiry) -> Result<ContactInquiry, SubmissionError> {
        let email = mask_email(&inquiry.email);

        match self.store.insert_contact_inquiry(inquiry).await {
            Ok(row) => {
                tracing::info!(inquiry_id = %row.id, email = %email, "Contact inquiry received");
                Ok(row)
            }
            Err(e) => {
                tracing::error!(email = %email, "Error submitting contact form: {}", sanitize_for_log(&e.to_string()));
                Err(e.into())
            }
        }
    }

    pub async fn submit_service(&self, inquiry: NewServiceInquiry) -> Result<ServiceInquiry, SubmissionError> {
        let email = mask_email(&inquiry.email);
        let service_type = inquiry.service_type;

        match self.store.insert_service_inquiry(inquiry).await {
            Ok(row) => {
                tracing::info!(
                    inquiry_id = %row.id,
                    email = %email,
                    service_type = service_type.as_str(),
                    "Service inquiry received"
                );
                Ok(row)
            }
            Err(e) => {
                tracing::error!(email = %email, "Error submitting service inquiry: {}", sanitize_for_log(&e.to_string()));
                Err(e.into())
            }
        }
    }

    pub async fn update_contact_status(&self, id: Uuid, status: ContactStatus) -> Result<ContactInquiry, StoreError> {
        let row = self.store.update_contact_status(id, status).await?;
        tracing::info!(inquiry_id = %id, status = ?status, "Contact inquiry status updated");
        Ok(row)
    }

    pub async fn update_service_status(&self, id: Uuid, status: ServiceInquiryStatus) -> Result<ServiceInquiry, StoreError> {
        let row = self.store.update_service_status(id, status).await?;
        tracing::info!(inquiry_id = %id, status = ?status, "Service inquiry status updated");
        Ok(row)
    }
}
