use tokio::sync::Mutex;

use crate::models::{
    BudgetRange, CreateServiceInquiryRequest, NewServiceInquiry, ProjectTimeline, ProjectType,
    ServiceInquiry, ServiceType,
};
use crate::services::InquiryService;
use super::{
    optional_field, BlockReason, Notification, SubmitGate, SubmitOutcome, SuccessCallback,
};

const FORM: &str = "service_inquiry";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceInquiryFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: Option<ServiceType>,
    pub project_type: Option<ProjectType>,
    pub budget_range: Option<BudgetRange>,
    pub project_timeline: Option<ProjectTimeline>,
    pub location: String,
    pub project_details: String,
}

impl ServiceInquiryFields {
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.service_type.is_none() {
            missing.push("service_type");
        }
        missing
    }

    fn to_insert(&self, service_type: ServiceType) -> NewServiceInquiry {
        NewServiceInquiry {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional_field(&self.phone),
            service_type,
            project_type: self.project_type,
            budget_range: self.budget_range,
            project_timeline: self.project_timeline,
            location: optional_field(&self.location),
            project_details: optional_field(&self.project_details),
        }
    }
}

impl From<CreateServiceInquiryRequest> for ServiceInquiryFields {
    fn from(request: CreateServiceInquiryRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone.unwrap_or_default(),
            service_type: Some(request.service_type),
            project_type: request.project_type,
            budget_range: request.budget_range,
            project_timeline: request.project_timeline,
            location: request.location.unwrap_or_default(),
            project_details: request.project_details.unwrap_or_default(),
        }
    }
}

pub struct ServiceInquiryForm {
    service: InquiryService,
    fields: Mutex<ServiceInquiryFields>,
    gate: SubmitGate,
    on_success: Option<SuccessCallback>,
}

impl ServiceInquiryForm {
    pub fn new(service: InquiryService) -> Self {
        Self {
            service,
            fields: Mutex::new(ServiceInquiryFields::default()),
            gate: SubmitGate::default(),
            on_success: None,
        }
    }

    /// Starts with the service already chosen, as when the visitor arrives
    /// from one of the service cards.
    pub fn preselected(service: InquiryService, service_type: ServiceType) -> Self {
        Self {
            fields: Mutex::new(ServiceInquiryFields {
                service_type: Some(service_type),
                ..ServiceInquiryFields::default()
            }),
            ..Self::new(service)
        }
    }

    pub fn with_on_success(mut self, callback: SuccessCallback) -> Self {
        self.on_success = Some(callback);
        self
    }

    pub async fn set_fields(&self, fields: ServiceInquiryFields) {
        *self.fields.lock().await = fields;
    }

    pub async fn fields(&self) -> ServiceInquiryFields {
        self.fields.lock().await.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.gate.is_submitting()
    }

    /// The submit control is only enabled once a service is selected.
    pub async fn can_submit(&self) -> bool {
        !self.is_submitting() && self.fields.lock().await.service_type.is_some()
    }

    pub async fn submit(&self) -> SubmitOutcome<ServiceInquiry> {
        self.try_submit().await.recorded(FORM)
    }

    async fn try_submit(&self) -> SubmitOutcome<ServiceInquiry> {
        let _submitting = match self.gate.enter() {
            Ok(guard) => guard,
            Err(reason) => return SubmitOutcome::Blocked(reason),
        };

        let insert = {
            let fields = self.fields.lock().await;
            match fields.service_type {
                Some(service_type) if fields.missing_required().is_empty() => {
                    fields.to_insert(service_type)
                }
                _ => {
                    return SubmitOutcome::Blocked(BlockReason::MissingFields(
                        fields.missing_required(),
                    ))
                }
            }
        };

        match self.service.submit_service(insert).await {
            Ok(row) => {
                *self.fields.lock().await = ServiceInquiryFields::default();
                if let Some(callback) = &self.on_success {
                    callback();
                }
                SubmitOutcome::Submitted {
                    row,
                    notification: Notification::success(
                        "Service inquiry submitted!",
                        "Our team will contact you with a detailed proposal within 48 hours.",
                    ),
                }
            }
            Err(error) => SubmitOutcome::Failed {
                notification: Notification::failure(
                    "Failed to submit inquiry",
                    "Please try again or contact us directly.",
                ),
                error,
            },
        }
    }
}
