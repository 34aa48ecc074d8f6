use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::validate_not_blank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Turnkey,
    Architecture,
    Interiors,
    Landscaping,
    ProjectManagement,
    Electrical,
    Ac,
    Utilities,
}

impl ServiceType {
    pub const ALL: [ServiceType; 8] = [
        ServiceType::Turnkey,
        ServiceType::Architecture,
        ServiceType::Interiors,
        ServiceType::Landscaping,
        ServiceType::ProjectManagement,
        ServiceType::Electrical,
        ServiceType::Ac,
        ServiceType::Utilities,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Turnkey => "turnkey",
            ServiceType::Architecture => "architecture",
            ServiceType::Interiors => "interiors",
            ServiceType::Landscaping => "landscaping",
            ServiceType::ProjectManagement => "project_management",
            ServiceType::Electrical => "electrical",
            ServiceType::Ac => "ac",
            ServiceType::Utilities => "utilities",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Turnkey => "Turnkey Projects",
            ServiceType::Architecture => "Architecture",
            ServiceType::Interiors => "Interior Design",
            ServiceType::Landscaping => "Landscaping",
            ServiceType::ProjectManagement => "Project Management",
            ServiceType::Electrical => "Electrical",
            ServiceType::Ac => "Air-Conditioning",
            ServiceType::Utilities => "Utilities",
        }
    }
}

/// Kind of space a project covers. Shared by service inquiries and the
/// portfolio category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Residential,
    Commercial,
    Hospitality,
    Showroom,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Residential,
        ProjectType::Commercial,
        ProjectType::Hospitality,
        ProjectType::Showroom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Residential => "residential",
            ProjectType::Commercial => "commercial",
            ProjectType::Hospitality => "hospitality",
            ProjectType::Showroom => "showroom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Residential => "Residential",
            ProjectType::Commercial => "Commercial",
            ProjectType::Hospitality => "Hospitality",
            ProjectType::Showroom => "Showroom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT")]
pub enum BudgetRange {
    #[serde(rename = "5-15")]
    #[sqlx(rename = "5-15")]
    FiveToFifteenLakh,
    #[serde(rename = "15-50")]
    #[sqlx(rename = "15-50")]
    FifteenToFiftyLakh,
    #[serde(rename = "50-100")]
    #[sqlx(rename = "50-100")]
    FiftyLakhToOneCrore,
    #[serde(rename = "100+")]
    #[sqlx(rename = "100+")]
    AboveOneCrore,
    #[serde(rename = "discuss")]
    #[sqlx(rename = "discuss")]
    Discuss,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 5] = [
        BudgetRange::FiveToFifteenLakh,
        BudgetRange::FifteenToFiftyLakh,
        BudgetRange::FiftyLakhToOneCrore,
        BudgetRange::AboveOneCrore,
        BudgetRange::Discuss,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetRange::FiveToFifteenLakh => "5-15",
            BudgetRange::FifteenToFiftyLakh => "15-50",
            BudgetRange::FiftyLakhToOneCrore => "50-100",
            BudgetRange::AboveOneCrore => "100+",
            BudgetRange::Discuss => "discuss",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::FiveToFifteenLakh => "₹5L - ₹15L",
            BudgetRange::FifteenToFiftyLakh => "₹15L - ₹50L",
            BudgetRange::FiftyLakhToOneCrore => "₹50L - ₹1Cr",
            BudgetRange::AboveOneCrore => "₹1Cr+",
            BudgetRange::Discuss => "Prefer to discuss",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT")]
pub enum ProjectTimeline {
    #[serde(rename = "1-3")]
    #[sqlx(rename = "1-3")]
    OneToThreeMonths,
    #[serde(rename = "3-6")]
    #[sqlx(rename = "3-6")]
    ThreeToSixMonths,
    #[serde(rename = "6-12")]
    #[sqlx(rename = "6-12")]
    SixToTwelveMonths,
    #[serde(rename = "12+")]
    #[sqlx(rename = "12+")]
    OverAYear,
    #[serde(rename = "flexible")]
    #[sqlx(rename = "flexible")]
    Flexible,
}

impl ProjectTimeline {
    pub const ALL: [ProjectTimeline; 5] = [
        ProjectTimeline::OneToThreeMonths,
        ProjectTimeline::ThreeToSixMonths,
        ProjectTimeline::SixToTwelveMonths,
        ProjectTimeline::OverAYear,
        ProjectTimeline::Flexible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectTimeline::OneToThreeMonths => "1-3",
            ProjectTimeline::ThreeToSixMonths => "3-6",
            ProjectTimeline::SixToTwelveMonths => "6-12",
            ProjectTimeline::OverAYear => "12+",
            ProjectTimeline::Flexible => "flexible",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectTimeline::OneToThreeMonths => "1-3 months",
            ProjectTimeline::ThreeToSixMonths => "3-6 months",
            ProjectTimeline::SixToTwelveMonths => "6-12 months",
            ProjectTimeline::OverAYear => "12+ months",
            ProjectTimeline::Flexible => "Flexible",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ServiceInquiryStatus {
    New,
    Quoted,
    Approved,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ServiceInquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_type: ServiceType,
    pub project_type: Option<ProjectType>,
    pub budget_range: Option<BudgetRange>,
    pub project_timeline: Option<ProjectTimeline>,
    pub location: Option<String>,
    pub project_details: Option<String>,
    pub status: ServiceInquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewServiceInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_type: ServiceType,
    pub project_type: Option<ProjectType>,
    pub budget_range: Option<BudgetRange>,
    pub project_timeline: Option<ProjectTimeline>,
    pub location: Option<String>,
    pub project_details: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceInquiryRequest {
    #[validate(length(min = 1, max = 200, message = "Name is required"), custom(function = validate_not_blank))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(max = 30, message = "Phone number too long"))]
    pub phone: Option<String>,
    pub service_type: ServiceType,
    pub project_type: Option<ProjectType>,
    pub budget_range: Option<BudgetRange>,
    pub project_timeline: Option<ProjectTimeline>,
    #[validate(length(max = 200, message = "Location too long"))]
    pub location: Option<String>,
    #[validate(length(max = 5000, message = "Project details too long"))]
    pub project_details: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateServiceInquiryStatusRequest {
    pub status: ServiceInquiryStatus,
}
