use serde::Serialize;

use super::service_inquiry::{BudgetRange, ProjectTimeline, ProjectType, ServiceType};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Options for every enumerated `<select>` on the inquiry forms.
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub service_types: Vec<SelectOption>,
    pub project_types: Vec<SelectOption>,
    pub budget_ranges: Vec<SelectOption>,
    pub project_timelines: Vec<SelectOption>,
}

impl FormOptions {
    pub fn current() -> Self {
        Self {
            service_types: ServiceType::ALL
                .iter()
                .map(|s| SelectOption { value: s.as_str(), label: s.label() })
                .collect(),
            project_types: ProjectType::ALL
                .iter()
                .map(|p| SelectOption { value: p.as_str(), label: p.label() })
                .collect(),
            budget_ranges: BudgetRange::ALL
                .iter()
                .map(|b| SelectOption { value: b.as_str(), label: b.label() })
                .collect(),
            project_timelines: ProjectTimeline::ALL
                .iter()
                .map(|t| SelectOption { value: t.as_str(), label: t.label() })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceOffering {
    pub service_type: ServiceType,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

pub fn service_catalog() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering {
            service_type: ServiceType::Architecture,
            title: "Architecture",
            description: "Complete architectural design and planning services for residential and commercial projects.",
            features: ["Structural Design", "3D Visualization", "Planning Permits", "Construction Drawings"],
        },
        ServiceOffering {
            service_type: ServiceType::Interiors,
            title: "Interior Design",
            description: "Comprehensive interior design solutions that blend functionality with aesthetic appeal.",
            features: ["Space Planning", "Furniture Selection", "Color Schemes", "Lighting Design"],
        },
        ServiceOffering {
            service_type: ServiceType::Turnkey,
            title: "Turnkey Projects",
            description: "End-to-end project management from concept to completion with seamless execution.",
            features: ["Project Planning", "Vendor Management", "Quality Control", "Timely Delivery"],
        },
        ServiceOffering {
            service_type: ServiceType::Landscaping,
            title: "Landscaping",
            description: "Beautiful outdoor spaces and garden design that complement your interior aesthetics.",
            features: ["Garden Design", "Plant Selection", "Irrigation Systems", "Maintenance Plans"],
        },
        ServiceOffering {
            service_type: ServiceType::Electrical,
            title: "Electrical Works",
            description: "Complete electrical installations and smart home automation systems.",
            features: ["Wiring & Installation", "Smart Home Systems", "Lighting Solutions", "Safety Systems"],
        },
        ServiceOffering {
            service_type: ServiceType::Ac,
            title: "Air Conditioning",
            description: "HVAC design and installation for optimal comfort and energy efficiency.",
            features: ["HVAC Design", "Installation", "Maintenance", "Energy Optimization"],
        },
        ServiceOffering {
            service_type: ServiceType::ProjectManagement,
            title: "Project Management",
            description: "Professional project oversight ensuring quality, timeline, and budget adherence.",
            features: ["Timeline Management", "Budget Control", "Quality Assurance", "Client Communication"],
        },
        ServiceOffering {
            service_type: ServiceType::Utilities,
            title: "Utilities",
            description: "Complete utility services including plumbing, sewerage, and water systems.",
            features: ["Plumbing Systems", "Water Management", "Sewerage Solutions", "Utility Planning"],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_covers_every_service_type_once() {
        let covered: HashSet<_> = service_catalog().iter().map(|o| o.service_type).collect();
        assert_eq!(covered.len(), ServiceType::ALL.len());
    }

    #[test]
    fn test_form_options_match_enums() {
        let options = FormOptions::current();
        assert_eq!(options.service_types.len(), 8);
        assert_eq!(options.project_types.len(), 4);
        assert_eq!(options.budget_ranges[3], SelectOption { value: "100+", label: "₹1Cr+" });
        assert_eq!(options.project_timelines.last().unwrap().value, "flexible");
    }
}
