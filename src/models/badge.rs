use serde::Serialize;

use super::contact::ContactStatus;
use super::newsletter::SubscriberStatus;
use super::service_inquiry::ServiceInquiryStatus;
use super::PublicationStatus;

/// Visual weight of a status badge on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
}

/// Badge for a row's status. Every status enum matches exhaustively, so a
/// new variant has to pick its badge here.
pub trait StatusBadge {
    fn badge(&self) -> BadgeVariant;
}

impl StatusBadge for ContactStatus {
    fn badge(&self) -> BadgeVariant {
        match self {
            ContactStatus::New => BadgeVariant::Destructive,
            ContactStatus::Contacted => BadgeVariant::Outline,
            ContactStatus::Completed => BadgeVariant::Default,
        }
    }
}

impl StatusBadge for ServiceInquiryStatus {
    fn badge(&self) -> BadgeVariant {
        match self {
            ServiceInquiryStatus::New => BadgeVariant::Destructive,
            ServiceInquiryStatus::Completed
            | ServiceInquiryStatus::Quoted
            | ServiceInquiryStatus::Approved
            | ServiceInquiryStatus::InProgress => BadgeVariant::Default,
        }
    }
}

impl StatusBadge for PublicationStatus {
    fn badge(&self) -> BadgeVariant {
        match self {
            PublicationStatus::Active => BadgeVariant::Default,
            PublicationStatus::Draft => BadgeVariant::Secondary,
            PublicationStatus::Archived => BadgeVariant::Outline,
        }
    }
}

impl StatusBadge for SubscriberStatus {
    fn badge(&self) -> BadgeVariant {
        match self {
            SubscriberStatus::Active | SubscriberStatus::Unsubscribed => BadgeVariant::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_lookup_table() {
        assert_eq!(ContactStatus::New.badge(), BadgeVariant::Destructive);
        assert_eq!(ContactStatus::Contacted.badge(), BadgeVariant::Outline);
        assert_eq!(ContactStatus::Completed.badge(), BadgeVariant::Default);
        assert_eq!(PublicationStatus::Active.badge(), BadgeVariant::Default);
        assert_eq!(PublicationStatus::Draft.badge(), BadgeVariant::Secondary);
        assert_eq!(PublicationStatus::Archived.badge(), BadgeVariant::Outline);
    }

    #[test]
    fn test_unmapped_statuses_fall_back_to_default() {
        assert_eq!(ServiceInquiryStatus::Quoted.badge(), BadgeVariant::Default);
        assert_eq!(ServiceInquiryStatus::InProgress.badge(), BadgeVariant::Default);
        assert_eq!(SubscriberStatus::Unsubscribed.badge(), BadgeVariant::Default);
        assert_eq!(ServiceInquiryStatus::New.badge(), BadgeVariant::Destructive);
    }

    #[test]
    fn test_only_new_inquiries_are_destructive() {
        let service = [
            ServiceInquiryStatus::New,
            ServiceInquiryStatus::Quoted,
            ServiceInquiryStatus::Approved,
            ServiceInquiryStatus::InProgress,
            ServiceInquiryStatus::Completed,
        ];
        let destructive: Vec<_> = service
            .into_iter()
            .filter(|status| status.badge() == BadgeVariant::Destructive)
            .collect();
        assert_eq!(destructive, vec![ServiceInquiryStatus::New]);
        assert_eq!(SubscriberStatus::Active.badge(), BadgeVariant::Default);
    }
}
