use serde::{Deserialize, Serialize};

/// Site role carried in access tokens. Any role the site does not know
/// (for example the auth provider's own `authenticated`) is a plain user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_is_user() {
        let role: UserRole = serde_json::from_str("\"authenticated\"").unwrap();
        assert_eq!(role, UserRole::User);
        assert!(!role.is_admin());
    }

    #[test]
    fn test_admin_role() {
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert!(role.is_admin());
    }
}
