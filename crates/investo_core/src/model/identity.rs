//! Authenticated identity model.
//!
//! # Responsibility
//! - Define the user record produced by a successful login.
//! - Carry role-specific profile data as one tagged variant.
//!
//! # Invariants
//! - `id` is non-empty and stable for the identity lifetime.
//! - The role is derived from the profile variant, never stored twice.
//! - `email` has a `local@domain.tld` shape.

use crate::discovery::criteria::FundingRange;
use crate::model::project::{Industry, ProjectStage, RiskLevel};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Stable identifier for one identity.
pub type IdentityId = String;

/// Platform role of an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Entrepreneur,
    Investor,
}

/// One entry of the role-specific navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
}

const fn item(path: &'static str, label: &'static str) -> MenuItem {
    MenuItem { path, label }
}

const ENTREPRENEUR_MENU: &[MenuItem] = &[
    item("/explore", "Explore Projects"),
    item("/my-projects", "My Projects"),
    item("/create-project", "Create Project"),
    item("/analytics", "Analytics"),
    item("/messages", "Messages"),
    item("/notifications", "Notifications"),
];

const INVESTOR_MENU: &[MenuItem] = &[
    item("/explore", "Explore Projects"),
    item("/create-project", "Create Project"),
    item("/recommendations", "Recommendations"),
    item("/messages", "Messages"),
    item("/notifications", "Notifications"),
];

impl Role {
    /// Stable lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entrepreneur => "entrepreneur",
            Self::Investor => "investor",
        }
    }

    /// User-facing role label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Entrepreneur => "Entrepreneur",
            Self::Investor => "Investor",
        }
    }

    /// Navigation entries available to this role, in display order.
    pub fn menu_items(self) -> &'static [MenuItem] {
        match self {
            Self::Entrepreneur => ENTREPRENEUR_MENU,
            Self::Investor => INVESTOR_MENU,
        }
    }
}

/// Investor subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    Basic,
    Professional,
    Enterprise,
}

/// Role-specific profile attached to an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum RoleProfile {
    Entrepreneur {
        bio: Option<String>,
        experience: Option<String>,
        linked_in: Option<String>,
    },
    Investor {
        investment_range: Option<FundingRange>,
        preferred_industries: Vec<Industry>,
        risk_tolerance: Option<RiskLevel>,
        preferred_stages: Vec<ProjectStage>,
        subscription_tier: Option<SubscriptionTier>,
    },
}

/// Identity validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityValidationError {
    EmptyId,
    InvalidEmail(String),
}

impl Display for IdentityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "identity id cannot be empty"),
            Self::InvalidEmail(value) => write!(f, "invalid email address: `{value}`"),
        }
    }
}

impl Error for IdentityValidationError {}

/// Authenticated user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: IdentityId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
    pub company: Option<String>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    #[serde(flatten)]
    pub profile: RoleProfile,
}

impl Identity {
    /// Role implied by the profile variant.
    pub fn role(&self) -> Role {
        match self.profile {
            RoleProfile::Entrepreneur { .. } => Role::Entrepreneur,
            RoleProfile::Investor { .. } => Role::Investor,
        }
    }

    /// `first last`, trimmed when either part is empty.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Validates identity invariants.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is blank.
    /// - `InvalidEmail` when `email` lacks a `local@domain.tld` shape.
    pub fn validate(&self) -> Result<(), IdentityValidationError> {
        if self.id.trim().is_empty() {
            return Err(IdentityValidationError::EmptyId);
        }
        if !EMAIL_RE.is_match(self.email.as_str()) {
            return Err(IdentityValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Identity, IdentityValidationError, Role, RoleProfile};

    fn entrepreneur(email: &str) -> Identity {
        Identity {
            id: "e9".to_string(),
            email: email.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            avatar: None,
            company: None,
            created_at: 0,
            profile: RoleProfile::Entrepreneur {
                bio: None,
                experience: None,
                linked_in: None,
            },
        }
    }

    #[test]
    fn validate_rejects_malformed_email() {
        for email in ["", "plain", "a@b", "a b@c.d"] {
            let err = entrepreneur(email)
                .validate()
                .expect_err("malformed email must fail");
            assert!(matches!(err, IdentityValidationError::InvalidEmail(_)));
        }
        entrepreneur("test@example.com")
            .validate()
            .expect("well-formed email should pass");
    }

    #[test]
    fn validate_rejects_blank_id() {
        let mut identity = entrepreneur("test@example.com");
        identity.id = "  ".to_string();
        assert_eq!(identity.validate(), Err(IdentityValidationError::EmptyId));
    }

    #[test]
    fn role_follows_profile_variant() {
        let identity = entrepreneur("test@example.com");
        assert_eq!(identity.role(), Role::Entrepreneur);
        assert_eq!(identity.display_name(), "Test User");
    }

    #[test]
    fn role_labels_are_title_case_tags() {
        assert_eq!(Role::Entrepreneur.label(), "Entrepreneur");
        assert_eq!(Role::Investor.label(), "Investor");
        for role in [Role::Entrepreneur, Role::Investor] {
            assert_eq!(role.label().to_lowercase(), role.as_str());
        }
    }

    #[test]
    fn menus_differ_per_role() {
        let entrepreneur_paths: Vec<&str> = Role::Entrepreneur
            .menu_items()
            .iter()
            .map(|item| item.path)
            .collect();
        let investor_paths: Vec<&str> = Role::Investor
            .menu_items()
            .iter()
            .map(|item| item.path)
            .collect();

        assert!(entrepreneur_paths.contains(&"/my-projects"));
        assert!(!investor_paths.contains(&"/my-projects"));
        assert!(investor_paths.contains(&"/recommendations"));
        assert_eq!(entrepreneur_paths.first(), Some(&"/explore"));
        assert_eq!(investor_paths.last(), Some(&"/notifications"));
    }
}
