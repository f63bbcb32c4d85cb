//! Core domain logic for the Investo matchmaking client.
//! This crate is the single source of truth for session and discovery
//! invariants; view layers only supply inputs and render returned values.

pub mod discovery;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod session;

pub use discovery::criteria::{CriteriaError, FilterCriteria, FundingRange};
pub use discovery::filter::{filter_projects, FilterResult};
pub use discovery::sort::{sort_projects, SortOrder};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::identity::{
    Identity, IdentityId, IdentityValidationError, MenuItem, Role, RoleProfile, SubscriptionTier,
};
pub use model::notification::{Notification, NotificationId, NotificationKind};
pub use model::project::{Industry, Project, ProjectId, ProjectStage, ProjectStatus, RiskLevel};
pub use repo::notification_repo::{
    InMemoryNotificationRepository, NotificationRepository, RepoError, RepoResult,
};
pub use seed::{canned_identity, seed_notifications, seed_projects};
pub use session::config::SessionConfig;
pub use session::credentials::{
    AuthError, CredentialVerifier, Credentials, MockCredentialVerifier,
};
pub use session::store::{
    SessionError, SessionId, SessionResult, SessionState, SessionStore, LOGIN_FAILED_MESSAGE,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
