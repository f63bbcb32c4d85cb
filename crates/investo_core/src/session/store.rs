//! Session store: current identity plus its notifications.
//!
//! # Responsibility
//! - Drive the `Anonymous <-> Authenticated` state machine.
//! - Scope notification reads and writes to the current identity.
//!
//! # Invariants
//! - At most one identity is current per store.
//! - `unread_count() == visible_notifications().filter(!read).len()`.
//! - `mark_as_read` on an already-read notification is a successful no-op.
//! - Logout never fails and is idempotent.

use crate::model::identity::{Identity, Role};
use crate::model::notification::{Notification, NotificationId};
use crate::repo::notification_repo::{
    InMemoryNotificationRepository, NotificationRepository, RepoError,
};
use crate::seed::seed_notifications;
use crate::session::config::SessionConfig;
use crate::session::credentials::{
    AuthError, CredentialVerifier, Credentials, MockCredentialVerifier,
};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Generic message shown for every login failure.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid credentials. Please try again.";

/// Per-store identifier used to correlate log lines.
pub type SessionId = Uuid;

pub type SessionResult<T> = Result<T, SessionError>;

/// Session-level error for login and notification operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Operation requires an authenticated identity.
    NotAuthenticated,
    /// Notification id is unknown.
    NotificationNotFound(NotificationId),
    /// Notification belongs to another identity.
    NotificationForbidden(NotificationId),
    Auth(AuthError),
    Repo(RepoError),
}

impl SessionError {
    /// Message safe to display to the end user.
    ///
    /// Every authentication failure collapses into one generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(_) => LOGIN_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAuthenticated => write!(f, "not authenticated"),
            Self::NotificationNotFound(id) => write!(f, "notification not found: {id}"),
            Self::NotificationForbidden(id) => {
                write!(f, "notification belongs to another identity: {id}")
            }
            Self::Auth(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Auth(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AuthError> for SessionError {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl From<RepoError> for SessionError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotificationNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Authentication state of one store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Identity),
}

/// Explicit session context owning identity state and notifications.
///
/// Several stores can coexist; none of them touches global state.
pub struct SessionStore<V: CredentialVerifier, R: NotificationRepository> {
    session_id: SessionId,
    verifier: V,
    notifications: R,
    state: SessionState,
}

impl SessionStore<MockCredentialVerifier, InMemoryNotificationRepository> {
    /// Store backed by the mocked verifier and seeded notifications.
    pub fn mocked(config: &SessionConfig) -> SessionResult<Self> {
        let verifier = MockCredentialVerifier::new(config);
        let notifications = InMemoryNotificationRepository::with_records(seed_notifications())?;
        Ok(Self::new(verifier, notifications))
    }
}

impl<V: CredentialVerifier, R: NotificationRepository> SessionStore<V, R> {
    /// Creates an anonymous store.
    pub fn new(verifier: V, notifications: R) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            verifier,
            notifications,
            state: SessionState::Anonymous,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Authenticates through the verifier and makes the result current.
    ///
    /// Logging in while authenticated replaces the current identity.
    ///
    /// # Errors
    /// - `Auth(AuthenticationFailed)` when the verifier rejects credentials;
    ///   the previous state is kept.
    /// - `Auth(InvalidIdentity)` when the verifier returns an invalid record.
    pub fn login(&mut self, credentials: &Credentials, role: Role) -> SessionResult<&Identity> {
        let identity = match self.verify(credentials, role) {
            Ok(identity) => identity,
            Err(err) => {
                warn!(
                    "event=session_login module=session status=error session_id={} role={} error={}",
                    self.session_id,
                    role.as_str(),
                    err
                );
                return Err(err.into());
            }
        };

        info!(
            "event=session_login module=session status=ok session_id={} role={} identity_id={}",
            self.session_id,
            identity.role().as_str(),
            identity.id
        );
        self.state = SessionState::Authenticated(identity);
        self.require_identity()
    }

    fn verify(&self, credentials: &Credentials, role: Role) -> Result<Identity, AuthError> {
        let identity = self.verifier.verify(credentials, role)?;
        identity.validate()?;
        Ok(identity)
    }

    /// Clears the current identity. No-op when already anonymous.
    pub fn logout(&mut self) {
        if let SessionState::Authenticated(identity) = &self.state {
            info!(
                "event=session_logout module=session status=ok session_id={} identity_id={}",
                self.session_id, identity.id
            );
        }
        self.state = SessionState::Anonymous;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        match &self.state {
            SessionState::Anonymous => None,
            SessionState::Authenticated(identity) => Some(identity),
        }
    }

    /// Returns the current identity or `NotAuthenticated`.
    pub fn require_identity(&self) -> SessionResult<&Identity> {
        self.current_identity()
            .ok_or(SessionError::NotAuthenticated)
    }

    /// Notifications owned by the current identity, in insertion order.
    ///
    /// Empty when anonymous.
    pub fn visible_notifications(&self) -> SessionResult<Vec<Notification>> {
        match self.current_identity() {
            Some(identity) => Ok(self.notifications.list_for_owner(identity.id.as_str())?),
            None => Ok(Vec::new()),
        }
    }

    /// Number of visible notifications with `read == false`.
    pub fn unread_count(&self) -> SessionResult<usize> {
        Ok(self
            .visible_notifications()?
            .iter()
            .filter(|n| !n.read)
            .count())
    }

    /// Marks one visible notification read.
    ///
    /// # Errors
    /// - `NotAuthenticated` when anonymous.
    /// - `NotificationNotFound` when `notification_id` is unknown.
    /// - `NotificationForbidden` when it belongs to another identity.
    pub fn mark_as_read(&mut self, notification_id: &str) -> SessionResult<()> {
        let owner_id = self.require_identity()?.id.clone();
        let notification = self
            .notifications
            .get(notification_id)?
            .ok_or_else(|| SessionError::NotificationNotFound(notification_id.to_string()))?;
        if !notification.is_owned_by(owner_id.as_str()) {
            warn!(
                "event=notification_mark_read module=session status=denied session_id={} notification_id={}",
                self.session_id, notification_id
            );
            return Err(SessionError::NotificationForbidden(
                notification_id.to_string(),
            ));
        }

        let changed = self.notifications.mark_read(notification_id)?;
        info!(
            "event=notification_mark_read module=session status=ok session_id={} notification_id={} changed={}",
            self.session_id, notification_id, changed
        );
        Ok(())
    }

    /// Marks every visible unread notification read.
    ///
    /// Returns how many notifications changed. Unlike `mark_as_read`, an
    /// anonymous store is not an error here: nothing is visible, so the
    /// call returns `Ok(0)`.
    pub fn mark_all_as_read(&mut self) -> SessionResult<usize> {
        let unread_ids: Vec<NotificationId> = self
            .visible_notifications()?
            .into_iter()
            .filter(|n| !n.read)
            .map(|n| n.id)
            .collect();
        let mut changed = 0;
        for id in &unread_ids {
            if self.notifications.mark_read(id.as_str())? {
                changed += 1;
            }
        }
        info!(
            "event=notification_mark_all_read module=session status=ok session_id={} changed={}",
            self.session_id, changed
        );
        Ok(changed)
    }
}
