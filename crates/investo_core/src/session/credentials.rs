//! Credential verification boundary.
//!
//! # Responsibility
//! - Define the capability the session store calls to authenticate.
//! - Provide the mocked verifier that accepts any credentials.
//!
//! # Invariants
//! - Credential material never appears in `Debug` output or logs.

use crate::model::identity::{Identity, IdentityValidationError, Role};
use crate::seed::canned_identity;
use crate::session::config::SessionConfig;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::thread;
use std::time::Duration;

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Credentials were rejected by the verifier.
    AuthenticationFailed,
    /// Verifier returned an identity that breaks model invariants.
    InvalidIdentity(IdentityValidationError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed => write!(f, "authentication failed"),
            Self::InvalidIdentity(err) => write!(f, "verifier returned invalid identity: {err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AuthenticationFailed => None,
            Self::InvalidIdentity(err) => Some(err),
        }
    }
}

impl From<IdentityValidationError> for AuthError {
    fn from(value: IdentityValidationError) -> Self {
        Self::InvalidIdentity(value)
    }
}

/// Login form input.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &"<redacted>")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Capability that turns credentials plus a requested role into an identity.
pub trait CredentialVerifier {
    fn verify(&self, credentials: &Credentials, role: Role) -> Result<Identity, AuthError>;
}

/// Accepts any credentials after a fixed delay and returns the canned
/// identity for the requested role.
#[derive(Debug, Clone, Copy)]
pub struct MockCredentialVerifier {
    delay: Duration,
}

impl MockCredentialVerifier {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            delay: config.login_delay,
        }
    }
}

impl Default for MockCredentialVerifier {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl CredentialVerifier for MockCredentialVerifier {
    fn verify(&self, _credentials: &Credentials, role: Role) -> Result<Identity, AuthError> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(canned_identity(role))
    }
}
