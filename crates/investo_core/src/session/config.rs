//! Session configuration.

use std::time::Duration;

/// Simulated network round trip of the mocked login.
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(500);

/// Tunables for one session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Blocking delay applied by the mocked verifier before it answers.
    pub login_delay: Duration,
}

impl SessionConfig {
    /// Configuration without the simulated delay, for tests and tooling.
    pub fn immediate() -> Self {
        Self {
            login_delay: Duration::ZERO,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_delay: DEFAULT_LOGIN_DELAY,
        }
    }
}
