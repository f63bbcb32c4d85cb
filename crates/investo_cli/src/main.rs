//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive the core session and discovery APIs end to end without a UI.
//! - Keep stdout deterministic for quick local sanity checks; log events go
//!   to the rolling file under the temp directory.

use investo_core::{
    default_log_level, filter_projects, init_logging, seed_projects, sort_projects, Credentials,
    FilterCriteria, Industry, LoggingError, Role, SessionConfig, SessionError, SessionStore,
    SortOrder,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::process::ExitCode;

const LOG_DIR_NAME: &str = "investo";

#[derive(Debug)]
enum CliError {
    Logging(LoggingError),
    Session(SessionError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(err) => write!(f, "logging: {err}"),
            Self::Session(err) => write!(f, "{}", err.user_message()),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            Self::Session(err) => Some(err),
        }
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<SessionError> for CliError {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}

fn main() -> ExitCode {
    println!("investo_core ping={}", investo_core::ping());
    println!("investo_core version={}", investo_core::core_version());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn log_dir() -> PathBuf {
    std::env::temp_dir().join(LOG_DIR_NAME)
}

fn start_logging() -> Result<(), CliError> {
    let dir = log_dir();
    init_logging(default_log_level(), &dir.to_string_lossy())?;
    Ok(())
}

fn login_line(role: Role, identity_id: &str, name: &str) -> String {
    format!(
        "login role={} label={} identity={} name={}",
        role.as_str(),
        role.label(),
        identity_id,
        name
    )
}

fn run() -> Result<(), CliError> {
    start_logging()?;

    let mut store = SessionStore::mocked(&SessionConfig::immediate())?;
    let credentials = Credentials::new("demo@investo.app", "demo");

    for role in [Role::Entrepreneur, Role::Investor] {
        let identity = store.login(&credentials, role)?;
        let line = login_line(role, &identity.id, &identity.display_name());
        println!("{line}");
        let menu: Vec<&str> = role.menu_items().iter().map(|item| item.label).collect();
        println!("  menu={}", menu.join("|"));
        for notification in store.visible_notifications()? {
            println!(
                "  notification id={} read={} title={}",
                notification.id, notification.read, notification.title
            );
        }
        println!("  unread={}", store.unread_count()?);
        store.logout();
    }

    let catalog = seed_projects();
    let mut criteria = FilterCriteria::default();
    criteria.toggle_industry(Industry::Technology);
    criteria.toggle_industry(Industry::Fintech);
    let mut result = filter_projects(&catalog, &criteria);
    sort_projects(&mut result.items, SortOrder::FundingGoal);
    println!(
        "filter industries=technology,fintech count={}",
        result.count
    );
    for project in &result.items {
        println!(
            "  project id={} name={} funded={:.0}%",
            project.id,
            project.name,
            project.funding_progress_percent()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{log_dir, login_line, CliError};
    use investo_core::{AuthError, LoggingError, Role, SessionError, LOGIN_FAILED_MESSAGE};

    #[test]
    fn log_dir_is_absolute() {
        assert!(log_dir().is_absolute());
        assert!(log_dir().ends_with("investo"));
    }

    #[test]
    fn login_line_carries_role_label() {
        let line = login_line(Role::Investor, "i1", "Mariam Ahmed");
        assert_eq!(
            line,
            "login role=investor label=Investor identity=i1 name=Mariam Ahmed"
        );
    }

    #[test]
    fn cli_errors_surface_logging_and_generic_login_messages() {
        let logging = CliError::from(LoggingError::EmptyDirectory);
        assert_eq!(logging.to_string(), "logging: log_dir cannot be empty");

        let auth = CliError::from(SessionError::Auth(AuthError::AuthenticationFailed));
        assert_eq!(auth.to_string(), LOGIN_FAILED_MESSAGE);
    }
}
