//! Notification repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own notification records for the process lifetime.
//! - Answer owner-scoped reads in insertion order.
//!
//! # Invariants
//! - Notification ids are unique inside one repository.
//! - Records are never deleted; the only mutation is `read: false -> true`.
//! - `list_for_owner` never re-sorts; it preserves insertion order.

use crate::model::notification::{Notification, NotificationId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for notification storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(NotificationId),
    DuplicateId(NotificationId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "notification not found: {id}"),
            Self::DuplicateId(id) => write!(f, "notification id already exists: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for notification storage.
pub trait NotificationRepository {
    fn insert(&mut self, notification: Notification) -> RepoResult<()>;
    fn get(&self, id: &str) -> RepoResult<Option<Notification>>;
    fn list_for_owner(&self, owner_id: &str) -> RepoResult<Vec<Notification>>;
    /// Sets `read = true`. Returns whether the flag changed.
    fn mark_read(&mut self, id: &str) -> RepoResult<bool>;
}

/// Vector-backed repository keeping insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationRepository {
    records: Vec<Notification>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository from seed records.
    ///
    /// # Errors
    /// - `DuplicateId` when two seed records share an id.
    pub fn with_records(records: Vec<Notification>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for record in records {
            repo.insert(record)?;
        }
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl NotificationRepository for InMemoryNotificationRepository {
    fn insert(&mut self, notification: Notification) -> RepoResult<()> {
        if self.records.iter().any(|n| n.id == notification.id) {
            return Err(RepoError::DuplicateId(notification.id));
        }
        self.records.push(notification);
        Ok(())
    }

    fn get(&self, id: &str) -> RepoResult<Option<Notification>> {
        Ok(self.records.iter().find(|n| n.id == id).cloned())
    }

    fn list_for_owner(&self, owner_id: &str) -> RepoResult<Vec<Notification>> {
        Ok(self
            .records
            .iter()
            .filter(|n| n.is_owned_by(owner_id))
            .cloned()
            .collect())
    }

    fn mark_read(&mut self, id: &str) -> RepoResult<bool> {
        self.records
            .iter_mut()
            .find(|n| n.id == id)
            .map(Notification::mark_read)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryNotificationRepository, NotificationRepository, RepoError};
    use crate::seed::seed_notifications;

    #[test]
    fn rejects_duplicate_ids() {
        let mut records = seed_notifications();
        records.push(records[0].clone());
        let err = InMemoryNotificationRepository::with_records(records)
            .expect_err("duplicate seed must fail");
        assert_eq!(err, RepoError::DuplicateId("n1".to_string()));
    }

    #[test]
    fn list_for_owner_keeps_insertion_order() {
        let repo = InMemoryNotificationRepository::with_records(seed_notifications())
            .expect("seed should load");
        let ids: Vec<String> = repo
            .list_for_owner("e1")
            .expect("list should succeed")
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec!["n1", "n2", "n3"]);
        assert!(repo.list_for_owner("nobody").unwrap().is_empty());
    }

    #[test]
    fn mark_read_reports_missing_ids() {
        let mut repo = InMemoryNotificationRepository::new();
        assert!(repo.is_empty());
        let err = repo.mark_read("n404").expect_err("missing id must fail");
        assert_eq!(err, RepoError::NotFound("n404".to_string()));
    }

    #[test]
    fn mark_read_is_idempotent() {
        let mut repo = InMemoryNotificationRepository::with_records(seed_notifications())
            .expect("seed should load");
        assert!(repo.mark_read("n1").unwrap());
        assert!(!repo.mark_read("n1").unwrap());
        assert!(repo.get("n1").unwrap().expect("n1 exists").read);
        assert_eq!(repo.len(), 4);
    }
}
