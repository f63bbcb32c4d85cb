//! Notification model.
//!
//! # Invariants
//! - `owner_id` never changes after creation.
//! - `read` only moves from `false` to `true`.

use serde::{Deserialize, Serialize};

/// Stable identifier for one notification.
pub type NotificationId = String;

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    ProjectStatus,
    Investment,
    Message,
    Match,
    System,
}

/// Alert directed at one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    /// Identity id this notification belongs to.
    pub owner_id: String,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub read: bool,
    /// Optional in-app route such as `/projects/p1`.
    pub link: Option<String>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Notification {
    /// Marks this notification read.
    ///
    /// Returns `true` when the flag changed, `false` when it was already set.
    pub fn mark_read(&mut self) -> bool {
        let changed = !self.read;
        self.read = true;
        changed
    }

    /// Returns whether `identity_id` owns this notification.
    pub fn is_owned_by(&self, identity_id: &str) -> bool {
        self.owner_id == identity_id
    }
}
