//! Domain model for sessions, notifications and the project catalog.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep role-specific data in tagged variants instead of optional bags.
//!
//! # Invariants
//! - Every domain record is identified by a stable string id.

pub mod identity;
pub mod notification;
pub mod project;
