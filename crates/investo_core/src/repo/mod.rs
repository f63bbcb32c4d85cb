//! Repository layer abstractions.
//!
//! # Responsibility
//! - Define data access contracts used by the session store.
//! - Keep storage details out of session orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`).

pub mod notification_repo;
