//! Project discovery over the in-memory catalog.
//!
//! # Responsibility
//! - Turn user-edited criteria into a deterministic catalog subset.
//! - Keep ordering a separate, caller-chosen step.
//!
//! # Invariants
//! - No discovery operation mutates the catalog.

pub mod criteria;
pub mod filter;
pub mod sort;
