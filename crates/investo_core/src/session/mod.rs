//! Authentication session and notification state.
//!
//! # Responsibility
//! - Hold the current identity as an explicitly passed context object.
//! - Keep credential verification behind an injectable boundary.

pub mod config;
pub mod credentials;
pub mod store;
