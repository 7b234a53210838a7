//! Shared foundation for the lexivec workspace.
//!
//! This crate holds the pieces every other lexivec crate depends on:
//! the error taxonomy ([`ModelError`]), the scored-result type and its
//! reporting comparator ([`ScoredTerm`]), and optional tracing setup.

#![forbid(unsafe_code)]

pub mod error;
pub mod tracing_config;
pub mod types;

pub use error::{ModelError, ModelResult};
pub use types::ScoredTerm;
