//! Error types for the navigation subsystem and its collaborators.
//!
//! - [`ParseModuleError`] - unknown module identifier
//! - [`ContentError`] - embedded portfolio data failed to load
//! - [`ContactError`] - contact form validation and relay failures

use thiserror::Error;

/// A string that names no known module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown module: {0}")]
pub struct ParseModuleError(pub String);

/// Portfolio content errors.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

/// Contact form errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// A required field was empty after trimming.
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid email address")]
    InvalidEmail,
    /// The relay answered with a failure status.
    #[error("relay rejected message ({status}): {reason}")]
    Rejected { status: u16, reason: String },
    /// The request never reached the relay.
    #[error("network error: {0}")]
    Network(String),
}
