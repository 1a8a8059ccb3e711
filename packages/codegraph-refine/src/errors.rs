//! Error types for codegraph-refine
//!
//! Provides unified error handling across the crate.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for refine-policy operations
#[derive(Debug, Error)]
pub enum RefineError {
    /// A composite policy was assembled without one of its delegates
    #[error("Missing delegate policy: {slot}")]
    MissingDelegate { slot: String },

    /// Fault raised by a policy while deciding
    #[error("Policy '{policy}' failed: {message}")]
    Delegate { policy: String, message: String },

    /// Field pattern did not compile
    #[error("Invalid field pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RefineError {
    /// Create a missing-delegate error for the named slot
    pub fn missing_delegate(slot: impl Into<String>) -> Self {
        RefineError::MissingDelegate { slot: slot.into() }
    }

    /// Create a delegate fault
    pub fn delegate(policy: impl Into<String>, message: impl Into<String>) -> Self {
        RefineError::Delegate {
            policy: policy.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for refine-policy operations
pub type RefineResult<T> = std::result::Result<T, RefineError>;
