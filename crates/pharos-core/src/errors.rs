//! Unified error system for Pharos core
//!
//! A single error type shared by every crate in the workspace. Untrusted
//! network input must never be able to crash protocol execution, so the only
//! places these errors surface are boundary calls and registry operations.

use serde::{Deserialize, Serialize};

/// Unified error type for all Pharos operations
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum PharosError {
    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        /// Error message describing what was not found
        message: String,
    },

    /// No resource is currently eligible to serve the request
    ///
    /// This is an explicit outcome, not a transient failure: the caller
    /// decides whether to wait for new registrations.
    #[error("Unavailable: {message}")]
    Unavailable {
        /// Error message describing what is unavailable
        message: String,
    },

    /// Network or transport error
    #[error("Network error: {message}")]
    Network {
        /// Error message describing the network issue
        message: String,
    },

    /// Internal invariant violation
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal error
        message: String,
    },
}

impl PharosError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Standard Result type for Pharos operations
pub type Result<T> = std::result::Result<T, PharosError>;
