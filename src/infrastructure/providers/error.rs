//! # Provider Errors
//!
//! Error types for live-provider operations.
//!
//! These errors exist only inside the adapter: the [`EstimateSource`]
//! port folds every one of them into an empty contribution, so nothing
//! here ever crosses into the aggregation path. The taxonomy still
//! matters for logging and tests.
//!
//! [`EstimateSource`]: crate::infrastructure::providers::traits::EstimateSource
//!
//! # Examples
//!
//! ```
//! use fairfare::infrastructure::providers::error::ProviderError;
//!
//! let error = ProviderError::timeout("request timed out after 5000ms");
//! assert!(error.is_transport());
//!
//! let error = ProviderError::MissingSearchId;
//! assert!(error.is_payload());
//! ```

use thiserror::Error;

/// Error type for live-provider adapter operations.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Request timed out.
    #[error("provider timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds.
        timeout_ms: Option<u64>,
    },

    /// Network or connection error.
    #[error("provider connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Non-success HTTP status from either protocol phase.
    #[error("provider returned status {code}: {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body, as far as it could be read.
        body: String,
    },

    /// Response body could not be parsed into the expected shape.
    #[error("provider response malformed: {message}")]
    Malformed {
        /// Error message.
        message: String,
    },

    /// Search phase succeeded but the payload carried no usable search id.
    #[error("provider search response missing searchId")]
    MissingSearchId,
}

impl ProviderError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with the configured duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a status error.
    #[must_use]
    pub fn status(code: u16, body: impl Into<String>) -> Self {
        Self::Status {
            code,
            body: body.into(),
        }
    }

    /// Creates a malformed-response error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Returns true for network-level failures: timeouts, connection
    /// errors, and non-success statuses.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Connection { .. } | Self::Status { .. }
        )
    }

    /// Returns true when the provider answered but the payload was
    /// unusable.
    #[must_use]
    pub fn is_payload(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::MissingSearchId)
    }

    /// Returns the HTTP status code, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type for provider adapter internals.
pub type ProviderResult<T> = Result<T, ProviderError>;
