//! Fetch Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A fetch error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong
/// internally. Every variant names the source that failed, because a
/// two-source fetch fails as a whole and the operator needs to know which
/// sheet to look at.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source returned a non-success HTTP status.
    #[display("source '{source}' responded with {status}")]
    Status {
        /// Configured name of the failing source.
        #[error(not(source))]
        source: String,
        /// Status line, e.g. "500 Internal Server Error".
        status: String,
    },
    /// The request never completed: connection failure or timeout.
    #[display("source '{source}' unreachable")]
    Network {
        /// Configured name of the failing source.
        #[error(not(source))]
        source: String,
    },
    /// The response arrived but its body could not be read as text.
    #[display("source '{source}' returned an unreadable body")]
    Body {
        /// Configured name of the failing source.
        #[error(not(source))]
        source: String,
    },
    /// The HTTP client itself could not be constructed.
    #[display("failed to build HTTP client")]
    Client,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // No retry is attempted here; the hint is for callers, which own
        // retry policy (typically retry-on-user-action).
        match self {
            Self::Status { .. } | Self::Network { .. } => true,
            Self::Body { .. } | Self::Client => false,
        }
    }
}
