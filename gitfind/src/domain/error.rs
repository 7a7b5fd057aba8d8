//! Lookup failure taxonomy.
//!
//! Both kinds are reported to the user through the
//! [`LookupNotifier`](crate::domain::ports::LookupNotifier) port; the
//! wrapped port error keeps transport and decode failures apart for logs.

use thiserror::Error;

use crate::domain::ports::ProfileSourceError;

/// Why a lookup produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The profile endpoint reported no matching profile.
    #[error("no profile found for '{identifier}'")]
    NotFound {
        /// Identifier exactly as it was looked up.
        identifier: String,
    },
    /// Either remote call failed in transport, status, or decoding.
    #[error("lookup failed: {0}")]
    Failed(#[from] ProfileSourceError),
}

impl LookupError {
    /// Convenience constructor for [`LookupError::NotFound`].
    #[must_use]
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }

    /// Return a stable category for log fields: `not_found`, or the kind of
    /// the wrapped port error.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Failed(cause) => cause.kind(),
        }
    }

    /// Return whether this is the not-found outcome.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
