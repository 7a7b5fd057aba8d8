//! Monotonic tokens that order overlapping lookups.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence number captured when a lookup starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LookupToken(u64);

impl fmt::Display for LookupToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues lookup tokens and tells whether a token is still the newest.
///
/// Only the holder of the newest token may write lookup results; a response
/// that arrives after a newer lookup was issued is stale.
#[derive(Debug, Default)]
pub struct LookupSequence {
    latest: AtomicU64,
}

impl LookupSequence {
    /// Create a sequence that has not issued any token.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Issue the next token. The first token is `#1`.
    ///
    /// # Examples
    /// ```
    /// use gitfind::domain::LookupSequence;
    ///
    /// let sequence = LookupSequence::new();
    /// let first = sequence.issue();
    /// let second = sequence.issue();
    /// assert!(second > first);
    /// assert!(!sequence.is_current(first));
    /// assert!(sequence.is_current(second));
    /// ```
    pub fn issue(&self) -> LookupToken {
        LookupToken(self.latest.fetch_add(1, Ordering::SeqCst).saturating_add(1))
    }

    /// Return whether `token` is the most recently issued one.
    #[must_use]
    pub fn is_current(&self, token: LookupToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}
