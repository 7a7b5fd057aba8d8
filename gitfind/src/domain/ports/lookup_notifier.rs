//! Driven port for telling the user that a lookup did not succeed.

use crate::domain::LookupError;

/// Receives one notification per failed lookup that was still current.
#[cfg_attr(test, mockall::automock)]
pub trait LookupNotifier: Send + Sync {
    /// Surface `error` to the user.
    fn notify(&self, error: &LookupError);
}
