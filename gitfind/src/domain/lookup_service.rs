//! Remote profile fetcher.
//!
//! A lookup is two sequential calls through the [`ProfileSource`] port: the
//! profile first, then its sub-resources. The second call is only issued when
//! the first one found a profile.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::ProfileSource;
use crate::domain::{LookupError, ProfileRecord, SubResource};

/// Successful lookup payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    /// Profile decoded from the first call.
    pub profile: ProfileRecord,
    /// Sub-resources decoded from the second call, in upstream order.
    pub sub_resources: Vec<SubResource>,
}

/// Domain service performing the two-step lookup.
#[derive(Clone)]
pub struct ProfileLookupService {
    source: Arc<dyn ProfileSource>,
}

impl ProfileLookupService {
    /// Create a service calling out through `source`.
    #[must_use]
    pub fn new(source: Arc<dyn ProfileSource>) -> Self {
        Self { source }
    }

    /// Look up `identifier` and its sub-resources.
    ///
    /// The identifier is forwarded untouched, including when it is empty.
    /// ```rust,ignore
    /// let outcome = service.lookup("octocat").await?;
    /// assert_eq!(outcome.profile.login_name, "octocat");
    /// # Ok::<(), gitfind::domain::LookupError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] when the source has no profile for
    /// `identifier`, and [`LookupError::Failed`] when either call fails.
    pub async fn lookup(&self, identifier: &str) -> Result<LookupOutcome, LookupError> {
        let Some(profile) = self.source.fetch_profile(identifier).await? else {
            debug!(identifier, "profile source reported no match");
            return Err(LookupError::not_found(identifier));
        };

        let sub_resources = self.source.fetch_sub_resources(identifier).await?;
        debug!(
            identifier,
            sub_resource_count = sub_resources.len(),
            "lookup fetched profile and sub-resources"
        );
        Ok(LookupOutcome {
            profile,
            sub_resources,
        })
    }
}
