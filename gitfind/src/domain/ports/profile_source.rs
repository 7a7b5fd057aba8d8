//! Driven port for fetching a profile and its sub-resources.
//!
//! The domain owns the record shapes and the error taxonomy so the lookup
//! service can stay adapter-agnostic.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{ProfileRecord, SubResource};

define_port_error! {
    /// Errors surfaced while calling the remote profile source.
    pub enum ProfileSourceError {
        /// Network transport failed before a usable response arrived.
        Transport {
            /// Transport failure detail.
            message: String
        } => "profile source transport failed: {message}",
        /// The remote call exceeded its timeout.
        Timeout {
            /// Timeout detail.
            message: String
        } => "profile source timeout: {message}",
        /// The remote service rate-limited the request.
        RateLimited {
            /// Rate-limit detail.
            message: String
        } => "profile source rate limited request: {message}",
        /// The remote service answered with a non-success status.
        Rejected {
            /// HTTP status code returned upstream.
            status: u16,
            /// Response body preview.
            message: String
        } => "profile source rejected request with status {status}: {message}",
        /// The response body did not match the expected schema.
        Decode {
            /// Decoder detail.
            message: String
        } => "profile source response decode failed: {message}",
        /// The adapter could not build the request.
        InvalidRequest {
            /// Reason the request was rejected locally.
            message: String
        } => "profile source request invalid: {message}",
    }
}

impl ProfileSourceError {
    /// Return whether the failure came from decoding rather than transport.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Port for the two remote calls a lookup makes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch the profile keyed by `identifier`.
    ///
    /// Returns `Ok(None)` when the remote side reports no matching profile.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use gitfind::domain::ports::ProfileSource;
    ///
    /// let profile = source.fetch_profile("octocat").await?;
    /// assert!(profile.is_some());
    /// # Ok::<(), gitfind::domain::ports::ProfileSourceError>(())
    /// ```
    async fn fetch_profile(
        &self,
        identifier: &str,
    ) -> Result<Option<ProfileRecord>, ProfileSourceError>;

    /// Fetch the ordered sub-resources associated with `identifier`.
    async fn fetch_sub_resources(
        &self,
        identifier: &str,
    ) -> Result<Vec<SubResource>, ProfileSourceError>;
}
