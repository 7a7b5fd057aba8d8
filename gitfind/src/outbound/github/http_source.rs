//! Reqwest-backed GitHub profile source adapter.
//!
//! This adapter owns transport details only: endpoint construction, request
//! headers, timeout and HTTP status mapping, and JSON decoding into domain
//! records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url, header::HeaderMap};
use tracing::debug;

use super::dto::{GitHubRepositoryDto, GitHubUserDto};
use crate::domain::ports::{ProfileSource, ProfileSourceError};
use crate::domain::{ProfileRecord, SubResource};

/// User agent sent when none is configured. GitHub rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = concat!("gitfind/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Outbound identity settings for GitHub requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubHttpIdentity {
    /// HTTP user-agent sent to GitHub.
    pub user_agent: String,
}

impl Default for GitHubHttpIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// Profile source adapter performing HTTP GET requests against the GitHub API.
pub struct GitHubHttpSource {
    client: Client,
    base_url: Url,
    user_agent: String,
}

impl GitHubHttpSource {
    /// Build an adapter with an explicit outbound identity.
    /// ```rust,ignore
    /// let source = GitHubHttpSource::with_identity(base_url, timeout, identity);
    /// assert!(source.is_ok() || source.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        base_url: Url,
        timeout: Duration,
        identity: GitHubHttpIdentity,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            user_agent: identity.user_agent,
        })
    }

    async fn get(&self, url: Url) -> Result<FetchedBody, ProfileSourceError> {
        debug!(%url, "requesting GitHub resource");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, GITHUB_JSON_MEDIA_TYPE)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let rate_limit_exhausted = rate_limit_exhausted(response.headers());
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(status = status.as_u16(), bytes = body.len(), "GitHub responded");
        Ok(FetchedBody {
            status,
            rate_limit_exhausted,
            body: body.to_vec(),
        })
    }
}

struct FetchedBody {
    status: StatusCode,
    rate_limit_exhausted: bool,
    body: Vec<u8>,
}

#[async_trait]
impl ProfileSource for GitHubHttpSource {
    async fn fetch_profile(
        &self,
        identifier: &str,
    ) -> Result<Option<ProfileRecord>, ProfileSourceError> {
        let url = user_endpoint(&self.base_url, identifier, None)?;
        let fetched = self.get(url).await?;
        interpret_profile_response(fetched.status, fetched.rate_limit_exhausted, &fetched.body)
    }

    async fn fetch_sub_resources(
        &self,
        identifier: &str,
    ) -> Result<Vec<SubResource>, ProfileSourceError> {
        let url = user_endpoint(&self.base_url, identifier, Some("repos"))?;
        let fetched = self.get(url).await?;
        interpret_sub_resource_response(fetched.status, fetched.rate_limit_exhausted, &fetched.body)
    }
}

fn user_endpoint(
    base_url: &Url,
    identifier: &str,
    trailing: Option<&str>,
) -> Result<Url, ProfileSourceError> {
    let mut url = base_url.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|()| {
            ProfileSourceError::invalid_request(format!(
                "base URL '{base_url}' cannot carry path segments"
            ))
        })?;
        segments.pop_if_empty().push("users").push(identifier);
        if let Some(segment) = trailing {
            segments.push(segment);
        }
    }
    Ok(url)
}

/// Map a profile endpoint response to the port contract.
///
/// A 404 means the login does not exist. Every other non-success status is a
/// failure.
fn interpret_profile_response(
    status: StatusCode,
    rate_limit_exhausted: bool,
    body: &[u8],
) -> Result<Option<ProfileRecord>, ProfileSourceError> {
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(map_status_error(status, rate_limit_exhausted, body));
    }
    parse_profile(body)
}

/// Map a repositories endpoint response to the port contract.
///
/// Unlike the profile endpoint, a 404 here is a failure: the profile was
/// already found, so a missing list is not an empty one.
fn interpret_sub_resource_response(
    status: StatusCode,
    rate_limit_exhausted: bool,
    body: &[u8],
) -> Result<Vec<SubResource>, ProfileSourceError> {
    if !status.is_success() {
        return Err(map_status_error(status, rate_limit_exhausted, body));
    }
    parse_sub_resources(body)
}

/// Decode a successful profile body.
///
/// Only an empty body, a whitespace-only body, or JSON `null` count as "no
/// profile". Other falsy JSON such as `false`, `0`, or `""` does not match the
/// user schema and fails to decode.
fn parse_profile(body: &[u8]) -> Result<Option<ProfileRecord>, ProfileSourceError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let decoded: Option<GitHubUserDto> = serde_json::from_slice(body).map_err(|error| {
        ProfileSourceError::decode(format!("invalid profile JSON payload: {error}"))
    })?;
    Ok(decoded.map(GitHubUserDto::into_domain))
}

fn parse_sub_resources(body: &[u8]) -> Result<Vec<SubResource>, ProfileSourceError> {
    let decoded: Vec<GitHubRepositoryDto> = serde_json::from_slice(body).map_err(|error| {
        ProfileSourceError::decode(format!("invalid repository list JSON payload: {error}"))
    })?;
    Ok(decoded
        .into_iter()
        .map(GitHubRepositoryDto::into_domain)
        .collect())
}

fn rate_limit_exhausted(headers: &HeaderMap) -> bool {
    headers
        .get(RATE_LIMIT_REMAINING_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|remaining| remaining.trim() == "0")
}

fn map_transport_error(error: reqwest::Error) -> ProfileSourceError {
    if error.is_timeout() {
        ProfileSourceError::timeout(error.to_string())
    } else {
        ProfileSourceError::transport(error.to_string())
    }
}

fn map_status_error(
    status: StatusCode,
    rate_limit_exhausted: bool,
    body: &[u8],
) -> ProfileSourceError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => ProfileSourceError::rate_limited(message),
        StatusCode::FORBIDDEN if rate_limit_exhausted => ProfileSourceError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            ProfileSourceError::timeout(message)
        }
        _ if status.is_client_error() => ProfileSourceError::rejected(status.as_u16(), body_preview),
        _ => ProfileSourceError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
