//! GitHub outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `ProfileSource`
//! port backed by the GitHub REST API.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_USER_AGENT, GitHubHttpIdentity, GitHubHttpSource};
