//! Outbound adapters implementing domain ports for external services.
//!
//! - **github**: reqwest-backed `ProfileSource` against the GitHub REST API
//!
//! Adapters are thin translators that convert between domain types and
//! transport representations. They contain no lookup logic.

pub mod github;
