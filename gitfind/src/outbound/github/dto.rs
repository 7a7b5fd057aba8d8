//! DTOs for decoding GitHub REST JSON responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into domain
//! records in one pass. Required fields are enforced here so an unexpected
//! payload fails as a decode error instead of producing an empty record.

use serde::Deserialize;

use crate::domain::{ProfileRecord, SubResource, SubResourceId};

#[derive(Debug, Deserialize)]
pub(super) struct GitHubUserDto {
    pub(super) login: String,
    #[serde(default)]
    pub(super) name: Option<String>,
    pub(super) avatar_url: String,
    #[serde(default)]
    pub(super) bio: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GitHubRepositoryDto {
    pub(super) id: u64,
    pub(super) name: String,
    #[serde(default)]
    pub(super) description: Option<String>,
}

impl GitHubUserDto {
    pub(super) fn into_domain(self) -> ProfileRecord {
        ProfileRecord {
            display_name: self.name,
            login_name: self.login,
            avatar_reference: self.avatar_url,
            biography: self.bio,
        }
    }
}

impl GitHubRepositoryDto {
    pub(super) fn into_domain(self) -> SubResource {
        SubResource {
            id: SubResourceId::new(self.id),
            title: self.name,
            description: self.description,
        }
    }
}
