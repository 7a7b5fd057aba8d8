//! State container for the last committed lookup.

use super::{ProfileRecord, SubResource, SubResourceId};

/// Last fetched profile and its ordered sub-resources.
///
/// ## Invariants
/// - Profile and sequence are replaced together by [`ResultStore::set_from_lookup`].
/// - Between lookups the sequence only shrinks, via
///   [`ResultStore::remove_sub_resource`].
/// - Nothing clears the profile except a newer successful lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultStore {
    profile: Option<ProfileRecord>,
    sub_resources: Vec<SubResource>,
}

impl ResultStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            profile: None,
            sub_resources: Vec::new(),
        }
    }

    /// Replace the stored profile and sub-resource sequence.
    pub fn set_from_lookup(&mut self, profile: ProfileRecord, sub_resources: Vec<SubResource>) {
        self.profile = Some(profile);
        self.sub_resources = sub_resources;
    }

    /// Drop every sub-resource whose id matches `id`.
    ///
    /// Returns `false` when nothing matched; that case is not an error.
    ///
    /// # Examples
    /// ```
    /// use gitfind::domain::{ResultStore, SubResourceId};
    ///
    /// let mut store = ResultStore::new();
    /// assert!(!store.remove_sub_resource(SubResourceId::new(99)));
    /// ```
    pub fn remove_sub_resource(&mut self, id: SubResourceId) -> bool {
        let before = self.sub_resources.len();
        self.sub_resources.retain(|entry| entry.id != id);
        self.sub_resources.len() != before
    }

    /// Return the stored profile, if a lookup has been committed.
    #[must_use]
    pub const fn profile(&self) -> Option<&ProfileRecord> {
        self.profile.as_ref()
    }

    /// Return the stored sub-resources in upstream order.
    #[must_use]
    pub fn sub_resources(&self) -> &[SubResource] {
        &self.sub_resources
    }

    /// Return whether no lookup has been committed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profile.is_none() && self.sub_resources.is_empty()
    }
}
