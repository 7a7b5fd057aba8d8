//! Profile lookup flow: the state container the presentation layer drives.
//!
//! The flow owns the identifier being typed, the last committed result, and
//! the lookup token sequence. Presentation code reads snapshots through
//! [`ProfileLookupFlow::view`] and mutates state only through the operations
//! defined here.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use super::lookup_service::{LookupOutcome, ProfileLookupService};
use crate::domain::ports::{LookupNotifier, ProfileSource};
use crate::domain::{
    IdentifierInput, LookupError, LookupSequence, LookupToken, ProfileRecord, ResultStore,
    SubResource, SubResourceId,
};

/// Snapshot handed to the presentation surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupView {
    /// Identifier currently held by the input.
    pub identifier: String,
    /// Last committed profile, if any.
    pub profile: Option<ProfileRecord>,
    /// Remaining sub-resources of the last committed lookup.
    pub sub_resources: Vec<SubResource>,
}

/// How a triggered lookup ended from the flow's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The result was written to the store.
    Committed {
        /// Token the committed lookup ran under.
        token: LookupToken,
    },
    /// The lookup failed and the user was notified; the store is unchanged.
    Notified {
        /// Token the failed lookup ran under.
        token: LookupToken,
        /// Failure reported to the notifier.
        error: LookupError,
    },
    /// A newer lookup was issued before this one finished; its result was
    /// discarded without touching the store or notifying.
    Superseded {
        /// Token of the discarded lookup.
        token: LookupToken,
    },
}

impl FlowOutcome {
    /// Return whether the lookup wrote to the store.
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

/// Explicit state container for the lookup flow.
pub struct ProfileLookupFlow {
    service: ProfileLookupService,
    notifier: Arc<dyn LookupNotifier>,
    identifier: Mutex<IdentifierInput>,
    store: Mutex<ResultStore>,
    sequence: LookupSequence,
}

impl ProfileLookupFlow {
    /// Build a flow with an empty identifier and an empty store.
    /// ```rust,ignore
    /// let flow = ProfileLookupFlow::new(source, notifier);
    /// assert!(flow.view().profile.is_none());
    /// ```
    #[must_use]
    pub fn new(source: Arc<dyn ProfileSource>, notifier: Arc<dyn LookupNotifier>) -> Self {
        Self {
            service: ProfileLookupService::new(source),
            notifier,
            identifier: Mutex::new(IdentifierInput::new()),
            store: Mutex::new(ResultStore::new()),
            sequence: LookupSequence::new(),
        }
    }

    /// Return the identifier currently held.
    #[must_use]
    pub fn identifier(&self) -> String {
        lock(&self.identifier).value().to_owned()
    }

    /// Overwrite the held identifier.
    pub fn update_identifier(&self, next: impl Into<String>) {
        lock(&self.identifier).update(next);
    }

    /// Look up the held identifier and commit the result if still current.
    ///
    /// Failures are reported to the notifier exactly once and leave the store
    /// as it was, including any previously displayed profile. Results of a
    /// lookup that was overtaken by a newer one are dropped.
    pub async fn trigger_lookup(&self) -> FlowOutcome {
        let identifier = self.identifier();
        let token = self.sequence.issue();
        debug!(%token, identifier = identifier.as_str(), "lookup issued");

        let result = self.service.lookup(&identifier).await;
        self.settle(token, &identifier, result)
    }

    fn settle(
        &self,
        token: LookupToken,
        identifier: &str,
        result: Result<LookupOutcome, LookupError>,
    ) -> FlowOutcome {
        // Staleness check and commit happen under one store lock.
        let mut store = lock(&self.store);
        if !self.sequence.is_current(token) {
            warn!(%token, identifier, "discarding stale lookup result");
            return FlowOutcome::Superseded { token };
        }

        match result {
            Ok(LookupOutcome {
                profile,
                sub_resources,
            }) => {
                debug!(
                    %token,
                    identifier,
                    sub_resource_count = sub_resources.len(),
                    replaced_previous = !store.is_empty(),
                    "lookup committed"
                );
                store.set_from_lookup(profile, sub_resources);
                FlowOutcome::Committed { token }
            }
            Err(error) => {
                drop(store);
                warn!(%token, identifier, kind = error.kind(), %error, "lookup failed");
                self.notifier.notify(&error);
                FlowOutcome::Notified { token, error }
            }
        }
    }

    /// Remove a sub-resource from the committed result.
    ///
    /// Returns `false` when `id` was not present.
    pub fn remove_sub_resource(&self, id: SubResourceId) -> bool {
        let removed = lock(&self.store).remove_sub_resource(id);
        debug!(%id, removed, "sub-resource removal requested");
        removed
    }

    /// Return a snapshot of the identifier and the committed result.
    #[must_use]
    pub fn view(&self) -> LookupView {
        let identifier = self.identifier();
        let store = lock(&self.store);
        LookupView {
            identifier,
            profile: store.profile().cloned(),
            sub_resources: store.sub_resources().to_vec(),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[path = "lookup_flow_tests.rs"]
mod tests;
