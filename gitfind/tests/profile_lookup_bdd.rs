//! Behavioural tests for the profile lookup flow.
//!
//! These scenarios drive the flow through its public operations against an
//! in-memory profile source, covering lookup, not-found, removal, and failure
//! handling.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gitfind::domain::ports::{LookupNotifier, ProfileSource, ProfileSourceError};
use gitfind::domain::{
    FlowOutcome, LookupError, ProfileLookupFlow, ProfileRecord, SubResource, SubResourceId,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tokio::runtime::Builder;

// ============================================================================
// Test doubles
// ============================================================================

/// Source that knows `octocat`, fails for `offline`, and finds nobody else.
#[derive(Default)]
struct InMemorySource {
    sub_resource_calls: Mutex<Vec<String>>,
}

#[async_trait]
impl ProfileSource for InMemorySource {
    async fn fetch_profile(
        &self,
        identifier: &str,
    ) -> Result<Option<ProfileRecord>, ProfileSourceError> {
        match identifier {
            "octocat" => Ok(Some(ProfileRecord {
                display_name: Some("The Octocat".to_owned()),
                login_name: "octocat".to_owned(),
                avatar_reference: "u.png".to_owned(),
                biography: None,
            })),
            "offline" => Err(ProfileSourceError::transport("network unreachable")),
            _ => Ok(None),
        }
    }

    async fn fetch_sub_resources(
        &self,
        identifier: &str,
    ) -> Result<Vec<SubResource>, ProfileSourceError> {
        self.sub_resource_calls
            .lock()
            .expect("calls mutex")
            .push(identifier.to_owned());
        Ok(vec![SubResource {
            id: SubResourceId::new(1),
            title: "Hello-World".to_owned(),
            description: Some("demo".to_owned()),
        }])
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<LookupError>>,
}

impl LookupNotifier for RecordingNotifier {
    fn notify(&self, error: &LookupError) {
        self.notices
            .lock()
            .expect("notices mutex")
            .push(error.clone());
    }
}

/// Flow plus handles on its collaborators.
#[derive(Clone)]
struct Harness {
    flow: Arc<ProfileLookupFlow>,
    source: Arc<InMemorySource>,
    notifier: Arc<RecordingNotifier>,
}

impl Harness {
    fn new() -> Self {
        let source = Arc::new(InMemorySource::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let flow = Arc::new(ProfileLookupFlow::new(source.clone(), notifier.clone()));
        Self {
            flow,
            source,
            notifier,
        }
    }

    fn notice_count(&self) -> usize {
        self.notifier.notices.lock().expect("notices mutex").len()
    }

    fn sub_resource_calls(&self) -> Vec<String> {
        self.source
            .sub_resource_calls
            .lock()
            .expect("calls mutex")
            .clone()
    }
}

/// Test world holding the flow under test and the last outcome.
#[derive(Default, ScenarioState)]
struct World {
    harness: Slot<Harness>,
    outcome: Slot<FlowOutcome>,
}

impl World {
    fn harness(&self) -> Harness {
        self.harness.get().expect("harness should be set")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a profile source that knows octocat")]
fn a_profile_source_that_knows_octocat(world: &World) {
    world.harness.set(Harness::new());
}

#[given("the identifier \"{identifier}\"")]
fn the_identifier(world: &World, identifier: String) {
    world.harness().flow.update_identifier(identifier);
}

#[given("an empty identifier")]
fn an_empty_identifier(world: &World) {
    world.harness().flow.update_identifier("");
}

// ============================================================================
// When steps
// ============================================================================

#[when("the lookup is triggered")]
fn the_lookup_is_triggered(world: &World) {
    let harness = world.harness();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime should initialize");
    let outcome = runtime.block_on(harness.flow.trigger_lookup());
    world.outcome.set(outcome);
}

#[when("repository {id:u64} is removed")]
fn repository_is_removed(world: &World, id: u64) {
    world
        .harness()
        .flow
        .remove_sub_resource(SubResourceId::new(id));
}

#[when("the identifier changes to \"{identifier}\"")]
fn the_identifier_changes_to(world: &World, identifier: String) {
    world.harness().flow.update_identifier(identifier);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the profile display name is \"{name}\"")]
fn the_profile_display_name_is(world: &World, name: String) {
    let view = world.harness().flow.view();
    let display_name = view
        .profile
        .and_then(|profile| profile.display_name)
        .expect("profile with display name should be committed");
    assert_eq!(display_name, name);
}

#[then("the repositories are \"{titles}\"")]
fn the_repositories_are(world: &World, titles: String) {
    let view = world.harness().flow.view();
    let actual = view
        .sub_resources
        .into_iter()
        .map(|entry| entry.title)
        .collect::<Vec<_>>()
        .join(", ");
    assert_eq!(actual, titles);
}

#[then("no repositories remain")]
fn no_repositories_remain(world: &World) {
    assert!(world.harness().flow.view().sub_resources.is_empty());
}

#[then("no notification was shown")]
fn no_notification_was_shown(world: &World) {
    assert_eq!(world.harness().notice_count(), 0);
}

#[then("exactly one notification was shown")]
fn exactly_one_notification_was_shown(world: &World) {
    assert_eq!(world.harness().notice_count(), 1);
    let outcome = world.outcome.get().expect("lookup outcome should be set");
    assert!(
        matches!(outcome, FlowOutcome::Notified { .. }),
        "last lookup should have notified: {outcome:?}",
    );
}

#[then("no profile is displayed")]
fn no_profile_is_displayed(world: &World) {
    assert!(world.harness().flow.view().profile.is_none());
}

#[then("the repository list was not requested")]
fn the_repository_list_was_not_requested(world: &World) {
    assert!(world.harness().sub_resource_calls().is_empty());
}

// ============================================================================
// Scenarios
// ============================================================================

#[scenario(
    path = "tests/features/profile_lookup.feature",
    name = "Looking up an existing profile"
)]
fn looking_up_an_existing_profile(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_lookup.feature",
    name = "Looking up an empty identifier"
)]
fn looking_up_an_empty_identifier(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_lookup.feature",
    name = "Removing a repository"
)]
fn removing_a_repository(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_lookup.feature",
    name = "Removing an unknown repository"
)]
fn removing_an_unknown_repository(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_lookup.feature",
    name = "Failing lookup keeps the previous profile"
)]
fn failing_lookup_keeps_the_previous_profile(world: World) {
    let _ = world;
}
