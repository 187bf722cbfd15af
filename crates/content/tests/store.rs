//! Behavior tests for the snapshot cache store.
//!
//! Driven through scripted in-memory sources so timing and failures are
//! deterministic; the mock source runs with its instant profile.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};

use geduc_content::source::generate_fixtures;
use geduc_content::{
    CollectionPayload, ContentSource, ContentStore, FetchError, MockConfig, MockSource, TtlPolicy,
};
use geduc_core::{Collection, Partner, PartnerCategory, PartnerId};

fn partner(name: &str, featured: bool) -> Partner {
    Partner {
        id: PartnerId::generate(),
        name: name.to_string(),
        logo: String::new(),
        website: None,
        description: None,
        category: PartnerCategory::Educational,
        featured,
    }
}

fn empty_payload(collection: Collection) -> CollectionPayload {
    match collection {
        Collection::TeamMembers => CollectionPayload::TeamMembers(vec![]),
        Collection::Initiatives => CollectionPayload::Initiatives(vec![]),
        Collection::Testimonials => CollectionPayload::Testimonials(vec![]),
        Collection::FaqItems => CollectionPayload::FaqItems(vec![]),
        Collection::FeaturedMedia => CollectionPayload::FeaturedMedia(vec![]),
        Collection::Partners => CollectionPayload::Partners(vec![]),
    }
}

/// One scripted response for the partners collection.
struct Step {
    delay: Duration,
    result: Result<Vec<Partner>, ()>,
}

impl Step {
    fn ok(delay_ms: u64, partners: Vec<Partner>) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            result: Ok(partners),
        }
    }

    fn fail() -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(()),
        }
    }
}

/// Source that replays scripted responses for `Partners` and returns
/// empty batches for everything else.
struct ScriptedSource {
    steps: Mutex<VecDeque<Step>>,
}

impl ScriptedSource {
    fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
        }
    }
}

#[async_trait]
impl ContentSource for ScriptedSource {
    async fn fetch(&self, collection: Collection) -> Result<CollectionPayload, FetchError> {
        if collection != Collection::Partners {
            return Ok(empty_payload(collection));
        }

        let step = self.steps.lock().unwrap().pop_front().expect("script ran dry");
        if !step.delay.is_zero() {
            tokio::time::sleep(step.delay).await;
        }
        step.result
            .map(CollectionPayload::Partners)
            .map_err(|()| FetchError::Simulated)
    }
}

/// Per-collection fetch counters, shared between a test and its source.
#[derive(Clone, Default)]
struct FetchCounts(Arc<[AtomicUsize; Collection::COUNT]>);

impl FetchCounts {
    fn get(&self, collection: Collection) -> usize {
        self.0[collection.index()].load(Ordering::SeqCst)
    }

    fn bump(&self, collection: Collection) {
        self.0[collection.index()].fetch_add(1, Ordering::SeqCst);
    }
}

/// Instant mock source that counts fetches per collection.
struct CountingSource {
    inner: MockSource,
    counts: FetchCounts,
}

impl CountingSource {
    fn new(counts: FetchCounts) -> Self {
        Self {
            inner: MockSource::new(MockConfig::instant()),
            counts,
        }
    }
}

#[async_trait]
impl ContentSource for CountingSource {
    async fn fetch(&self, collection: Collection) -> Result<CollectionPayload, FetchError> {
        self.counts.bump(collection);
        self.inner.fetch(collection).await
    }
}

fn mock_store() -> ContentStore {
    ContentStore::new(
        Box::new(MockSource::new(MockConfig::instant())),
        TtlPolicy::default(),
    )
}

// =============================================================================
// Load
// =============================================================================

#[tokio::test]
async fn load_populates_snapshot() {
    let store = mock_store();
    store.load(Collection::TeamMembers).await;

    let state = store.state();
    assert_eq!(
        state.team_members.items.len(),
        MockConfig::instant().sizes.team_members
    );
    assert!(!state.team_members.loading);
    assert!(state.team_members.error.is_none());
    assert!(state.team_members.last_fetched_at.is_some());

    // Untouched collections stay at their initial snapshot
    assert!(state.partners.items.is_empty());
    assert!(state.partners.last_fetched_at.is_none());
}

#[tokio::test]
async fn failed_load_keeps_previous_items() {
    let source = ScriptedSource::new(vec![
        Step::ok(0, vec![partner("Fundação Lemann", true)]),
        Step::fail(),
    ]);
    let store = ContentStore::new(Box::new(source), TtlPolicy::default());

    store.load(Collection::Partners).await;
    let before = store.state().partners;
    assert_eq!(before.items.len(), 1);

    store.load(Collection::Partners).await;
    let after = store.state().partners;

    assert_eq!(after.items, before.items, "items must survive a failed refresh");
    assert_eq!(after.last_fetched_at, before.last_fetched_at);
    assert_eq!(after.error.as_deref(), Some("simulated network error"));
    assert!(!after.loading);
}

#[tokio::test]
async fn next_attempt_clears_previous_error() {
    let source = ScriptedSource::new(vec![
        Step::fail(),
        Step::ok(0, vec![partner("Unesco Brasil", false)]),
    ]);
    let store = ContentStore::new(Box::new(source), TtlPolicy::default());

    store.load(Collection::Partners).await;
    assert!(store.state().partners.error.is_some());

    store.load(Collection::Partners).await;
    let snapshot = store.state().partners;
    assert!(snapshot.error.is_none());
    assert_eq!(snapshot.items.len(), 1);
}

#[tokio::test]
async fn load_all_settles_even_when_every_collection_fails() {
    let store = ContentStore::new(
        Box::new(MockSource::new(MockConfig {
            delay: None,
            error_rate: 1.0,
            ..MockConfig::default()
        })),
        TtlPolicy::default(),
    );

    store.load_all().await;

    let state = store.state();
    assert!(!state.is_loading());
    assert!(state.has_errors());
    assert_eq!(state.errors().len(), Collection::COUNT);
    for collection in Collection::ALL {
        assert_eq!(state.item_count(collection), 0);
        assert!(state.last_fetched_at(collection).is_none());
    }
}

#[tokio::test]
async fn load_all_populates_every_collection() {
    let store = mock_store();
    store.load_all().await;

    let state = store.state();
    let sizes = MockConfig::instant().sizes;
    for collection in Collection::ALL {
        assert_eq!(state.item_count(collection), sizes.size(collection));
        assert!(state.last_fetched_at(collection).is_some());
        assert!(state.error(collection).is_none());
    }
}

// =============================================================================
// Overlapping loads
// =============================================================================

#[tokio::test]
async fn most_recently_initiated_load_wins() {
    let source = ScriptedSource::new(vec![
        Step::ok(80, vec![partner("slow-superseded", false)]),
        Step::ok(10, vec![partner("fast-latest", false)]),
    ]);
    let store = ContentStore::new(Box::new(source), TtlPolicy::default());

    // Both loads overlap; the second is initiated after the first.
    tokio::join!(store.load(Collection::Partners), store.load(Collection::Partners));

    let snapshot = store.state().partners;
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(
        snapshot.items[0].name, "fast-latest",
        "the slower superseded response must be discarded"
    );
    assert!(!snapshot.loading);

    // Give the slow response time to (wrongly) land, then re-check.
    tokio::time::sleep(Duration::from_millis(120)).await;
    assert_eq!(store.state().partners.items[0].name, "fast-latest");
}

#[tokio::test]
async fn clear_discards_in_flight_results() {
    let source = ScriptedSource::new(vec![Step::ok(50, vec![partner("stale", false)])]);
    let store = ContentStore::new(Box::new(source), TtlPolicy::default());

    let pending = {
        let store = store.clone();
        tokio::spawn(async move { store.load(Collection::Partners).await })
    };
    // Let the load mark itself in flight, then clear underneath it.
    tokio::time::sleep(Duration::from_millis(10)).await;
    store.clear();

    pending.await.unwrap();

    let state = store.state();
    assert!(state.partners.items.is_empty(), "cleared data must not resurrect");
    assert!(state.partners.last_fetched_at.is_none());
}

// =============================================================================
// Staleness refresh
// =============================================================================

#[tokio::test]
async fn refresh_reloads_only_stale_fetched_collections() {
    let counts = FetchCounts::default();
    let store = ContentStore::new(
        Box::new(CountingSource::new(counts.clone())),
        TtlPolicy::uniform(Duration::ZERO),
    );

    store.load(Collection::TeamMembers).await;
    assert_eq!(counts.get(Collection::TeamMembers), 1);

    // Everything fetched is instantly stale under a zero TTL; everything
    // never fetched must stay untouched.
    let refreshed = store.refresh_if_needed(Utc::now() + TimeDelta::seconds(1)).await;
    assert_eq!(refreshed, vec![Collection::TeamMembers]);
    assert_eq!(counts.get(Collection::TeamMembers), 2);
    for collection in Collection::ALL {
        if collection != Collection::TeamMembers {
            assert_eq!(counts.get(collection), 0, "{collection} was never fetched");
        }
    }
}

#[tokio::test]
async fn refresh_skips_fresh_collections() {
    let store = ContentStore::new(
        Box::new(MockSource::new(MockConfig::instant())),
        TtlPolicy::uniform(Duration::from_secs(3600)),
    );

    store.load_all().await;
    let refreshed = store.refresh_if_needed(Utc::now()).await;
    assert!(refreshed.is_empty());
}

// =============================================================================
// Clear
// =============================================================================

#[tokio::test]
async fn clear_resets_every_collection() {
    let store = mock_store();
    store.load_all().await;
    store.clear();

    let state = store.state();
    for collection in Collection::ALL {
        assert_eq!(state.item_count(collection), 0);
        assert!(!state.loading(collection));
        assert!(state.error(collection).is_none());
        assert!(state.last_fetched_at(collection).is_none());
    }
}

// =============================================================================
// Views & observers
// =============================================================================

#[tokio::test]
async fn featured_views_match_snapshot_filter() {
    let store = mock_store();
    store.load_all().await;

    let state = store.state();
    let expected: Vec<_> = state
        .team_members
        .items
        .iter()
        .filter(|m| m.featured)
        .collect();
    let view: Vec<_> = state.featured_team_members().collect();
    assert_eq!(view, expected);

    assert!(state.featured_media_item().is_some());
}

#[tokio::test]
async fn subscribers_observe_settled_loads() {
    let store = mock_store();
    let mut receiver = store.subscribe();
    receiver.mark_unchanged();

    store.load(Collection::Partners).await;

    assert!(receiver.has_changed().unwrap());
    let state = receiver.borrow_and_update().clone();
    assert!(state.partners.last_fetched_at.is_some());
}

// =============================================================================
// Sweep lifecycle
// =============================================================================

#[tokio::test]
async fn sweep_guard_stops_the_task_on_drop() {
    let counts = FetchCounts::default();
    let store = ContentStore::new(
        Box::new(CountingSource::new(counts.clone())),
        TtlPolicy::uniform(Duration::ZERO),
    );

    store.load(Collection::Partners).await;
    let fetched_once = counts.get(Collection::Partners);

    let guard = store.spawn_sweep(Duration::from_millis(20));
    tokio::time::sleep(Duration::from_millis(70)).await;
    assert!(
        counts.get(Collection::Partners) > fetched_once,
        "sweep must refresh stale collections"
    );

    drop(guard);
    tokio::time::sleep(Duration::from_millis(30)).await;
    let after_drop = counts.get(Collection::Partners);
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(
        counts.get(Collection::Partners),
        after_drop,
        "dropping the guard must stop the sweep"
    );
}

// =============================================================================
// Fixture generation (seeded)
// =============================================================================

#[test]
fn seeded_fixture_generation_is_usable_for_samples() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let mut rng = StdRng::seed_from_u64(42);
    let payload = generate_fixtures(Collection::Testimonials, 4, &mut rng);
    assert_eq!(payload.collection(), Collection::Testimonials);
    assert_eq!(payload.len(), 4);
}
