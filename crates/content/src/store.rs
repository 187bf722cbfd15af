//! In-memory snapshot cache store.
//!
//! Owns one [`Snapshot`] per collection and serializes all mutations
//! through a `watch` channel: `loading` flips synchronously before the
//! fetch suspends, and the final success/failure write lands in a single
//! turn after it resolves. Fetch failures are contained per collection as
//! snapshot errors; bulk operations always settle.
//!
//! Overlapping loads for the same collection are resolved with a
//! per-collection sequence number: the most recently *initiated* load
//! wins, and a slower superseded fetch is discarded when it completes
//! instead of overwriting newer data.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use geduc_core::{
    Collection, FaqItem, FeaturedMedia, Initiative, Partner, Snapshot, TeamMember, Testimonial,
};

use crate::source::{CollectionPayload, ContentSource};
use crate::staleness::{TtlPolicy, stale_collections};

/// The cached state of every collection.
///
/// This is the shape the consuming layer reads; see [`crate::views`] for
/// the derived projections over it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentState {
    pub team_members: Snapshot<TeamMember>,
    pub initiatives: Snapshot<Initiative>,
    pub testimonials: Snapshot<Testimonial>,
    pub faq_items: Snapshot<FaqItem>,
    pub featured_media: Snapshot<FeaturedMedia>,
    pub partners: Snapshot<Partner>,
}

impl ContentState {
    /// Whether a load is in flight for `collection`.
    #[must_use]
    pub const fn loading(&self, collection: Collection) -> bool {
        match collection {
            Collection::TeamMembers => self.team_members.loading,
            Collection::Initiatives => self.initiatives.loading,
            Collection::Testimonials => self.testimonials.loading,
            Collection::FaqItems => self.faq_items.loading,
            Collection::FeaturedMedia => self.featured_media.loading,
            Collection::Partners => self.partners.loading,
        }
    }

    /// The last fetch error for `collection`, if any.
    #[must_use]
    pub fn error(&self, collection: Collection) -> Option<&str> {
        match collection {
            Collection::TeamMembers => self.team_members.error.as_deref(),
            Collection::Initiatives => self.initiatives.error.as_deref(),
            Collection::Testimonials => self.testimonials.error.as_deref(),
            Collection::FaqItems => self.faq_items.error.as_deref(),
            Collection::FeaturedMedia => self.featured_media.error.as_deref(),
            Collection::Partners => self.partners.error.as_deref(),
        }
    }

    /// When `collection` was last fetched successfully, if ever.
    #[must_use]
    pub const fn last_fetched_at(&self, collection: Collection) -> Option<DateTime<Utc>> {
        match collection {
            Collection::TeamMembers => self.team_members.last_fetched_at,
            Collection::Initiatives => self.initiatives.last_fetched_at,
            Collection::Testimonials => self.testimonials.last_fetched_at,
            Collection::FaqItems => self.faq_items.last_fetched_at,
            Collection::FeaturedMedia => self.featured_media.last_fetched_at,
            Collection::Partners => self.partners.last_fetched_at,
        }
    }

    /// Override the fetch timestamp for `collection`.
    ///
    /// Intended for tests that hand-build states for the staleness check.
    pub fn set_last_fetched_at(
        &mut self,
        collection: Collection,
        fetched: Option<DateTime<Utc>>,
    ) {
        match collection {
            Collection::TeamMembers => self.team_members.last_fetched_at = fetched,
            Collection::Initiatives => self.initiatives.last_fetched_at = fetched,
            Collection::Testimonials => self.testimonials.last_fetched_at = fetched,
            Collection::FaqItems => self.faq_items.last_fetched_at = fetched,
            Collection::FeaturedMedia => self.featured_media.last_fetched_at = fetched,
            Collection::Partners => self.partners.last_fetched_at = fetched,
        }
    }

    /// Number of cached items for `collection`.
    #[must_use]
    pub fn item_count(&self, collection: Collection) -> usize {
        match collection {
            Collection::TeamMembers => self.team_members.items.len(),
            Collection::Initiatives => self.initiatives.items.len(),
            Collection::Testimonials => self.testimonials.items.len(),
            Collection::FaqItems => self.faq_items.items.len(),
            Collection::FeaturedMedia => self.featured_media.items.len(),
            Collection::Partners => self.partners.items.len(),
        }
    }

    fn begin_load(&mut self, collection: Collection) {
        match collection {
            Collection::TeamMembers => self.team_members.begin_load(),
            Collection::Initiatives => self.initiatives.begin_load(),
            Collection::Testimonials => self.testimonials.begin_load(),
            Collection::FaqItems => self.faq_items.begin_load(),
            Collection::FeaturedMedia => self.featured_media.begin_load(),
            Collection::Partners => self.partners.begin_load(),
        }
    }

    fn fail(&mut self, collection: Collection, message: String) {
        match collection {
            Collection::TeamMembers => self.team_members.fail(message),
            Collection::Initiatives => self.initiatives.fail(message),
            Collection::Testimonials => self.testimonials.fail(message),
            Collection::FaqItems => self.faq_items.fail(message),
            Collection::FeaturedMedia => self.featured_media.fail(message),
            Collection::Partners => self.partners.fail(message),
        }
    }

    fn apply(&mut self, payload: CollectionPayload, now: DateTime<Utc>) {
        match payload {
            CollectionPayload::TeamMembers(items) => self.team_members.complete(items, now),
            CollectionPayload::Initiatives(items) => self.initiatives.complete(items, now),
            CollectionPayload::Testimonials(items) => self.testimonials.complete(items, now),
            CollectionPayload::FaqItems(items) => self.faq_items.complete(items, now),
            CollectionPayload::FeaturedMedia(items) => self.featured_media.complete(items, now),
            CollectionPayload::Partners(items) => self.partners.complete(items, now),
        }
    }
}

/// The snapshot cache store.
///
/// Explicitly constructed (no global instance) and cheaply cloneable via
/// `Arc`; all mutation goes through [`load`](Self::load) and friends,
/// readers use [`state`](Self::state) or [`subscribe`](Self::subscribe).
#[derive(Clone)]
pub struct ContentStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    source: Box<dyn ContentSource>,
    ttl: TtlPolicy,
    state: watch::Sender<ContentState>,
    sequences: [AtomicU64; Collection::COUNT],
}

impl ContentStore {
    /// Create a store over `source` with the given staleness policy.
    #[must_use]
    pub fn new(source: Box<dyn ContentSource>, ttl: TtlPolicy) -> Self {
        let (state, _) = watch::channel(ContentState::default());
        Self {
            inner: Arc::new(StoreInner {
                source,
                ttl,
                state,
                sequences: Default::default(),
            }),
        }
    }

    /// A clone of the current state.
    #[must_use]
    pub fn state(&self) -> ContentState {
        self.inner.state.borrow().clone()
    }

    /// Register an observer; the receiver yields the state after every
    /// settled mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ContentState> {
        self.inner.state.subscribe()
    }

    /// The staleness policy this store sweeps with.
    #[must_use]
    pub fn ttl_policy(&self) -> &TtlPolicy {
        &self.inner.ttl
    }

    /// Load one collection from the source.
    ///
    /// Marks the collection loading before the fetch suspends; on success
    /// replaces its items and stamps the fetch time, on failure records
    /// the error and keeps the previous items. Errors are never returned
    /// to the caller. If a newer load for the same collection was
    /// initiated while this one was in flight, the result is discarded.
    pub async fn load(&self, collection: Collection) {
        let sequence = self.issue_sequence(collection);
        debug!(%collection, sequence, "loading collection");
        self.inner
            .state
            .send_modify(|state| state.begin_load(collection));

        let result = self.inner.source.fetch(collection).await;

        let now = Utc::now();
        let inner = &self.inner;
        inner.state.send_modify(|state| {
            // Checked inside the mutation so a concurrent load cannot
            // slip between the check and the write.
            if inner.latest_sequence(collection) != sequence {
                debug!(%collection, sequence, "discarding superseded load result");
                return;
            }

            match result {
                Ok(payload) => {
                    info!(%collection, count = payload.len(), "collection loaded");
                    state.apply(payload, now);
                }
                Err(error) => {
                    warn!(%collection, %error, "collection load failed");
                    state.fail(collection, error.to_string());
                }
            }
        });
    }

    /// Load every collection concurrently; settles even if some fail.
    pub async fn load_all(&self) {
        info!("loading all collections");
        join_all(Collection::ALL.into_iter().map(|c| self.load(c))).await;
    }

    /// Re-load the collections whose cached data has outlived its TTL.
    ///
    /// Never-fetched collections are not eligible. Returns the set of
    /// collections that were refreshed.
    pub async fn refresh_if_needed(&self, now: DateTime<Utc>) -> Vec<Collection> {
        let stale = {
            let state = self.inner.state.borrow();
            stale_collections(&state, &self.inner.ttl, now)
        };

        if !stale.is_empty() {
            debug!(collections = ?stale, "refreshing stale collections");
            join_all(stale.iter().map(|&c| self.load(c))).await;
        }
        stale
    }

    /// Reset every collection to its empty initial snapshot.
    ///
    /// In-flight loads started before the clear are invalidated; their
    /// results are discarded when they complete.
    pub fn clear(&self) {
        info!("clearing content store");
        for collection in Collection::ALL {
            self.issue_sequence(collection);
        }
        self.inner.state.send_replace(ContentState::default());
    }

    /// Spawn the periodic staleness sweep.
    ///
    /// The returned guard owns the task; dropping it (or calling
    /// [`SweepGuard::stop`]) aborts the sweep.
    #[must_use]
    pub fn spawn_sweep(&self, interval: Duration) -> SweepGuard {
        let store = self.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // interval fires immediately; the first tick is not a sweep
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let refreshed = store.refresh_if_needed(Utc::now()).await;
                if !refreshed.is_empty() {
                    debug!(count = refreshed.len(), "staleness sweep refreshed collections");
                }
            }
        });
        SweepGuard { handle }
    }

    fn issue_sequence(&self, collection: Collection) -> u64 {
        self.inner.sequence(collection).fetch_add(1, Ordering::AcqRel) + 1
    }
}

impl StoreInner {
    #[allow(clippy::indexing_slicing)] // Collection::index() is in 0..COUNT
    fn sequence(&self, collection: Collection) -> &AtomicU64 {
        &self.sequences[collection.index()]
    }

    fn latest_sequence(&self, collection: Collection) -> u64 {
        self.sequence(collection).load(Ordering::Acquire)
    }
}

/// Owns the periodic staleness sweep task; aborts it on drop.
#[derive(Debug)]
pub struct SweepGuard {
    handle: JoinHandle<()>,
}

impl SweepGuard {
    /// Stop the sweep explicitly.
    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for SweepGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
