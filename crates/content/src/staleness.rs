//! TTL policy and the staleness check.
//!
//! Each collection has its own retention window: rarely-changing data
//! (partners) stays fresh for an hour, frequently-updated data
//! (initiatives, featured media) for five minutes. The staleness check is
//! a pure function of the current state, the policy, and the wall clock -
//! no hysteresis, no jitter, no backoff - so callers decide when to sweep
//! (periodically, or on view focus).

use std::time::Duration;

use chrono::{DateTime, Utc};

use geduc_core::Collection;

use crate::store::ContentState;

/// Per-collection time-to-live table with a fallback default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtlPolicy {
    overrides: [Option<Duration>; Collection::COUNT],
    default_ttl: Duration,
}

impl TtlPolicy {
    /// Fallback TTL for collections without an explicit entry.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

    /// Policy with no per-collection entries; everything uses `ttl`.
    #[must_use]
    pub const fn uniform(ttl: Duration) -> Self {
        Self {
            overrides: [None; Collection::COUNT],
            default_ttl: ttl,
        }
    }

    /// Set the TTL for one collection.
    #[must_use]
    pub const fn with_ttl(mut self, collection: Collection, ttl: Duration) -> Self {
        self.overrides[collection.index()] = Some(ttl);
        self
    }

    /// TTL for `collection`, falling back to the default.
    #[must_use]
    pub fn ttl(&self, collection: Collection) -> Duration {
        self.overrides
            .get(collection.index())
            .copied()
            .flatten()
            .unwrap_or(self.default_ttl)
    }
}

impl Default for TtlPolicy {
    /// Reference retention windows for the production collections.
    fn default() -> Self {
        Self::uniform(Self::DEFAULT_TTL)
            .with_ttl(Collection::TeamMembers, Duration::from_secs(10 * 60))
            .with_ttl(Collection::Initiatives, Duration::from_secs(5 * 60))
            .with_ttl(Collection::Testimonials, Duration::from_secs(15 * 60))
            .with_ttl(Collection::FaqItems, Duration::from_secs(30 * 60))
            .with_ttl(Collection::FeaturedMedia, Duration::from_secs(5 * 60))
            .with_ttl(Collection::Partners, Duration::from_secs(60 * 60))
    }
}

/// Collections whose cached data has outlived its TTL.
///
/// A collection is stale iff it has been fetched at least once and
/// `now - last_fetched_at` exceeds its TTL. Never-fetched collections are
/// not eligible: only re-fetch is staleness-driven, initial fetch is the
/// caller's job.
#[must_use]
pub fn stale_collections(
    state: &ContentState,
    policy: &TtlPolicy,
    now: DateTime<Utc>,
) -> Vec<Collection> {
    Collection::ALL
        .into_iter()
        .filter(|&collection| {
            state.last_fetched_at(collection).is_some_and(|fetched| {
                (now - fetched)
                    .to_std()
                    .is_ok_and(|age| age > policy.ttl(collection))
            })
        })
        .collect()
}
