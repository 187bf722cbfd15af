//! Cached per-collection state.
//!
//! A [`Snapshot`] is the unit of state the cache store holds for each
//! collection: the last-fetched items plus loading/error/fetch-time
//! metadata. This shape is the contract the consuming layer reads; any
//! storage replacement must preserve it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The cached state of one collection.
///
/// Lifecycle: starts empty and not loading; `begin_load` marks a fetch in
/// flight; `complete` or `fail` settle it. A completed fetch replaces the
/// item sequence wholesale - entity identities are not preserved across
/// refreshes. A failed fetch leaves the previous items (and their fetch
/// timestamp) untouched so the UI can keep rendering stale data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<T> {
    pub items: Vec<T>,
    pub loading: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_fetched_at: Option<DateTime<Utc>>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            last_fetched_at: None,
        }
    }
}

impl<T> Snapshot<T> {
    /// Mark a load as in flight. Clears any previous error; items stay.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Settle a successful load: replace the items and stamp the fetch time.
    pub fn complete(&mut self, items: Vec<T>, now: DateTime<Utc>) {
        self.items = items;
        self.loading = false;
        self.error = None;
        self.last_fetched_at = Some(now);
    }

    /// Settle a failed load: record the error, keep the previous items.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Age of the cached items, or `None` if never fetched.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.last_fetched_at.map(|fetched| now - fetched)
    }

    /// Whether this snapshot has ever completed a fetch.
    #[must_use]
    pub const fn is_fetched(&self) -> bool {
        self.last_fetched_at.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_and_idle() {
        let snapshot: Snapshot<u32> = Snapshot::default();
        assert!(snapshot.items.is_empty());
        assert!(!snapshot.loading);
        assert!(snapshot.error.is_none());
        assert!(snapshot.last_fetched_at.is_none());
    }

    #[test]
    fn test_begin_load_clears_error_keeps_items() {
        let mut snapshot = Snapshot {
            items: vec![1, 2, 3],
            loading: false,
            error: Some("previous failure".to_string()),
            last_fetched_at: None,
        };

        snapshot.begin_load();
        assert!(snapshot.loading);
        assert!(snapshot.error.is_none());
        assert_eq!(snapshot.items, vec![1, 2, 3]);
    }

    #[test]
    fn test_complete_replaces_items_and_stamps_time() {
        let mut snapshot = Snapshot {
            items: vec![1],
            loading: true,
            error: None,
            last_fetched_at: None,
        };
        let now = Utc::now();

        snapshot.complete(vec![7, 8], now);
        assert_eq!(snapshot.items, vec![7, 8]);
        assert!(!snapshot.loading);
        assert_eq!(snapshot.last_fetched_at, Some(now));
    }

    #[test]
    fn test_fail_keeps_items_and_fetch_time() {
        let now = Utc::now();
        let mut snapshot = Snapshot {
            items: vec![1, 2],
            loading: true,
            error: None,
            last_fetched_at: Some(now),
        };

        snapshot.fail("network down");
        assert!(!snapshot.loading);
        assert_eq!(snapshot.error.as_deref(), Some("network down"));
        assert_eq!(snapshot.items, vec![1, 2]);
        assert_eq!(snapshot.last_fetched_at, Some(now));
    }

    #[test]
    fn test_age() {
        let now = Utc::now();
        let mut snapshot: Snapshot<u32> = Snapshot::default();
        assert!(snapshot.age(now).is_none());

        snapshot.complete(vec![], now - Duration::seconds(90));
        assert_eq!(snapshot.age(now), Some(Duration::seconds(90)));
    }
}
