//! Content sources.
//!
//! A [`ContentSource`] produces the entities for one collection per call.
//! The cache store only ever talks to this trait, so swapping the mock
//! fixture source for the real content API changes no consuming code.

mod mock;
mod remote;

pub use mock::{DelayRange, FixtureSizes, MockConfig, MockSource, generate_fixtures};
pub use remote::{ApiConfig, RemoteSource};

use async_trait::async_trait;

use geduc_core::{
    Collection, FaqItem, FeaturedMedia, Initiative, Partner, TeamMember, Testimonial,
};

/// Error fetching a collection from a content source.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure reaching the content API.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The content API answered with a non-success status.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Failure injected by the mock source.
    #[error("simulated network error")]
    Simulated,
}

/// A fetched batch of entities, tagged with the collection it belongs to.
#[derive(Debug, Clone)]
pub enum CollectionPayload {
    TeamMembers(Vec<TeamMember>),
    Initiatives(Vec<Initiative>),
    Testimonials(Vec<Testimonial>),
    FaqItems(Vec<FaqItem>),
    FeaturedMedia(Vec<FeaturedMedia>),
    Partners(Vec<Partner>),
}

impl CollectionPayload {
    /// The collection this payload belongs to.
    #[must_use]
    pub const fn collection(&self) -> Collection {
        match self {
            Self::TeamMembers(_) => Collection::TeamMembers,
            Self::Initiatives(_) => Collection::Initiatives,
            Self::Testimonials(_) => Collection::Testimonials,
            Self::FaqItems(_) => Collection::FaqItems,
            Self::FeaturedMedia(_) => Collection::FeaturedMedia,
            Self::Partners(_) => Collection::Partners,
        }
    }

    /// Number of entities in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::TeamMembers(items) => items.len(),
            Self::Initiatives(items) => items.len(),
            Self::Testimonials(items) => items.len(),
            Self::FaqItems(items) => items.len(),
            Self::FeaturedMedia(items) => items.len(),
            Self::Partners(items) => items.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A source of content collections.
///
/// Implementations must be cheap to call concurrently; the store issues one
/// fetch per collection when bulk-loading.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the current entities for `collection`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the underlying transport fails or
    /// (for the mock source) when a failure is injected. Errors are
    /// contained per collection by the store; they never abort a bulk load.
    async fn fetch(&self, collection: Collection) -> Result<CollectionPayload, FetchError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_reports_its_collection() {
        let payload = CollectionPayload::Partners(vec![]);
        assert_eq!(payload.collection(), Collection::Partners);
        assert!(payload.is_empty());
    }
}
