//! The fixed set of content collections.
//!
//! Consuming code addresses cached data by [`Collection`] identifier. The
//! set is part of the external contract: swapping the mock content source
//! for the real API must not change it.

use serde::{Deserialize, Serialize};

/// Identifier for one named group of content entities managed as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collection {
    TeamMembers,
    Initiatives,
    Testimonials,
    FaqItems,
    FeaturedMedia,
    Partners,
}

impl Collection {
    /// Number of collections.
    pub const COUNT: usize = 6;

    /// All collections, in load order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::TeamMembers,
        Self::Initiatives,
        Self::Testimonials,
        Self::FaqItems,
        Self::FeaturedMedia,
        Self::Partners,
    ];

    /// Stable kebab-case identifier, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TeamMembers => "team-members",
            Self::Initiatives => "initiatives",
            Self::Testimonials => "testimonials",
            Self::FaqItems => "faq-items",
            Self::FeaturedMedia => "featured-media",
            Self::Partners => "partners",
        }
    }

    /// Dense index in `0..COUNT`, usable for per-collection counters.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::TeamMembers => 0,
            Self::Initiatives => 1,
            Self::Testimonials => 2,
            Self::FaqItems => 3,
            Self::FeaturedMedia => 4,
            Self::Partners => 5,
        }
    }

    /// REST endpoint path for this collection on the content API.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::TeamMembers => "/team-members",
            Self::Initiatives => "/initiatives",
            Self::Testimonials => "/testimonials",
            Self::FaqItems => "/faq",
            Self::FeaturedMedia => "/featured-media",
            Self::Partners => "/partners",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`Collection`] from a string.
#[derive(Debug, thiserror::Error)]
#[error("unknown collection: {0}")]
pub struct ParseCollectionError(String);

impl std::str::FromStr for Collection {
    type Err = ParseCollectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "team-members" => Ok(Self::TeamMembers),
            "initiatives" => Ok(Self::Initiatives),
            "testimonials" => Ok(Self::Testimonials),
            "faq-items" => Ok(Self::FaqItems),
            "featured-media" => Ok(Self::FeaturedMedia),
            "partners" => Ok(Self::Partners),
            other => Err(ParseCollectionError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_str() {
        for collection in Collection::ALL {
            let parsed: Collection = collection.as_str().parse().unwrap();
            assert_eq!(parsed, collection);
        }
        assert!("blog-posts".parse::<Collection>().is_err());
    }

    #[test]
    fn test_indices_are_dense_and_unique() {
        let mut seen = [false; Collection::COUNT];
        for collection in Collection::ALL {
            let idx = collection.index();
            assert!(idx < Collection::COUNT);
            assert!(!seen[idx], "duplicate index {idx}");
            seen[idx] = true;
        }
    }

    #[test]
    fn test_serde_matches_as_str() {
        for collection in Collection::ALL {
            let json = serde_json::to_string(&collection).unwrap();
            assert_eq!(json, format!("\"{}\"", collection.as_str()));
        }
    }

    #[test]
    fn test_endpoints_are_rooted() {
        for collection in Collection::ALL {
            assert!(collection.endpoint().starts_with('/'));
        }
    }
}
