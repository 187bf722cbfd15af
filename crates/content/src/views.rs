//! Derived read views over the store state.
//!
//! Pure projections: they hold no state of their own and recompute from
//! the [`ContentState`] they are called on, so they can never be stale
//! relative to the underlying snapshots. Callers that want push updates
//! combine these with [`ContentStore::subscribe`](crate::store::ContentStore::subscribe).

use serde::Serialize;

use geduc_core::{
    Collection, Featured, FeaturedMedia, Initiative, Partner, TeamMember, Testimonial,
};

use crate::store::ContentState;

/// One collection's recorded fetch error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionError {
    pub collection: Collection,
    pub message: String,
}

impl ContentState {
    /// Team members flagged as featured.
    pub fn featured_team_members(&self) -> impl Iterator<Item = &TeamMember> {
        self.team_members.items.iter().filter(|m| m.is_featured())
    }

    /// Initiatives flagged as featured.
    pub fn featured_initiatives(&self) -> impl Iterator<Item = &Initiative> {
        self.initiatives.items.iter().filter(|i| i.is_featured())
    }

    /// Testimonials flagged as featured.
    pub fn featured_testimonials(&self) -> impl Iterator<Item = &Testimonial> {
        self.testimonials.items.iter().filter(|t| t.is_featured())
    }

    /// Partners flagged as featured.
    pub fn featured_partners(&self) -> impl Iterator<Item = &Partner> {
        self.partners.items.iter().filter(|p| p.is_featured())
    }

    /// The media highlight for the home page, if loaded.
    #[must_use]
    pub fn featured_media_item(&self) -> Option<&FeaturedMedia> {
        self.featured_media.items.first()
    }

    /// Whether any collection currently has a load in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        Collection::ALL.into_iter().any(|c| self.loading(c))
    }

    /// Whether any collection's most recent fetch failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        Collection::ALL.into_iter().any(|c| self.error(c).is_some())
    }

    /// The recorded fetch errors, one entry per failed collection.
    #[must_use]
    pub fn errors(&self) -> Vec<CollectionError> {
        Collection::ALL
            .into_iter()
            .filter_map(|collection| {
                self.error(collection).map(|message| CollectionError {
                    collection,
                    message: message.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use geduc_core::{Department, MemberId, PartnerCategory, PartnerId};

    fn member(name: &str, featured: bool) -> TeamMember {
        TeamMember {
            id: MemberId::generate(),
            name: name.to_string(),
            position: "Educadora".to_string(),
            department: Department::Educacao,
            avatar: String::new(),
            bio: None,
            social_links: vec![],
            featured,
            join_date: Utc::now(),
        }
    }

    #[test]
    fn test_featured_views_equal_filtering_the_snapshot() {
        let mut state = ContentState::default();
        state.team_members.items = vec![
            member("Ana Silva", true),
            member("Carlos Souza", false),
            member("Beatriz Costa", true),
        ];

        let featured: Vec<_> = state.featured_team_members().collect();
        let filtered: Vec<_> = state
            .team_members
            .items
            .iter()
            .filter(|m| m.featured)
            .collect();
        assert_eq!(featured, filtered);
        assert_eq!(featured.len(), 2);
    }

    #[test]
    fn test_featured_views_recompute_after_replacement() {
        let mut state = ContentState::default();
        state.team_members.items = vec![member("Ana Silva", true)];
        assert_eq!(state.featured_team_members().count(), 1);

        state.team_members.items = vec![member("Carlos Souza", false)];
        assert_eq!(state.featured_team_members().count(), 0);
    }

    #[test]
    fn test_featured_media_item_is_first() {
        let state = ContentState::default();
        assert!(state.featured_media_item().is_none());
    }

    #[test]
    fn test_is_loading_aggregates_all_collections() {
        let mut state = ContentState::default();
        assert!(!state.is_loading());

        state.partners.begin_load();
        assert!(state.is_loading());
    }

    #[test]
    fn test_errors_lists_failed_collections() {
        let mut state = ContentState::default();
        assert!(!state.has_errors());

        state.partners.fail("simulated network error");
        state.faq_items.fail("unexpected status 503");

        let errors = state.errors();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.collection == Collection::Partners));
        assert!(
            errors
                .iter()
                .any(|e| e.collection == Collection::FaqItems
                    && e.message == "unexpected status 503")
        );
    }

    #[test]
    fn test_featured_partners() {
        let mut state = ContentState::default();
        state.partners.items = vec![Partner {
            id: PartnerId::generate(),
            name: "Unesco Brasil".to_string(),
            logo: String::new(),
            website: None,
            description: None,
            category: PartnerCategory::Nonprofit,
            featured: true,
        }];
        assert_eq!(state.featured_partners().count(), 1);
    }
}
