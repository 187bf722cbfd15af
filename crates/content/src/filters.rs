//! List-page filters.
//!
//! Filter state for the team, initiatives, and FAQ list pages: free-text
//! search plus category/status dropdowns plus a featured-only toggle.
//! Search matching is accent- and case-insensitive. The structs serialize
//! with defaults for every field, so state persisted by an older version
//! (or corrupted by hand) deserializes into something usable instead of
//! failing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use geduc_core::{
    Department, FaqCategory, FaqItem, Initiative, InitiativeCategory, InitiativeStatus,
    TeamMember,
};

use crate::text;

/// Minimum search length before suggestions kick in.
const MIN_SEARCH_LENGTH: usize = 2;

/// Maximum number of search suggestions returned.
const MAX_SUGGESTIONS: usize = 5;

/// Filter state for the team page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamFilters {
    pub search_term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    pub featured_only: bool,
}

impl TeamFilters {
    /// Whether any filter deviates from the default view.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search_term.trim().is_empty() || self.department.is_some() || self.featured_only
    }

    /// Whether `member` passes this filter.
    #[must_use]
    pub fn matches(&self, member: &TeamMember) -> bool {
        if let Some(department) = self.department
            && member.department != department
        {
            return false;
        }
        if self.featured_only && !member.featured {
            return false;
        }

        let term = self.search_term.trim();
        if term.is_empty() {
            return true;
        }

        text::contains_fold(&member.name, term)
            || text::contains_fold(&member.position, term)
            || text::contains_fold(member.department.label(), term)
            || member
                .bio
                .as_deref()
                .is_some_and(|bio| text::contains_fold(bio, term))
    }

    /// The members passing this filter, in their original order.
    #[must_use]
    pub fn apply<'a>(&self, members: &'a [TeamMember]) -> Vec<&'a TeamMember> {
        members.iter().filter(|m| self.matches(m)).collect()
    }
}

/// Filter state for the initiatives page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InitiativeFilters {
    pub search_term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<InitiativeCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InitiativeStatus>,
    pub featured_only: bool,
}

impl InitiativeFilters {
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search_term.trim().is_empty()
            || self.category.is_some()
            || self.status.is_some()
            || self.featured_only
    }

    /// Whether `initiative` passes this filter.
    #[must_use]
    pub fn matches(&self, initiative: &Initiative) -> bool {
        if let Some(category) = self.category
            && initiative.category != category
        {
            return false;
        }
        if let Some(status) = self.status
            && initiative.status != status
        {
            return false;
        }
        if self.featured_only && !initiative.featured {
            return false;
        }

        let term = self.search_term.trim();
        term.is_empty()
            || text::contains_fold(&initiative.title, term)
            || text::contains_fold(&initiative.description, term)
            || text::contains_fold(initiative.category.label(), term)
    }

    #[must_use]
    pub fn apply<'a>(&self, initiatives: &'a [Initiative]) -> Vec<&'a Initiative> {
        initiatives.iter().filter(|i| self.matches(i)).collect()
    }
}

/// Filter state for the FAQ page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqFilters {
    pub search_term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FaqCategory>,
    pub featured_only: bool,
}

impl FaqFilters {
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search_term.trim().is_empty() || self.category.is_some() || self.featured_only
    }

    /// Whether `item` passes this filter.
    #[must_use]
    pub fn matches(&self, item: &FaqItem) -> bool {
        if let Some(category) = self.category
            && item.category != category
        {
            return false;
        }
        if self.featured_only && !item.featured {
            return false;
        }

        let term = self.search_term.trim();
        term.is_empty()
            || text::contains_fold(&item.question, term)
            || text::contains_fold(&item.answer, term)
    }

    #[must_use]
    pub fn apply<'a>(&self, items: &'a [FaqItem]) -> Vec<&'a FaqItem> {
        items.iter().filter(|i| self.matches(i)).collect()
    }
}

/// Member count per department.
#[must_use]
pub fn department_counts(members: &[TeamMember]) -> BTreeMap<Department, usize> {
    let mut counts = BTreeMap::new();
    for member in members {
        *counts.entry(member.department).or_insert(0) += 1;
    }
    counts
}

/// Search suggestions for the team page autocomplete.
///
/// Names that start with the term and positions that contain it, capped
/// at [`MAX_SUGGESTIONS`]. Terms shorter than [`MIN_SEARCH_LENGTH`]
/// produce nothing.
#[must_use]
pub fn team_search_suggestions(members: &[TeamMember], term: &str) -> Vec<String> {
    let term = term.trim();
    if term.chars().count() < MIN_SEARCH_LENGTH {
        return Vec::new();
    }

    let folded = text::fold(term);
    let mut suggestions = Vec::new();

    for member in members {
        if text::fold(&member.name).starts_with(&folded) && !suggestions.contains(&member.name) {
            suggestions.push(member.name.clone());
        }
    }
    for member in members {
        if text::fold(&member.position).contains(&folded)
            && !suggestions.contains(&member.position)
        {
            suggestions.push(member.position.clone());
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
