//! Domain entities served by the content API.
//!
//! Field names serialize in camelCase to match the JSON payloads the
//! content API serves. Entities are plain value records; a refresh replaces
//! a collection wholesale, so no cross-entity referential integrity is
//! enforced here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{
    Department, FaqCategory, InitiativeCategory, InitiativeStatus, MediaType, PartnerCategory,
    SocialPlatform,
};
use super::id::{FaqId, InitiativeId, MediaId, MemberId, PartnerId, TestimonialId};

/// Entities that carry a `featured` flag used by the derived views.
pub trait Featured {
    fn is_featured(&self) -> bool;
}

/// A social media link attached to a team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
    pub label: String,
}

/// A member of the GEDUC team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    pub position: String,
    pub department: Department,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    pub featured: bool,
    pub join_date: DateTime<Utc>,
}

impl Featured for TeamMember {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

/// An educational initiative run by the organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Initiative {
    pub id: InitiativeId,
    pub title: String,
    pub description: String,
    pub category: InitiativeCategory,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub start_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub status: InitiativeStatus,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Featured for Initiative {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

/// A testimonial from an educator, student, or partner institution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: TestimonialId,
    pub name: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub avatar: String,
    pub content: String,
    /// Star rating, 1-5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub date: DateTime<Utc>,
    pub featured: bool,
}

impl Featured for Testimonial {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

/// A frequently asked question entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
    pub category: FaqCategory,
    /// Position within its category when rendered as a list.
    pub order: u32,
    pub featured: bool,
    pub last_updated: DateTime<Utc>,
}

impl Featured for FaqItem {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

/// Press coverage or media highlight shown on the home page.
///
/// Unlike the other entities there is no `featured` flag: the collection
/// itself is the featured set, and the view layer shows the first item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedMedia {
    pub id: MediaId,
    pub title: String,
    pub description: String,
    pub content: String,
    pub author: String,
    pub author_position: String,
    pub media_type: MediaType,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    pub publish_date: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A partner organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
    pub logo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: PartnerCategory,
    pub featured: bool,
}

impl Featured for Partner {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_team_member_serializes_camel_case() {
        let member = TeamMember {
            id: MemberId::new("member-1"),
            name: "Ana Silva".to_string(),
            position: "Coordenadora Pedagógica".to_string(),
            department: Department::Educacao,
            avatar: "https://example.org/a.png".to_string(),
            bio: None,
            social_links: vec![],
            featured: true,
            join_date: Utc::now(),
        };

        let json = serde_json::to_value(&member).unwrap();
        assert!(json.get("joinDate").is_some());
        assert!(json.get("join_date").is_none());
        // Unset optional fields are omitted entirely
        assert!(json.get("bio").is_none());
    }

    #[test]
    fn test_initiative_deserializes_with_missing_optionals() {
        let json = r#"{
            "id": "initiative-1",
            "title": "Educação Digital para Todos",
            "description": "Uma iniciativa inovadora.",
            "category": "educacao",
            "icon": "educacao",
            "startDate": "2025-03-01T00:00:00Z",
            "status": "active",
            "featured": false
        }"#;

        let initiative: Initiative = serde_json::from_str(json).unwrap();
        assert_eq!(initiative.status, InitiativeStatus::Active);
        assert!(initiative.end_date.is_none());
        assert!(initiative.participants.is_none());
    }

    #[test]
    fn test_featured_trait() {
        let partner = Partner {
            id: PartnerId::new("partner-1"),
            name: "Fundação Lemann".to_string(),
            logo: String::new(),
            website: None,
            description: None,
            category: PartnerCategory::Nonprofit,
            featured: true,
        };
        assert!(partner.is_featured());
    }
}
