//! Domain enums for content entities.
//!
//! String representations (serde and `Display`) use the lowercase
//! identifiers the content API serves; `label()` returns the pt-BR display
//! label shown in the UI.

use serde::{Deserialize, Serialize};

/// Team department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Marketing,
    Juridico,
    Educacao,
    Tecnologia,
    Administrativo,
}

impl Department {
    /// All departments, in UI display order.
    pub const ALL: [Self; 5] = [
        Self::Marketing,
        Self::Juridico,
        Self::Educacao,
        Self::Tecnologia,
        Self::Administrativo,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Marketing => "marketing",
            Self::Juridico => "juridico",
            Self::Educacao => "educacao",
            Self::Tecnologia => "tecnologia",
            Self::Administrativo => "administrativo",
        }
    }

    /// Display label (pt-BR).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Marketing => "Marketing",
            Self::Juridico => "Jurídico",
            Self::Educacao => "Educação",
            Self::Tecnologia => "Tecnologia",
            Self::Administrativo => "Administrativo",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Initiative category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitiativeCategory {
    Educacao,
    Tecnologia,
    Sustentabilidade,
    Comunidade,
    Inovacao,
}

impl InitiativeCategory {
    /// All categories, in UI display order.
    pub const ALL: [Self; 5] = [
        Self::Educacao,
        Self::Tecnologia,
        Self::Sustentabilidade,
        Self::Comunidade,
        Self::Inovacao,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Educacao => "educacao",
            Self::Tecnologia => "tecnologia",
            Self::Sustentabilidade => "sustentabilidade",
            Self::Comunidade => "comunidade",
            Self::Inovacao => "inovacao",
        }
    }

    /// Display label (pt-BR).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Educacao => "Educação",
            Self::Tecnologia => "Tecnologia",
            Self::Sustentabilidade => "Sustentabilidade",
            Self::Comunidade => "Comunidade",
            Self::Inovacao => "Inovação",
        }
    }
}

impl std::fmt::Display for InitiativeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an initiative.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum InitiativeStatus {
    #[default]
    Active,
    Completed,
    Planned,
}

impl InitiativeStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Planned => "planned",
        }
    }
}

impl std::fmt::Display for InitiativeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Social media platform for team member links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Linkedin,
    Instagram,
    Facebook,
    Twitter,
    Youtube,
    Whatsapp,
}

impl SocialPlatform {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Linkedin => "LinkedIn",
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::Youtube => "YouTube",
            Self::Whatsapp => "WhatsApp",
        }
    }
}

/// FAQ entry category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqCategory {
    Geral,
    Iniciativas,
    Equipe,
    Contato,
    Tecnologia,
}

impl FaqCategory {
    /// All categories, in UI display order.
    pub const ALL: [Self; 5] = [
        Self::Geral,
        Self::Iniciativas,
        Self::Equipe,
        Self::Contato,
        Self::Tecnologia,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Geral => "geral",
            Self::Iniciativas => "iniciativas",
            Self::Equipe => "equipe",
            Self::Contato => "contato",
            Self::Tecnologia => "tecnologia",
        }
    }

    /// Display label (pt-BR).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Geral => "Geral",
            Self::Iniciativas => "Iniciativas",
            Self::Equipe => "Equipe",
            Self::Contato => "Contato",
            Self::Tecnologia => "Tecnologia",
        }
    }
}

impl std::fmt::Display for FaqCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of featured media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Article,
    Interview,
}

/// Partner organization category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerCategory {
    Sponsor,
    Educational,
    Government,
    Nonprofit,
}

impl PartnerCategory {
    pub const ALL: [Self; 4] = [
        Self::Sponsor,
        Self::Educational,
        Self::Government,
        Self::Nonprofit,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sponsor => "sponsor",
            Self::Educational => "educational",
            Self::Government => "government",
            Self::Nonprofit => "nonprofit",
        }
    }
}

impl std::fmt::Display for PartnerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI theme preference.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`ThemeMode`] from a string.
#[derive(Debug, thiserror::Error)]
#[error("unknown theme mode: {0}")]
pub struct ParseThemeModeError(String);

impl std::str::FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_lowercase_identifiers() {
        assert_eq!(
            serde_json::to_string(&Department::Juridico).unwrap(),
            "\"juridico\""
        );
        assert_eq!(
            serde_json::to_string(&InitiativeStatus::Planned).unwrap(),
            "\"planned\""
        );
        assert_eq!(
            serde_json::to_string(&PartnerCategory::Nonprofit).unwrap(),
            "\"nonprofit\""
        );
    }

    #[test]
    fn test_display_matches_serde() {
        for dept in Department::ALL {
            let json = serde_json::to_string(&dept).unwrap();
            assert_eq!(json, format!("\"{dept}\""));
        }
    }

    #[test]
    fn test_theme_mode_round_trip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            let parsed: ThemeMode = mode.as_str().parse().unwrap();
            assert_eq!(parsed, mode);
        }
        assert!("solarized".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_labels_are_localized() {
        assert_eq!(Department::Educacao.label(), "Educação");
        assert_eq!(InitiativeCategory::Inovacao.label(), "Inovação");
    }
}
