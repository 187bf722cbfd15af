//! Persisted user settings.
//!
//! A JSON-file-backed key/value store standing in for the browser's local
//! storage: theme, consent records, accessibility preferences, list
//! filters, and recent searches. Reads never fail - a missing, unreadable,
//! or malformed file degrades to defaults with a warning - and every write
//! lands atomically (temp file + rename) so a crash can't leave a
//! half-written file behind.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use geduc_core::ThemeMode;

use crate::filters::{FaqFilters, InitiativeFilters, TeamFilters};

/// How long a cookie-consent record stays valid.
const CONSENT_EXPIRY_DAYS: i64 = 365;

/// Cap on the recent-searches list.
const MAX_RECENT_SEARCHES: usize = 10;

// Storage keys
const THEME_KEY: &str = "theme-preference";
const COOKIE_CONSENT_KEY: &str = "cookie-consent";
const NEWSLETTER_CONSENT_KEY: &str = "newsletter-consent";
const ANALYTICS_CONSENT_KEY: &str = "analytics-consent";
const REDUCED_MOTION_KEY: &str = "reduced-motion";
const LANGUAGE_KEY: &str = "language";
const TEAM_FILTERS_KEY: &str = "team-filters";
const INITIATIVE_FILTERS_KEY: &str = "initiative-filters";
const FAQ_FILTERS_KEY: &str = "faq-filters";
const RECENT_SEARCHES_KEY: &str = "recent-searches";

/// Error writing settings to disk.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Theme choice plus when it was last changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreference {
    pub theme: ThemeMode,
    pub last_changed: DateTime<Utc>,
}

/// A recorded consent decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentRecord {
    pub granted: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
}

/// JSON-file-backed key/value settings store.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, Value>>,
}

impl SettingsStore {
    /// Open the store at `path`, loading existing values if present.
    ///
    /// Never fails: an unreadable or malformed file is logged and treated
    /// as empty, so corrupted state degrades to defaults instead of
    /// breaking startup.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(error) => {
                    warn!(
                        path = %path.display(),
                        %error,
                        "settings file is malformed, starting from defaults"
                    );
                    BTreeMap::new()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    %error,
                    "settings file is unreadable, starting from defaults"
                );
                BTreeMap::new()
            }
        };

        Self {
            path,
            values: Mutex::new(values),
        }
    }

    /// Path the store persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a value, or `None` if absent or of the wrong shape.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let values = self.lock();
        let value = values.get(key)?.clone();
        drop(values);

        match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(error) => {
                warn!(key, %error, "stored setting has unexpected shape, ignoring");
                None
            }
        }
    }

    /// Read a value, falling back to `default`.
    #[must_use]
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Store a value and persist the file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let json = serde_json::to_value(value)?;
        self.lock().insert(key.to_string(), json);
        self.flush()
    }

    /// Remove a key and persist the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file write fails.
    pub fn remove(&self, key: &str) -> Result<(), SettingsError> {
        let removed = self.lock().remove(key).is_some();
        if removed {
            self.flush()?;
        }
        Ok(())
    }

    /// All stored keys.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, Value>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn flush(&self) -> Result<(), SettingsError> {
        let serialized = serde_json::to_string_pretty(&*self.lock())?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        // Write-then-rename keeps the settings file whole under crashes
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, serialized)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    // =========================================================================
    // Theme
    // =========================================================================

    /// The stored theme, defaulting to light.
    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.get::<ThemePreference>(THEME_KEY)
            .map_or(ThemeMode::Light, |pref| pref.theme)
    }

    /// Store the theme choice.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_theme(&self, theme: ThemeMode) -> Result<(), SettingsError> {
        self.set(
            THEME_KEY,
            &ThemePreference {
                theme,
                last_changed: Utc::now(),
            },
        )
    }

    // =========================================================================
    // Consent
    // =========================================================================

    /// The cookie-consent record, if present and not expired.
    ///
    /// Expired records are removed on read.
    #[must_use]
    pub fn cookie_consent(&self) -> Option<ConsentRecord> {
        let consent = self.get::<ConsentRecord>(COOKIE_CONSENT_KEY)?;

        if let Some(expiry) = consent.expiry
            && expiry < Utc::now()
        {
            if let Err(error) = self.remove(COOKIE_CONSENT_KEY) {
                warn!(%error, "failed to remove expired cookie consent");
            }
            return None;
        }

        Some(consent)
    }

    /// Record a cookie-consent decision with the standard expiry.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_cookie_consent(&self, granted: bool) -> Result<(), SettingsError> {
        let now = Utc::now();
        self.set(
            COOKIE_CONSENT_KEY,
            &ConsentRecord {
                granted,
                timestamp: now,
                expiry: Some(now + TimeDelta::days(CONSENT_EXPIRY_DAYS)),
            },
        )
    }

    /// Whether there is a current, granted cookie consent.
    #[must_use]
    pub fn has_valid_cookie_consent(&self) -> bool {
        self.cookie_consent().is_some_and(|c| c.granted)
    }

    /// Whether newsletter consent was granted.
    #[must_use]
    pub fn newsletter_consent(&self) -> bool {
        self.get::<ConsentRecord>(NEWSLETTER_CONSENT_KEY)
            .is_some_and(|c| c.granted)
    }

    /// Record a newsletter-consent decision.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_newsletter_consent(&self, granted: bool) -> Result<(), SettingsError> {
        self.set(
            NEWSLETTER_CONSENT_KEY,
            &ConsentRecord {
                granted,
                timestamp: Utc::now(),
                expiry: None,
            },
        )
    }

    /// Whether analytics consent was granted.
    #[must_use]
    pub fn analytics_consent(&self) -> bool {
        self.get::<ConsentRecord>(ANALYTICS_CONSENT_KEY)
            .is_some_and(|c| c.granted)
    }

    /// Record an analytics-consent decision.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_analytics_consent(&self, granted: bool) -> Result<(), SettingsError> {
        self.set(
            ANALYTICS_CONSENT_KEY,
            &ConsentRecord {
                granted,
                timestamp: Utc::now(),
                expiry: None,
            },
        )
    }

    // =========================================================================
    // Accessibility & locale
    // =========================================================================

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.get_or(REDUCED_MOTION_KEY, false)
    }

    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_reduced_motion(&self, reduced: bool) -> Result<(), SettingsError> {
        self.set(REDUCED_MOTION_KEY, &reduced)
    }

    #[must_use]
    pub fn language(&self) -> String {
        self.get_or(LANGUAGE_KEY, "pt".to_string())
    }

    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_language(&self, language: &str) -> Result<(), SettingsError> {
        self.set(LANGUAGE_KEY, &language)
    }

    // =========================================================================
    // List filters
    // =========================================================================

    #[must_use]
    pub fn team_filters(&self) -> TeamFilters {
        self.get_or(TEAM_FILTERS_KEY, TeamFilters::default())
    }

    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_team_filters(&self, filters: &TeamFilters) -> Result<(), SettingsError> {
        self.set(TEAM_FILTERS_KEY, filters)
    }

    #[must_use]
    pub fn initiative_filters(&self) -> InitiativeFilters {
        self.get_or(INITIATIVE_FILTERS_KEY, InitiativeFilters::default())
    }

    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_initiative_filters(&self, filters: &InitiativeFilters) -> Result<(), SettingsError> {
        self.set(INITIATIVE_FILTERS_KEY, filters)
    }

    #[must_use]
    pub fn faq_filters(&self) -> FaqFilters {
        self.get_or(FAQ_FILTERS_KEY, FaqFilters::default())
    }

    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_faq_filters(&self, filters: &FaqFilters) -> Result<(), SettingsError> {
        self.set(FAQ_FILTERS_KEY, filters)
    }

    // =========================================================================
    // Recent searches
    // =========================================================================

    /// Recent search terms, most recent first.
    #[must_use]
    pub fn recent_searches(&self) -> Vec<String> {
        self.get_or(RECENT_SEARCHES_KEY, Vec::new())
    }

    /// Push a search term to the front of the list.
    ///
    /// Blank terms are ignored; duplicates move to the front; the list is
    /// capped at [`MAX_RECENT_SEARCHES`].
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn add_recent_search(&self, term: &str) -> Result<(), SettingsError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(());
        }

        let mut searches = self.recent_searches();
        searches.retain(|existing| existing != term);
        searches.insert(0, term.to_string());
        searches.truncate(MAX_RECENT_SEARCHES);

        self.set(RECENT_SEARCHES_KEY, &searches)
    }

    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn clear_recent_searches(&self) -> Result<(), SettingsError> {
        self.remove(RECENT_SEARCHES_KEY)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SettingsStore {
        SettingsStore::open(dir.path().join("settings.json"))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.theme(), ThemeMode::Light);
        assert_eq!(store.language(), "pt");
        assert!(!store.reduced_motion());
        assert!(store.recent_searches().is_empty());
        assert!(!store.team_filters().is_active());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::open(&path);
        store.set_theme(ThemeMode::Dark).unwrap();
        store.set_language("en").unwrap();
        drop(store);

        let store = SettingsStore::open(&path);
        assert_eq!(store.theme(), ThemeMode::Dark);
        assert_eq!(store.language(), "en");
    }

    #[test]
    fn test_malformed_file_degrades_to_defaults_and_stays_writable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not valid json!").unwrap();

        let store = SettingsStore::open(&path);
        assert_eq!(store.theme(), ThemeMode::Light);

        // A write after corruption recovers the file
        store.set_theme(ThemeMode::System).unwrap();
        let store = SettingsStore::open(&path);
        assert_eq!(store.theme(), ThemeMode::System);
    }

    #[test]
    fn test_wrong_shape_value_is_ignored() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.set(THEME_KEY, &42).unwrap();

        assert_eq!(store.theme(), ThemeMode::Light);
    }

    #[test]
    fn test_cookie_consent_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.cookie_consent().is_none());
        assert!(!store.has_valid_cookie_consent());

        store.set_cookie_consent(true).unwrap();
        let consent = store.cookie_consent().unwrap();
        assert!(consent.granted);
        assert!(consent.expiry.is_some());
        assert!(store.has_valid_cookie_consent());

        store.set_cookie_consent(false).unwrap();
        assert!(!store.has_valid_cookie_consent());
    }

    #[test]
    fn test_expired_cookie_consent_is_dropped() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let expired = ConsentRecord {
            granted: true,
            timestamp: Utc::now() - TimeDelta::days(400),
            expiry: Some(Utc::now() - TimeDelta::days(35)),
        };
        store.set(COOKIE_CONSENT_KEY, &expired).unwrap();

        assert!(store.cookie_consent().is_none());
        // Removed on read, not just hidden
        assert!(!store.keys().contains(&COOKIE_CONSENT_KEY.to_string()));
    }

    #[test]
    fn test_recent_searches_dedupe_and_cap() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        for term in ["educação", "mentoria", "educação"] {
            store.add_recent_search(term).unwrap();
        }
        assert_eq!(store.recent_searches(), vec!["educação", "mentoria"]);

        for i in 0..12 {
            store.add_recent_search(&format!("busca-{i}")).unwrap();
        }
        let searches = store.recent_searches();
        assert_eq!(searches.len(), MAX_RECENT_SEARCHES);
        assert_eq!(searches.first().map(String::as_str), Some("busca-11"));

        store.clear_recent_searches().unwrap();
        assert!(store.recent_searches().is_empty());
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add_recent_search("   ").unwrap();
        assert!(store.recent_searches().is_empty());
    }

    #[test]
    fn test_filters_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let filters = TeamFilters {
            search_term: "ana".to_string(),
            department: Some(geduc_core::Department::Educacao),
            featured_only: true,
        };
        store.set_team_filters(&filters).unwrap();
        assert_eq!(store.team_filters(), filters);
    }
}
