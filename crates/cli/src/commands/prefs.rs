//! Persisted preference inspection and updates.

use geduc_content::{ContentConfig, SettingsStore};
use geduc_core::ThemeMode;
use tracing::info;

fn open_store() -> Result<SettingsStore, Box<dyn std::error::Error>> {
    let config = ContentConfig::from_env()?;
    Ok(SettingsStore::open(config.settings_path))
}

/// Print the stored preferences.
///
/// # Errors
///
/// Returns an error if configuration is invalid.
#[allow(clippy::print_stdout)]
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store()?;

    println!("settings file:   {}", store.path().display());
    println!("theme:           {}", store.theme());
    println!("language:        {}", store.language());
    println!("reduced motion:  {}", store.reduced_motion());
    println!("cookie consent:  {}", store.has_valid_cookie_consent());
    println!("newsletter:      {}", store.newsletter_consent());
    println!("analytics:       {}", store.analytics_consent());

    let searches = store.recent_searches();
    if !searches.is_empty() {
        println!("recent searches: {}", searches.join(", "));
    }
    let filters = store.team_filters();
    if filters.is_active() {
        println!("team filters:    {filters:?}");
    }

    Ok(())
}

/// Set the stored theme.
///
/// # Errors
///
/// Returns an error for unknown theme modes or if persisting fails.
pub fn set_theme(mode: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mode: ThemeMode = mode.parse()?;
    let store = open_store()?;
    store.set_theme(mode)?;
    info!(%mode, "theme updated");
    Ok(())
}

/// Grant or revoke cookie consent.
///
/// # Errors
///
/// Returns an error if persisting fails.
pub fn set_consent(granted: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store()?;
    store.set_cookie_consent(granted)?;
    info!(granted, "cookie consent recorded");
    Ok(())
}
