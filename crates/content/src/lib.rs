//! GEDUC content data engine.
//!
//! Owns the site's client-side data layer: fetching content collections
//! from a source (mock fixtures in development, the content API in
//! production), caching them as per-collection snapshots with TTL-driven
//! staleness refresh, projecting derived read views, and persisting user
//! preferences and list filters.
//!
//! # Modules
//!
//! - [`source`] - The [`ContentSource`] seam plus mock and remote sources
//! - [`store`] - The in-memory snapshot cache store
//! - [`staleness`] - Per-collection TTL policy and the staleness check
//! - [`views`] - Pure derived projections over the store state
//! - [`filters`] - Search/category/featured filtering for list pages
//! - [`settings`] - Persisted user preferences (theme, consent, filters)
//! - [`config`] - Environment-driven configuration
//! - [`text`] - Accent-folding and truncation helpers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod filters;
pub mod settings;
pub mod source;
pub mod staleness;
pub mod store;
pub mod text;
pub mod views;

pub use config::{ConfigError, ContentConfig};
pub use filters::{FaqFilters, InitiativeFilters, TeamFilters};
pub use settings::{SettingsError, SettingsStore};
pub use source::{CollectionPayload, ContentSource, FetchError, MockConfig, MockSource};
pub use staleness::TtlPolicy;
pub use store::{ContentState, ContentStore, SweepGuard};
pub use views::CollectionError;
