//! GEDUC Core - Shared domain types.
//!
//! This crate provides the common types used across all GEDUC components:
//! - `content` - Data engine (content sources, cache store, preferences)
//! - `cli` - Command-line tools for fetching and inspecting content
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients, no async. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Domain entities, enums, and type-safe IDs
//! - [`collection`] - The fixed set of content collection identifiers
//! - [`snapshot`] - Cached per-collection state and its transitions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod collection;
pub mod snapshot;
pub mod types;

pub use collection::Collection;
pub use snapshot::Snapshot;
pub use types::*;
