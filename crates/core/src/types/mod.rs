//! Core types for the GEDUC content platform.
//!
//! This module provides the domain entities served by the content API,
//! the enums they reference, and type-safe ID wrappers.

pub mod entities;
pub mod enums;
pub mod id;

pub use entities::*;
pub use enums::*;
pub use id::*;
