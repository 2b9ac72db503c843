//! Common types, traits, and error definitions for terrain_nav
//!
//! This module provides the foundational building blocks used by the
//! terrain validity predicate and its callers.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
