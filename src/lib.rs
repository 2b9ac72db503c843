//! terrain_nav - pose and terrain primitives for sampling-based motion planning
//!
//! This crate provides a 2D pose value type and a grid terrain that judges
//! whether a motion segment between two poses is kinematically admissible
//! (length, heading change, forward progress, minimum turning radius). It is
//! the single-segment building block an RRT-style planner expands with.

// Core modules
pub mod common;
pub mod terrain;

// Re-export common types for convenience
pub use common::{Pose, SegmentValidator};
pub use common::{DomainError, DomainResult};
pub use terrain::{SegmentLimits, Terrain};
