//! Common traits defining interfaces for terrain_nav

use crate::common::error::DomainResult;
use crate::common::types::Pose;

/// Trait for single-segment admissibility checks.
///
/// A sampling-based planning driver holds one of these and asks it whether
/// the tree may be extended from `from` to a sampled candidate `to`.
pub trait SegmentValidator {
    /// Decide whether the motion segment from `from` to `to` is admissible
    fn segment_is_valid(&self, from: &Pose, to: &Pose) -> DomainResult<bool>;
}
