//! Single-segment admissibility: the predicate an RRT-style expansion
//! asks before extending the tree from one pose toward another.

use std::f64::consts::PI;

use nalgebra::Vector2;

use crate::common::{DomainError, DomainResult, Pose, SegmentValidator};
use crate::terrain::grid::Terrain;

/// Kinematic limits for one motion segment
#[derive(Debug, Clone)]
pub struct SegmentLimits {
    /// Maximum Euclidean length of the segment
    pub max_path_length: f64,
    /// Maximum heading change over the segment [rad]
    pub max_path_angle: f64,
    /// Minimum turning radius of the vehicle
    pub max_turn_radius: f64,
    /// Maximum altitude difference between the endpoint cells;
    /// `None` disables the altitude check
    pub max_altitude_step: Option<i32>,
}

impl Default for SegmentLimits {
    fn default() -> Self {
        Self {
            max_path_length: 5.0,
            max_path_angle: 0.5,
            max_turn_radius: 4.0,
            max_altitude_step: None,
        }
    }
}

impl Terrain {
    /// Decide whether the segment from `point_a` to `point_b` is admissible
    /// under the default [`SegmentLimits`].
    pub fn path_is_valid(&self, point_a: &Pose, point_b: &Pose) -> DomainResult<bool> {
        self.path_is_valid_with(point_a, point_b, &SegmentLimits::default())
    }

    /// Decide whether the segment from `point_a` to `point_b` is admissible.
    ///
    /// Checks run in order and the first failing one settles the answer:
    /// segment length, heading change, forward progress in `point_a`'s body
    /// frame, minimum turning radius, and (when configured) altitude step.
    /// Pure predicate; the grid is read only by the altitude check.
    ///
    /// Errors if either pose lies outside the grid or a limit is not
    /// strictly positive.
    pub fn path_is_valid_with(
        &self,
        point_a: &Pose,
        point_b: &Pose,
        limits: &SegmentLimits,
    ) -> DomainResult<bool> {
        if !self.contains(point_a) {
            return Err(DomainError::OutOfBounds(format!(
                "point_a should have coordinates in [0, {}) x [0, {}) (got {})",
                self.width(),
                self.height(),
                point_a
            )));
        }
        if !self.contains(point_b) {
            return Err(DomainError::OutOfBounds(format!(
                "point_b should have coordinates in [0, {}) x [0, {}) (got {})",
                self.width(),
                self.height(),
                point_b
            )));
        }
        check_positive(limits.max_path_length, "max_path_length")?;
        check_positive(limits.max_path_angle, "max_path_angle")?;
        check_positive(limits.max_turn_radius, "max_turn_radius")?;

        let delta = point_b.to_vector() - point_a.to_vector();
        // Wrapped into [0, 2*pi) and compared directly: a small clockwise
        // turn shows up as a value near 2*pi and fails the angle limit.
        let heading_delta = delta.z.rem_euclid(2.0 * PI);

        // Condition 1: path is not too long
        if Vector2::new(delta.x, delta.y).norm() > limits.max_path_length {
            return Ok(false);
        }

        // Condition 2: heading change is not too steep
        if heading_delta > limits.max_path_angle {
            return Ok(false);
        }

        // Express the displacement in point_a's body frame, +x = forward
        let local = Pose::new(delta.x, delta.y, 0.0)?.rotate(point_a.angle());

        // Condition 3: target is ahead of the vehicle, not behind it
        if local.x() <= 0.0 {
            return Ok(false);
        }

        // Condition 4: curvature within the minimum turning radius. The two
        // disks tangent to the heading at the origin hold every point that
        // would need a tighter turn; the boundary itself is reachable.
        let radius = limits.max_turn_radius;
        if (Vector2::new(0.0, radius) - local.position()).norm() < radius {
            return Ok(false);
        }
        if (Vector2::new(0.0, -radius) - local.position()).norm() < radius {
            return Ok(false);
        }

        // Condition 5: altitude step between the endpoint cells
        if let Some(max_step) = limits.max_altitude_step {
            let step = (self.altitude_at(point_b)? - self.altitude_at(point_a)?).abs();
            if step > max_step {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

impl SegmentValidator for Terrain {
    fn segment_is_valid(&self, from: &Pose, to: &Pose) -> DomainResult<bool> {
        self.path_is_valid(from, to)
    }
}

fn check_positive(value: f64, name: &str) -> DomainResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidParameter(format!(
            "{} should be > 0 (got '{}')",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terrain() -> Terrain {
        Terrain::new(50, 50, 10).unwrap()
    }

    fn pose(x: f64, y: f64, angle: f64) -> Pose {
        Pose::new(x, y, angle).unwrap()
    }

    #[test]
    fn test_straight_ahead_segment_is_valid() {
        // local frame target (3, 0): 5 away from both disk centers
        let terrain = terrain();
        let a = pose(0.0, 0.0, 0.0);
        let b = pose(3.0, 0.0, 0.0);
        assert!(terrain.path_is_valid(&a, &b).unwrap());
    }

    #[test]
    fn test_zero_displacement_is_invalid() {
        // length check passes, forward-progress check fails (local x == 0)
        let terrain = terrain();
        let a = pose(2.0, 2.0, 1.0);
        assert!(!terrain.path_is_valid(&a, &a).unwrap());
    }

    #[test]
    fn test_segment_longer_than_limit_is_invalid() {
        let terrain = terrain();
        let a = pose(0.0, 0.0, 0.0);
        let b = pose(5.1, 0.0, 0.0);
        assert!(!terrain.path_is_valid(&a, &b).unwrap());
    }

    #[test]
    fn test_heading_change_above_limit_is_invalid() {
        let terrain = terrain();
        let a = pose(0.0, 0.0, 0.0);
        let b = pose(3.0, 0.0, 0.6);
        assert!(!terrain.path_is_valid(&a, &b).unwrap());
    }

    #[test]
    fn test_small_clockwise_turn_rejected_by_wrapped_delta() {
        // heading delta -0.1 wraps to 2*pi - 0.1 and counts as steep
        let terrain = terrain();
        let a = pose(0.0, 0.0, 0.0);
        let b = pose(3.0, 0.0, 2.0 * PI - 0.1);
        assert!(!terrain.path_is_valid(&a, &b).unwrap());
    }

    #[test]
    fn test_turn_in_place_is_invalid() {
        let terrain = terrain();
        let a = pose(1.0, 1.0, 0.0);
        let b = pose(1.0, 1.0, PI);
        assert!(!terrain.path_is_valid(&a, &b).unwrap());
    }

    #[test]
    fn test_target_behind_vehicle_is_invalid() {
        let terrain = terrain();
        let a = pose(10.0, 10.0, 0.0);
        let b = pose(7.0, 10.0, 0.0);
        assert!(!terrain.path_is_valid(&a, &b).unwrap());
    }

    #[test]
    fn test_target_inside_turning_disk_is_invalid() {
        // (0.5, 3.9) sits 0.51 from the disk center at (0, 4)
        let terrain = terrain();
        let a = pose(0.0, 0.0, 0.0);
        let b = pose(0.5, 3.9, 0.0);
        assert!(!terrain.path_is_valid(&a, &b).unwrap());
    }

    #[test]
    fn test_target_on_disk_boundary_is_valid() {
        // local (4, 4) is exactly radius 4 from the center at (0, 4)
        let terrain = terrain();
        let a = pose(0.0, 0.0, 0.0);
        let b = pose(4.0, 4.0, 0.0);
        let limits = SegmentLimits {
            max_path_length: 10.0,
            ..Default::default()
        };
        assert!(terrain.path_is_valid_with(&a, &b, &limits).unwrap());
    }

    #[test]
    fn test_forward_progress_in_rotated_frame() {
        // with heading pi/2 the body-frame transform maps -y displacement
        // to local +x, so the -y target is ahead and the +y one behind
        let terrain = terrain();
        let a = pose(5.0, 5.0, PI / 2.0);
        let ahead = pose(5.0, 2.0, PI / 2.0);
        let behind = pose(5.0, 8.0, PI / 2.0);
        assert!(terrain.path_is_valid(&a, &ahead).unwrap());
        assert!(!terrain.path_is_valid(&a, &behind).unwrap());
    }

    #[test]
    fn test_out_of_bounds_pose_is_an_error() {
        let terrain = terrain();
        let inside = pose(1.0, 1.0, 0.0);
        let outside = pose(60.0, 1.0, 0.0);
        assert!(matches!(
            terrain.path_is_valid(&inside, &outside),
            Err(DomainError::OutOfBounds(_))
        ));
        assert!(terrain.path_is_valid(&outside, &inside).is_err());
    }

    #[test]
    fn test_non_positive_limits_are_errors() {
        let terrain = terrain();
        let a = pose(0.0, 0.0, 0.0);
        let b = pose(3.0, 0.0, 0.0);
        for limits in [
            SegmentLimits {
                max_path_length: 0.0,
                ..Default::default()
            },
            SegmentLimits {
                max_path_angle: -0.5,
                ..Default::default()
            },
            SegmentLimits {
                max_turn_radius: 0.0,
                ..Default::default()
            },
        ] {
            assert!(matches!(
                terrain.path_is_valid_with(&a, &b, &limits),
                Err(DomainError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_altitude_step_limit() {
        let mut terrain = Terrain::new(10, 10, 10).unwrap();
        terrain.set_altitude(3, 0, 9).unwrap();
        let a = pose(0.5, 0.5, 0.0);
        let b = pose(3.5, 0.5, 0.0);

        // off by default
        assert!(terrain.path_is_valid(&a, &b).unwrap());

        let steep = SegmentLimits {
            max_altitude_step: Some(2),
            ..Default::default()
        };
        assert!(!terrain.path_is_valid_with(&a, &b, &steep).unwrap());

        let lenient = SegmentLimits {
            max_altitude_step: Some(9),
            ..Default::default()
        };
        assert!(terrain.path_is_valid_with(&a, &b, &lenient).unwrap());
    }

    #[test]
    fn test_default_limits() {
        let limits = SegmentLimits::default();
        assert_eq!(limits.max_path_length, 5.0);
        assert_eq!(limits.max_path_angle, 0.5);
        assert_eq!(limits.max_turn_radius, 4.0);
        assert!(limits.max_altitude_step.is_none());
    }

    #[test]
    fn test_terrain_as_segment_validator() {
        let terrain = terrain();
        let validator: &dyn SegmentValidator = &terrain;
        let a = pose(0.0, 0.0, 0.0);
        let b = pose(3.0, 0.0, 0.0);
        assert!(validator.segment_is_valid(&a, &b).unwrap());
    }
}
