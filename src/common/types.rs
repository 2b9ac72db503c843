//! Common types used throughout terrain_nav

use std::f64::consts::PI;
use std::fmt;

use nalgebra::{Rotation2, Vector2, Vector3};

use crate::common::error::{DomainError, DomainResult};

/// 2D rigid-body state: planar position plus heading.
///
/// Immutable value object with Copy semantics. The heading invariant
/// (normalized to `[0, 2*pi)`) is established at construction and held
/// by every transformation, so the fields stay private.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    x: f64,
    y: f64,
    angle: f64,
}

impl Pose {
    /// Create a pose at `(x, y)` with the given heading in radians.
    ///
    /// The heading must already be normalized to `[0, 2*pi)`.
    pub fn new(x: f64, y: f64, angle: f64) -> DomainResult<Self> {
        if !(0.0..2.0 * PI).contains(&angle) {
            return Err(DomainError::InvalidParameter(format!(
                "angle should be in [0, 2*pi) (got '{}')",
                angle
            )));
        }
        Ok(Self { x, y, angle })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Heading in radians, in `[0, 2*pi)`
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Planar position as a nalgebra vector
    pub fn position(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// The pose as the 3-vector `(x, y, angle)`
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.angle)
    }

    /// Rotate the position about the origin by `by` radians and advance
    /// the heading by the same amount, returning a new pose.
    ///
    /// Pure transformation; never fails for finite input. The resulting
    /// heading is `(angle + by) mod 2*pi`.
    pub fn rotate(&self, by: f64) -> Pose {
        let position = Rotation2::new(by) * self.position();
        let mut angle = (self.angle + by).rem_euclid(2.0 * PI);
        // rem_euclid of a tiny negative value can round up to exactly 2*pi
        if angle >= 2.0 * PI {
            angle = 0.0;
        }
        Pose {
            x: position.x,
            y: position.y,
            angle,
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Pose] x={:.2} y={:.2} angle={:.2}rad ({:.1}deg)",
            self.x,
            self.y,
            self.angle,
            self.angle.to_degrees()
        )
    }
}
