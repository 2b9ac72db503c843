//! Terrain grid: fixed-size altitude map the vehicle operates on

use nalgebra::DMatrix;

use crate::common::{DomainError, DomainResult, Pose};

/// The environment the vehicle operates in: a `width x height` grid of
/// integer altitudes, each bounded by `max_altitude`.
///
/// The grid is owned by the terrain and only reachable through the
/// accessors below. An external map generator populates it cell by cell
/// with [`set_altitude`](Terrain::set_altitude) before validity queries
/// rely on altitude; the terrain itself never mutates the grid during a
/// query. Dimensions are fixed at construction.
pub struct Terrain {
    width: usize,
    height: usize,
    max_altitude: i32,
    grid: DMatrix<i32>,
    /// Advisory reference corner, not enforced by any check
    pub start: (usize, usize),
    /// Advisory reference corner, not enforced by any check
    pub end: (usize, usize),
}

impl Terrain {
    /// Create a terrain with a zero-filled altitude grid.
    pub fn new(width: usize, height: usize, max_altitude: i32) -> DomainResult<Self> {
        if width < 1 {
            return Err(DomainError::InvalidParameter(format!(
                "width should be strictly positive (got '{}')",
                width
            )));
        }
        if height < 1 {
            return Err(DomainError::InvalidParameter(format!(
                "height should be strictly positive (got '{}')",
                height
            )));
        }
        if max_altitude < 1 {
            return Err(DomainError::InvalidParameter(format!(
                "max_altitude should be strictly positive (got '{}')",
                max_altitude
            )));
        }
        Ok(Self {
            width,
            height,
            max_altitude,
            grid: DMatrix::zeros(width, height),
            start: (0, 0),
            end: (width, height),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn max_altitude(&self) -> i32 {
        self.max_altitude
    }

    /// True if the pose's position lies inside `[0, width) x [0, height)`
    pub fn contains(&self, pose: &Pose) -> bool {
        pose.x() >= 0.0
            && pose.x() < self.width as f64
            && pose.y() >= 0.0
            && pose.y() < self.height as f64
    }

    /// Grid cell under the pose's position, floor semantics. Heading is
    /// ignored. Fractional coordinates truncate toward the lower index.
    fn cell_index(&self, pose: &Pose) -> DomainResult<(usize, usize)> {
        let ix = pose.x().floor();
        let iy = pose.y().floor();
        if ix < 0.0 || ix >= self.width as f64 || iy < 0.0 || iy >= self.height as f64 {
            return Err(DomainError::OutOfBounds(format!(
                "pose ({}, {}) outside [0, {}) x [0, {})",
                pose.x(),
                pose.y(),
                self.width,
                self.height
            )));
        }
        Ok((ix as usize, iy as usize))
    }

    /// Altitude at the grid cell containing the pose's position.
    pub fn altitude_at(&self, pose: &Pose) -> DomainResult<i32> {
        let (ix, iy) = self.cell_index(pose)?;
        Ok(self.grid[(ix, iy)])
    }

    /// Write one altitude cell. Boundary contract for the external map
    /// generator: values stay within `[0, max_altitude]`.
    pub fn set_altitude(&mut self, ix: usize, iy: usize, value: i32) -> DomainResult<()> {
        if ix >= self.width || iy >= self.height {
            return Err(DomainError::OutOfBounds(format!(
                "cell ({}, {}) outside {} x {} grid",
                ix, iy, self.width, self.height
            )));
        }
        if value < 0 || value > self.max_altitude {
            return Err(DomainError::InvalidParameter(format!(
                "altitude should be in [0, {}] (got '{}')",
                self.max_altitude, value
            )));
        }
        self.grid[(ix, iy)] = value;
        Ok(())
    }
}
