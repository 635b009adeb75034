//! Grid specification and coordinate arrays.
//!
//! Coordinates are in meters with the origin at the south-west corner of the
//! domain. Arrays are indexed `[j, i]` with `j` along y (rows) and `i` along
//! x (columns).
//!
//! Staggered locations follow the C-grid placement used by the consuming
//! model:
//!
//! ```text
//!          +-----------+
//!          |           |
//!      V   |     C     |        C = Center (i, j)
//!   (i,j)  |   (i,j)   |        U = UFace, between rows j-1 and j
//!          |           |        V = VFace, between columns i-1 and i
//!          +-----U-----+
//!              (i,j)
//! ```

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Bounds2D, Resolution2D};

/// Error type for invalid grid parameters.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    /// Zero cells in one direction.
    #[error("grid dimensions must be positive (nx={nx}, ny={ny})")]
    ZeroCells { nx: usize, ny: usize },

    /// Non-positive or non-finite spacing.
    #[error("grid spacing must be positive and finite (dx={dx}, dy={dy})")]
    InvalidSpacing { dx: f64, dy: f64 },
}

/// Where the coordinate of cell `(i, j)` is anchored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// `x_i = (i + 1/2) dx`: the geometric cell center.
    #[default]
    CellCenter,
    /// `x_i = i dx`: the south-west cell corner.
    CellCorner,
}

impl Anchor {
    #[inline]
    fn offset(self) -> f64 {
        match self {
            Anchor::CellCenter => 0.5,
            Anchor::CellCorner => 0.0,
        }
    }
}

/// Position of a value within a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    /// Cell center.
    Center,
    /// Face between rows `j-1` and `j`, half a cell south of the center.
    UFace,
    /// Face between columns `i-1` and `i`, half a cell west of the center.
    VFace,
}

impl Location {
    /// Half-cell shift `(sx, sy)` relative to the center, in cell units.
    #[inline]
    fn shift(self) -> (f64, f64) {
        match self {
            Location::Center => (0.0, 0.0),
            Location::UFace => (0.0, -0.5),
            Location::VFace => (-0.5, 0.0),
        }
    }

    /// Short name used in log messages.
    pub fn name(self) -> &'static str {
        match self {
            Location::Center => "center",
            Location::UFace => "u-face",
            Location::VFace => "v-face",
        }
    }
}

/// Uniform Cartesian grid.
///
/// # Example
///
/// ```
/// use eddy_island::grid::{GridSpec, Location};
///
/// let grid = GridSpec::from_extent(1024e3, 1024e3, 256, 256);
/// assert_eq!(grid.dx(), 4000.0);
///
/// // Cell centers are offset by half a cell
/// let (x, y) = grid.coord(0, 0, Location::Center);
/// assert_eq!((x, y), (2000.0, 2000.0));
///
/// // The u-face sits on the southern cell edge
/// let (_, y_u) = grid.coord(0, 0, Location::UFace);
/// assert_eq!(y_u, 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    resolution: Resolution2D,
    dx: f64,
    dy: f64,
    anchor: Anchor,
}

impl GridSpec {
    /// Create a grid from cell counts and spacing.
    ///
    /// # Panics
    ///
    /// Panics on zero counts or non-positive spacing; use [`GridSpec::try_new`]
    /// for a fallible version.
    pub fn new(nx: usize, ny: usize, dx: f64, dy: f64) -> Self {
        match Self::try_new(nx, ny, dx, dy) {
            Ok(grid) => grid,
            Err(e) => panic!("{}", e),
        }
    }

    /// Create a grid from cell counts and spacing, validating both.
    pub fn try_new(nx: usize, ny: usize, dx: f64, dy: f64) -> Result<Self, GridError> {
        if nx == 0 || ny == 0 {
            return Err(GridError::ZeroCells { nx, ny });
        }
        if !(dx.is_finite() && dy.is_finite() && dx > 0.0 && dy > 0.0) {
            return Err(GridError::InvalidSpacing { dx, dy });
        }
        Ok(Self {
            resolution: Resolution2D::new(nx, ny),
            dx,
            dy,
            anchor: Anchor::default(),
        })
    }

    /// Create a grid covering `[0, lx] × [0, ly]` with `nx × ny` cells.
    pub fn from_extent(lx: f64, ly: f64, nx: usize, ny: usize) -> Self {
        match Self::try_from_extent(lx, ly, nx, ny) {
            Ok(grid) => grid,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible version of [`GridSpec::from_extent`].
    pub fn try_from_extent(lx: f64, ly: f64, nx: usize, ny: usize) -> Result<Self, GridError> {
        if nx == 0 || ny == 0 {
            return Err(GridError::ZeroCells { nx, ny });
        }
        Self::try_new(nx, ny, lx / nx as f64, ly / ny as f64)
    }

    /// Use a different coordinate anchor.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[inline]
    pub fn nx(&self) -> usize {
        self.resolution.nx()
    }

    #[inline]
    pub fn ny(&self) -> usize {
        self.resolution.ny()
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.dy
    }

    #[inline]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    #[inline]
    pub fn resolution(&self) -> Resolution2D {
        self.resolution
    }

    /// Array shape `(ny, nx)` shared by every location.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.resolution.shape()
    }

    /// Domain width `nx * dx`.
    pub fn lx(&self) -> f64 {
        self.nx() as f64 * self.dx
    }

    /// Domain height `ny * dy`.
    pub fn ly(&self) -> f64 {
        self.ny() as f64 * self.dy
    }

    /// Outer extent of the cells.
    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::new(0.0, self.lx(), 0.0, self.ly())
    }

    /// x-coordinate of column `i` at `location`.
    #[inline]
    pub fn x_at(&self, i: usize, location: Location) -> f64 {
        (i as f64 + self.anchor.offset() + location.shift().0) * self.dx
    }

    /// y-coordinate of row `j` at `location`.
    #[inline]
    pub fn y_at(&self, j: usize, location: Location) -> f64 {
        (j as f64 + self.anchor.offset() + location.shift().1) * self.dy
    }

    /// Physical coordinate `(x, y)` of array index `[j, i]`.
    #[inline]
    pub fn coord(&self, j: usize, i: usize, location: Location) -> (f64, f64) {
        (self.x_at(i, location), self.y_at(j, location))
    }

    /// 1-D x-axis coordinates (length `nx`).
    pub fn x_coords(&self, location: Location) -> Array1<f64> {
        Array1::from_shape_fn(self.nx(), |i| self.x_at(i, location))
    }

    /// 1-D y-axis coordinates (length `ny`).
    pub fn y_coords(&self, location: Location) -> Array1<f64> {
        Array1::from_shape_fn(self.ny(), |j| self.y_at(j, location))
    }

    /// 2-D coordinate arrays `(X, Y)`, each of shape `(ny, nx)`.
    pub fn meshgrid(&self, location: Location) -> (Array2<f64>, Array2<f64>) {
        let x = Array2::from_shape_fn(self.shape(), |(_, i)| self.x_at(i, location));
        let y = Array2::from_shape_fn(self.shape(), |(j, _)| self.y_at(j, location));
        (x, y)
    }

    /// Evaluate `f(x, y)` at every point of `location`.
    pub fn evaluate<F>(&self, location: Location, f: F) -> Array2<f64>
    where
        F: Fn(f64, f64) -> f64,
    {
        Array2::from_shape_fn(self.shape(), |(j, i)| {
            let (x, y) = self.coord(j, i, location);
            f(x, y)
        })
    }

    /// Smallest and largest y-coordinate sampled at `location`.
    pub fn y_range(&self, location: Location) -> (f64, f64) {
        (self.y_at(0, location), self.y_at(self.ny() - 1, location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extent_spacing() {
        let grid = GridSpec::from_extent(1000e3, 500e3, 200, 100);
        assert_eq!(grid.dx(), 5000.0);
        assert_eq!(grid.dy(), 5000.0);
        assert_eq!(grid.shape(), (100, 200));
        assert_eq!(grid.lx(), 1000e3);
    }

    #[test]
    fn test_center_coordinates() {
        let grid = GridSpec::new(4, 3, 10.0, 20.0);
        let x = grid.x_coords(Location::Center);
        let y = grid.y_coords(Location::Center);
        assert_eq!(x.to_vec(), vec![5.0, 15.0, 25.0, 35.0]);
        assert_eq!(y.to_vec(), vec![10.0, 30.0, 50.0]);
    }

    #[test]
    fn test_corner_anchor() {
        let grid = GridSpec::new(200, 100, 5e3, 5e3).with_anchor(Anchor::CellCorner);
        assert_eq!(grid.coord(50, 160, Location::Center), (800e3, 250e3));
    }

    #[test]
    fn test_face_offsets() {
        let grid = GridSpec::new(4, 4, 10.0, 10.0);
        // u-face: same x as the center, half a cell south
        assert_eq!(grid.coord(2, 1, Location::UFace), (15.0, 20.0));
        // v-face: same y as the center, half a cell west
        assert_eq!(grid.coord(2, 1, Location::VFace), (10.0, 25.0));
    }

    #[test]
    fn test_meshgrid_orientation() {
        let grid = GridSpec::new(3, 2, 1.0, 1.0);
        let (x, y) = grid.meshgrid(Location::Center);
        assert_eq!(x.dim(), (2, 3));
        assert_eq!(x[[1, 2]], 2.5);
        assert_eq!(y[[1, 2]], 1.5);
    }

    #[test]
    fn test_invalid_parameters() {
        assert_eq!(
            GridSpec::try_new(0, 10, 1.0, 1.0),
            Err(GridError::ZeroCells { nx: 0, ny: 10 })
        );
        assert!(matches!(
            GridSpec::try_new(10, 10, -1.0, 1.0),
            Err(GridError::InvalidSpacing { .. })
        ));
        assert!(matches!(
            GridSpec::try_new(10, 10, 1.0, f64::NAN),
            Err(GridError::InvalidSpacing { .. })
        ));
    }

    #[test]
    fn test_bounds_cover_all_cells() {
        let grid = GridSpec::new(120, 80, 5e3, 5e3);
        let b = grid.bounds();
        assert_eq!(b.width(), 600e3);
        assert_eq!(b.height(), 400e3);
    }
}
