//! Scalar and vector fields on a [`GridSpec`].

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::{GridSpec, Location};

/// A 2-D scalar quantity (depth, SSH, one velocity component).
///
/// `data` is indexed `[j, i]` and always has the grid shape `(ny, nx)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    /// Values, row-major with rows along y
    pub data: Array2<f64>,
    /// Where the values are sampled
    pub location: Location,
}

impl ScalarField {
    /// Wrap an existing array.
    pub fn new(data: Array2<f64>, location: Location) -> Self {
        Self { data, location }
    }

    /// All-zero field on `grid`.
    pub fn zeros(grid: &GridSpec, location: Location) -> Self {
        Self::new(Array2::zeros(grid.shape()), location)
    }

    /// Constant field on `grid`.
    pub fn constant(grid: &GridSpec, location: Location, value: f64) -> Self {
        Self::new(Array2::from_elem(grid.shape(), value), location)
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    #[inline]
    pub fn get(&self, j: usize, i: usize) -> f64 {
        self.data[[j, i]]
    }

    /// True if the array shape matches the grid.
    pub fn fits(&self, grid: &GridSpec) -> bool {
        self.shape() == grid.shape()
    }

    /// Largest absolute value (0 for an empty field).
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |acc, &v| acc.max(v.abs()))
    }

    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Arithmetic mean over all points.
    pub fn mean(&self) -> f64 {
        self.data.mean().unwrap_or(0.0)
    }

    /// Subtract the domain mean so the field integrates to zero.
    pub fn remove_mean(&mut self) {
        let mean = self.mean();
        self.data.mapv_inplace(|v| v - mean);
    }

    /// True if every value is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

/// Placement of the two velocity components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Staggering {
    /// u and v both at cell centers.
    Collocated,
    /// u on [`Location::UFace`], v on [`Location::VFace`].
    CGrid,
}

impl Staggering {
    #[inline]
    pub fn u_location(self) -> Location {
        match self {
            Staggering::Collocated => Location::Center,
            Staggering::CGrid => Location::UFace,
        }
    }

    #[inline]
    pub fn v_location(self) -> Location {
        match self {
            Staggering::Collocated => Location::Center,
            Staggering::CGrid => Location::VFace,
        }
    }
}

/// Horizontal velocity `(u, v)`.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorField {
    /// Eastward component
    pub u: ScalarField,
    /// Northward component
    pub v: ScalarField,
    /// How `u` and `v` are placed
    pub staggering: Staggering,
}

impl VectorField {
    /// Assemble a velocity field.
    ///
    /// # Panics
    ///
    /// Panics if the component locations disagree with `staggering` or the
    /// two components have different shapes.
    pub fn new(u: ScalarField, v: ScalarField, staggering: Staggering) -> Self {
        assert_eq!(
            u.location,
            staggering.u_location(),
            "u must live on {:?} for {:?}",
            staggering.u_location(),
            staggering
        );
        assert_eq!(
            v.location,
            staggering.v_location(),
            "v must live on {:?} for {:?}",
            staggering.v_location(),
            staggering
        );
        assert_eq!(u.shape(), v.shape(), "u and v shapes differ");
        Self { u, v, staggering }
    }

    /// Zero velocity on `grid`.
    pub fn zeros(grid: &GridSpec, staggering: Staggering) -> Self {
        Self::new(
            ScalarField::zeros(grid, staggering.u_location()),
            ScalarField::zeros(grid, staggering.v_location()),
            staggering,
        )
    }

    pub fn fits(&self, grid: &GridSpec) -> bool {
        self.u.fits(grid) && self.v.fits(grid)
    }

    /// Largest speed, with staggered components first averaged to centers.
    pub fn max_speed(&self) -> f64 {
        let (ny, nx) = self.u.shape();
        let mut max = 0.0_f64;
        for j in 0..ny {
            for i in 0..nx {
                let (uc, vc) = self.center_value(j, i);
                max = max.max(uc.hypot(vc));
            }
        }
        max
    }

    /// Velocity at the center of cell `[j, i]`.
    ///
    /// On the C-grid this averages the two faces bounding the cell; the
    /// northernmost row and easternmost column use their single face.
    pub fn center_value(&self, j: usize, i: usize) -> (f64, f64) {
        match self.staggering {
            Staggering::Collocated => (self.u.get(j, i), self.v.get(j, i)),
            Staggering::CGrid => {
                let (ny, nx) = self.u.shape();
                let u = if j + 1 < ny {
                    0.5 * (self.u.get(j, i) + self.u.get(j + 1, i))
                } else {
                    self.u.get(j, i)
                };
                let v = if i + 1 < nx {
                    0.5 * (self.v.get(j, i) + self.v.get(j, i + 1))
                } else {
                    self.v.get(j, i)
                };
                (u, v)
            }
        }
    }
}
