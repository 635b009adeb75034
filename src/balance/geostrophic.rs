//! Geostrophically balanced velocity from SSH.
//!
//! Steady geostrophic balance between the pressure gradient and the Coriolis
//! force gives
//!
//! u = −(g/f) ∂η/∂y,   v = (g/f) ∂η/∂x
//!
//! The derivative stencil and the velocity placement are chosen separately.
//! The Coriolis parameter is sampled at each component's own location, so
//! on a β-plane a u-face sees f half a cell south of the cell center.

use log::debug;
use ndarray::{Axis, Zip};
use serde::{Deserialize, Serialize};

use super::{BalanceError, Coriolis, Stencil};
use crate::grid::{GridSpec, Location, ScalarField, Staggering, VectorField};

/// Standard gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Treatment of the outermost velocity points in the differentiated
/// direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryPolicy {
    /// u = 0 on the first and last row, v = 0 on the first and last column.
    #[default]
    ZeroEdges,
    /// Keep whatever the stencil produced.
    Keep,
}

/// Parameters of the balance computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalanceConfig {
    /// Gravitational acceleration g (m/s²)
    pub gravity: f64,
    /// Coriolis parameter
    pub coriolis: Coriolis,
    /// Derivative discretization
    pub stencil: Stencil,
    /// Velocity placement
    pub staggering: Staggering,
    /// Edge treatment
    pub boundary: BoundaryPolicy,
}

impl BalanceConfig {
    /// Configuration with standard gravity and zeroed edges.
    pub fn new(coriolis: Coriolis, stencil: Stencil, staggering: Staggering) -> Self {
        Self {
            gravity: GRAVITY,
            coriolis,
            stencil,
            staggering,
            boundary: BoundaryPolicy::default(),
        }
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Check the constants against `grid` without computing anything.
    pub fn validate(&self, grid: &GridSpec) -> Result<(), BalanceError> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(BalanceError::InvalidGravity(self.gravity));
        }
        self.coriolis.check_nonvanishing(
            grid,
            &[
                self.staggering.u_location(),
                self.staggering.v_location(),
            ],
        )
    }
}

/// Derives `(u, v)` from an SSH field.
///
/// # Example
///
/// ```
/// use eddy_island::balance::{BalanceConfig, Coriolis, GeostrophicBalancer, Stencil};
/// use eddy_island::grid::{GridSpec, Staggering};
/// use eddy_island::ssh::{GaussianEddy, SshBuilder};
///
/// let grid = GridSpec::new(64, 64, 5e3, 5e3);
/// let eta = SshBuilder::new()
///     .with_eddy(GaussianEddy::new(160e3, 160e3, 30e3, 0.5))
///     .build(&grid);
///
/// let config = BalanceConfig::new(
///     Coriolis::f_plane(1.0e-4),
///     Stencil::BackwardPeriodic,
///     Staggering::CGrid,
/// );
/// let velocity = GeostrophicBalancer::new(config).balance(&grid, &eta)?;
/// assert!(velocity.max_speed() > 0.0);
/// # Ok::<(), eddy_island::balance::BalanceError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GeostrophicBalancer {
    config: BalanceConfig,
}

impl GeostrophicBalancer {
    pub fn new(config: BalanceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BalanceConfig {
        &self.config
    }

    /// Balanced velocity for the cell-centered SSH field `eta`.
    pub fn balance(&self, grid: &GridSpec, eta: &ScalarField) -> Result<VectorField, BalanceError> {
        if eta.location != Location::Center {
            return Err(BalanceError::WrongLocation {
                expected: Location::Center,
                actual: eta.location,
            });
        }
        if !eta.fits(grid) {
            return Err(BalanceError::ShapeMismatch {
                expected: grid.shape(),
                actual: eta.shape(),
            });
        }
        self.config.validate(grid)?;

        let BalanceConfig {
            gravity: g,
            coriolis,
            stencil,
            staggering,
            boundary,
        } = self.config;
        let u_location = staggering.u_location();
        let v_location = staggering.v_location();

        let deta_dy = stencil.derivative(&eta.data, Axis(0), grid.dy());
        let deta_dx = stencil.derivative(&eta.data, Axis(1), grid.dx());
        let f_u = coriolis.field(grid, u_location);
        let f_v = coriolis.field(grid, v_location);

        let mut u = ScalarField::zeros(grid, u_location);
        Zip::from(&mut u.data)
            .and(&deta_dy)
            .and(&f_u)
            .for_each(|u, &d, &f| *u = -(g / f) * d);

        let mut v = ScalarField::zeros(grid, v_location);
        Zip::from(&mut v.data)
            .and(&deta_dx)
            .and(&f_v)
            .for_each(|v, &d, &f| *v = (g / f) * d);

        if boundary == BoundaryPolicy::ZeroEdges {
            let (ny, nx) = grid.shape();
            u.data.row_mut(0).fill(0.0);
            u.data.row_mut(ny - 1).fill(0.0);
            v.data.column_mut(0).fill(0.0);
            v.data.column_mut(nx - 1).fill(0.0);
        }

        debug!(
            "balanced velocity ({} stencil, {:?}): max |u| = {:.4} m/s, max |v| = {:.4} m/s",
            stencil.name(),
            staggering,
            u.max_abs(),
            v.max_abs()
        );

        Ok(VectorField::new(u, v, staggering))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssh::{GaussianEddy, SshBuilder};

    fn eddy_grid() -> (GridSpec, ScalarField) {
        let grid = GridSpec::new(80, 60, 5e3, 5e3);
        let eta = SshBuilder::new()
            .with_eddy(GaussianEddy::new(200e3, 150e3, 40e3, 0.5))
            .build(&grid);
        (grid, eta)
    }

    #[test]
    fn test_anticyclone_rotates_clockwise() {
        let (grid, eta) = eddy_grid();
        let config = BalanceConfig::new(
            Coriolis::f_plane(1.0e-4),
            Stencil::CenteredPeriodic,
            Staggering::Collocated,
        );
        let vel = GeostrophicBalancer::new(config).balance(&grid, &eta).unwrap();

        // Cell (j=35, i=39) is north of the center at (39.5, 29.5) cells
        assert!(vel.u.get(35, 39) > 0.0, "eastward flow north of a high");
        assert!(vel.u.get(24, 39) < 0.0, "westward flow south of a high");
        assert!(vel.v.get(29, 45) < 0.0, "southward flow east of a high");
        assert!(vel.v.get(29, 34) > 0.0, "northward flow west of a high");
    }

    #[test]
    fn test_zero_edges_policy() {
        let (grid, eta) = eddy_grid();
        let config = BalanceConfig::new(
            Coriolis::f_plane(1.0e-4),
            Stencil::BackwardPeriodic,
            Staggering::CGrid,
        );
        let vel = GeostrophicBalancer::new(config).balance(&grid, &eta).unwrap();
        let (ny, nx) = grid.shape();
        assert!(vel.u.data.row(0).iter().all(|&x| x == 0.0));
        assert!(vel.u.data.row(ny - 1).iter().all(|&x| x == 0.0));
        assert!(vel.v.data.column(0).iter().all(|&x| x == 0.0));
        assert!(vel.v.data.column(nx - 1).iter().all(|&x| x == 0.0));
        assert_eq!(vel.u.location, Location::UFace);
        assert_eq!(vel.v.location, Location::VFace);
    }

    #[test]
    fn test_keep_policy_leaves_wrapped_edges() {
        let grid = GridSpec::new(8, 8, 1e3, 1e3);
        let mut eta = ScalarField::zeros(&grid, Location::Center);
        eta.data[[7, 3]] = 1.0;
        let config = BalanceConfig::new(
            Coriolis::f_plane(1.0e-4),
            Stencil::BackwardPeriodic,
            Staggering::CGrid,
        )
        .with_boundary(BoundaryPolicy::Keep);
        let vel = GeostrophicBalancer::new(config).balance(&grid, &eta).unwrap();
        // Row 0 differences against the wrapped row 7
        let expected = -(GRAVITY / 1.0e-4) * (0.0 - 1.0) / 1e3;
        assert!((vel.u.get(0, 3) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_vanishing_coriolis() {
        let (grid, eta) = eddy_grid();
        let config = BalanceConfig::new(
            Coriolis::f_plane(0.0),
            Stencil::CenteredPeriodic,
            Staggering::Collocated,
        );
        assert!(matches!(
            GeostrophicBalancer::new(config).balance(&grid, &eta),
            Err(BalanceError::VanishingCoriolis { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_gravity() {
        let (grid, eta) = eddy_grid();
        let config = BalanceConfig::new(
            Coriolis::default(),
            Stencil::CenteredPeriodic,
            Staggering::Collocated,
        )
        .with_gravity(0.0);
        assert_eq!(
            GeostrophicBalancer::new(config).balance(&grid, &eta),
            Err(BalanceError::InvalidGravity(0.0))
        );
    }

    #[test]
    fn test_rejects_mismatched_shape() {
        let (_, eta) = eddy_grid();
        let other = GridSpec::new(10, 10, 5e3, 5e3);
        let config = BalanceConfig::new(
            Coriolis::default(),
            Stencil::CenteredPeriodic,
            Staggering::Collocated,
        );
        assert_eq!(
            GeostrophicBalancer::new(config).balance(&other, &eta),
            Err(BalanceError::ShapeMismatch {
                expected: (10, 10),
                actual: (60, 80)
            })
        );
    }

    #[test]
    fn test_rejects_face_ssh() {
        let grid = GridSpec::new(4, 4, 1.0, 1.0);
        let eta = ScalarField::zeros(&grid, Location::UFace);
        let config = BalanceConfig::new(
            Coriolis::default(),
            Stencil::CenteredPeriodic,
            Staggering::Collocated,
        );
        assert!(matches!(
            GeostrophicBalancer::new(config).balance(&grid, &eta),
            Err(BalanceError::WrongLocation { .. })
        ));
    }
}
