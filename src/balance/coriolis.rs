//! Coriolis parameter on the f-plane and β-plane.
//!
//! f(y) = f₀ + β(y − y_ref)
//!
//! - f-plane: β = 0, f constant
//! - β-plane: f varies linearly with y
//!
//! Geostrophic balance divides by f, so a domain where f crosses or touches
//! zero cannot be balanced. [`Coriolis::check_nonvanishing`] detects this
//! before any division takes place.

use ndarray::Array2;

use super::BalanceError;
use crate::grid::{GridSpec, Location};

/// Coriolis parameter.
///
/// # Example
///
/// ```
/// use eddy_island::balance::Coriolis;
///
/// let f = Coriolis::beta_plane(5.0e-5, 2.0e-11, 0.0);
/// assert_eq!(f.f_at(0.0), 5.0e-5);
/// assert!((f.f_at(1.0e6) - 7.0e-5).abs() < 1e-18);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coriolis {
    /// Coriolis parameter at `y_ref` (s⁻¹)
    pub f0: f64,
    /// Meridional gradient β = ∂f/∂y (m⁻¹ s⁻¹)
    pub beta: f64,
    /// Reference y-coordinate (m)
    pub y_ref: f64,
}

impl Coriolis {
    pub fn new(f0: f64, beta: f64, y_ref: f64) -> Self {
        Self { f0, beta, y_ref }
    }

    /// Constant f.
    pub fn f_plane(f: f64) -> Self {
        Self {
            f0: f,
            beta: 0.0,
            y_ref: 0.0,
        }
    }

    /// f(y) = f₀ + β(y − y_ref).
    pub fn beta_plane(f0: f64, beta: f64, y_ref: f64) -> Self {
        Self { f0, beta, y_ref }
    }

    #[inline]
    pub fn f_at(&self, y: f64) -> f64 {
        self.f0 + self.beta * (y - self.y_ref)
    }

    pub fn is_f_plane(&self) -> bool {
        self.beta == 0.0
    }

    /// f sampled at every point of `location`; rows are constant.
    pub fn field(&self, grid: &GridSpec, location: Location) -> Array2<f64> {
        Array2::from_shape_fn(grid.shape(), |(j, _)| self.f_at(grid.y_at(j, location)))
    }

    /// The y where f vanishes inside `[y_lo, y_hi]`, if any.
    pub fn zero_crossing(&self, y_lo: f64, y_hi: f64) -> Option<f64> {
        let (f_lo, f_hi) = (self.f_at(y_lo), self.f_at(y_hi));
        if f_lo == 0.0 {
            return Some(y_lo);
        }
        if f_hi == 0.0 {
            return Some(y_hi);
        }
        if (f_lo < 0.0) != (f_hi < 0.0) {
            return Some(self.y_ref - self.f0 / self.beta);
        }
        None
    }

    /// Fail if f is zero or non-finite anywhere in the domain or at the
    /// sampled rows of `locations`.
    pub fn check_nonvanishing(
        &self,
        grid: &GridSpec,
        locations: &[Location],
    ) -> Result<(), BalanceError> {
        if !(self.f0.is_finite() && self.beta.is_finite() && self.y_ref.is_finite()) {
            return Err(BalanceError::NonFiniteCoriolis {
                f0: self.f0,
                beta: self.beta,
            });
        }

        let bounds = grid.bounds();
        let (mut y_lo, mut y_hi) = (bounds.y_min, bounds.y_max);
        for &location in locations {
            let (lo, hi) = grid.y_range(location);
            y_lo = y_lo.min(lo);
            y_hi = y_hi.max(hi);
        }

        match self.zero_crossing(y_lo, y_hi) {
            Some(y) => Err(BalanceError::VanishingCoriolis { y }),
            None => Ok(()),
        }
    }
}

impl Default for Coriolis {
    /// Mid-latitude f-plane, f = 10⁻⁴ s⁻¹.
    fn default() -> Self {
        Self::f_plane(1.0e-4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-18;

    #[test]
    fn test_f_plane() {
        let f = Coriolis::f_plane(1.0e-4);
        assert!(f.is_f_plane());
        assert_eq!(f.f_at(0.0), 1.0e-4);
        assert_eq!(f.f_at(5.0e5), 1.0e-4);
    }

    #[test]
    fn test_beta_plane_variation() {
        let f = Coriolis::beta_plane(1.0e-4, 1.0e-11, 0.0);
        assert!(!f.is_f_plane());
        assert!((f.f_at(1.0e6) - 1.1e-4).abs() < TOL);
    }

    #[test]
    fn test_field_rows_follow_location() {
        let grid = GridSpec::new(3, 2, 1e3, 1e3);
        let f = Coriolis::beta_plane(1.0e-4, 1.0e-11, 0.0);

        let center = f.field(&grid, Location::Center);
        let u_face = f.field(&grid, Location::UFace);
        assert!((center[[1, 2]] - f.f_at(1500.0)).abs() < TOL);
        assert!((u_face[[1, 2]] - f.f_at(1000.0)).abs() < TOL);
        assert_eq!(center[[1, 0]], center[[1, 2]]);
    }

    #[test]
    fn test_vanishing_f_plane_rejected() {
        let grid = GridSpec::new(10, 10, 1e3, 1e3);
        let err = Coriolis::f_plane(0.0)
            .check_nonvanishing(&grid, &[Location::Center])
            .unwrap_err();
        assert!(matches!(err, BalanceError::VanishingCoriolis { .. }));
    }

    #[test]
    fn test_beta_plane_crossing_rejected() {
        // f = 0 at y = 5 km, inside a 10 km domain
        let grid = GridSpec::new(10, 10, 1e3, 1e3);
        let f = Coriolis::beta_plane(-5.0e-5, 1.0e-8, 0.0);
        match f.check_nonvanishing(&grid, &[Location::Center]) {
            Err(BalanceError::VanishingCoriolis { y }) => assert!((y - 5e3).abs() < 1e-6),
            other => panic!("expected vanishing Coriolis, got {:?}", other),
        }
    }

    #[test]
    fn test_beta_plane_away_from_zero_accepted() {
        let grid = GridSpec::from_extent(1024e3, 1024e3, 256, 256);
        let f = Coriolis::beta_plane(5.0e-5, 2.0e-11, 0.0);
        assert!(f.check_nonvanishing(&grid, &[Location::UFace, Location::VFace]).is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        let grid = GridSpec::new(2, 2, 1.0, 1.0);
        let f = Coriolis::f_plane(f64::NAN);
        assert!(matches!(
            f.check_nonvanishing(&grid, &[Location::Center]),
            Err(BalanceError::NonFiniteCoriolis { .. })
        ));
    }

    #[test]
    fn test_northern_hemisphere_sign() {
        assert!(Coriolis::default().f_at(0.0) > 0.0);
    }
}
