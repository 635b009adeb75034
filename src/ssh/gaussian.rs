//! Gaussian eddy sea-surface height.

use log::{debug, warn};

use crate::grid::{GridSpec, Location, ScalarField};

/// Isotropic Gaussian SSH anomaly `η₀ exp(-d² / (2R²))`.
///
/// A positive amplitude is a high-pressure (anticyclonic) eddy when paired
/// with a positive Coriolis parameter.
///
/// # Example
///
/// ```
/// use eddy_island::ssh::GaussianEddy;
///
/// let eddy = GaussianEddy::new(800e3, 250e3, 100e3, 0.5);
/// assert_eq!(eddy.eta_at(800e3, 250e3), 0.5);
///
/// let at_radius = eddy.eta_at(900e3, 250e3);
/// assert!((at_radius - 0.5 * (-0.5_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianEddy {
    /// Center x (m)
    pub x: f64,
    /// Center y (m)
    pub y: f64,
    /// e-folding radius R (m)
    pub radius: f64,
    /// Peak anomaly η₀ (m)
    pub amplitude: f64,
}

impl GaussianEddy {
    /// # Panics
    ///
    /// Panics if `radius` is not positive and finite.
    pub fn new(x: f64, y: f64, radius: f64, amplitude: f64) -> Self {
        assert!(
            radius.is_finite() && radius > 0.0,
            "eddy radius must be positive, got {}",
            radius
        );
        Self {
            x,
            y,
            radius,
            amplitude,
        }
    }

    /// SSH anomaly at a point.
    #[inline]
    pub fn eta_at(&self, x: f64, y: f64) -> f64 {
        let d2 = (x - self.x).powi(2) + (y - self.y).powi(2);
        self.amplitude * (-d2 / (2.0 * self.radius * self.radius)).exp()
    }

    /// Northern-hemisphere sense of rotation implied by the amplitude sign.
    pub fn is_anticyclonic(&self) -> bool {
        self.amplitude > 0.0
    }
}

/// Superposes Gaussian eddies into an SSH field at cell centers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SshBuilder {
    eddies: Vec<GaussianEddy>,
    remove_mean: bool,
}

impl SshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_eddy(mut self, eddy: GaussianEddy) -> Self {
        self.eddies.push(eddy);
        self
    }

    pub fn with_eddies<I: IntoIterator<Item = GaussianEddy>>(mut self, eddies: I) -> Self {
        self.eddies.extend(eddies);
        self
    }

    /// Subtract the domain mean after synthesis.
    pub fn with_remove_mean(mut self, remove_mean: bool) -> Self {
        self.remove_mean = remove_mean;
        self
    }

    pub fn eddies(&self) -> &[GaussianEddy] {
        &self.eddies
    }

    /// Summed anomaly at a point, before any mean removal.
    pub fn eta_at(&self, x: f64, y: f64) -> f64 {
        self.eddies.iter().map(|e| e.eta_at(x, y)).sum()
    }

    /// SSH on the cell centers of `grid`.
    pub fn build(&self, grid: &GridSpec) -> ScalarField {
        self.build_at(grid, Location::Center)
    }

    /// SSH sampled at any location of `grid`.
    pub fn build_at(&self, grid: &GridSpec, location: Location) -> ScalarField {
        let bounds = grid.bounds();
        for eddy in &self.eddies {
            if !bounds.contains(eddy.x, eddy.y) {
                warn!(
                    "eddy center ({:.0}, {:.0}) m lies outside the domain {}",
                    eddy.x, eddy.y, bounds
                );
            }
        }

        let mut eta = ScalarField::new(grid.evaluate(location, |x, y| self.eta_at(x, y)), location);
        if self.remove_mean {
            let mean = eta.mean();
            eta.remove_mean();
            debug!("removed SSH mean {:.3e} m", mean);
        }
        eta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Anchor;

    #[test]
    #[should_panic(expected = "eddy radius must be positive")]
    fn test_zero_radius_panics() {
        GaussianEddy::new(0.0, 0.0, 0.0, 0.5);
    }

    #[test]
    fn test_peak_on_grid_point() {
        let grid = GridSpec::new(200, 100, 5e3, 5e3).with_anchor(Anchor::CellCorner);
        let eta = SshBuilder::new()
            .with_eddy(GaussianEddy::new(800e3, 250e3, 100e3, 0.5))
            .build(&grid);
        assert_eq!(eta.get(50, 160), 0.5);
        assert_eq!(eta.max(), 0.5);
        // 100 km east of the center
        assert!((eta.get(50, 180) - 0.303_265_329_856_316_7).abs() < 1e-12);
    }

    #[test]
    fn test_isotropy() {
        let eddy = GaussianEddy::new(0.0, 0.0, 60e3, 0.25);
        let east = eddy.eta_at(40e3, 0.0);
        let north = eddy.eta_at(0.0, 40e3);
        let diagonal = eddy.eta_at(40e3 / 2.0_f64.sqrt(), 40e3 / 2.0_f64.sqrt());
        assert!((east - north).abs() < 1e-15);
        assert!((east - diagonal).abs() < 1e-12);
    }

    #[test]
    fn test_superposition() {
        let a = GaussianEddy::new(0.0, 0.0, 10e3, 0.5);
        let b = GaussianEddy::new(30e3, 0.0, 10e3, -0.2);
        let builder = SshBuilder::new().with_eddies([a, b]);
        let expected = a.eta_at(15e3, 0.0) + b.eta_at(15e3, 0.0);
        assert!((builder.eta_at(15e3, 0.0) - expected).abs() < 1e-15);
        assert!(!b.is_anticyclonic());
    }

    #[test]
    fn test_remove_mean() {
        let grid = GridSpec::new(50, 40, 5e3, 5e3);
        let eta = SshBuilder::new()
            .with_eddy(GaussianEddy::new(125e3, 100e3, 30e3, 0.5))
            .with_remove_mean(true)
            .build(&grid);
        assert!(eta.mean().abs() < 1e-12);
        assert!(eta.min() < 0.0);
    }
}
