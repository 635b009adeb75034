//! Rasterization of islands onto a depth field.

use log::{debug, warn};
use ndarray::Array2;

use super::Island;
use crate::grid::{GridSpec, Location, ScalarField};
use crate::mask::LandMask;

/// Default reference ocean depth (m).
pub const DEFAULT_REFERENCE_DEPTH: f64 = 1000.0;

/// Output of [`BathymetryBuilder::build`].
#[derive(Clone, Debug, PartialEq)]
pub struct Bathymetry {
    /// Depth at cell centers, positive down; 0 on dry land, the elevation
    /// on elevated island cores
    pub depth: ScalarField,
    /// Cells inside an island core
    pub land: LandMask,
    /// Open-ocean depth H
    pub reference_depth: f64,
}

impl Bathymetry {
    #[inline]
    pub fn is_land(&self, j: usize, i: usize) -> bool {
        self.land.is_land(j, i)
    }

    pub fn land_count(&self) -> usize {
        self.land.land_count()
    }

    pub fn ocean_count(&self) -> usize {
        self.land.ocean_count()
    }
}

/// Builds a depth field of constant depth H broken by islands.
///
/// Each island contributes a land weight `t` in [0, 1] and every cell takes
/// the strongest one, so overlapping islands merge. The depth is
/// `H (1 - t) + E t` where `E` is the land value of the dominant island
/// (0 for dry islands). Cells with `t = 1` are land.
///
/// # Example
///
/// ```
/// use eddy_island::bathymetry::{BathymetryBuilder, Island};
/// use eddy_island::grid::GridSpec;
///
/// let grid = GridSpec::new(120, 80, 5e3, 5e3);
/// let bathy = BathymetryBuilder::new(1000.0)
///     .with_island(Island::hard_wall(200e3, 200e3, 70e3))
///     .build(&grid);
///
/// assert!(bathy.land_count() > 0);
/// assert_eq!(bathy.depth.max(), 1000.0);
/// assert_eq!(bathy.depth.min(), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BathymetryBuilder {
    reference_depth: f64,
    islands: Vec<Island>,
}

impl BathymetryBuilder {
    /// Flat ocean of depth `reference_depth`.
    pub fn new(reference_depth: f64) -> Self {
        Self {
            reference_depth,
            islands: Vec::new(),
        }
    }

    pub fn with_island(mut self, island: Island) -> Self {
        self.islands.push(island);
        self
    }

    pub fn with_islands<I: IntoIterator<Item = Island>>(mut self, islands: I) -> Self {
        self.islands.extend(islands);
        self
    }

    pub fn reference_depth(&self) -> f64 {
        self.reference_depth
    }

    pub fn islands(&self) -> &[Island] {
        &self.islands
    }

    /// Land value and weight of the dominant island at a point.
    fn dominant(&self, x: f64, y: f64) -> (f64, f64) {
        self.islands
            .iter()
            .map(|island| (island.land_value(), island.land_weight(x, y)))
            .fold((0.0, 0.0), |best, cur| if cur.1 > best.1 { cur } else { best })
    }

    /// Depth at an arbitrary point.
    pub fn depth_at(&self, x: f64, y: f64) -> f64 {
        let (land_value, t) = self.dominant(x, y);
        self.reference_depth * (1.0 - t) + land_value * t
    }

    /// Rasterize onto the cell centers of `grid`.
    pub fn build(&self, grid: &GridSpec) -> Bathymetry {
        let bounds = grid.bounds();
        for island in &self.islands {
            if !bounds.contains(island.x, island.y) {
                warn!(
                    "island center ({:.0}, {:.0}) m lies outside the domain {}",
                    island.x, island.y, bounds
                );
            }
        }

        let shape = grid.shape();
        let mut depth = Array2::zeros(shape);
        let mut land = Array2::from_elem(shape, false);
        for ((j, i), d) in depth.indexed_iter_mut() {
            let (x, y) = grid.coord(j, i, Location::Center);
            let (land_value, t) = self.dominant(x, y);
            *d = self.reference_depth * (1.0 - t) + land_value * t;
            land[[j, i]] = t >= 1.0;
        }

        let bathymetry = Bathymetry {
            depth: ScalarField::new(depth, Location::Center),
            land: LandMask::new(land),
            reference_depth: self.reference_depth,
        };
        debug!(
            "rasterized {} island(s) on {}: {} land / {} ocean cells",
            self.islands.len(),
            grid.resolution(),
            bathymetry.land_count(),
            bathymetry.ocean_count()
        );
        bathymetry
    }
}

impl Default for BathymetryBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_ocean() {
        let grid = GridSpec::new(10, 5, 1e3, 1e3);
        let bathy = BathymetryBuilder::default().build(&grid);
        assert_eq!(bathy.land_count(), 0);
        assert!(bathy.depth.data.iter().all(|&d| d == DEFAULT_REFERENCE_DEPTH));
    }

    #[test]
    fn test_sloped_rim_values() {
        let builder =
            BathymetryBuilder::new(1000.0).with_island(Island::sloped(0.0, 0.0, 50e3, 30e3));
        assert_eq!(builder.depth_at(0.0, 0.0), 0.0);
        assert_eq!(builder.depth_at(50e3, 0.0), 0.0);
        assert!((builder.depth_at(65e3, 0.0) - 500.0).abs() < 1e-9);
        assert_eq!(builder.depth_at(80e3, 0.0), 1000.0);
    }

    #[test]
    fn test_elevated_ramp_interpolates_to_elevation() {
        let builder = BathymetryBuilder::new(1000.0)
            .with_island(Island::elevated(0.0, 0.0, 50e3, 30e3, 50.0));
        assert_eq!(builder.depth_at(10e3, 0.0), 50.0);
        assert!((builder.depth_at(65e3, 0.0) - 525.0).abs() < 1e-9);
        assert_eq!(builder.depth_at(90e3, 0.0), 1000.0);
    }

    #[test]
    fn test_overlapping_islands_take_strongest_weight() {
        let builder = BathymetryBuilder::new(1000.0)
            .with_island(Island::sloped(0.0, 0.0, 10e3, 20e3))
            .with_island(Island::hard_wall(25e3, 0.0, 10e3));
        // Inside the second island's wall but on the first island's ramp
        assert_eq!(builder.depth_at(20e3, 0.0), 0.0);
        // On the first ramp only
        assert!((builder.depth_at(0.0, 20e3) - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_land_mask_matches_core() {
        let grid = GridSpec::new(40, 40, 1e3, 1e3);
        let island = Island::elevated(20e3, 20e3, 5e3, 5e3, 50.0);
        let bathy = BathymetryBuilder::new(1000.0).with_island(island).build(&grid);
        for ((j, i), &d) in bathy.depth.data.indexed_iter() {
            let (x, y) = grid.coord(j, i, Location::Center);
            let is_core = island.distance(x, y) < island.radius;
            if is_core {
                assert!(bathy.is_land(j, i));
                assert_eq!(d, 50.0);
            }
            if bathy.is_land(j, i) {
                assert_eq!(d, 50.0);
            }
        }
    }
}
