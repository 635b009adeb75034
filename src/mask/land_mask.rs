//! Land/ocean classification of grid cells.
//!
//! The mask is stored at cell centers. Staggered locations are classified
//! from the two cell centers they separate: a face touching any land cell is
//! land, so no velocity is placed on a face between land and ocean.
//!
//! # Example
//!
//! ```
//! use eddy_island::grid::{GridSpec, Location};
//! use eddy_island::mask::LandMask;
//! use ndarray::array;
//!
//! let depth = array![[1000.0, 0.0], [1000.0, 1000.0]];
//! let mask = LandMask::from_depth(&depth, &[0.0]);
//!
//! assert!(mask.is_land(0, 1));
//! // The v-face west of cell (0, 1) touches the land cell
//! assert!(mask.is_land_at(0, 1, Location::VFace));
//! // The u-face south of cell (1, 1) touches it as well
//! assert!(mask.is_land_at(1, 1, Location::UFace));
//! assert!(!mask.is_land_at(1, 0, Location::UFace));
//! ```

use std::fmt;

use ndarray::Array2;

use crate::grid::{GridSpec, Location};

/// Land mask over cell centers.
#[derive(Clone, Debug, PartialEq)]
pub struct LandMask {
    /// True where the cell is land
    pub land: Array2<bool>,
}

impl LandMask {
    /// Wrap an existing classification.
    pub fn new(land: Array2<bool>) -> Self {
        Self { land }
    }

    /// A mask with no land.
    pub fn all_ocean(grid: &GridSpec) -> Self {
        Self::new(Array2::from_elem(grid.shape(), false))
    }

    /// A mask with no ocean.
    pub fn all_land(grid: &GridSpec) -> Self {
        Self::new(Array2::from_elem(grid.shape(), true))
    }

    /// Classify a depth array read back from disk.
    ///
    /// A cell is land when its depth equals one of `land_values` after
    /// rounding both to `f32`, the precision the files are stored in. Dry
    /// islands use `&[0.0]`; elevated islands add their elevation.
    pub fn from_depth(depth: &Array2<f64>, land_values: &[f64]) -> Self {
        let targets: Vec<f32> = land_values.iter().map(|&v| v as f32).collect();
        Self::new(depth.mapv(|d| targets.contains(&(d as f32))))
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.land.dim()
    }

    /// Check if cell `[j, i]` is land.
    #[inline]
    pub fn is_land(&self, j: usize, i: usize) -> bool {
        self.land[[j, i]]
    }

    /// Check if cell `[j, i]` is ocean.
    #[inline]
    pub fn is_ocean(&self, j: usize, i: usize) -> bool {
        !self.land[[j, i]]
    }

    /// Classify index `[j, i]` at a staggered location.
    ///
    /// Neighbours outside the domain are ignored rather than wrapped.
    pub fn is_land_at(&self, j: usize, i: usize, location: Location) -> bool {
        let here = self.is_land(j, i);
        match location {
            Location::Center => here,
            Location::UFace => here || (j > 0 && self.is_land(j - 1, i)),
            Location::VFace => here || (i > 0 && self.is_land(j, i - 1)),
        }
    }

    /// The full classification at `location`.
    pub fn at_location(&self, location: Location) -> Array2<bool> {
        Array2::from_shape_fn(self.shape(), |(j, i)| self.is_land_at(j, i, location))
    }

    /// Number of land cells.
    pub fn land_count(&self) -> usize {
        self.land.iter().filter(|&&l| l).count()
    }

    /// Number of ocean cells.
    pub fn ocean_count(&self) -> usize {
        self.land.len() - self.land_count()
    }

    /// Mark a single cell.
    pub fn set_land(&mut self, j: usize, i: usize, is_land: bool) {
        self.land[[j, i]] = is_land;
    }

    /// Get statistics about the land mask.
    pub fn statistics(&self) -> LandMaskStatistics {
        let land_cells = self.land_count();
        let coastal_cells = (0..self.shape().0)
            .flat_map(|j| (0..self.shape().1).map(move |i| (j, i)))
            .filter(|&(j, i)| self.is_ocean(j, i) && self.touches_land(j, i))
            .count();

        LandMaskStatistics {
            total_cells: self.land.len(),
            land_cells,
            ocean_cells: self.land.len() - land_cells,
            coastal_cells,
        }
    }

    fn touches_land(&self, j: usize, i: usize) -> bool {
        let (ny, nx) = self.shape();
        (j > 0 && self.is_land(j - 1, i))
            || (j + 1 < ny && self.is_land(j + 1, i))
            || (i > 0 && self.is_land(j, i - 1))
            || (i + 1 < nx && self.is_land(j, i + 1))
    }
}

/// Statistics about a land mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandMaskStatistics {
    /// Total number of cells
    pub total_cells: usize,
    /// Number of land cells
    pub land_cells: usize,
    /// Number of ocean cells
    pub ocean_cells: usize,
    /// Ocean cells sharing an edge with land
    pub coastal_cells: usize,
}

impl fmt::Display for LandMaskStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Land Mask Statistics:")?;
        writeln!(f, "  Total cells: {}", self.total_cells)?;
        writeln!(
            f,
            "  Land cells: {} ({:.1}%)",
            self.land_cells,
            100.0 * self.land_cells as f64 / self.total_cells as f64
        )?;
        writeln!(
            f,
            "  Ocean cells: {} ({:.1}%)",
            self.ocean_cells,
            100.0 * self.ocean_cells as f64 / self.total_cells as f64
        )?;
        write!(f, "  Coastal cells: {}", self.coastal_cells)
    }
}
