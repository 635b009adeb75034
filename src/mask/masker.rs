//! Zeroing of fields over land.

use log::debug;
use thiserror::Error;

use super::LandMask;
use crate::grid::{ScalarField, VectorField};

/// Error type for masking.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaskError {
    /// Field and mask were built on different grids.
    #[error("mask shape {mask:?} does not match field shape {field:?}")]
    ShapeMismatch {
        mask: (usize, usize),
        field: (usize, usize),
    },
}

/// Applies a [`LandMask`] to fields, honouring each field's location.
#[derive(Clone, Copy, Debug)]
pub struct LandMasker<'a> {
    mask: &'a LandMask,
    mask_ssh: bool,
}

impl<'a> LandMasker<'a> {
    /// Masker that touches velocities only.
    pub fn new(mask: &'a LandMask) -> Self {
        Self {
            mask,
            mask_ssh: false,
        }
    }

    /// Also zero SSH over land cells in [`LandMasker::apply_ssh`].
    pub fn with_ssh(mut self, mask_ssh: bool) -> Self {
        self.mask_ssh = mask_ssh;
        self
    }

    pub fn masks_ssh(&self) -> bool {
        self.mask_ssh
    }

    /// Zero `field` wherever its own location is land.
    ///
    /// Returns the number of points set to zero.
    pub fn apply(&self, field: &mut ScalarField) -> Result<usize, MaskError> {
        if field.shape() != self.mask.shape() {
            return Err(MaskError::ShapeMismatch {
                mask: self.mask.shape(),
                field: field.shape(),
            });
        }
        let location = field.location;
        let mut zeroed = 0;
        for ((j, i), value) in field.data.indexed_iter_mut() {
            if self.mask.is_land_at(j, i, location) {
                *value = 0.0;
                zeroed += 1;
            }
        }
        Ok(zeroed)
    }

    /// Zero both velocity components over land.
    pub fn apply_velocity(&self, velocity: &mut VectorField) -> Result<usize, MaskError> {
        let zeroed_u = self.apply(&mut velocity.u)?;
        let zeroed_v = self.apply(&mut velocity.v)?;
        debug!(
            "masked velocity: {} u-points on {}, {} v-points on {}",
            zeroed_u,
            velocity.u.location.name(),
            zeroed_v,
            velocity.v.location.name()
        );
        Ok(zeroed_u + zeroed_v)
    }

    /// Zero SSH over land when SSH masking is enabled; no-op otherwise.
    pub fn apply_ssh(&self, ssh: &mut ScalarField) -> Result<usize, MaskError> {
        if !self.mask_ssh {
            return Ok(0);
        }
        self.apply(ssh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridSpec, Location, Staggering};
    use ndarray::Array2;

    fn island_mask() -> LandMask {
        let mut mask = LandMask::new(Array2::from_elem((4, 4), false));
        mask.set_land(1, 1, true);
        mask
    }

    #[test]
    fn test_collocated_masks_cells_only() {
        let grid = GridSpec::new(4, 4, 1.0, 1.0);
        let mask = island_mask();
        let mut vel = VectorField::zeros(&grid, Staggering::Collocated);
        vel.u.data.fill(1.0);
        vel.v.data.fill(1.0);

        let zeroed = LandMasker::new(&mask).apply_velocity(&mut vel).unwrap();
        assert_eq!(zeroed, 2);
        assert_eq!(vel.u.get(1, 1), 0.0);
        assert_eq!(vel.u.get(2, 1), 1.0);
    }

    #[test]
    fn test_staggered_masks_adjacent_faces() {
        let grid = GridSpec::new(4, 4, 1.0, 1.0);
        let mask = island_mask();
        let mut vel = VectorField::zeros(&grid, Staggering::CGrid);
        vel.u.data.fill(1.0);
        vel.v.data.fill(1.0);

        LandMasker::new(&mask).apply_velocity(&mut vel).unwrap();

        // u-faces south and north of the land cell
        assert_eq!(vel.u.get(1, 1), 0.0);
        assert_eq!(vel.u.get(2, 1), 0.0);
        assert_eq!(vel.u.get(3, 1), 1.0);
        // v-faces west and east of the land cell
        assert_eq!(vel.v.get(1, 1), 0.0);
        assert_eq!(vel.v.get(1, 2), 0.0);
        assert_eq!(vel.v.get(1, 3), 1.0);
    }

    #[test]
    fn test_ssh_masking_is_opt_in() {
        let grid = GridSpec::new(4, 4, 1.0, 1.0);
        let mask = island_mask();
        let mut ssh = ScalarField::constant(&grid, Location::Center, 0.5);

        assert_eq!(LandMasker::new(&mask).apply_ssh(&mut ssh).unwrap(), 0);
        assert_eq!(ssh.get(1, 1), 0.5);

        let masker = LandMasker::new(&mask).with_ssh(true);
        assert_eq!(masker.apply_ssh(&mut ssh).unwrap(), 1);
        assert_eq!(ssh.get(1, 1), 0.0);
    }

    #[test]
    fn test_shape_mismatch() {
        let grid = GridSpec::new(3, 4, 1.0, 1.0);
        let mask = island_mask();
        let mut field = ScalarField::zeros(&grid, Location::Center);
        assert_eq!(
            LandMasker::new(&mask).apply(&mut field),
            Err(MaskError::ShapeMismatch {
                mask: (4, 4),
                field: (4, 3)
            })
        );
    }
}
