//! Land masking.
//!
//! [`LandMask`] classifies cells as land or ocean; [`LandMasker`] zeroes
//! velocities (and optionally SSH) over land, evaluating staggered
//! components at their own face.

mod land_mask;
mod masker;

pub use land_mask::{LandMask, LandMaskStatistics};
pub use masker::{LandMasker, MaskError};
