//! Geostrophic velocity diagnosis.
//!
//! - [`Coriolis`]: f-plane / β-plane Coriolis parameter
//! - [`Stencil`]: first-derivative discretizations
//! - [`GeostrophicBalancer`]: `(u, v)` from SSH

mod coriolis;
mod geostrophic;
mod stencil;

pub use coriolis::Coriolis;
pub use geostrophic::{BalanceConfig, BoundaryPolicy, GRAVITY, GeostrophicBalancer};
pub use stencil::Stencil;

use thiserror::Error;

use crate::grid::Location;

/// Errors from the balance computation.
#[derive(Debug, Error, PartialEq)]
pub enum BalanceError {
    #[error("Coriolis parameter vanishes at y = {y:.1} m")]
    VanishingCoriolis { y: f64 },

    #[error("non-finite Coriolis parameter (f0 = {f0}, beta = {beta})")]
    NonFiniteCoriolis { f0: f64, beta: f64 },

    #[error("gravity must be finite and positive, got {0}")]
    InvalidGravity(f64),

    #[error("SSH shape {actual:?} does not match grid shape {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("SSH must live on {}, got {}", expected.name(), actual.name())]
    WrongLocation { expected: Location, actual: Location },
}
