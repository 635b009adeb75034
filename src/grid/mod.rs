//! Uniform Cartesian grid and the fields that live on it.
//!
//! - [`GridSpec`]: cell counts, spacing and coordinate anchoring
//! - [`Location`]: cell centers and the two staggered face positions
//! - [`ScalarField`] / [`VectorField`]: dense `(ny, nx)` arrays tagged with
//!   their location

mod field;
mod grid_spec;

pub use field::{ScalarField, Staggering, VectorField};
pub use grid_spec::{Anchor, GridError, GridSpec, Location};
