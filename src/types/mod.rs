//! Strongly-typed grid descriptors.
//!
//! Newtypes that keep counts and extents from being mixed up with the many
//! other `usize`/`f64` parameters an experiment carries.
//!
//! # Example
//!
//! ```
//! use eddy_island::types::{Bounds2D, Resolution2D};
//!
//! let bounds = Bounds2D::new(0.0, 1000e3, 0.0, 500e3);
//! assert_eq!(bounds.width(), 1000e3);
//!
//! let res = Resolution2D::new(200, 100);
//! assert_eq!(res.shape(), (100, 200));
//! ```

mod bounds;
mod resolution;

pub use bounds::Bounds2D;
pub use resolution::Resolution2D;
