//! Island bathymetry.
//!
//! Depth is positive downward with a constant open-ocean value H. Three
//! island flanks are supported:
//!
//! | Profile | Core (`r < R`) | Ramp (`R <= r < R + w`) | Beyond |
//! |---|---|---|---|
//! | hard wall | 0 | none | H |
//! | sloped rim | 0 | `H (1 - t)` | H |
//! | elevated | E | `H (1 - t) + E t` | H |
//!
//! with `t = min(1, (R + w - r) / w)`.

mod builder;
mod island;

pub use builder::{Bathymetry, BathymetryBuilder, DEFAULT_REFERENCE_DEPTH};
pub use island::{Island, IslandProfile};
