//! # eddy-island
//!
//! Initial-condition generator for a barotropic eddy meeting an island.
//!
//! This crate provides the building blocks for one case:
//! - Uniform Cartesian grid with cell-centered and C-grid face locations
//! - Island bathymetry (hard wall, sloped rim, elevated core)
//! - Gaussian sea-surface height eddies
//! - Geostrophically balanced velocity on f- and β-planes
//! - Land masking of velocity (and optionally SSH)
//! - Raw big-endian `f32` field files for the ocean model
//! - TOML case configuration with built-in presets
//!
//! The library logs through the `log` facade and never installs a logger.

pub mod balance;
pub mod bathymetry;
pub mod config;
pub mod experiment;
pub mod grid;
pub mod io;
pub mod mask;
pub mod ssh;
pub mod types;

// Re-export main types for convenience
pub use balance::{
    BalanceConfig, BalanceError, BoundaryPolicy, Coriolis, GRAVITY, GeostrophicBalancer, Stencil,
};
pub use bathymetry::{Bathymetry, BathymetryBuilder, Island, IslandProfile};
pub use config::{ConfigError, ExperimentConfig, Preset};
pub use experiment::{Experiment, ExperimentError, ExperimentFields, ExperimentReport};
pub use grid::{Anchor, GridError, GridSpec, Location, ScalarField, Staggering, VectorField};
pub use io::{BinaryIoError, OutputNames, read_field, write_field};
pub use mask::{LandMask, LandMasker, MaskError};
pub use ssh::{GaussianEddy, SshBuilder};
pub use types::{Bounds2D, Resolution2D};
