//! Case configuration.
//!
//! A case is described by an [`ExperimentConfig`], either parsed from TOML or
//! taken from one of the built-in [`Preset`]s.
//!
//! # Example TOML
//!
//! ```toml
//! name = "test"
//!
//! [grid]
//! nx = 120
//! ny = 80
//! dx = 5000.0
//! anchor = "cell-corner"
//!
//! [[islands]]
//! x = 200e3
//! y = 200e3
//! radius = 70e3
//! profile = "hard-wall"
//!
//! [[eddies]]
//! x = 450e3
//! y = 200e3
//! radius = 90e3
//! amplitude = 0.5
//!
//! [physics]
//! f0 = 1.0e-4
//!
//! [balance]
//! stencil = "one-sided-edges"
//! staggering = "collocated"
//! boundary = "keep"
//!
//! [output]
//! dir = "input"
//! ```

mod experiment_config;
mod preset;

pub use experiment_config::{
    BalanceSection, BathymetryConfig, EddyConfig, ExperimentConfig, GridConfig, IslandConfig,
    OutputConfig, PhysicsConfig, ProfileKind, SshConfig,
};
pub use preset::Preset;

use std::path::PathBuf;

use thiserror::Error;

use crate::balance::BalanceError;
use crate::grid::GridError;

/// Error type for configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("unknown preset '{0}' (expected one of: ideal, test, beta-plane, staggered, elevated)")]
    UnknownPreset(String),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Balance(#[from] BalanceError),
}
