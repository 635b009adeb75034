//! End-to-end case generation.
//!
//! An [`Experiment`] turns an [`ExperimentConfig`](crate::config::ExperimentConfig)
//! into the four input files of the ocean model:
//!
//! ```text
//! config ─► grid ─► bathymetry ─┐
//!               └─► SSH ─► balance ─► mask ─► write
//! ```

mod runner;

pub use runner::{Experiment, ExperimentFields, ExperimentReport};

use thiserror::Error;

use crate::balance::BalanceError;
use crate::config::ConfigError;
use crate::grid::GridError;
use crate::io::BinaryIoError;
use crate::mask::MaskError;

/// Any failure while generating a case.
#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Balance(#[from] BalanceError),

    #[error(transparent)]
    Mask(#[from] MaskError),

    #[error(transparent)]
    Io(#[from] BinaryIoError),
}
