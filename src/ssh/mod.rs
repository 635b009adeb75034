//! Sea-surface height synthesis.
//!
//! The SSH anomaly is a sum of isotropic Gaussian eddies. No land masking
//! happens here; see [`crate::mask`].

mod gaussian;

pub use gaussian::{GaussianEddy, SshBuilder};
