//! TOML structure of a case.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::balance::{BalanceConfig, BoundaryPolicy, Coriolis, GRAVITY, Stencil};
use crate::bathymetry::{BathymetryBuilder, DEFAULT_REFERENCE_DEPTH, Island};
use crate::grid::{Anchor, GridSpec, Staggering};
use crate::io::OutputNames;
use crate::ssh::{GaussianEddy, SshBuilder};

// ============================================================================
// Grid
// ============================================================================

/// `[grid]`: cell counts plus either spacing or extent per direction.
///
/// `dy`/`ly` may be omitted, in which case the y spacing equals the x
/// spacing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub nx: usize,
    pub ny: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dx: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lx: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ly: Option<f64>,
    #[serde(default)]
    pub anchor: Anchor,
}

impl GridConfig {
    /// Grid with uniform spacing `dx = dy = spacing`.
    pub fn uniform(nx: usize, ny: usize, spacing: f64, anchor: Anchor) -> Self {
        Self {
            nx,
            ny,
            dx: Some(spacing),
            dy: Some(spacing),
            lx: None,
            ly: None,
            anchor,
        }
    }

    /// Grid covering `lx × ly`.
    pub fn extent(nx: usize, ny: usize, lx: f64, ly: f64, anchor: Anchor) -> Self {
        Self {
            nx,
            ny,
            dx: None,
            dy: None,
            lx: Some(lx),
            ly: Some(ly),
            anchor,
        }
    }

    fn spacing(
        axis: &str,
        d: Option<f64>,
        l: Option<f64>,
        n: usize,
    ) -> Result<Option<f64>, ConfigError> {
        match (d, l) {
            (Some(_), Some(_)) => Err(ConfigError::Invalid(format!(
                "grid: give either d{axis} or l{axis}, not both"
            ))),
            (Some(d), None) => Ok(Some(d)),
            (None, Some(l)) => Ok(Some(l / n as f64)),
            (None, None) => Ok(None),
        }
    }

    pub fn to_grid(&self) -> Result<GridSpec, ConfigError> {
        let dx = Self::spacing("x", self.dx, self.lx, self.nx)?
            .ok_or_else(|| ConfigError::Invalid("grid: dx or lx is required".into()))?;
        let dy = Self::spacing("y", self.dy, self.ly, self.ny)?.unwrap_or(dx);
        Ok(GridSpec::try_new(self.nx, self.ny, dx, dy)?.with_anchor(self.anchor))
    }
}

// ============================================================================
// Bathymetry
// ============================================================================

/// `[bathymetry]`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BathymetryConfig {
    /// Open-ocean depth H (m)
    #[serde(default = "default_reference_depth")]
    pub reference_depth: f64,
}

fn default_reference_depth() -> f64 {
    DEFAULT_REFERENCE_DEPTH
}

impl Default for BathymetryConfig {
    fn default() -> Self {
        Self {
            reference_depth: DEFAULT_REFERENCE_DEPTH,
        }
    }
}

/// Island cross-section selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileKind {
    #[default]
    HardWall,
    SlopedRim,
    Elevated,
}

/// One `[[islands]]` entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IslandConfig {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    #[serde(default)]
    pub profile: ProfileKind,
    /// Ramp width w (m), sloped and elevated profiles
    #[serde(default)]
    pub slope_width: f64,
    /// Land depth value E (m), elevated profile
    #[serde(default)]
    pub elevation: f64,
}

impl IslandConfig {
    pub fn to_island(&self) -> Island {
        match self.profile {
            ProfileKind::HardWall => Island::hard_wall(self.x, self.y, self.radius),
            ProfileKind::SlopedRim => Island::sloped(self.x, self.y, self.radius, self.slope_width),
            ProfileKind::Elevated => Island::elevated(
                self.x,
                self.y,
                self.radius,
                self.slope_width,
                self.elevation,
            ),
        }
    }

    fn validate(&self, k: usize, reference_depth: f64) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(format!("islands[{k}]: {msg}")));
        if !(self.x.is_finite() && self.y.is_finite()) {
            return invalid("center must be finite".into());
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return invalid(format!("radius must be positive, got {}", self.radius));
        }
        if self.profile != ProfileKind::HardWall
            && !(self.slope_width.is_finite() && self.slope_width >= 0.0)
        {
            return invalid(format!(
                "slope_width must be non-negative, got {}",
                self.slope_width
            ));
        }
        if self.profile == ProfileKind::Elevated
            && !(self.elevation.is_finite()
                && self.elevation >= 0.0
                && self.elevation < reference_depth)
        {
            return invalid(format!(
                "elevation must lie in [0, {reference_depth}), got {}",
                self.elevation
            ));
        }
        Ok(())
    }
}

// ============================================================================
// SSH
// ============================================================================

/// `[ssh]`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SshConfig {
    /// Subtract the domain mean before balancing
    #[serde(default)]
    pub remove_mean: bool,
    /// Zero SSH over land in the written file
    #[serde(default)]
    pub mask_ssh: bool,
}

/// One `[[eddies]]` entry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EddyConfig {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub amplitude: f64,
}

impl EddyConfig {
    pub fn to_eddy(&self) -> GaussianEddy {
        GaussianEddy::new(self.x, self.y, self.radius, self.amplitude)
    }

    fn validate(&self, k: usize) -> Result<(), ConfigError> {
        if !(self.x.is_finite() && self.y.is_finite() && self.amplitude.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "eddies[{k}]: center and amplitude must be finite"
            )));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "eddies[{k}]: radius must be positive, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Physics and balance
// ============================================================================

/// `[physics]`: gravity and the Coriolis parameter `f0 + beta (y - y_ref)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    #[serde(default = "default_f0")]
    pub f0: f64,
    #[serde(default)]
    pub beta: f64,
    #[serde(default)]
    pub y_ref: f64,
}

fn default_gravity() -> f64 {
    GRAVITY
}

fn default_f0() -> f64 {
    1.0e-4
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            f0: default_f0(),
            beta: 0.0,
            y_ref: 0.0,
        }
    }
}

impl PhysicsConfig {
    pub fn coriolis(&self) -> Coriolis {
        Coriolis::new(self.f0, self.beta, self.y_ref)
    }
}

/// `[balance]`. Stencil and staggering have no default: the consuming
/// model's grid decides them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceSection {
    pub stencil: Stencil,
    pub staggering: Staggering,
    #[serde(default)]
    pub boundary: BoundaryPolicy,
}

// ============================================================================
// Output
// ============================================================================

/// `[output]`: target directory and `[output.files]` names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default)]
    pub files: OutputNames,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("input")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            files: OutputNames::default(),
        }
    }
}

// ============================================================================
// Experiment
// ============================================================================

/// Complete description of one case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub grid: GridConfig,
    #[serde(default)]
    pub bathymetry: BathymetryConfig,
    #[serde(default)]
    pub ssh: SshConfig,
    #[serde(default)]
    pub physics: PhysicsConfig,
    pub balance: BalanceSection,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub islands: Vec<IslandConfig>,
    #[serde(default)]
    pub eddies: Vec<EddyConfig>,
}

fn default_name() -> String {
    "custom".to_string()
}

impl ExperimentConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: ExperimentConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every parameter, including that f stays away from zero over
    /// the domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = self.grid()?;

        let h = self.bathymetry.reference_depth;
        if !(h.is_finite() && h > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "bathymetry: reference_depth must be positive, got {h}"
            )));
        }
        for (k, island) in self.islands.iter().enumerate() {
            island.validate(k, h)?;
        }
        for (k, eddy) in self.eddies.iter().enumerate() {
            eddy.validate(k)?;
        }

        self.balance_config().validate(&grid)?;

        if let Some(problem) = self.output.files.problems().into_iter().next() {
            return Err(ConfigError::Invalid(format!("output: {problem}")));
        }
        Ok(())
    }

    pub fn grid(&self) -> Result<GridSpec, ConfigError> {
        self.grid.to_grid()
    }

    pub fn bathymetry_builder(&self) -> BathymetryBuilder {
        BathymetryBuilder::new(self.bathymetry.reference_depth)
            .with_islands(self.islands.iter().map(IslandConfig::to_island))
    }

    pub fn ssh_builder(&self) -> SshBuilder {
        SshBuilder::new()
            .with_eddies(self.eddies.iter().map(EddyConfig::to_eddy))
            .with_remove_mean(self.ssh.remove_mean)
    }

    pub fn balance_config(&self) -> BalanceConfig {
        BalanceConfig::new(
            self.physics.coriolis(),
            self.balance.stencil,
            self.balance.staggering,
        )
        .with_gravity(self.physics.gravity)
        .with_boundary(self.balance.boundary)
    }

    /// Depth values that mark land in a depth file written for this case:
    /// 0 plus the elevation of every elevated island.
    pub fn land_values(&self) -> Vec<f64> {
        let mut values = vec![0.0];
        for island in self.islands.iter().map(IslandConfig::to_island) {
            let value = island.land_value();
            if !values.contains(&value) {
                values.push(value);
            }
        }
        values
    }
}
