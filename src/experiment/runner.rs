//! Experiment runner implementation.

use std::fmt;
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use super::ExperimentError;
use crate::balance::GeostrophicBalancer;
use crate::bathymetry::Bathymetry;
use crate::config::{ConfigError, ExperimentConfig, Preset};
use crate::grid::{GridSpec, Location, ScalarField, VectorField};
use crate::io::{OutputPaths, read_field, write_field};
use crate::mask::{LandMask, LandMasker};

// =============================================================================
// Experiment Fields
// =============================================================================

/// Everything generated for one case, before writing.
#[derive(Clone, Debug)]
pub struct ExperimentFields {
    pub grid: GridSpec,
    pub bathymetry: Bathymetry,
    /// SSH at cell centers
    pub ssh: ScalarField,
    /// Balanced, land-masked velocity
    pub velocity: VectorField,
}

// =============================================================================
// Experiment Report
// =============================================================================

/// Summary of a completed run.
#[derive(Clone, Debug)]
pub struct ExperimentReport {
    /// Case name
    pub name: String,
    /// Files written
    pub files: OutputPaths,
    /// Land cells in the depth field
    pub land_cells: usize,
    /// Ocean cells in the depth field
    pub ocean_cells: usize,
    /// Largest SSH anomaly magnitude (m)
    pub max_abs_ssh: f64,
    /// Largest speed after masking (m/s)
    pub max_speed: f64,
    /// Wall-clock time in seconds
    pub wall_time: f64,
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Case '{}':", self.name)?;
        writeln!(
            f,
            "  cells:     {} land / {} ocean",
            self.land_cells, self.ocean_cells
        )?;
        writeln!(f, "  max |eta|: {:.4} m", self.max_abs_ssh)?;
        writeln!(f, "  max speed: {:.4} m/s", self.max_speed)?;
        for path in self.files.all() {
            writeln!(f, "  wrote      {}", path.display())?;
        }
        write!(f, "  time:      {:.3} s", self.wall_time)
    }
}

// =============================================================================
// Experiment
// =============================================================================

/// A validated case, ready to build and write.
///
/// # Example
///
/// ```no_run
/// use eddy_island::config::Preset;
/// use eddy_island::experiment::Experiment;
///
/// let report = Experiment::from_preset(Preset::Test)?.run()?;
/// println!("{}", report);
/// # Ok::<(), eddy_island::experiment::ExperimentError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Experiment {
    config: ExperimentConfig,
    grid: GridSpec,
}

impl Experiment {
    /// Validate `config` and resolve its grid.
    pub fn new(config: ExperimentConfig) -> Result<Self, ExperimentError> {
        config.validate()?;
        let grid = config.grid()?;
        Ok(Self { config, grid })
    }

    pub fn from_preset(preset: Preset) -> Result<Self, ExperimentError> {
        Self::new(preset.config())
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    fn balancer(&self) -> GeostrophicBalancer {
        GeostrophicBalancer::new(self.config.balance_config())
    }

    /// Generate depth, SSH and balanced velocity in memory.
    ///
    /// Velocity is derived from the unmasked SSH and masked afterwards; SSH
    /// itself is masked only when `ssh.mask_ssh` is set.
    pub fn build(&self) -> Result<ExperimentFields, ExperimentError> {
        let grid = self.grid;
        info!(
            "case '{}': {} grid, dx = {} m, dy = {} m, {:?} anchor",
            self.config.name,
            grid.resolution(),
            grid.dx(),
            grid.dy(),
            grid.anchor()
        );

        let bathymetry = self.config.bathymetry_builder().build(&grid);
        info!(
            "bathymetry: {} land / {} ocean cells, H = {} m",
            bathymetry.land_count(),
            bathymetry.ocean_count(),
            bathymetry.reference_depth
        );
        debug!("{}", bathymetry.land.statistics());

        let mut ssh = self.config.ssh_builder().build(&grid);
        let mut velocity = self.balancer().balance(&grid, &ssh)?;

        let masker = LandMasker::new(&bathymetry.land).with_ssh(self.config.ssh.mask_ssh);
        masker.apply_velocity(&mut velocity)?;
        masker.apply_ssh(&mut ssh)?;

        info!(
            "balanced velocity: max |u| = {:.4} m/s, max |v| = {:.4} m/s",
            velocity.u.max_abs(),
            velocity.v.max_abs()
        );

        Ok(ExperimentFields {
            grid,
            bathymetry,
            ssh,
            velocity,
        })
    }

    /// Output paths inside `dir`.
    pub fn paths_in(&self, dir: &Path) -> OutputPaths {
        self.config.output.files.paths_in(dir)
    }

    /// Write the four fields into `dir`, creating it when missing.
    pub fn write(
        &self,
        fields: &ExperimentFields,
        dir: &Path,
    ) -> Result<OutputPaths, ExperimentError> {
        let paths = self.paths_in(dir);
        write_field(&paths.depth, &fields.bathymetry.depth.data)?;
        write_field(&paths.ssh, &fields.ssh.data)?;
        self.write_velocity(&fields.velocity, dir)?;
        for path in paths.all() {
            info!("wrote {}", path.display());
        }
        Ok(paths)
    }

    /// Write only the velocity files into `dir`.
    pub fn write_velocity(
        &self,
        velocity: &VectorField,
        dir: &Path,
    ) -> Result<(), ExperimentError> {
        let paths = self.paths_in(dir);
        write_field(&paths.u, &velocity.u.data)?;
        write_field(&paths.v, &velocity.v.data)?;
        Ok(())
    }

    /// Build and write into the configured output directory.
    pub fn run(&self) -> Result<ExperimentReport, ExperimentError> {
        let dir = self.config.output.dir.clone();
        self.run_in(&dir)
    }

    /// Build and write into `dir`.
    pub fn run_in(&self, dir: &Path) -> Result<ExperimentReport, ExperimentError> {
        let start = Instant::now();
        let fields = self.build()?;
        let files = self.write(&fields, dir)?;

        let report = ExperimentReport {
            name: self.config.name.clone(),
            files,
            land_cells: fields.bathymetry.land_count(),
            ocean_cells: fields.bathymetry.ocean_count(),
            max_abs_ssh: fields.ssh.max_abs(),
            max_speed: fields.velocity.max_speed(),
            wall_time: start.elapsed().as_secs_f64(),
        };
        info!("case '{}' done in {:.3} s", report.name, report.wall_time);
        Ok(report)
    }

    /// Re-derive the velocity from SSH and depth files previously written
    /// into `dir`.
    ///
    /// Land is recovered from the depth file (0 or an island elevation).
    /// The domain mean is removed from the SSH first when `ssh.remove_mean`
    /// is set. Both files must exist and match the grid shape.
    ///
    /// Fails when `ssh.mask_ssh` is set: the written SSH then has land
    /// zeroed, and differencing across the coast would not reproduce the
    /// velocity of [`Experiment::build`].
    pub fn rebalance_from_files(&self, dir: &Path) -> Result<VectorField, ExperimentError> {
        if self.config.ssh.mask_ssh {
            return Err(ConfigError::Invalid(
                "ssh.mask_ssh is set: the SSH file is land-masked and cannot be rebalanced"
                    .to_string(),
            )
            .into());
        }
        let paths = self.paths_in(dir);
        let shape = self.grid.shape();

        let mut ssh = ScalarField::new(read_field(&paths.ssh, shape)?, Location::Center);
        if self.config.ssh.remove_mean {
            ssh.remove_mean();
        }
        let depth = read_field(&paths.depth, shape)?;
        let land = LandMask::from_depth(&depth, &self.config.land_values());
        info!(
            "read {} and {} ({} land cells)",
            paths.ssh.display(),
            paths.depth.display(),
            land.land_count()
        );

        let mut velocity = self.balancer().balance(&self.grid, &ssh)?;
        LandMasker::new(&land).apply_velocity(&mut velocity)?;
        Ok(velocity)
    }
}
