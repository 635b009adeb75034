//! Built-in cases.

use std::fmt;
use std::str::FromStr;

use super::{
    BalanceSection, BathymetryConfig, ConfigError, EddyConfig, ExperimentConfig, GridConfig,
    IslandConfig, OutputConfig, PhysicsConfig, ProfileKind, SshConfig,
};
use crate::balance::{BoundaryPolicy, GRAVITY, Stencil};
use crate::grid::{Anchor, Staggering};
use crate::io::OutputNames;

/// Named island/eddy cases.
///
/// | Preset | Grid | Island | Balance |
/// |--------|------|--------|---------|
/// | `ideal` | 200×100, 5 km | sloped rim | one-sided edges, collocated |
/// | `test` | 120×80, 5 km | hard wall | one-sided edges, collocated |
/// | `beta-plane` | 256×256, 4 km | hard wall, H = 4000 m | centered, collocated, β-plane |
/// | `staggered` | 200×100, 5 km | sloped rim | backward, C-grid, zero-mean SSH |
/// | `elevated` | 200×100, 5 km | elevated core | backward, C-grid |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    Ideal,
    Test,
    BetaPlane,
    Staggered,
    Elevated,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Ideal,
        Preset::Test,
        Preset::BetaPlane,
        Preset::Staggered,
        Preset::Elevated,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Ideal => "ideal",
            Preset::Test => "test",
            Preset::BetaPlane => "beta-plane",
            Preset::Staggered => "staggered",
            Preset::Elevated => "elevated",
        }
    }

    /// Full configuration of the case. Output goes to `input/` with names
    /// prefixed by the case name.
    pub fn config(self) -> ExperimentConfig {
        let mut config = match self {
            Preset::Ideal => ExperimentConfig {
                grid: GridConfig::uniform(200, 100, 5e3, Anchor::CellCorner),
                islands: vec![sloped(300e3, 250e3, 50e3, 30e3)],
                eddies: vec![eddy(800e3, 250e3, 100e3, 0.5)],
                physics: f_plane(1.0e-4),
                balance: balance(
                    Stencil::OneSidedEdges,
                    Staggering::Collocated,
                    BoundaryPolicy::Keep,
                ),
                ..base()
            },
            Preset::Test => ExperimentConfig {
                grid: GridConfig::uniform(120, 80, 5e3, Anchor::CellCorner),
                islands: vec![hard_wall(200e3, 200e3, 70e3)],
                eddies: vec![eddy(450e3, 200e3, 90e3, 0.5)],
                physics: f_plane(1.0e-4),
                balance: balance(
                    Stencil::OneSidedEdges,
                    Staggering::Collocated,
                    BoundaryPolicy::Keep,
                ),
                ..base()
            },
            Preset::BetaPlane => ExperimentConfig {
                grid: GridConfig::extent(256, 256, 1024e3, 1024e3, Anchor::CellCenter),
                bathymetry: BathymetryConfig {
                    reference_depth: 4000.0,
                },
                islands: vec![hard_wall(600e3, 512e3, 60e3)],
                eddies: vec![eddy(250e3, 512e3, 60e3, 0.25)],
                physics: PhysicsConfig {
                    gravity: GRAVITY,
                    f0: 5.0e-5,
                    beta: 2.0e-11,
                    y_ref: 0.0,
                },
                balance: balance(
                    Stencil::CenteredPeriodic,
                    Staggering::Collocated,
                    BoundaryPolicy::ZeroEdges,
                ),
                ..base()
            },
            Preset::Staggered => ExperimentConfig {
                grid: GridConfig::uniform(200, 100, 5e3, Anchor::CellCenter),
                islands: vec![sloped(300e3, 250e3, 50e3, 30e3)],
                eddies: vec![eddy(800e3, 250e3, 100e3, 0.5)],
                ssh: SshConfig {
                    remove_mean: true,
                    mask_ssh: false,
                },
                physics: f_plane(5.0e-5),
                balance: balance(
                    Stencil::BackwardPeriodic,
                    Staggering::CGrid,
                    BoundaryPolicy::ZeroEdges,
                ),
                ..base()
            },
            Preset::Elevated => ExperimentConfig {
                grid: GridConfig::uniform(200, 100, 5e3, Anchor::CellCorner),
                islands: vec![IslandConfig {
                    x: 500e3,
                    y: 250e3,
                    radius: 50e3,
                    profile: ProfileKind::Elevated,
                    slope_width: 30e3,
                    elevation: 50.0,
                }],
                eddies: vec![eddy(800e3, 250e3, 100e3, 0.5)],
                physics: f_plane(1.0e-4),
                balance: balance(
                    Stencil::BackwardPeriodic,
                    Staggering::CGrid,
                    BoundaryPolicy::ZeroEdges,
                ),
                ..base()
            },
        };
        config.name = self.name().to_string();
        config.output.files = OutputNames::prefixed(self.name());
        config
    }
}

fn base() -> ExperimentConfig {
    ExperimentConfig {
        name: String::new(),
        grid: GridConfig::uniform(1, 1, 1.0, Anchor::CellCenter),
        bathymetry: BathymetryConfig::default(),
        ssh: SshConfig::default(),
        physics: PhysicsConfig::default(),
        balance: balance(
            Stencil::CenteredPeriodic,
            Staggering::Collocated,
            BoundaryPolicy::ZeroEdges,
        ),
        output: OutputConfig::default(),
        islands: Vec::new(),
        eddies: Vec::new(),
    }
}

fn hard_wall(x: f64, y: f64, radius: f64) -> IslandConfig {
    IslandConfig {
        x,
        y,
        radius,
        profile: ProfileKind::HardWall,
        slope_width: 0.0,
        elevation: 0.0,
    }
}

fn sloped(x: f64, y: f64, radius: f64, slope_width: f64) -> IslandConfig {
    IslandConfig {
        x,
        y,
        radius,
        profile: ProfileKind::SlopedRim,
        slope_width,
        elevation: 0.0,
    }
}

fn eddy(x: f64, y: f64, radius: f64, amplitude: f64) -> EddyConfig {
    EddyConfig {
        x,
        y,
        radius,
        amplitude,
    }
}

fn f_plane(f0: f64) -> PhysicsConfig {
    PhysicsConfig {
        f0,
        ..PhysicsConfig::default()
    }
}

fn balance(stencil: Stencil, staggering: Staggering, boundary: BoundaryPolicy) -> BalanceSection {
    BalanceSection {
        stencil,
        staggering,
        boundary,
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_validates() {
        for preset in Preset::ALL {
            let config = preset.config();
            assert!(config.validate().is_ok(), "{} failed validation", preset);
            assert_eq!(config.name, preset.name());
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("beta-plane".parse::<Preset>().unwrap(), Preset::BetaPlane);
        assert_eq!(" Ideal ".parse::<Preset>().unwrap(), Preset::Ideal);
        assert!(matches!(
            "tropical".parse::<Preset>(),
            Err(ConfigError::UnknownPreset(_))
        ));
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
        }
    }

    #[test]
    fn test_file_names_do_not_collide() {
        let mut names: Vec<String> = Preset::ALL
            .iter()
            .flat_map(|p| {
                let files = p.config().output.files;
                [files.depth, files.ssh, files.u, files.v]
            })
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_face_velocity_uses_backward_stencil() {
        for preset in Preset::ALL {
            let balance = preset.config().balance;
            if balance.staggering == Staggering::CGrid {
                assert_eq!(balance.stencil, Stencil::BackwardPeriodic, "{}", preset);
            }
        }
    }

    #[test]
    fn test_beta_plane_grid() {
        let grid = Preset::BetaPlane.config().grid().unwrap();
        assert_eq!(grid.shape(), (256, 256));
        assert_eq!(grid.dx(), 4000.0);
    }
}
