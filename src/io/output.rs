//! Output file naming.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File names for the four fields of one case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputNames {
    pub depth: String,
    pub ssh: String,
    pub u: String,
    pub v: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            depth: "bathy.bin".into(),
            ssh: "eta.bin".into(),
            u: "u.bin".into(),
            v: "v.bin".into(),
        }
    }
}

impl OutputNames {
    /// Default names with `"{prefix}_"` prepended, e.g. `ideal_bathy.bin`.
    pub fn prefixed(prefix: &str) -> Self {
        let d = Self::default();
        Self {
            depth: format!("{prefix}_{}", d.depth),
            ssh: format!("{prefix}_{}", d.ssh),
            u: format!("{prefix}_{}", d.u),
            v: format!("{prefix}_{}", d.v),
        }
    }

    /// Full paths inside `dir`.
    pub fn paths_in(&self, dir: &Path) -> OutputPaths {
        OutputPaths {
            depth: dir.join(&self.depth),
            ssh: dir.join(&self.ssh),
            u: dir.join(&self.u),
            v: dir.join(&self.v),
        }
    }

    /// Names that are empty or repeated.
    pub fn problems(&self) -> Vec<String> {
        let names = [&self.depth, &self.ssh, &self.u, &self.v];
        let mut problems = Vec::new();
        for (k, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                problems.push("output file name is empty".to_string());
            } else if names[..k].contains(name) {
                problems.push(format!("output file name '{name}' is used twice"));
            }
        }
        problems
    }
}

/// Resolved output paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub depth: PathBuf,
    pub ssh: PathBuf,
    pub u: PathBuf,
    pub v: PathBuf,
}

impl OutputPaths {
    pub fn all(&self) -> [&Path; 4] {
        [&self.depth, &self.ssh, &self.u, &self.v]
    }
}
