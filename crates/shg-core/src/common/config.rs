//! Run configuration for the SHG pipeline.
//!
//! A single immutable `RunConfig` value is built once (from defaults, a JSON
//! file, or CLI overrides) and passed into every stage; nothing reads
//! module-level globals.

use crate::common::constants::DEGRAD;
use crate::domain::{ComputeResult, ShgError};
use crate::numerics::linear_grid;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunConfig {
    /// Directory holding the five susceptibility tables.
    pub input_dir: PathBuf,
    /// Directory the four reflectivity tables are written to.
    pub output_dir: PathBuf,
    pub chi1_file: String,
    pub zzz_file: String,
    pub zxx_file: String,
    pub xxz_file: String,
    pub xxx_file: String,
    /// Incidence angle in degrees, fixed for the whole run.
    pub theta_deg: f64,
    /// Azimuthal angle in degrees, fixed for the whole run.
    pub phi_deg: f64,
    /// Electronic density scaling constant (esu).
    pub electron_density: f64,
    pub energy_min: f64,
    pub energy_max: f64,
    pub energy_count: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data/res"),
            output_dir: PathBuf::from("data/nrc"),
            chi1_file: "chi1".to_string(),
            zzz_file: "zzz".to_string(),
            zxx_file: "zxx".to_string(),
            xxz_file: "xxz".to_string(),
            xxx_file: "xxx".to_string(),
            theta_deg: 65.0,
            phi_deg: 30.0,
            electron_density: 1.0e-28,
            energy_min: 0.01,
            energy_max: 12.00,
            energy_count: 1200,
        }
    }
}

impl RunConfig {
    pub fn table_path(&self, file_name: &str) -> PathBuf {
        self.input_dir.join(file_name)
    }

    /// Validated numeric view consumed by the physics, angles in radians.
    pub fn model_params(&self) -> ComputeResult<ModelParams> {
        if !self.theta_deg.is_finite() || !(0.0..90.0).contains(&self.theta_deg) {
            return Err(ShgError::computation(
                "RUN.THETA_RANGE",
                format!(
                    "incidence angle {} deg is outside [0, 90)",
                    self.theta_deg
                ),
            ));
        }
        if !self.phi_deg.is_finite() {
            return Err(ShgError::computation(
                "RUN.PHI_RANGE",
                format!("azimuthal angle {} deg is not finite", self.phi_deg),
            ));
        }
        if !self.electron_density.is_finite() || self.electron_density <= 0.0 {
            return Err(ShgError::computation(
                "RUN.ELECTRON_DENSITY",
                format!(
                    "electronic density {} must be finite and positive",
                    self.electron_density
                ),
            ));
        }

        Ok(ModelParams {
            theta_rad: self.theta_deg * DEGRAD,
            phi_rad: self.phi_deg * DEGRAD,
            electron_density: self.electron_density,
        })
    }

    /// The shared photon-energy grid: strictly increasing, fixed length.
    pub fn energy_grid(&self) -> ComputeResult<Vec<f64>> {
        if !self.energy_min.is_finite()
            || !self.energy_max.is_finite()
            || self.energy_min <= 0.0
            || self.energy_min >= self.energy_max
        {
            return Err(ShgError::computation(
                "RUN.GRID",
                format!(
                    "energy range [{}, {}] must be finite, positive and increasing",
                    self.energy_min, self.energy_max
                ),
            ));
        }

        linear_grid(self.energy_min, self.energy_max, self.energy_count).ok_or_else(|| {
            ShgError::computation(
                "RUN.GRID",
                format!("energy grid needs at least 2 points, got {}", self.energy_count),
            )
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    pub theta_rad: f64,
    pub phi_rad: f64,
    pub electron_density: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read run configuration '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse run configuration '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl From<ConfigError> for ShgError {
    fn from(error: ConfigError) -> Self {
        match &error {
            ConfigError::Read { .. } => ShgError::io_system("IO.CONFIG_READ", error.to_string()),
            ConfigError::Parse { .. } => {
                ShgError::input_validation("INPUT.CONFIG_PARSE", error.to_string())
            }
        }
    }
}

pub fn load_run_config(path: impl AsRef<Path>) -> Result<RunConfig, ConfigError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&source).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
