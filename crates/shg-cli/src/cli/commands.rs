use super::CliError;
use shg_core::common::config::{RunConfig, load_run_config};
use shg_core::modules::{ModuleExecutor, NrcModule};
use std::path::PathBuf;
use tracing::info;

#[derive(clap::Args)]
pub(super) struct RunArgs {
    /// JSON run configuration path; defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the chi1/zzz/zxx/xxz/xxx tables
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory the Rpp/Rsp/Rps/Rss tables are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Incidence angle in degrees
    #[arg(long)]
    theta: Option<f64>,

    /// Azimuthal angle in degrees
    #[arg(long)]
    phi: Option<f64>,

    /// Electronic density scaling constant (esu)
    #[arg(long)]
    electron_density: Option<f64>,

    /// Number of points on the photon-energy grid
    #[arg(long)]
    energy_count: Option<usize>,
}

impl RunArgs {
    fn into_config(self) -> Result<RunConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => {
                load_run_config(path).map_err(|error| CliError::Compute(error.into()))?
            }
            None => RunConfig::default(),
        };

        if let Some(input_dir) = self.input_dir {
            config.input_dir = input_dir;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(theta) = self.theta {
            config.theta_deg = theta;
        }
        if let Some(phi) = self.phi {
            config.phi_deg = phi;
        }
        if let Some(density) = self.electron_density {
            config.electron_density = density;
        }
        if let Some(count) = self.energy_count {
            config.energy_count = count;
        }
        Ok(config)
    }
}

pub(super) fn run_run_command(args: RunArgs) -> Result<i32, CliError> {
    let config = args.into_config()?;
    info!(
        input_dir = %config.input_dir.display(),
        theta_deg = config.theta_deg,
        phi_deg = config.phi_deg,
        energy_count = config.energy_count,
        "computing nonlinear reflection coefficients"
    );

    let artifacts = NrcModule.execute(&config).map_err(CliError::Compute)?;
    for artifact in &artifacts {
        println!(
            "wrote {}",
            config.output_dir.join(&artifact.relative_path).display()
        );
    }
    info!(artifacts = artifacts.len(), "run completed");
    Ok(0)
}

pub(super) fn run_config_command(args: RunArgs) -> Result<i32, CliError> {
    let config = args.into_config()?;
    let rendered = serde_json::to_string_pretty(&config)
        .map_err(|source| CliError::Internal(source.into()))?;
    println!("{rendered}");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::RunArgs;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn bare_args() -> RunArgs {
        RunArgs {
            config: None,
            input_dir: None,
            output_dir: None,
            theta: None,
            phi: None,
            electron_density: None,
            energy_count: None,
        }
    }

    #[test]
    fn defaults_apply_when_no_config_file_is_given() {
        let config = bare_args().into_config().expect("defaults should load");
        assert_eq!(config.theta_deg, 65.0);
        assert_eq!(config.input_dir, PathBuf::from("data/res"));
    }

    #[test]
    fn flags_override_values_from_the_config_file() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("run.json");
        fs::write(&path, r#"{ "theta_deg": 45.0, "phi_deg": 10.0 }"#)
            .expect("config should be written");

        let mut args = bare_args();
        args.config = Some(path);
        args.phi = Some(90.0);
        let config = args.into_config().expect("config should load");

        assert_eq!(config.theta_deg, 45.0);
        assert_eq!(config.phi_deg, 90.0);
    }

    #[test]
    fn a_missing_config_file_is_a_compute_error() {
        let mut args = bare_args();
        args.config = Some(PathBuf::from("does/not/exist.json"));
        let error = args.into_config().expect_err("missing config should fail");
        assert_eq!(error.as_shg_error().exit_code(), 3);
    }
}
