//! Nonlinear reflection coefficient (NRC) compute module.
//!
//! Loads the five susceptibility tables once, evaluates the reflection
//! model over the energy grid, and writes one reflectivity table per
//! polarization combination. Data flows strictly forward; a failure in any
//! stage aborts the run for that stage with no retry or fallback.

mod model;
mod parser;

use super::ModuleExecutor;
use super::serialization::{format_scientific_f64, write_text_artifact};
use crate::common::config::RunConfig;
use crate::domain::{ComputeArtifact, ComputeResult, PolarizationPair, ShgError};
use std::fs;

pub use model::{
    LinearResponse, NrcModel, NrcSolution, esu_conversion, principal_sqrt, rif_constant,
};
pub use parser::{Chi2Tensor, SusceptibilityTables, load_spectrum, parse_spectrum_source};

/// Input and output artifacts of one configured run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NrcContract {
    pub required_inputs: Vec<ComputeArtifact>,
    pub expected_outputs: Vec<ComputeArtifact>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NrcModule;

impl NrcModule {
    pub fn contract(&self, config: &RunConfig) -> NrcContract {
        NrcContract {
            required_inputs: [
                &config.chi1_file,
                &config.zzz_file,
                &config.zxx_file,
                &config.xxz_file,
                &config.xxx_file,
            ]
            .into_iter()
            .map(ComputeArtifact::new)
            .collect(),
            expected_outputs: PolarizationPair::ALL
                .into_iter()
                .map(|pair| ComputeArtifact::new(pair.output_name()))
                .collect(),
        }
    }

    /// Builds the model from a configuration without writing any output.
    pub fn load_model(&self, config: &RunConfig) -> ComputeResult<NrcModel> {
        let params = config.model_params()?;
        let grid = config.energy_grid()?;
        let tables = SusceptibilityTables::load(config, grid.len())?;
        NrcModel::new(grid, params, tables)
    }
}

impl ModuleExecutor for NrcModule {
    fn execute(&self, config: &RunConfig) -> ComputeResult<Vec<ComputeArtifact>> {
        let model = self.load_model(config)?;
        let solution = model.solve();

        fs::create_dir_all(&config.output_dir).map_err(|source| {
            ShgError::io_system(
                "IO.OUTPUT_DIRECTORY",
                format!(
                    "failed to create output directory '{}': {}",
                    config.output_dir.display(),
                    source
                ),
            )
        })?;

        let mut artifacts = Vec::with_capacity(PolarizationPair::ALL.len());
        for pair in PolarizationPair::ALL {
            let contents =
                render_reflectivity_table(&solution.energy, solution.reflectivity(pair));
            let output_path = config.output_dir.join(pair.output_name());
            write_text_artifact(&output_path, &contents).map_err(|source| {
                ShgError::io_system(
                    "IO.OUTPUT_WRITE",
                    format!(
                        "failed to write reflectivity table '{}': {}",
                        output_path.display(),
                        source
                    ),
                )
            })?;
            artifacts.push(ComputeArtifact::new(pair.output_name()));
        }

        Ok(artifacts)
    }
}

/// Two tab-separated columns (energy, reflectivity), 14 digits after the
/// decimal point in scientific notation, no header.
fn render_reflectivity_table(energy: &[f64], values: &[f64]) -> String {
    let mut lines = Vec::with_capacity(values.len());
    for (e, r) in energy.iter().zip(values) {
        lines.push(format!(
            "{}\t{}",
            format_scientific_f64(*e, 14),
            format_scientific_f64(*r, 14)
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{ModuleExecutor, NrcModule, render_reflectivity_table};
    use crate::common::config::RunConfig;
    use crate::domain::{ComputeArtifact, PolarizationPair, ShgErrorCategory};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn stage_constant_table(path: &Path, rows: usize, real: f64, imag: f64) {
        let mut lines = Vec::with_capacity(rows);
        for index in 0..rows {
            lines.push(format!("{} {real:e} {imag:e}", index + 1));
        }
        fs::write(path, lines.join("\n")).expect("table should be written");
    }

    fn staged_config(temp: &TempDir, rows: usize) -> RunConfig {
        let mut config = RunConfig::default();
        config.input_dir = temp.path().join("res");
        config.output_dir = temp.path().join("nrc");
        config.energy_count = rows;
        fs::create_dir_all(&config.input_dir).expect("input dir should exist");

        for name in ["chi1", "zzz", "zxx", "xxz", "xxx"] {
            stage_constant_table(&config.input_dir.join(name), rows, 1.0, 0.0);
        }
        config
    }

    #[test]
    fn contract_names_five_inputs_and_four_outputs() {
        let contract = NrcModule.contract(&RunConfig::default());
        assert_eq!(contract.required_inputs.len(), 5);
        assert_eq!(
            contract.expected_outputs,
            vec![
                ComputeArtifact::new("Rpp"),
                ComputeArtifact::new("Rsp"),
                ComputeArtifact::new("Rps"),
                ComputeArtifact::new("Rss"),
            ]
        );
    }

    #[test]
    fn execute_writes_one_table_per_polarization_pair() {
        let temp = TempDir::new().expect("tempdir should be created");
        let config = staged_config(&temp, 32);

        let artifacts = NrcModule.execute(&config).expect("run should succeed");
        assert_eq!(artifacts.len(), 4);
        for pair in PolarizationPair::ALL {
            let path = config.output_dir.join(pair.output_name());
            assert!(path.is_file(), "{} should exist", path.display());
            let contents = fs::read_to_string(&path).expect("table should be readable");
            assert_eq!(contents.lines().count(), 32);
        }
    }

    #[test]
    fn execute_is_deterministic_for_identical_inputs() {
        let temp = TempDir::new().expect("tempdir should be created");
        let mut config = staged_config(&temp, 16);

        config.output_dir = temp.path().join("first");
        NrcModule.execute(&config).expect("first run should succeed");
        let first = fs::read(config.output_dir.join("Rpp")).expect("first bytes");

        config.output_dir = temp.path().join("second");
        NrcModule.execute(&config).expect("second run should succeed");
        let second = fs::read(config.output_dir.join("Rpp")).expect("second bytes");

        assert_eq!(first, second);
    }

    #[test]
    fn execute_fails_fast_when_a_table_is_missing() {
        let temp = TempDir::new().expect("tempdir should be created");
        let config = staged_config(&temp, 16);
        fs::remove_file(config.input_dir.join("xxz")).expect("table should be removed");

        let error = NrcModule
            .execute(&config)
            .expect_err("missing table should fail");
        assert_eq!(error.category(), ShgErrorCategory::IoSystemError);
        assert_eq!(error.placeholder(), "IO.SPECTRUM_READ");
        assert!(!config.output_dir.exists(), "no partial outputs expected");
    }

    #[test]
    fn execute_rejects_tables_shorter_than_the_grid() {
        let temp = TempDir::new().expect("tempdir should be created");
        let mut config = staged_config(&temp, 16);
        config.energy_count = 32;

        let error = NrcModule
            .execute(&config)
            .expect_err("short tables should fail");
        assert_eq!(error.category(), ShgErrorCategory::InputValidationError);
        assert_eq!(error.placeholder(), "INPUT.SPECTRUM_SHAPE");
    }

    #[test]
    fn rendered_table_rows_are_tab_separated_scientific_pairs() {
        let rendered = render_reflectivity_table(&[0.01, 12.0], &[0.0, 2.5e-21]);
        assert_eq!(
            rendered,
            "1.00000000000000e-02\t0.00000000000000e+00\n\
             1.20000000000000e+01\t2.50000000000000e-21"
        );
    }
}
