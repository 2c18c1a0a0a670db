//! Susceptibility table loading.
//!
//! Each table is a whitespace-delimited text file with at least three
//! columns per row (`index real imaginary`); columns 2 and 3 become one
//! complex value per grid point. Tables are read exactly once per run and
//! held immutably; every downstream stage borrows the loaded arrays.

use crate::common::config::RunConfig;
use crate::domain::{ComputeResult, ShgError};
use num_complex::Complex64;
use std::fs;
use std::path::Path;

/// The four independent χ⁽²⁾ tensor components of a (111) silicon surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Chi2Tensor {
    pub zzz: Vec<Complex64>,
    pub zxx: Vec<Complex64>,
    pub xxz: Vec<Complex64>,
    pub xxx: Vec<Complex64>,
}

/// All tabulated spectra of one run, each matching the energy grid length.
#[derive(Debug, Clone, PartialEq)]
pub struct SusceptibilityTables {
    pub chi1: Vec<Complex64>,
    pub chi2: Chi2Tensor,
}

impl SusceptibilityTables {
    pub fn load(config: &RunConfig, grid_len: usize) -> ComputeResult<Self> {
        Ok(Self {
            chi1: load_spectrum(
                &config.table_path(&config.chi1_file),
                &config.chi1_file,
                grid_len,
            )?,
            chi2: Chi2Tensor {
                zzz: load_spectrum(
                    &config.table_path(&config.zzz_file),
                    &config.zzz_file,
                    grid_len,
                )?,
                zxx: load_spectrum(
                    &config.table_path(&config.zxx_file),
                    &config.zxx_file,
                    grid_len,
                )?,
                xxz: load_spectrum(
                    &config.table_path(&config.xxz_file),
                    &config.xxz_file,
                    grid_len,
                )?,
                xxx: load_spectrum(
                    &config.table_path(&config.xxx_file),
                    &config.xxx_file,
                    grid_len,
                )?,
            },
        })
    }

    pub fn len(&self) -> usize {
        self.chi1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chi1.is_empty()
    }

    pub fn shape_is_consistent(&self) -> bool {
        let expected = self.chi1.len();
        self.chi2.zzz.len() == expected
            && self.chi2.zxx.len() == expected
            && self.chi2.xxz.len() == expected
            && self.chi2.xxx.len() == expected
    }
}

pub fn load_spectrum(
    path: &Path,
    table_name: &str,
    expected_len: usize,
) -> ComputeResult<Vec<Complex64>> {
    let source = fs::read_to_string(path).map_err(|source| {
        ShgError::io_system(
            "IO.SPECTRUM_READ",
            format!(
                "failed to read susceptibility table '{}' ({}): {}",
                path.display(),
                table_name,
                source
            ),
        )
    })?;
    parse_spectrum_source(table_name, &source, expected_len)
}

pub fn parse_spectrum_source(
    table_name: &str,
    source: &str,
    expected_len: usize,
) -> ComputeResult<Vec<Complex64>> {
    let mut values = Vec::with_capacity(expected_len);

    for (line_number, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let columns: Vec<&str> = trimmed.split_whitespace().collect();
        if columns.len() < 3 {
            return Err(shape_error(
                table_name,
                format!(
                    "line {} has {} columns, expected at least 3 (index real imaginary)",
                    line_number + 1,
                    columns.len()
                ),
            ));
        }

        let real = parse_column(table_name, columns[1], line_number + 1, "real")?;
        let imaginary = parse_column(table_name, columns[2], line_number + 1, "imaginary")?;
        values.push(Complex64::new(real, imaginary));
    }

    if values.len() != expected_len {
        return Err(shape_error(
            table_name,
            format!("has {} rows, expected {}", values.len(), expected_len),
        ));
    }

    Ok(values)
}

fn parse_column(
    table_name: &str,
    token: &str,
    line_number: usize,
    column: &str,
) -> ComputeResult<f64> {
    // Fortran-produced tables may use D exponents.
    let normalized = token.replace(['D', 'd'], "E");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            shape_error(
                table_name,
                format!(
                    "line {} {} column '{}' is not a finite number",
                    line_number, column, token
                ),
            )
        })
}

fn shape_error(table_name: &str, message: impl Into<String>) -> ShgError {
    ShgError::input_validation(
        "INPUT.SPECTRUM_SHAPE",
        format!("table '{}' {}", table_name, message.into()),
    )
}
