//! Physics of the nonlinear reflection coefficient.
//!
//! Everything here is a pure map from the energy grid to numeric arrays:
//! the spline-interpolated linear response, angle-dependent wave vectors and
//! Fresnel factors, the unit-conversion prefactors, and the
//! polarization-resolved reflection amplitudes that combine them. Formulas
//! follow Phys. Rev. B 66, 195329 (2002).

use super::parser::SusceptibilityTables;
use crate::common::config::ModelParams;
use crate::common::constants::{
    HBAR_EV_S, PI, RYDBERG_EV, SI_LATTICE_CM, SPEED_OF_LIGHT_CM_S, TINIBA_BOHR_CM, TINIBA_NORM,
};
use crate::domain::{ComputeResult, Polarization, PolarizationPair, ShgError};
use crate::numerics::spline::ComplexSpline;
use crate::numerics::strictly_increasing;
use num_complex::Complex64;

/// Interpolated linear susceptibility, fit once over the energy grid.
#[derive(Debug, Clone)]
pub struct LinearResponse {
    spline: ComplexSpline,
}

impl LinearResponse {
    pub fn from_table(grid: &[f64], chi1: &[Complex64]) -> ComputeResult<Self> {
        let spline = ComplexSpline::fit(grid, chi1).ok_or_else(|| {
            ShgError::internal(
                "RUN.LINEAR_FIT",
                "linear response spline requires a strictly increasing grid",
            )
        })?;
        Ok(Self { spline })
    }

    pub fn real_part(&self, energy: f64) -> f64 {
        self.spline.eval_real(energy)
    }

    pub fn imag_part(&self, energy: f64) -> f64 {
        self.spline.eval_imag(energy)
    }

    /// ε(E) = 1 + 4π·χ⁽¹⁾(E)
    pub fn dielectric(&self, energy: f64) -> Complex64 {
        1.0 + 4.0 * PI * self.spline.eval(energy)
    }
}

/// Complex square root on the principal branch: non-negative real part.
///
/// The sign convention of the wave vector (propagating vs evanescent)
/// depends on this branch choice, so it is made explicit rather than
/// trusting library behavior at the cut.
pub fn principal_sqrt(value: Complex64) -> Complex64 {
    let root = value.sqrt();
    if root.re < 0.0 { -root } else { root }
}

/// Converts raw squared amplitudes into reflectivity units:
/// 32π³E² / (ρ_e·(100c)³·cos²θ·ħ²).
pub fn rif_constant(energy: f64, params: &ModelParams) -> f64 {
    let cos_theta = params.theta_rad.cos();
    32.0 * PI * PI * PI * energy * energy
        / (params.electron_density
            * SPEED_OF_LIGHT_CM_S
            * SPEED_OF_LIGHT_CM_S
            * SPEED_OF_LIGHT_CM_S
            * cos_theta
            * cos_theta
            * HBAR_EV_S
            * HBAR_EV_S)
}

/// Converts tabulated χ⁽²⁾ values into electrostatic units; a fixed complex
/// prefactor over E³.
pub fn esu_conversion(energy: f64) -> Complex64 {
    esu_prefactor() / (energy * energy * energy)
}

fn esu_prefactor() -> Complex64 {
    let geometric = (2.0 * 3.0_f64.sqrt()) / ((2.0 * 2.0_f64.sqrt()) * (2.0 * 2.0_f64.sqrt()));
    let bohr_ratio = TINIBA_BOHR_CM / SI_LATTICE_CM;
    let lattice_cells = SI_LATTICE_CM / 1.0e-8;

    Complex64::new(0.0, 1.0)
        * (2.0 * RYDBERG_EV).powi(5)
        * bohr_ratio.powi(5)
        / geometric
        * TINIBA_NORM
        * lattice_cells.powi(3)
}

/// Spectral reflectivity for all four polarization combinations, plus the
/// energy grid it is indexed by. This is the array surface an external
/// visualization layer reads back.
#[derive(Debug, Clone, PartialEq)]
pub struct NrcSolution {
    pub energy: Vec<f64>,
    pub rpp: Vec<f64>,
    pub rsp: Vec<f64>,
    pub rps: Vec<f64>,
    pub rss: Vec<f64>,
}

impl NrcSolution {
    pub fn reflectivity(&self, pair: PolarizationPair) -> &[f64] {
        match pair {
            PolarizationPair::Pp => &self.rpp,
            PolarizationPair::Sp => &self.rsp,
            PolarizationPair::Ps => &self.rps,
            PolarizationPair::Ss => &self.rss,
        }
    }
}

/// One fully loaded run: grid, angles, interpolated linear response and the
/// raw χ⁽²⁾ tables. Holds no mutable state; every query is a pure function.
#[derive(Debug, Clone)]
pub struct NrcModel {
    grid: Vec<f64>,
    params: ModelParams,
    linear: LinearResponse,
    tables: SusceptibilityTables,
}

impl NrcModel {
    pub fn new(
        grid: Vec<f64>,
        params: ModelParams,
        tables: SusceptibilityTables,
    ) -> ComputeResult<Self> {
        if grid.len() < 2 || !strictly_increasing(&grid) {
            return Err(ShgError::computation(
                "RUN.GRID",
                "energy grid must be strictly increasing with at least 2 points",
            ));
        }
        if tables.len() != grid.len() || !tables.shape_is_consistent() {
            return Err(ShgError::input_validation(
                "INPUT.SPECTRUM_SHAPE",
                format!(
                    "susceptibility tables must all have {} rows to match the grid",
                    grid.len()
                ),
            ));
        }

        let linear = LinearResponse::from_table(&grid, &tables.chi1)?;
        Ok(Self {
            grid,
            params,
            linear,
            tables,
        })
    }

    pub fn energy_grid(&self) -> &[f64] {
        &self.grid
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    pub fn dielectric(&self, energy: f64) -> Complex64 {
        self.linear.dielectric(energy)
    }

    /// k(E) = sqrt(ε(E) − sin²θ), principal branch.
    pub fn wave_vector(&self, energy: f64) -> Complex64 {
        let sin_theta = self.params.theta_rad.sin();
        principal_sqrt(self.dielectric(energy) - sin_theta * sin_theta)
    }

    pub fn fresnel_vacuum_to_surface(&self, polarization: Polarization, energy: f64) -> Complex64 {
        let cos_theta = self.params.theta_rad.cos();
        let k = self.wave_vector(energy);
        match polarization {
            Polarization::S => Complex64::new(2.0 * cos_theta, 0.0) / (cos_theta + k),
            Polarization::P => {
                Complex64::new(2.0 * cos_theta, 0.0) / (self.dielectric(energy) * cos_theta + k)
            }
        }
    }

    /// Surface-to-bulk factor in the simplified Fresnel model.
    ///
    /// For s polarization the active model is the constant 1; the general
    /// bulk-matching form 2k_s(E) / (k_s(E) + k_b(E)) is a documented
    /// inactive variant and is deliberately not evaluated.
    pub fn fresnel_surface_to_bulk(&self, polarization: Polarization, energy: f64) -> Complex64 {
        match polarization {
            Polarization::S => Complex64::new(1.0, 0.0),
            Polarization::P => self.dielectric(energy).inv(),
        }
    }

    /// Polarization-resolved reflection amplitude at grid index `index`,
    /// combining quantities at the fundamental energy E and harmonic 2E.
    /// `None` when the index falls outside the grid.
    pub fn r_factor(&self, pair: PolarizationPair, index: usize) -> Option<Complex64> {
        if index >= self.grid.len() {
            return None;
        }
        Some(self.r_factor_at(pair, index))
    }

    fn r_factor_at(&self, pair: PolarizationPair, index: usize) -> Complex64 {
        let energy = self.grid[index];
        let harmonic = 2.0 * energy;

        let esu = esu_conversion(energy);
        let zzz = esu * self.tables.chi2.zzz[index];
        let zxx = esu * self.tables.chi2.zxx[index];
        let xxz = esu * self.tables.chi2.xxz[index];
        let xxx = esu * self.tables.chi2.xxx[index];

        let eps1 = self.dielectric(energy);
        let eps2 = self.dielectric(harmonic);
        let k1 = self.wave_vector(energy);
        let k2 = self.wave_vector(harmonic);

        let sin_theta = self.params.theta_rad.sin();
        let cos_3phi = (3.0 * self.params.phi_rad).cos();
        let sin_3phi = (3.0 * self.params.phi_rad).sin();

        match pair {
            PolarizationPair::Pp => {
                let surface = sin_theta * sin_theta * eps1 * eps1 * zzz
                    + k1 * k1 * eps1 * eps1 * zxx;
                let mixed =
                    -2.0 * sin_theta * eps1 * xxz + k1 * eps1 * xxx * cos_3phi;
                sin_theta * eps2 * surface + eps1 * eps2 * k1 * k2 * mixed
            }
            PolarizationPair::Sp => sin_theta * eps2 * zxx - k2 * eps2 * xxx * cos_3phi,
            PolarizationPair::Ps => -(k1 * k1) * (eps1 * eps1) * xxx * sin_3phi,
            PolarizationPair::Ss => xxx * sin_3phi,
        }
    }

    /// Nonlinear reflection coefficient over the whole grid for one
    /// polarization pair. Real-valued and non-negative by construction.
    pub fn reflectivity(&self, pair: PolarizationPair) -> Vec<f64> {
        let incoming = pair.incoming();
        let outgoing = pair.outgoing();

        (0..self.grid.len())
            .map(|index| {
                let energy = self.grid[index];
                let harmonic = 2.0 * energy;

                let inbound = self.fresnel_vacuum_to_surface(incoming, energy)
                    * self.fresnel_surface_to_bulk(incoming, energy);
                let outbound = self.fresnel_vacuum_to_surface(outgoing, harmonic)
                    * self.fresnel_surface_to_bulk(outgoing, harmonic);

                let amplitude = outbound * inbound * inbound * self.r_factor_at(pair, index);
                rif_constant(energy, &self.params) * amplitude.norm_sqr()
            })
            .collect()
    }

    /// The four pairs are independent pure maps over the same grid.
    pub fn solve(&self) -> NrcSolution {
        NrcSolution {
            energy: self.grid.clone(),
            rpp: self.reflectivity(PolarizationPair::Pp),
            rsp: self.reflectivity(PolarizationPair::Sp),
            rps: self.reflectivity(PolarizationPair::Ps),
            rss: self.reflectivity(PolarizationPair::Ss),
        }
    }
}
