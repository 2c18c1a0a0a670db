//! Surface second-harmonic-generation (SHG) reflection engine.
//!
//! Computes the nonlinear reflection coefficient of crystal surfaces from
//! tabulated linear and nonlinear susceptibility spectra, following the
//! analytic model of Phys. Rev. B 66, 195329 (2002).

pub mod common;
pub mod domain;
pub mod modules;
pub mod numerics;
