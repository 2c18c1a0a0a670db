//! Physical constants of the SHG unit chain.
//!
//! Values shared across the pipeline so no module carries ad hoc literal
//! constants. The two TINIBA normalization constants are kept verbatim from
//! the published unit chain; the reflectivity output depends on them.

pub const PI: f64 = 3.141_592_653_589_793_238_462_643_383_279_5_f64;
pub const DEGRAD: f64 = PI / 180.0;

/// Speed of light in cm/s.
pub const SPEED_OF_LIGHT_CM_S: f64 = 2.997_924_58e10;
/// Reduced Planck constant in eV s.
pub const HBAR_EV_S: f64 = 6.582_119_569e-16;
/// Rydberg energy (Rydberg constant times hc) in eV.
pub const RYDBERG_EV: f64 = 13.605_693_122_994;
/// Lattice parameter of silicon in cm.
pub const SI_LATTICE_CM: f64 = 5.431_020_511e-8;

/// Approximate Bohr radius in cm as fixed by the TINIBA unit chain.
pub const TINIBA_BOHR_CM: f64 = 0.53e-8;
/// TINIBA susceptibility normalization constant.
pub const TINIBA_NORM: f64 = 2.08e-15;
