pub mod errors;

pub use errors::{ComputeResult, ShgError, ShgErrorCategory};

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Field polarization of a plane wave relative to the plane of incidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarization {
    S,
    P,
}

impl Polarization {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S => "s",
            Self::P => "p",
        }
    }
}

impl Display for Polarization {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Incoming/outgoing polarization combination of an SHG measurement.
///
/// The set is closed; reflection-amplitude dispatch matches exhaustively on
/// this enum rather than comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarizationPair {
    Pp,
    Sp,
    Ps,
    Ss,
}

impl PolarizationPair {
    pub const ALL: [PolarizationPair; 4] = [Self::Pp, Self::Sp, Self::Ps, Self::Ss];

    pub const fn incoming(self) -> Polarization {
        match self {
            Self::Pp | Self::Ps => Polarization::P,
            Self::Sp | Self::Ss => Polarization::S,
        }
    }

    pub const fn outgoing(self) -> Polarization {
        match self {
            Self::Pp | Self::Sp => Polarization::P,
            Self::Ps | Self::Ss => Polarization::S,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pp => "pp",
            Self::Sp => "sp",
            Self::Ps => "ps",
            Self::Ss => "ss",
        }
    }

    /// Output table file name, e.g. `Rpp`.
    pub const fn output_name(self) -> &'static str {
        match self {
            Self::Pp => "Rpp",
            Self::Sp => "Rsp",
            Self::Ps => "Rps",
            Self::Ss => "Rss",
        }
    }
}

impl Display for PolarizationPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Output file produced by a compute run, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputeArtifact {
    pub relative_path: PathBuf,
}

impl ComputeArtifact {
    pub fn new(relative_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Polarization, PolarizationPair};

    #[test]
    fn pair_decomposes_into_incoming_and_outgoing_polarizations() {
        assert_eq!(PolarizationPair::Pp.incoming(), Polarization::P);
        assert_eq!(PolarizationPair::Pp.outgoing(), Polarization::P);
        assert_eq!(PolarizationPair::Sp.incoming(), Polarization::S);
        assert_eq!(PolarizationPair::Sp.outgoing(), Polarization::P);
        assert_eq!(PolarizationPair::Ps.incoming(), Polarization::P);
        assert_eq!(PolarizationPair::Ps.outgoing(), Polarization::S);
        assert_eq!(PolarizationPair::Ss.incoming(), Polarization::S);
        assert_eq!(PolarizationPair::Ss.outgoing(), Polarization::S);
    }

    #[test]
    fn pair_names_match_output_table_names() {
        for pair in PolarizationPair::ALL {
            let expected = format!(
                "R{}{}",
                pair.incoming().as_str(),
                pair.outgoing().as_str()
            );
            assert_eq!(pair.output_name(), expected);
            assert_eq!(pair.to_string(), &expected[1..]);
        }
    }
}
