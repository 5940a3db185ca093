use std::{fmt, str::FromStr};

use thiserror::Error;

/// Boundary condition faced by an envelope surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum Boundary {
    /// Outdoor air.
    Exterior,
    /// Another conditioned space.
    Interior,
    /// No net heat exchange assumed.
    Adiabatic,
    /// The ground.
    Ground,
}

impl Boundary {
    /// All boundary conditions, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Exterior,
        Self::Interior,
        Self::Adiabatic,
        Self::Ground,
    ];

    /// Heat-exchange factor `btr` of this boundary.
    ///
    /// Surfaces facing outdoor air or the ground count in full toward the
    /// envelope indicator; the rest don't count at all.
    #[must_use]
    pub fn btr(self) -> f64 {
        match self {
            Self::Exterior | Self::Ground => 1.0,
            Self::Interior | Self::Adiabatic => 0.0,
        }
    }

    /// Canonical code, as accepted by [`FromStr`].
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Exterior => "EXTERIOR",
            Self::Interior => "INTERIOR",
            Self::Adiabatic => "ADIABATIC",
            Self::Ground => "GROUND",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Exterior => "Exterior",
            Self::Interior => "Interior",
            Self::Adiabatic => "Adiabatic",
            Self::Ground => "Ground",
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unrecognized boundary condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized boundary condition `{0}`")]
pub struct InvalidBoundary(pub String);

impl FromStr for Boundary {
    type Err = InvalidBoundary;

    /// Parses a boundary code, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|boundary| boundary.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| InvalidBoundary(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn btr_values() {
        assert_eq!(Boundary::Exterior.btr(), 1.0);
        assert_eq!(Boundary::Ground.btr(), 1.0);
        assert_eq!(Boundary::Interior.btr(), 0.0);
        assert_eq!(Boundary::Adiabatic.btr(), 0.0);
    }

    #[test]
    fn parses_codes() {
        assert_eq!("EXTERIOR".parse(), Ok(Boundary::Exterior));
        assert_eq!("ground".parse(), Ok(Boundary::Ground));
        assert_eq!(" Adiabatic ".parse(), Ok(Boundary::Adiabatic));

        for boundary in Boundary::ALL {
            assert_eq!(boundary.to_string().parse(), Ok(boundary));
        }
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(
            "OUTSIDE".parse::<Boundary>(),
            Err(InvalidBoundary("OUTSIDE".into()))
        );
        assert!("".parse::<Boundary>().is_err());
    }
}
