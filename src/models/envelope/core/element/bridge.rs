use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::f64::{Length, ThermalConductance};

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative},
    units::LinearThermalTransmittance,
};

use super::reject_infinite;

/// Location type of a linear thermal bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ThermalBridgeKind {
    /// Roof or floor meeting a facade.
    Roof,
    /// Balcony slab.
    Balcony,
    /// Corner between facades.
    Corner,
    /// Intermediate floor slab edge.
    IntermediateFloor,
    /// Interior partition meeting the envelope.
    InternalWall,
    /// Ground-contact element meeting a facade.
    GroundFloor,
    /// Pillar within a facade.
    Pillar,
    /// Window perimeter.
    Window,
    /// Anything else.
    Generic,
}

impl ThermalBridgeKind {
    /// All kinds, in reporting order.
    pub const ALL: [Self; 9] = [
        Self::Roof,
        Self::Balcony,
        Self::Corner,
        Self::IntermediateFloor,
        Self::InternalWall,
        Self::GroundFloor,
        Self::Pillar,
        Self::Window,
        Self::Generic,
    ];

    /// Canonical snake_case code, as accepted by [`FromStr`].
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Roof => "roof",
            Self::Balcony => "balcony",
            Self::Corner => "corner",
            Self::IntermediateFloor => "intermediate_floor",
            Self::InternalWall => "internal_wall",
            Self::GroundFloor => "ground_floor",
            Self::Pillar => "pillar",
            Self::Window => "window",
            Self::Generic => "generic",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Roof => "Roof or floor with facade",
            Self::Balcony => "Balcony",
            Self::Corner => "Facade corner",
            Self::IntermediateFloor => "Intermediate floor edge",
            Self::InternalWall => "Interior partition with envelope",
            Self::GroundFloor => "Ground-contact element with facade",
            Self::Pillar => "Pillar",
            Self::Window => "Window perimeter",
            Self::Generic => "Generic",
        }
    }
}

impl fmt::Display for ThermalBridgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unrecognized thermal bridge kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized thermal bridge kind `{0}`")]
pub struct InvalidBridgeKind(pub String);

impl FromStr for ThermalBridgeKind {
    type Err = InvalidBridgeKind;

    /// Parses a kind code.
    ///
    /// Matching ignores ASCII case, surrounding whitespace and underscores,
    /// so `intermediate_floor` and `INTERMEDIATEFLOOR` are equivalent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squash = |code: &str| -> String {
            code.trim()
                .chars()
                .filter(|c| *c != '_')
                .map(|c| c.to_ascii_lowercase())
                .collect()
        };
        let wanted = squash(s);
        Self::ALL
            .into_iter()
            .find(|kind| squash(kind.code()) == wanted)
            .ok_or_else(|| InvalidBridgeKind(s.to_owned()))
    }
}

/// A linear thermal bridge.
///
/// Bridges have no boundary factor: they always contribute their full
/// `L · ψ` to the envelope conductance.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalBridge {
    id: String,
    name: String,
    kind: ThermalBridgeKind,
    length: Length,
    psi: LinearThermalTransmittance,
}

impl ThermalBridge {
    /// Constructs a validated thermal bridge.
    ///
    /// # Errors
    ///
    /// Returns an error if the length or linear transmittance is negative,
    /// infinite or `NaN`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ThermalBridgeKind,
        length: Length,
        psi: LinearThermalTransmittance,
    ) -> ConstraintResult<Self> {
        let length = NonNegative::new(length)?;
        let psi = NonNegative::new(psi)?;
        reject_infinite(length.as_ref().value)?;
        reject_infinite(psi.as_ref().value)?;

        Ok(Self::from_constrained(id, name, kind, length, psi))
    }

    /// Constructs a thermal bridge from pre-validated magnitudes.
    ///
    /// The magnitudes are expected to be finite; [`Self::new`] checks that.
    #[must_use]
    pub fn from_constrained(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ThermalBridgeKind,
        length: Constrained<Length, NonNegative>,
        psi: Constrained<LinearThermalTransmittance, NonNegative>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            length: length.into_inner(),
            psi: psi.into_inner(),
        }
    }

    /// Unique key of the bridge.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the bridge.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location type.
    #[must_use]
    pub fn kind(&self) -> ThermalBridgeKind {
        self.kind
    }

    /// Bridge length.
    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    /// Linear thermal transmittance `ψ`.
    #[must_use]
    pub fn psi(&self) -> LinearThermalTransmittance {
        self.psi
    }

    /// Conductance `L · ψ`.
    #[must_use]
    pub fn conductance(&self) -> ThermalConductance {
        self.length * self.psi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        length::meter, thermal_conductance::watt_per_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    use crate::support::constraint::ConstraintError;

    #[test]
    fn parses_spellings() {
        assert_eq!(
            "intermediate_floor".parse(),
            Ok(ThermalBridgeKind::IntermediateFloor)
        );
        assert_eq!(
            "INTERMEDIATEFLOOR".parse(),
            Ok(ThermalBridgeKind::IntermediateFloor)
        );
        assert_eq!("Pillar".parse(), Ok(ThermalBridgeKind::Pillar));

        for kind in ThermalBridgeKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn rejects_unknown_kind() {
        assert_eq!(
            "chimney".parse::<ThermalBridgeKind>(),
            Err(InvalidBridgeKind("chimney".into()))
        );
    }

    #[test]
    fn conductance_ignores_boundaries() {
        let bridge = ThermalBridge::new(
            "tb1",
            "corner NE",
            ThermalBridgeKind::Corner,
            Length::new::<meter>(6.0),
            LinearThermalTransmittance::new::<watt_per_meter_kelvin>(0.08),
        )
        .unwrap();
        assert_relative_eq!(bridge.conductance().get::<watt_per_kelvin>(), 0.48);
    }

    #[test]
    fn rejects_negative_length() {
        let result = ThermalBridge::new(
            "tb2",
            "bad",
            ThermalBridgeKind::Generic,
            Length::new::<meter>(-1.0),
            LinearThermalTransmittance::new::<watt_per_meter_kelvin>(0.1),
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_infinite_psi() {
        let result = ThermalBridge::new(
            "tb3",
            "bad",
            ThermalBridgeKind::Generic,
            Length::new::<meter>(2.0),
            LinearThermalTransmittance::new::<watt_per_meter_kelvin>(f64::INFINITY),
        );
        assert_eq!(result.unwrap_err(), ConstraintError::Infinite);
    }
}
