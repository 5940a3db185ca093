use std::fmt;

use uom::si::{
    angle::degree,
    f64::{Angle, Area},
};

use crate::support::{
    constraint::{Constrained, ConstraintError, ConstraintResult, NonNegative},
    units::{ThermalTransmittance, normalize_degrees},
};

use super::{Boundary, Surface, reject_infinite};

/// Reporting subcategory of an opaque element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum OpaqueKind {
    /// Facade or other vertical element.
    Wall,
    /// Roof or other upward-facing element.
    Roof,
    /// Floor over outdoor air or an unconditioned space.
    Floor,
    /// Any element in contact with the ground.
    Ground,
}

impl OpaqueKind {
    /// All kinds, in reporting order.
    pub const ALL: [Self; 4] = [Self::Wall, Self::Roof, Self::Floor, Self::Ground];

    /// Classifies an element from its boundary condition and tilt.
    ///
    /// Ground contact takes precedence over orientation. Otherwise the tilt,
    /// normalized to `[0, 360)` degrees, selects the kind:
    /// up to 60° is a roof, below 120° a wall, below 240° a floor,
    /// below 300° a wall again, and anything steeper a roof.
    #[must_use]
    pub fn classify(boundary: Boundary, tilt: Angle) -> Self {
        if boundary == Boundary::Ground {
            return Self::Ground;
        }

        let tilt = normalize_degrees(tilt);
        if tilt <= 60.0 {
            Self::Roof
        } else if tilt < 120.0 {
            Self::Wall
        } else if tilt < 240.0 {
            Self::Floor
        } else if tilt < 300.0 {
            Self::Wall
        } else {
            Self::Roof
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Roof => "roof",
            Self::Floor => "floor",
            Self::Ground => "ground contact",
        }
    }
}

impl fmt::Display for OpaqueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A non-transparent envelope surface.
///
/// Tilt defaults to 90° (a vertical wall) and only matters for classifying
/// the element into an [`OpaqueKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueElement {
    id: String,
    name: String,
    area: Constrained<Area, NonNegative>,
    u: Constrained<ThermalTransmittance, NonNegative>,
    boundary: Boundary,
    tilt: Angle,
}

impl OpaqueElement {
    /// Constructs a validated opaque element with vertical tilt.
    ///
    /// # Errors
    ///
    /// Returns an error if the area or transmittance is negative, infinite
    /// or `NaN`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        area: Area,
        u: ThermalTransmittance,
        boundary: Boundary,
    ) -> ConstraintResult<Self> {
        let area = NonNegative::new(area)?;
        let u = NonNegative::new(u)?;
        reject_infinite(area.as_ref().value)?;
        reject_infinite(u.as_ref().value)?;

        Ok(Self::from_constrained(id, name, area, u, boundary))
    }

    /// Constructs an opaque element from pre-validated magnitudes.
    ///
    /// The magnitudes are expected to be finite; [`Self::new`] checks that.
    #[must_use]
    pub fn from_constrained(
        id: impl Into<String>,
        name: impl Into<String>,
        area: Constrained<Area, NonNegative>,
        u: Constrained<ThermalTransmittance, NonNegative>,
        boundary: Boundary,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            area,
            u,
            boundary,
            tilt: Angle::new::<degree>(90.0),
        }
    }

    /// Returns this element with the given tilt.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotANumber`] if the tilt is not finite.
    pub fn with_tilt(mut self, tilt: Angle) -> ConstraintResult<Self> {
        if !tilt.get::<degree>().is_finite() {
            return Err(ConstraintError::NotANumber);
        }
        self.tilt = tilt;
        Ok(self)
    }

    /// Unique key of the element.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the element, unique within a building.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tilt of the element.
    #[must_use]
    pub fn tilt(&self) -> Angle {
        self.tilt
    }

    /// Reporting subcategory of the element.
    #[must_use]
    pub fn kind(&self) -> OpaqueKind {
        OpaqueKind::classify(self.boundary, self.tilt)
    }

    /// Validated area, for sums that must stay non-negative.
    pub(crate) fn constrained_area(&self) -> Constrained<Area, NonNegative> {
        self.area
    }

    /// Validated transmittance.
    pub(crate) fn constrained_transmittance(
        &self,
    ) -> Constrained<ThermalTransmittance, NonNegative> {
        self.u
    }

    /// Builds a merged element carrying an existing element's identity.
    pub(crate) fn merged(
        template: &Self,
        name: String,
        area: Constrained<Area, NonNegative>,
        u: Constrained<ThermalTransmittance, NonNegative>,
    ) -> Self {
        Self {
            id: template.id.clone(),
            name,
            area,
            u,
            boundary: template.boundary,
            tilt: template.tilt,
        }
    }
}

impl Surface for OpaqueElement {
    fn area(&self) -> Area {
        *self.area.as_ref()
    }

    fn transmittance(&self) -> ThermalTransmittance {
        *self.u.as_ref()
    }

    fn boundary(&self) -> Boundary {
        self.boundary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{area::square_meter, heat_transfer::watt_per_square_meter_kelvin};

    fn tilt(deg: f64) -> Angle {
        Angle::new::<degree>(deg)
    }

    #[test]
    fn classifies_by_tilt() {
        let cases = [
            (0.0, OpaqueKind::Roof),
            (60.0, OpaqueKind::Roof),
            (60.5, OpaqueKind::Wall),
            (90.0, OpaqueKind::Wall),
            (120.0, OpaqueKind::Floor),
            (180.0, OpaqueKind::Floor),
            (240.0, OpaqueKind::Wall),
            (300.0, OpaqueKind::Roof),
            (-90.0, OpaqueKind::Wall),
            (450.0, OpaqueKind::Wall),
        ];
        for (deg, expected) in cases {
            assert_eq!(
                OpaqueKind::classify(Boundary::Exterior, tilt(deg)),
                expected,
                "tilt {deg}"
            );
        }
    }

    #[test]
    fn ground_contact_ignores_tilt() {
        for deg in [0.0, 90.0, 180.0] {
            assert_eq!(
                OpaqueKind::classify(Boundary::Ground, tilt(deg)),
                OpaqueKind::Ground
            );
        }
    }

    #[test]
    fn rejects_invalid_magnitudes() {
        let u = ThermalTransmittance::new::<watt_per_square_meter_kelvin>(0.4);
        let err = OpaqueElement::new(
            "1",
            "bad",
            Area::new::<square_meter>(-1.0),
            u,
            Boundary::Exterior,
        )
        .unwrap_err();
        assert_eq!(err, ConstraintError::Negative);

        let err = OpaqueElement::new(
            "3",
            "unbounded",
            Area::new::<square_meter>(1.0),
            ThermalTransmittance::new::<watt_per_square_meter_kelvin>(f64::INFINITY),
            Boundary::Interior,
        )
        .unwrap_err();
        assert_eq!(err, ConstraintError::Infinite);

        let element = OpaqueElement::new(
            "2",
            "ok",
            Area::new::<square_meter>(1.0),
            u,
            Boundary::Exterior,
        )
        .unwrap();
        assert_eq!(element.kind(), OpaqueKind::Wall);
        assert!(element.clone().with_tilt(tilt(f64::NAN)).is_err());
        assert_eq!(
            element.with_tilt(tilt(0.0)).unwrap().kind(),
            OpaqueKind::Roof
        );
    }
}
