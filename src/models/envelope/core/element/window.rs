use uom::si::f64::Area;

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative},
    units::ThermalTransmittance,
};

use super::{Boundary, Surface, reject_infinite};

/// A glazed envelope opening.
///
/// Windows have the same shape as opaque elements but form their own
/// reporting category.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    id: String,
    name: String,
    area: Constrained<Area, NonNegative>,
    u: Constrained<ThermalTransmittance, NonNegative>,
    boundary: Boundary,
}

impl Window {
    /// Constructs a validated window.
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

    /// Constructs a window from pre-validated magnitudes.
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
        }
    }

    /// Unique key of the window.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the window.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Surface for Window {
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
