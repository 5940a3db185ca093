//! Raw envelope records as supplied by an external store.
//!
//! Fields are plain numbers and strings; nothing here has been validated.
//! With the `serde` feature the records use the store's field names
//! (`A`, `U`, `bounds`, `L`, `psi`).

use num_traits::Zero;
use uom::si::{
    angle::degree,
    area::square_meter,
    f64::{Angle, Area, Length},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative},
    units::{LinearThermalTransmittance, ThermalTransmittance},
};

use crate::models::envelope::core::element::{
    Boundary, OpaqueElement, ThermalBridge, ThermalBridgeKind, Window, reject_infinite,
};
use super::InvalidReason;

/// Unvalidated opaque element record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpaqueInput {
    pub id: String,
    pub name: String,
    /// Area, m².
    #[cfg_attr(feature = "serde", serde(rename = "A"))]
    pub a: f64,
    /// Transmittance, W/m²K.
    #[cfg_attr(feature = "serde", serde(rename = "U"))]
    pub u: f64,
    /// Boundary condition code (`EXTERIOR`, `INTERIOR`, `ADIABATIC`, `GROUND`).
    pub bounds: String,
    /// Tilt, degrees.
    #[cfg_attr(feature = "serde", serde(default = "vertical"))]
    pub tilt: f64,
}

impl OpaqueInput {
    /// Creates a vertical opaque record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        a: f64,
        u: f64,
        bounds: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            a,
            u,
            bounds: bounds.into(),
            tilt: vertical(),
        }
    }

    pub(super) fn validate(&self) -> Result<OpaqueElement, InvalidReason> {
        let area = area(self.a)?;
        let u = transmittance(self.u)?;
        let boundary: Boundary = self.bounds.parse()?;

        OpaqueElement::from_constrained(&self.id, &self.name, area, u, boundary)
            .with_tilt(Angle::new::<degree>(self.tilt))
            .map_err(InvalidReason::Tilt)
    }
}

/// Unvalidated window record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowInput {
    pub id: String,
    pub name: String,
    /// Area, m².
    #[cfg_attr(feature = "serde", serde(rename = "A"))]
    pub a: f64,
    /// Transmittance, W/m²K.
    #[cfg_attr(feature = "serde", serde(rename = "U"))]
    pub u: f64,
    /// Boundary condition code.
    pub bounds: String,
}

impl WindowInput {
    /// Creates a window record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        a: f64,
        u: f64,
        bounds: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            a,
            u,
            bounds: bounds.into(),
        }
    }

    pub(super) fn validate(&self) -> Result<Window, InvalidReason> {
        let area = area(self.a)?;
        let u = transmittance(self.u)?;
        let boundary: Boundary = self.bounds.parse()?;

        Ok(Window::from_constrained(&self.id, &self.name, area, u, boundary))
    }
}

/// Unvalidated thermal bridge record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BridgeInput {
    pub id: String,
    pub name: String,
    /// Kind code (`roof`, `balcony`, ..., `generic`).
    pub kind: String,
    /// Length, m.
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    pub l: f64,
    /// Linear transmittance, W/mK.
    pub psi: f64,
}

impl BridgeInput {
    /// Creates a thermal bridge record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        l: f64,
        psi: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            l,
            psi,
        }
    }

    pub(super) fn validate(&self) -> Result<ThermalBridge, InvalidReason> {
        let kind: ThermalBridgeKind = self.kind.parse()?;
        let length =
            magnitude(Length::new::<meter>(self.l), self.l).map_err(InvalidReason::Length)?;
        let psi = magnitude(
            LinearThermalTransmittance::new::<watt_per_meter_kelvin>(self.psi),
            self.psi,
        )
        .map_err(InvalidReason::LinearTransmittance)?;

        Ok(ThermalBridge::from_constrained(
            &self.id, &self.name, kind, length, psi,
        ))
    }
}

fn area(a: f64) -> Result<Constrained<Area, NonNegative>, InvalidReason> {
    magnitude(Area::new::<square_meter>(a), a).map_err(InvalidReason::Area)
}

fn transmittance(
    u: f64,
) -> Result<Constrained<ThermalTransmittance, NonNegative>, InvalidReason> {
    magnitude(ThermalTransmittance::new::<watt_per_square_meter_kelvin>(u), u)
        .map_err(InvalidReason::Transmittance)
}

/// Validates a quantity as non-negative and finite; `raw` is its SI value.
fn magnitude<T: PartialOrd + Zero>(
    value: T,
    raw: f64,
) -> ConstraintResult<Constrained<T, NonNegative>> {
    let value = NonNegative::new(value)?;
    reject_infinite(raw)?;
    Ok(value)
}

fn vertical() -> f64 {
    90.0
}
