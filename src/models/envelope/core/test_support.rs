//! Element builders shared by the envelope tests.

use uom::si::{
    angle::degree,
    area::square_meter,
    f64::{Angle, Area, Length},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::units::{LinearThermalTransmittance, ThermalTransmittance};

use super::{
    catalogue::{BridgeInput, Catalogue, CatalogueInput, OpaqueInput, WindowInput},
    element::{Boundary, OpaqueElement, ThermalBridge, ThermalBridgeKind, Window},
};

fn u(value: f64) -> ThermalTransmittance {
    ThermalTransmittance::new::<watt_per_square_meter_kelvin>(value)
}

/// A vertical opaque element whose id is its name.
pub(crate) fn opaque(name: &str, a: f64, u_value: f64, boundary: Boundary) -> OpaqueElement {
    OpaqueElement::new(name, name, Area::new::<square_meter>(a), u(u_value), boundary).unwrap()
}

pub(crate) fn opaque_tilted(
    name: &str,
    a: f64,
    u_value: f64,
    boundary: Boundary,
    tilt: f64,
) -> OpaqueElement {
    opaque(name, a, u_value, boundary)
        .with_tilt(Angle::new::<degree>(tilt))
        .unwrap()
}

pub(crate) fn window(name: &str, a: f64, u_value: f64, boundary: Boundary) -> Window {
    Window::new(name, name, Area::new::<square_meter>(a), u(u_value), boundary).unwrap()
}

pub(crate) fn bridge(id: &str, kind: ThermalBridgeKind, l: f64, psi: f64) -> ThermalBridge {
    ThermalBridge::new(
        id,
        id,
        kind,
        Length::new::<meter>(l),
        LinearThermalTransmittance::new::<watt_per_meter_kelvin>(psi),
    )
    .unwrap()
}

/// A small detached house: five opaque elements, two windows, two bridges.
pub(crate) fn sample_input() -> CatalogueInput {
    let mut roof = OpaqueInput::new("o2", "flat roof", 80.0, 0.35, "EXTERIOR");
    roof.tilt = 0.0;
    let mut floor = OpaqueInput::new("o4", "floor over garage", 20.0, 0.6, "EXTERIOR");
    floor.tilt = 180.0;

    CatalogueInput {
        opaques: vec![
            OpaqueInput::new("o1", "main facade", 120.0, 0.45, "EXTERIOR"),
            roof,
            OpaqueInput::new("o3", "slab on grade", 60.0, 0.5, "GROUND"),
            floor,
            OpaqueInput::new("o5", "party wall", 40.0, 1.2, "INTERIOR"),
        ],
        windows: vec![
            WindowInput::new("w1", "south glazing", 18.0, 1.8, "EXTERIOR"),
            WindowInput::new("w2", "north glazing", 6.0, 2.1, "EXTERIOR"),
        ],
        bridges: vec![
            BridgeInput::new("b1", "facade corners", "corner", 24.0, 0.08),
            BridgeInput::new("b2", "window reveals", "WINDOW", 46.0, 0.12),
        ],
    }
}

pub(crate) fn sample_catalogue() -> Catalogue {
    Catalogue::ingest(&sample_input()).catalogue
}
