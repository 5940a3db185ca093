//! Envelope element records.
//!
//! Elements are validated value types: every magnitude they hold has already
//! passed its [`NonNegative`](crate::support::constraint::NonNegative) check,
//! so the aggregator and grouper never see a negative area or transmittance.

mod boundary;
mod bridge;
mod opaque;
mod window;

pub use boundary::{Boundary, InvalidBoundary};
pub use bridge::{InvalidBridgeKind, ThermalBridge, ThermalBridgeKind};
pub use opaque::{OpaqueElement, OpaqueKind};
pub use window::Window;

use uom::{
    ConstZero,
    si::f64::{Area, ThermalConductance},
};

use crate::support::{
    constraint::{ConstraintError, ConstraintResult},
    units::ThermalTransmittance,
};

/// Rejects an infinite magnitude, given in SI base units.
///
/// Negative infinity and `NaN` are already caught by the non-negativity check.
pub(crate) fn reject_infinite(value: f64) -> ConstraintResult<()> {
    if value.is_infinite() {
        Err(ConstraintError::Infinite)
    } else {
        Ok(())
    }
}

/// A surface element that exchanges heat through its area.
///
/// Implemented by [`OpaqueElement`] and [`Window`], which share the same
/// shape but are reported as separate categories.
pub trait Surface {
    /// Surface area.
    fn area(&self) -> Area;

    /// Thermal transmittance `U`.
    fn transmittance(&self) -> ThermalTransmittance;

    /// Boundary condition the surface faces.
    fn boundary(&self) -> Boundary;

    /// Heat-exchange factor of the surface's boundary, `0.0` or `1.0`.
    fn btr(&self) -> f64 {
        self.boundary().btr()
    }

    /// Adjusted conductance `btr · A · U`.
    fn conductance(&self) -> ThermalConductance {
        self.area() * self.transmittance() * self.btr()
    }

    /// Returns `true` if the element takes no part in envelope heat exchange.
    ///
    /// Excluded elements have a zero transmittance or an adiabatic boundary.
    /// They are still stored and still count toward raw area; the flag is a
    /// display hint for consumers.
    fn is_excluded(&self) -> bool {
        self.transmittance() == ThermalTransmittance::ZERO
            || self.boundary() == Boundary::Adiabatic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermal_conductance::watt_per_kelvin;

    use crate::models::envelope::core::test_support::{opaque, window};

    #[test]
    fn interior_surface_has_no_conductance() {
        let wall = opaque("party wall", 5.0, 1.0, Boundary::Interior);
        assert_relative_eq!(wall.conductance().get::<watt_per_kelvin>(), 0.0);
        assert!(!wall.is_excluded());
    }

    #[test]
    fn exterior_and_ground_surfaces_count_in_full() {
        let wall = opaque("facade", 10.0, 0.5, Boundary::Exterior);
        assert_relative_eq!(wall.conductance().get::<watt_per_kelvin>(), 5.0);

        let slab = opaque("slab", 40.0, 0.25, Boundary::Ground);
        assert_relative_eq!(slab.conductance().get::<watt_per_kelvin>(), 10.0);

        let glazing = window("glazing", 2.0, 1.4, Boundary::Exterior);
        assert_relative_eq!(glazing.conductance().get::<watt_per_kelvin>(), 2.8);
    }

    #[test]
    fn exclusion_flag() {
        assert!(opaque("adiabatic", 8.0, 0.6, Boundary::Adiabatic).is_excluded());
        assert!(opaque("no loss", 8.0, 0.0, Boundary::Exterior).is_excluded());
        assert!(window("skylight", 1.0, 0.0, Boundary::Exterior).is_excluded());
        assert!(!opaque("roof", 8.0, 0.3, Boundary::Exterior).is_excluded());
    }
}
