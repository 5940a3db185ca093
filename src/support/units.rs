//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical magnitudes of the envelope
//! (areas, lengths, transmittances, conductances). This module provides the
//! quantities and helpers that envelope modeling needs but [`uom`] doesn't
//! name directly.
//!
//! ## Transmittances
//!
//! A surface transmittance `U` (W/m²·K) has the dimensions of [`uom`]'s
//! `HeatTransfer`; [`ThermalTransmittance`] is an alias with the name used in
//! building codes. A thermal bridge's linear transmittance `ψ` (W/m·K) is
//! [`LinearThermalTransmittance`]. Multiplying either by its extent (area or
//! length) yields a `ThermalConductance` in W/K:
//!
//! ```
//! use uom::si::{
//!     f64::{Length, ThermalConductance},
//!     length::meter,
//!     thermal_conductance::watt_per_kelvin,
//!     thermal_conductivity::watt_per_meter_kelvin,
//! };
//! use twine_envelope::support::units::LinearThermalTransmittance;
//!
//! let psi = LinearThermalTransmittance::new::<watt_per_meter_kelvin>(0.5);
//! let psil: ThermalConductance = Length::new::<meter>(12.0) * psi;
//! assert_eq!(psil.get::<watt_per_kelvin>(), 6.0);
//! ```
//!
//! ## Tilt
//!
//! [`normalize_degrees`] wraps an arbitrary angle into `[0, 360)` degrees,
//! which is how surface tilts are compared when classifying opaque elements.

mod angle;
mod quantities;

pub use angle::normalize_degrees;
pub use quantities::{LinearThermalTransmittance, ThermalTransmittance};
