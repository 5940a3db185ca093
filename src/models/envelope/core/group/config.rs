use thiserror::Error;
use uom::si::heat_transfer::watt_per_square_meter_kelvin;

use crate::{
    models::envelope::core::tolerance::{GROUPING_TOLERANCE, SIGNIFICANCE_THRESHOLD},
    support::{
        constraint::{ConstraintError, StrictlyPositive},
        units::ThermalTransmittance,
    },
};

/// Configuration for grouping opaque elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupingConfig {
    u_tolerance: ThermalTransmittance,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            u_tolerance: ThermalTransmittance::new::<watt_per_square_meter_kelvin>(
                GROUPING_TOLERANCE,
            ),
        }
    }
}

impl GroupingConfig {
    /// Creates a configuration with a custom transmittance bucket width.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the tolerance is not strictly positive,
    /// or if it is coarser than the significance threshold used by the
    /// indicator calculator.
    pub fn new(u_tolerance: ThermalTransmittance) -> Result<Self, ConfigError> {
        let u_tolerance = StrictlyPositive::new(u_tolerance)?.into_inner();
        let value = u_tolerance.get::<watt_per_square_meter_kelvin>();
        if value > SIGNIFICANCE_THRESHOLD {
            return Err(ConfigError::TooCoarse { tolerance: value });
        }
        Ok(Self { u_tolerance })
    }

    /// Width of the transmittance buckets elements are grouped into.
    #[must_use]
    pub fn u_tolerance(&self) -> ThermalTransmittance {
        self.u_tolerance
    }
}

/// Errors from building a [`GroupingConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The tolerance is zero, negative or `NaN`.
    #[error("invalid grouping tolerance")]
    Tolerance(#[from] ConstraintError),

    /// The tolerance would merge transmittances the calculator distinguishes.
    #[error("grouping tolerance {tolerance} W/m²K exceeds the significance threshold")]
    TooCoarse {
        /// Rejected tolerance, W/m²K.
        tolerance: f64,
    },
}
