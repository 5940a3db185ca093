//! Building envelope models.
//!
//! This module provides [`twine_core::Model`] implementations that compute
//! the K indicator of a building's thermal envelope. The computational core
//! is in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_envelope::models::envelope::{
//!     Catalogue, CatalogueInput, KIndicator, OpaqueInput, WindowInput,
//! };
//!
//! let input = CatalogueInput {
//!     opaques: vec![OpaqueInput::new("1", "facade", 80.0, 0.5, "EXTERIOR")],
//!     windows: vec![WindowInput::new("2", "glazing", 20.0, 2.0, "EXTERIOR")],
//!     ..CatalogueInput::default()
//! };
//! let catalogue = Catalogue::ingest(&input).catalogue;
//!
//! let data = KIndicator.call(&catalogue).unwrap();
//! let k = data.require_k().unwrap();
//! assert!((k.value - 0.8).abs() < 1e-12);
//! ```

pub(crate) mod core;

pub use self::core::{
    Boundary, BridgeInput, BridgeSummaries, BridgeSummary, Breakdown, BreakdownEntry,
    BreakdownRow, Catalogue, CatalogueInput, Collection, ConfigError, DISPLAY_THRESHOLD,
    FormattedRow, GROUPING_TOLERANCE, GroupingConfig, Ingestion, InvalidBoundary,
    InvalidBridgeKind, InvalidElement, InvalidReason, KData, KSummary, OpaqueElement,
    OpaqueInput, OpaqueKind, OpaqueSummaries, SIGNIFICANCE_THRESHOLD, Surface,
    SurfaceSummary, ThermalBridge, ThermalBridgeKind, TotalRow, UndefinedIndicator,
    Window, WindowInput, group_opaques, round_or_dash,
};

use std::convert::Infallible;

use twine_core::Model;

/// Computes the K indicator and category sums of a catalogue.
#[derive(Debug, Clone, Copy, Default)]
pub struct KIndicator;

impl Model for KIndicator {
    type Input = Catalogue;
    type Output = KData;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(KData::from_catalogue(input))
    }
}

/// Computes the per-category breakdown table of a catalogue.
#[derive(Debug, Clone, Copy, Default)]
pub struct KBreakdown;

impl Model for KBreakdown {
    type Input = Catalogue;
    type Output = Breakdown;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(Breakdown::from_catalogue(input))
    }
}

/// Merges opaque elements with equivalent thermal behaviour.
///
/// Use [`Catalogue::group_opaques`] to replace a catalogue's opaque
/// collection in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpaqueGrouper {
    config: GroupingConfig,
}

impl OpaqueGrouper {
    /// Creates a grouper with a custom configuration.
    #[must_use]
    pub fn new(config: GroupingConfig) -> Self {
        Self { config }
    }
}

impl Model for OpaqueGrouper {
    type Input = Vec<OpaqueElement>;
    type Output = Vec<OpaqueElement>;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(group_opaques(input, &self.config))
    }
}
