//! Thermal-envelope transmittance aggregation.
//!
//! An envelope is a catalogue of opaque elements, windows and linear thermal
//! bridges. This module validates raw element records, merges equivalent
//! opaque elements, sums elements into categories, and derives the K
//! indicator and its per-category breakdown.
//!
//! Everything except [`Catalogue::group_opaques`] is a pure function of a
//! catalogue snapshot.

mod aggregate;
mod breakdown;
mod catalogue;
mod element;
mod group;
mod indicator;
mod tolerance;

#[cfg(test)]
pub(super) mod test_support;

pub use aggregate::{BridgeSummaries, BridgeSummary, OpaqueSummaries, SurfaceSummary};
pub use breakdown::{
    Breakdown, BreakdownEntry, BreakdownRow, FormattedRow, TotalRow, round_or_dash,
};
pub use catalogue::{
    BridgeInput, Catalogue, CatalogueInput, Collection, Ingestion, InvalidElement,
    InvalidReason, OpaqueInput, WindowInput,
};
pub use element::{
    Boundary, InvalidBoundary, InvalidBridgeKind, OpaqueElement, OpaqueKind, Surface,
    ThermalBridge, ThermalBridgeKind, Window,
};
pub use group::{ConfigError, GroupingConfig, group_opaques};
pub use indicator::{KData, KSummary, UndefinedIndicator};
pub use tolerance::{DISPLAY_THRESHOLD, GROUPING_TOLERANCE, SIGNIFICANCE_THRESHOLD};
