//! The K indicator: overall heat-transfer coefficient of the envelope.
//!
//! `K = (Σ btr · A · U + Σ L · ψ) / Σ A`, over opaque elements, windows and
//! thermal bridges. The area in the denominator is raw area, so elements on
//! interior or adiabatic boundaries dilute K without adding to its numerator.

use thiserror::Error;
use tracing::debug;
use uom::si::{
    area::square_meter,
    f64::{Area, Length, ThermalConductance},
    heat_transfer::watt_per_square_meter_kelvin,
};

use crate::support::units::ThermalTransmittance;

use super::{
    aggregate::{BridgeSummaries, BridgeSummary, OpaqueSummaries, SurfaceSummary},
    catalogue::Catalogue,
    element::{OpaqueElement, OpaqueKind, ThermalBridge, Window},
    tolerance::is_significant,
};

/// Error returned when a hard K value is requested but the envelope has no
/// significant area.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("K indicator is undefined for an envelope area of {area} m²")]
pub struct UndefinedIndicator {
    /// Total envelope area, m².
    pub area: f64,
}

/// Global sums behind the K indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KSummary {
    pub opaques_a: Area,
    pub opaques_au: ThermalConductance,
    pub windows_a: Area,
    pub windows_au: ThermalConductance,
    pub tbs_l: Length,
    pub tbs_psil: ThermalConductance,
    /// Opaque plus window area.
    pub a: Area,
    /// Opaque and window conductance plus bridge conductance.
    pub au: ThermalConductance,
}

/// K indicator of an envelope together with its per-category sums.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KData {
    /// The indicator, or `None` if the envelope area is not significant.
    #[cfg_attr(feature = "serde", serde(rename = "K"))]
    pub k: Option<ThermalTransmittance>,
    pub a: Area,
    pub au: ThermalConductance,
    pub summary: KSummary,
    pub roofs: SurfaceSummary,
    pub floors: SurfaceSummary,
    pub walls: SurfaceSummary,
    pub ground: SurfaceSummary,
    pub windows: SurfaceSummary,
    pub tbs: BridgeSummaries,
}

impl KData {
    /// Computes the indicator for a catalogue.
    #[must_use]
    pub fn from_catalogue(catalogue: &Catalogue) -> Self {
        Self::compute(catalogue.opaques(), catalogue.windows(), catalogue.bridges())
    }

    /// Computes the indicator from element slices.
    #[must_use]
    pub fn compute(
        opaques: &[OpaqueElement],
        windows: &[Window],
        bridges: &[ThermalBridge],
    ) -> Self {
        let opaque_sum = SurfaceSummary::of(opaques);
        let window_sum = SurfaceSummary::of(windows);
        let bridge_sum = BridgeSummary::of(bridges);
        let by_kind = OpaqueSummaries::of(opaques);

        let a = window_sum.a + opaque_sum.a;
        let au = window_sum.au + opaque_sum.au + bridge_sum.psil;

        let k = is_significant(a.get::<square_meter>()).then(|| au / a);

        debug!(
            opaques = opaques.len(),
            windows = windows.len(),
            bridges = bridges.len(),
            k = ?k.map(|k| k.get::<watt_per_square_meter_kelvin>()),
            "computed envelope K indicator"
        );

        Self {
            k,
            a,
            au,
            summary: KSummary {
                opaques_a: opaque_sum.a,
                opaques_au: opaque_sum.au,
                windows_a: window_sum.a,
                windows_au: window_sum.au,
                tbs_l: bridge_sum.l,
                tbs_psil: bridge_sum.psil,
                a,
                au,
            },
            roofs: by_kind.roofs,
            floors: by_kind.floors,
            walls: by_kind.walls,
            ground: by_kind.ground,
            windows: window_sum,
            tbs: BridgeSummaries::of(bridges),
        }
    }

    /// Returns K, or an error if it is undefined.
    ///
    /// # Errors
    ///
    /// Returns [`UndefinedIndicator`] if the envelope area is at or below
    /// the significance threshold.
    pub fn require_k(&self) -> Result<ThermalTransmittance, UndefinedIndicator> {
        self.k.ok_or(UndefinedIndicator {
            area: self.a.get::<square_meter>(),
        })
    }

    /// Summary of all opaque elements.
    #[must_use]
    pub fn opaques(&self) -> SurfaceSummary {
        SurfaceSummary {
            a: self.summary.opaques_a,
            au: self.summary.opaques_au,
        }
    }

    /// Summary of one opaque subcategory.
    #[must_use]
    pub fn opaque(&self, kind: OpaqueKind) -> SurfaceSummary {
        match kind {
            OpaqueKind::Wall => self.walls,
            OpaqueKind::Roof => self.roofs,
            OpaqueKind::Floor => self.floors,
            OpaqueKind::Ground => self.ground,
        }
    }

    /// Summary of all thermal bridges.
    #[must_use]
    pub fn bridges(&self) -> BridgeSummary {
        BridgeSummary {
            l: self.summary.tbs_l,
            psil: self.summary.tbs_psil,
        }
    }
}

/// Mean transmittance (or mean ψ) of a row: `au / a`.
pub(crate) fn u_mean(a: f64, au: f64) -> Option<f64> {
    is_significant(a).then(|| au / a)
}

/// Share of K carried by a row: `au / total_a`.
pub(crate) fn k_contribution(au: f64, total_a: f64) -> Option<f64> {
    is_significant(total_a).then(|| au / total_a)
}

/// Percentage of K carried by a row.
pub(crate) fn k_percentage(au: f64, total_a: f64, k: Option<f64>) -> Option<f64> {
    let k = k.filter(|&k| is_significant(k))?;
    k_contribution(au, total_a).map(|contribution| 100.0 * contribution / k)
}
