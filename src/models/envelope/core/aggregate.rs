//! Category sums over arbitrary element subsets.
//!
//! Summaries are always produced fresh from an element list. Parent
//! categories are the `+` of their subcategories, which is what the
//! consistency checks in the tests rely on.

use std::{iter::Sum, ops::Add};

use uom::{
    ConstZero,
    si::f64::{Area, Length, ThermalConductance},
};

use super::element::{OpaqueElement, OpaqueKind, Surface, ThermalBridge, ThermalBridgeKind};

/// Raw area and adjusted conductance `Σ btr · A · U` of a set of surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceSummary {
    /// Raw area, including surfaces whose `btr` is zero.
    pub a: Area,
    /// Adjusted conductance.
    pub au: ThermalConductance,
}

impl SurfaceSummary {
    /// Summary of an empty set.
    pub const ZERO: Self = Self {
        a: Area::ZERO,
        au: ThermalConductance::ZERO,
    };

    /// Sums a set of surfaces.
    pub fn of<'a, S: Surface + 'a>(surfaces: impl IntoIterator<Item = &'a S>) -> Self {
        surfaces
            .into_iter()
            .map(|s| Self {
                a: s.area(),
                au: s.conductance(),
            })
            .sum()
    }
}

impl Add for SurfaceSummary {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            a: self.a + rhs.a,
            au: self.au + rhs.au,
        }
    }
}

impl Sum for SurfaceSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Total length and conductance `Σ L · ψ` of a set of thermal bridges.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BridgeSummary {
    /// Total length.
    pub l: Length,
    /// Total conductance.
    pub psil: ThermalConductance,
}

impl BridgeSummary {
    /// Summary of an empty set.
    pub const ZERO: Self = Self {
        l: Length::ZERO,
        psil: ThermalConductance::ZERO,
    };

    /// Sums a set of thermal bridges.
    pub fn of<'a>(bridges: impl IntoIterator<Item = &'a ThermalBridge>) -> Self {
        bridges
            .into_iter()
            .map(|b| Self {
                l: b.length(),
                psil: b.conductance(),
            })
            .sum()
    }
}

impl Add for BridgeSummary {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            l: self.l + rhs.l,
            psil: self.psil + rhs.psil,
        }
    }
}

impl Sum for BridgeSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Opaque summaries split by [`OpaqueKind`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpaqueSummaries {
    /// Vertical elements.
    pub walls: SurfaceSummary,
    /// Upward-facing elements.
    pub roofs: SurfaceSummary,
    /// Downward-facing elements not in contact with the ground.
    pub floors: SurfaceSummary,
    /// Elements in contact with the ground.
    pub ground: SurfaceSummary,
}

impl OpaqueSummaries {
    /// Sums opaque elements into their subcategories.
    #[must_use]
    pub fn of(opaques: &[OpaqueElement]) -> Self {
        let of_kind =
            |kind: OpaqueKind| SurfaceSummary::of(opaques.iter().filter(|o| o.kind() == kind));

        Self {
            walls: of_kind(OpaqueKind::Wall),
            roofs: of_kind(OpaqueKind::Roof),
            floors: of_kind(OpaqueKind::Floor),
            ground: of_kind(OpaqueKind::Ground),
        }
    }

    /// Summary for one subcategory.
    #[must_use]
    pub fn get(&self, kind: OpaqueKind) -> SurfaceSummary {
        match kind {
            OpaqueKind::Wall => self.walls,
            OpaqueKind::Roof => self.roofs,
            OpaqueKind::Floor => self.floors,
            OpaqueKind::Ground => self.ground,
        }
    }

    /// Sum of all subcategories.
    #[must_use]
    pub fn total(&self) -> SurfaceSummary {
        OpaqueKind::ALL.into_iter().map(|kind| self.get(kind)).sum()
    }
}

/// Thermal bridge summaries split by [`ThermalBridgeKind`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BridgeSummaries {
    /// Roof or floor meeting a facade.
    pub roof: BridgeSummary,
    /// Balcony slabs.
    pub balcony: BridgeSummary,
    /// Corners between facades.
    pub corner: BridgeSummary,
    /// Intermediate floor slab edges.
    pub intermediate_floor: BridgeSummary,
    /// Interior partitions meeting the envelope.
    pub internal_wall: BridgeSummary,
    /// Ground-contact elements meeting a facade.
    pub ground_floor: BridgeSummary,
    /// Pillars within a facade.
    pub pillar: BridgeSummary,
    /// Window perimeters.
    pub window: BridgeSummary,
    /// Anything else.
    pub generic: BridgeSummary,
}

impl BridgeSummaries {
    /// Sums thermal bridges into their kinds.
    #[must_use]
    pub fn of(bridges: &[ThermalBridge]) -> Self {
        let of_kind = |kind: ThermalBridgeKind| {
            BridgeSummary::of(bridges.iter().filter(|b| b.kind() == kind))
        };

        Self {
            roof: of_kind(ThermalBridgeKind::Roof),
            balcony: of_kind(ThermalBridgeKind::Balcony),
            corner: of_kind(ThermalBridgeKind::Corner),
            intermediate_floor: of_kind(ThermalBridgeKind::IntermediateFloor),
            internal_wall: of_kind(ThermalBridgeKind::InternalWall),
            ground_floor: of_kind(ThermalBridgeKind::GroundFloor),
            pillar: of_kind(ThermalBridgeKind::Pillar),
            window: of_kind(ThermalBridgeKind::Window),
            generic: of_kind(ThermalBridgeKind::Generic),
        }
    }

    /// Summary for one kind.
    #[must_use]
    pub fn get(&self, kind: ThermalBridgeKind) -> BridgeSummary {
        match kind {
            ThermalBridgeKind::Roof => self.roof,
            ThermalBridgeKind::Balcony => self.balcony,
            ThermalBridgeKind::Corner => self.corner,
            ThermalBridgeKind::IntermediateFloor => self.intermediate_floor,
            ThermalBridgeKind::InternalWall => self.internal_wall,
            ThermalBridgeKind::GroundFloor => self.ground_floor,
            ThermalBridgeKind::Pillar => self.pillar,
            ThermalBridgeKind::Window => self.window,
            ThermalBridgeKind::Generic => self.generic,
        }
    }

    /// Sum of all kinds.
    #[must_use]
    pub fn total(&self) -> BridgeSummary {
        ThermalBridgeKind::ALL
            .into_iter()
            .map(|kind| self.get(kind))
            .sum()
    }
}
