//! Tabular breakdown of the K indicator by category.
//!
//! The breakdown lists windows, opaque elements and thermal bridges, each
//! followed by its subcategories, in a fixed order. Rows whose area or
//! length is at or below [`DISPLAY_THRESHOLD`](super::tolerance::DISPLAY_THRESHOLD)
//! are left out, and a [`TotalRow`] closes the table.

use std::iter;

use uom::si::{
    area::square_meter, heat_transfer::watt_per_square_meter_kelvin, length::meter,
    thermal_conductance::watt_per_kelvin,
};

use super::{
    aggregate::{BridgeSummary, SurfaceSummary},
    catalogue::Catalogue,
    element::{OpaqueKind, ThermalBridgeKind},
    indicator::{KData, k_contribution, k_percentage, u_mean},
    tolerance::is_displayable,
};

/// Category or subcategory reported by a breakdown row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BreakdownEntry {
    Windows,
    Opaques,
    Opaque(OpaqueKind),
    Bridges,
    Bridge(ThermalBridgeKind),
}

impl BreakdownEntry {
    /// All entries, in reporting order.
    pub fn all() -> impl Iterator<Item = Self> {
        iter::once(Self::Windows)
            .chain(iter::once(Self::Opaques))
            .chain(OpaqueKind::ALL.into_iter().map(Self::Opaque))
            .chain(iter::once(Self::Bridges))
            .chain(ThermalBridgeKind::ALL.into_iter().map(Self::Bridge))
    }

    /// Returns `true` for the top-level categories.
    #[must_use]
    pub fn is_category(self) -> bool {
        matches!(self, Self::Windows | Self::Opaques | Self::Bridges)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Opaques => "Opaque elements",
            Self::Opaque(OpaqueKind::Wall) => "Walls",
            Self::Opaque(OpaqueKind::Roof) => "Roofs",
            Self::Opaque(OpaqueKind::Floor) => "Floors",
            Self::Opaque(OpaqueKind::Ground) => "Ground contact",
            Self::Bridges => "Thermal bridges",
            Self::Bridge(kind) => kind.label(),
        }
    }

    #[must_use]
    pub fn short_title(self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Opaques => "Opaques",
            Self::Opaque(OpaqueKind::Wall) => "O-W",
            Self::Opaque(OpaqueKind::Roof) => "O-R",
            Self::Opaque(OpaqueKind::Floor) => "O-F",
            Self::Opaque(OpaqueKind::Ground) => "O-G",
            Self::Bridges => "TBs",
            Self::Bridge(ThermalBridgeKind::Roof) => "TB-R",
            Self::Bridge(ThermalBridgeKind::Balcony) => "TB-B",
            Self::Bridge(ThermalBridgeKind::Corner) => "TB-C",
            Self::Bridge(ThermalBridgeKind::IntermediateFloor) => "TB-IF",
            Self::Bridge(ThermalBridgeKind::InternalWall) => "TB-IW",
            Self::Bridge(ThermalBridgeKind::GroundFloor) => "TB-GF",
            Self::Bridge(ThermalBridgeKind::Pillar) => "TB-P",
            Self::Bridge(ThermalBridgeKind::Window) => "TB-W",
            Self::Bridge(ThermalBridgeKind::Generic) => "TB-G",
        }
    }

    /// Chart color hint, as a hex RGB string.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Windows => "#0096e1",
            Self::Opaques => "#a0401a",
            Self::Opaque(OpaqueKind::Wall) => "#eedaa3",
            Self::Opaque(OpaqueKind::Roof) => "#c28586",
            Self::Opaque(OpaqueKind::Floor) => "#c99fde",
            Self::Opaque(OpaqueKind::Ground) => "#d3aa86",
            Self::Bridges => "#447c2c",
            Self::Bridge(ThermalBridgeKind::Roof) => "#c281ac",
            Self::Bridge(ThermalBridgeKind::Balcony) => "#c28bb5",
            Self::Bridge(ThermalBridgeKind::Corner) => "#eee8a4",
            Self::Bridge(ThermalBridgeKind::IntermediateFloor) => "#bda7de",
            Self::Bridge(ThermalBridgeKind::InternalWall) => "#d8eea8",
            Self::Bridge(ThermalBridgeKind::GroundFloor) => "#d3ca86",
            Self::Bridge(ThermalBridgeKind::Pillar) => "#98de7b",
            Self::Bridge(ThermalBridgeKind::Window) => "#91decf",
            Self::Bridge(ThermalBridgeKind::Generic) => "#a200ff",
        }
    }

    /// Extent (m² or m) and conductance (W/K) of the entry.
    fn extent_and_conductance(self, data: &KData) -> (f64, f64) {
        let surface = |s: SurfaceSummary| {
            (s.a.get::<square_meter>(), s.au.get::<watt_per_kelvin>())
        };
        let linear = |b: BridgeSummary| (b.l.get::<meter>(), b.psil.get::<watt_per_kelvin>());

        match self {
            Self::Windows => surface(data.windows),
            Self::Opaques => surface(data.opaques()),
            Self::Opaque(kind) => surface(data.opaque(kind)),
            Self::Bridges => linear(data.bridges()),
            Self::Bridge(kind) => linear(data.tbs.get(kind)),
        }
    }
}

/// One line of the breakdown table, in SI base units.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakdownRow {
    pub entry: BreakdownEntry,
    pub title: String,
    pub short_title: String,
    /// Area (m²) or, for thermal bridges, length (m).
    pub area_or_length: f64,
    /// `Σ btr · A · U` or `Σ L · ψ`, W/K.
    pub au_or_psil: f64,
    /// Mean `U` (W/m²K) or mean `ψ` (W/mK).
    pub u_mean: Option<f64>,
    /// Contribution to K, W/m²K.
    pub k_contribution: Option<f64>,
    /// Share of K, percent.
    pub k_percentage: Option<f64>,
    pub color: String,
    pub emphasized: bool,
}

impl BreakdownRow {
    fn new(entry: BreakdownEntry, data: &KData, total_a: f64, k: Option<f64>) -> Self {
        let (area_or_length, au_or_psil) = entry.extent_and_conductance(data);
        Self {
            entry,
            title: entry.title().to_owned(),
            short_title: entry.short_title().to_owned(),
            area_or_length,
            au_or_psil,
            u_mean: u_mean(area_or_length, au_or_psil),
            k_contribution: k_contribution(au_or_psil, total_a),
            k_percentage: k_percentage(au_or_psil, total_a, k),
            color: entry.color().to_owned(),
            emphasized: entry.is_category(),
        }
    }

    /// Renders the row's values for display.
    #[must_use]
    pub fn formatted(&self) -> FormattedRow {
        FormattedRow {
            title: self.title.clone(),
            area_or_length: round_or_dash(Some(self.area_or_length), 2),
            au_or_psil: round_or_dash(Some(self.au_or_psil), 2),
            u_mean: round_or_dash(self.u_mean, 2),
            k_contribution: round_or_dash(self.k_contribution, 2),
            k_percentage: round_or_dash(self.k_percentage, 1),
            emphasized: self.emphasized,
        }
    }
}

/// Closing line of the breakdown table.
///
/// Mean transmittance and contribution both equal K, and the percentage is
/// exactly 100 whenever K is defined.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TotalRow {
    pub area: f64,
    pub au: f64,
    pub u_mean: Option<f64>,
    pub k_contribution: Option<f64>,
    pub k_percentage: Option<f64>,
}

impl TotalRow {
    pub const TITLE: &'static str = "TOTAL";

    fn new(data: &KData, k: Option<f64>) -> Self {
        Self {
            area: data.a.get::<square_meter>(),
            au: data.au.get::<watt_per_kelvin>(),
            u_mean: k,
            k_contribution: k,
            k_percentage: k.map(|_| 100.0),
        }
    }

    /// Renders the row's values for display.
    #[must_use]
    pub fn formatted(&self) -> FormattedRow {
        FormattedRow {
            title: Self::TITLE.to_owned(),
            area_or_length: round_or_dash(Some(self.area), 2),
            au_or_psil: round_or_dash(Some(self.au), 2),
            u_mean: round_or_dash(self.u_mean, 2),
            k_contribution: round_or_dash(self.k_contribution, 2),
            k_percentage: round_or_dash(self.k_percentage, 1),
            emphasized: true,
        }
    }
}

/// A breakdown row rendered as display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRow {
    pub title: String,
    pub area_or_length: String,
    pub au_or_psil: String,
    pub u_mean: String,
    pub k_contribution: String,
    pub k_percentage: String,
    pub emphasized: bool,
}

/// K indicator broken down by category.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakdown {
    /// Displayable rows, in reporting order.
    pub rows: Vec<BreakdownRow>,
    pub total: TotalRow,
    /// K, W/m²K.
    pub k: Option<f64>,
}

impl Breakdown {
    /// Builds the breakdown from computed indicator data.
    #[must_use]
    pub fn build(data: &KData) -> Self {
        let k = data.k.map(|k| k.get::<watt_per_square_meter_kelvin>());
        let total_a = data.a.get::<square_meter>();

        let rows = BreakdownEntry::all()
            .map(|entry| BreakdownRow::new(entry, data, total_a, k))
            .filter(|row| is_displayable(row.area_or_length))
            .collect();

        Self {
            rows,
            total: TotalRow::new(data, k),
            k,
        }
    }

    /// Computes the indicator for a catalogue and breaks it down.
    #[must_use]
    pub fn from_catalogue(catalogue: &Catalogue) -> Self {
        Self::build(&KData::from_catalogue(catalogue))
    }

    /// Returns the row for an entry, if it is displayed.
    #[must_use]
    pub fn row(&self, entry: BreakdownEntry) -> Option<&BreakdownRow> {
        self.rows.iter().find(|row| row.entry == entry)
    }

    /// Renders every row, the total last.
    #[must_use]
    pub fn formatted(&self) -> Vec<FormattedRow> {
        self.rows
            .iter()
            .map(BreakdownRow::formatted)
            .chain(iter::once(self.total.formatted()))
            .collect()
    }
}

/// Formats a value with a fixed number of decimals, or `-` if undefined.
#[must_use]
pub fn round_or_dash(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.decimals$}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::envelope::core::{
        element::Boundary,
        test_support::{bridge, opaque, opaque_tilted, sample_catalogue, window},
    };

    fn breakdown_of(catalogue: &Catalogue) -> Breakdown {
        Breakdown::from_catalogue(catalogue)
    }

    #[test]
    fn rows_follow_reporting_order() {
        let breakdown = breakdown_of(&sample_catalogue());

        let order: Vec<_> = BreakdownEntry::all().collect();
        let positions: Vec<_> = breakdown
            .rows
            .iter()
            .map(|row| order.iter().position(|e| *e == row.entry).unwrap())
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(breakdown.rows[0].entry, BreakdownEntry::Windows);
    }

    #[test]
    fn categories_are_emphasized() {
        let breakdown = breakdown_of(&sample_catalogue());

        for row in &breakdown.rows {
            assert_eq!(row.emphasized, row.entry.is_category(), "{}", row.title);
        }
    }

    #[test]
    fn zero_area_categories_are_absent() {
        let catalogue = Catalogue::new(
            vec![opaque("facade", 10.0, 0.5, Boundary::Exterior)],
            vec![window("skylight", 0.0, 1.5, Boundary::Exterior)],
            vec![],
        );

        let breakdown = breakdown_of(&catalogue);

        let entries: Vec<_> = breakdown.rows.iter().map(|r| r.entry).collect();
        assert_eq!(
            entries,
            vec![
                BreakdownEntry::Opaques,
                BreakdownEntry::Opaque(OpaqueKind::Wall),
            ]
        );
    }

    #[test]
    fn tiny_extents_are_filtered() {
        let catalogue = Catalogue::new(
            vec![opaque("facade", 10.0, 0.5, Boundary::Exterior)],
            vec![window("vent", 0.001, 1.5, Boundary::Exterior)],
            vec![bridge("pin", ThermalBridgeKind::Pillar, 0.0005, 0.5)],
        );

        let breakdown = breakdown_of(&catalogue);

        assert!(breakdown.row(BreakdownEntry::Windows).is_none());
        assert!(breakdown.row(BreakdownEntry::Bridges).is_none());
    }

    #[test]
    fn category_percentages_sum_to_hundred() {
        let catalogue = Catalogue::new(
            vec![
                opaque("facade", 60.0, 0.5, Boundary::Exterior),
                opaque_tilted("roof", 40.0, 0.3, Boundary::Exterior, 0.0),
                opaque("slab", 50.0, 0.4, Boundary::Ground),
            ],
            vec![window("glazing", 20.0, 2.5, Boundary::Exterior)],
            vec![],
        );

        let breakdown = breakdown_of(&catalogue);

        let categories: f64 = breakdown
            .rows
            .iter()
            .filter(|row| row.emphasized)
            .filter_map(|row| row.k_percentage)
            .sum();
        assert_relative_eq!(categories, 100.0, epsilon = 1e-9);

        let opaques = breakdown.row(BreakdownEntry::Opaques).unwrap();
        let children: f64 = breakdown
            .rows
            .iter()
            .filter(|row| matches!(row.entry, BreakdownEntry::Opaque(_)))
            .filter_map(|row| row.k_percentage)
            .sum();
        assert_relative_eq!(children, opaques.k_percentage.unwrap(), epsilon = 1e-9);

        assert_eq!(breakdown.total.k_percentage, Some(100.0));
    }

    #[test]
    fn total_row_mirrors_k() {
        let catalogue = Catalogue::new(
            vec![opaque("facade", 10.0, 0.5, Boundary::Exterior)],
            vec![],
            vec![],
        );

        let breakdown = breakdown_of(&catalogue);

        assert_eq!(breakdown.k, Some(0.5));
        assert_eq!(breakdown.total.u_mean, Some(0.5));
        assert_eq!(breakdown.total.k_contribution, Some(0.5));
        assert_eq!(breakdown.total.k_percentage, Some(100.0));
        assert_relative_eq!(breakdown.total.area, 10.0);
    }

    #[test]
    fn empty_catalogue_has_only_an_undefined_total() {
        let breakdown = breakdown_of(&Catalogue::default());

        assert!(breakdown.rows.is_empty());
        assert_eq!(breakdown.k, None);
        assert_eq!(breakdown.total.k_percentage, None);

        let formatted = breakdown.formatted();
        assert_eq!(formatted.len(), 1);
        assert_eq!(formatted[0].title, "TOTAL");
        assert_eq!(formatted[0].u_mean, "-");
        assert_eq!(formatted[0].k_percentage, "-");
    }

    #[test]
    fn bridge_rows_report_mean_psi() {
        let catalogue = Catalogue::new(
            vec![opaque("facade", 100.0, 0.5, Boundary::Exterior)],
            vec![],
            vec![
                bridge("c1", ThermalBridgeKind::Corner, 10.0, 0.1),
                bridge("c2", ThermalBridgeKind::Corner, 10.0, 0.3),
            ],
        );

        let breakdown = breakdown_of(&catalogue);
        let corner = breakdown
            .row(BreakdownEntry::Bridge(ThermalBridgeKind::Corner))
            .unwrap();

        assert_eq!(corner.short_title, "TB-C");
        assert_relative_eq!(corner.area_or_length, 20.0);
        assert_relative_eq!(corner.au_or_psil, 4.0);
        assert_relative_eq!(corner.u_mean.unwrap(), 0.2);
        assert_relative_eq!(corner.k_contribution.unwrap(), 0.04);
    }

    #[test]
    fn formats_with_fixed_decimals() {
        assert_eq!(round_or_dash(Some(0.456), 2), "0.46");
        assert_eq!(round_or_dash(Some(12.0), 1), "12.0");
        assert_eq!(round_or_dash(None, 2), "-");

        let catalogue = Catalogue::new(
            vec![opaque("facade", 10.0, 0.5, Boundary::Exterior)],
            vec![],
            vec![],
        );
        let row = breakdown_of(&catalogue).rows[0].formatted();
        assert_eq!(row.title, "Opaque elements");
        assert_eq!(row.area_or_length, "10.00");
        assert_eq!(row.au_or_psil, "5.00");
        assert_eq!(row.u_mean, "0.50");
        assert_eq!(row.k_percentage, "100.0");
    }
}
