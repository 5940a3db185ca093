//! Merging of opaque elements with equivalent thermal behaviour.
//!
//! Two opaque elements are equivalent when their transmittances fall in the
//! same tolerance bucket, they face the same boundary condition and they
//! report under the same [`OpaqueKind`]. Each equivalence class becomes one
//! element whose area is the class total and whose transmittance is the
//! area-weighted mean, so `Σ A` and `Σ btr · A · U` are unchanged.

mod config;

pub use config::{ConfigError, GroupingConfig};

use std::collections::{HashMap, HashSet, hash_map::Entry};

use tracing::debug;
use uom::{
    ConstZero,
    si::{
        f64::{Area, ThermalConductance},
        heat_transfer::watt_per_square_meter_kelvin,
    },
};

use crate::support::{
    constraint::{Constrained, NonNegative},
    units::ThermalTransmittance,
};

use super::element::{Boundary, OpaqueElement, OpaqueKind, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct GroupKey {
    bucket: i64,
    boundary: Boundary,
    kind: OpaqueKind,
}

impl GroupKey {
    fn of(element: &OpaqueElement, tolerance: f64) -> Self {
        Self {
            bucket: bucket(element.transmittance(), tolerance),
            boundary: element.boundary(),
            kind: element.kind(),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn bucket(u: ThermalTransmittance, tolerance: f64) -> i64 {
    (u.get::<watt_per_square_meter_kelvin>() / tolerance).round() as i64
}

/// Merges equivalent opaque elements.
///
/// Groups appear in the order of their first member. A group with a single
/// member is returned unchanged. A merged element keeps the id and tilt of
/// its first member and gets a synthesized name that is unique among the
/// returned elements.
///
/// The group key is the transmittance bucket, the boundary condition and
/// the [`OpaqueKind`]. Elements with the same transmittance and boundary
/// but a different kind, such as a wall and a roof, stay separate, so the
/// wall/roof/floor/ground subtotals are the same before and after grouping.
///
/// Grouping is idempotent: grouping an already grouped list returns it
/// unchanged.
#[must_use]
pub fn group_opaques(opaques: &[OpaqueElement], config: &GroupingConfig) -> Vec<OpaqueElement> {
    let tolerance = config
        .u_tolerance()
        .get::<watt_per_square_meter_kelvin>();

    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<(GroupKey, Vec<&OpaqueElement>)> = Vec::new();

    for element in opaques {
        let key = GroupKey::of(element, tolerance);
        match index.entry(key) {
            Entry::Occupied(entry) => groups[*entry.get()].1.push(element),
            Entry::Vacant(entry) => {
                entry.insert(groups.len());
                groups.push((key, vec![element]));
            }
        }
    }

    let mut taken: HashSet<String> = groups
        .iter()
        .filter_map(|(_, members)| match members.as_slice() {
            [single] => Some(single.name().to_owned()),
            _ => None,
        })
        .collect();

    let grouped: Vec<OpaqueElement> = groups
        .into_iter()
        .map(|(key, members)| match members.as_slice() {
            [single] => (*single).clone(),
            _ => merge(&members, key, tolerance, &mut taken),
        })
        .collect();

    debug!(
        before = opaques.len(),
        after = grouped.len(),
        "grouped opaque elements"
    );

    grouped
}

fn merge(
    members: &[&OpaqueElement],
    key: GroupKey,
    tolerance: f64,
    taken: &mut HashSet<String>,
) -> OpaqueElement {
    let first = members[0];
    let area: Constrained<Area, NonNegative> =
        members.iter().map(|m| m.constrained_area()).sum();
    let u = mean_transmittance(members, *area.as_ref(), key.bucket, tolerance);

    let base = format!(
        "{} {} U={:.3}",
        key.kind,
        key.boundary,
        u.as_ref().get::<watt_per_square_meter_kelvin>()
    );
    let mut name = base.clone();
    let mut suffix = 2;
    while taken.contains(&name) {
        name = format!("{base} ({suffix})");
        suffix += 1;
    }
    taken.insert(name.clone());

    OpaqueElement::merged(first, name, area, u)
}

/// Area-weighted mean transmittance of a group.
///
/// Falls back to the first member's value when the group has no area or
/// when rounding pushes the mean out of the group's bucket.
fn mean_transmittance(
    members: &[&OpaqueElement],
    area: Area,
    bucket_of_group: i64,
    tolerance: f64,
) -> Constrained<ThermalTransmittance, NonNegative> {
    let first = members[0].constrained_transmittance();
    if area <= Area::ZERO || members.iter().all(|m| m.transmittance() == *first.as_ref()) {
        return first;
    }

    let au: ThermalConductance = members
        .iter()
        .map(|m| m.area() * m.transmittance())
        .fold(ThermalConductance::ZERO, |acc, au| acc + au);
    let mean: ThermalTransmittance = au / area;

    match NonNegative::new(mean) {
        Ok(mean) if bucket(*mean.as_ref(), tolerance) == bucket_of_group => mean,
        _ => first,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;

    use proptest::prelude::*;
    use uom::si::{
        angle::degree, area::square_meter, f64::Angle, thermal_conductance::watt_per_kelvin,
    };

    use crate::models::envelope::core::aggregate::SurfaceSummary;

    fn element() -> impl Strategy<Value = (f64, f64, Boundary, f64)> {
        (
            0.0_f64..100.0,
            prop::sample::select(vec![0.0, 0.2, 0.35, 0.5, 1.2]),
            -4e-7_f64..4e-7,
            prop::sample::select(Boundary::ALL.to_vec()),
            prop::sample::select(vec![0.0, 90.0, 180.0]),
        )
            .prop_map(|(a, u, noise, boundary, tilt)| (a, (u + noise).max(0.0), boundary, tilt))
    }

    fn build(records: &[(f64, f64, Boundary, f64)]) -> Vec<OpaqueElement> {
        records
            .iter()
            .enumerate()
            .map(|(i, &(a, u, boundary, tilt))| {
                OpaqueElement::new(
                    format!("o{i}"),
                    format!("element {i}"),
                    Area::new::<square_meter>(a),
                    ThermalTransmittance::new::<watt_per_square_meter_kelvin>(u),
                    boundary,
                )
                .and_then(|e| e.with_tilt(Angle::new::<degree>(tilt)))
                .unwrap()
            })
            .collect()
    }

    proptest! {
        #[test]
        fn grouping_conserves_area_and_conductance(
            records in prop::collection::vec(element(), 0..40)
        ) {
            let opaques = build(&records);
            let grouped = group_opaques(&opaques, &GroupingConfig::default());

            let before = SurfaceSummary::of(&opaques);
            let after = SurfaceSummary::of(&grouped);

            prop_assert!(grouped.len() <= opaques.len());
            prop_assert!(
                (before.a.get::<square_meter>() - after.a.get::<square_meter>()).abs() <= 1e-9
            );
            prop_assert!(
                (before.au.get::<watt_per_kelvin>() - after.au.get::<watt_per_kelvin>()).abs()
                    <= 1e-9
            );
        }

        #[test]
        fn grouping_is_idempotent(records in prop::collection::vec(element(), 0..40)) {
            let config = GroupingConfig::default();
            let once = group_opaques(&build(&records), &config);
            let twice = group_opaques(&once, &config);
            prop_assert_eq!(once, twice);
        }
    }
}
