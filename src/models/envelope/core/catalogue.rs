//! The envelope element catalogue and its ingestion from raw records.

mod error;
mod input;

pub use error::{Collection, InvalidElement, InvalidReason};
pub use input::{BridgeInput, OpaqueInput, WindowInput};

use std::collections::HashSet;

use tracing::{debug, warn};

use super::{
    element::{OpaqueElement, ThermalBridge, Window},
    group::{GroupingConfig, group_opaques},
};

/// Raw records for a whole building, as supplied by an external store.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CatalogueInput {
    pub opaques: Vec<OpaqueInput>,
    pub windows: Vec<WindowInput>,
    pub bridges: Vec<BridgeInput>,
}

/// Result of ingesting a [`CatalogueInput`].
#[derive(Debug, Clone, PartialEq)]
pub struct Ingestion {
    /// Catalogue built from every valid record.
    pub catalogue: Catalogue,

    /// Records that were rejected, in submission order.
    pub rejected: Vec<InvalidElement>,
}

/// Validated envelope elements of a building.
///
/// Reports are computed from a catalogue on demand; the catalogue holds no
/// derived state. Collection order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogue {
    opaques: Vec<OpaqueElement>,
    windows: Vec<Window>,
    bridges: Vec<ThermalBridge>,
}

impl Catalogue {
    /// Creates a catalogue from validated elements.
    ///
    /// Id and name uniqueness are the caller's responsibility here;
    /// use [`Catalogue::ingest`] to have them checked.
    #[must_use]
    pub fn new(
        opaques: Vec<OpaqueElement>,
        windows: Vec<Window>,
        bridges: Vec<ThermalBridge>,
    ) -> Self {
        Self {
            opaques,
            windows,
            bridges,
        }
    }

    /// Validates raw records into a catalogue.
    ///
    /// Each invalid record is rejected on its own and reported in
    /// [`Ingestion::rejected`]; every valid record is kept. Within a
    /// collection, a record reusing an earlier record's id or name is
    /// rejected and the earlier record kept.
    #[must_use]
    pub fn ingest(input: &CatalogueInput) -> Ingestion {
        let mut rejected = Vec::new();

        let opaques = ingest_collection(
            Collection::Opaques,
            &input.opaques,
            |r| (&r.id, &r.name),
            OpaqueInput::validate,
            &mut rejected,
        );
        let windows = ingest_collection(
            Collection::Windows,
            &input.windows,
            |r| (&r.id, &r.name),
            WindowInput::validate,
            &mut rejected,
        );
        let bridges = ingest_collection(
            Collection::Bridges,
            &input.bridges,
            |r| (&r.id, &r.name),
            BridgeInput::validate,
            &mut rejected,
        );

        debug!(
            opaques = opaques.len(),
            windows = windows.len(),
            bridges = bridges.len(),
            rejected = rejected.len(),
            "ingested envelope catalogue"
        );

        Ingestion {
            catalogue: Self::new(opaques, windows, bridges),
            rejected,
        }
    }

    /// Opaque elements.
    #[must_use]
    pub fn opaques(&self) -> &[OpaqueElement] {
        &self.opaques
    }

    /// Windows.
    #[must_use]
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Thermal bridges.
    #[must_use]
    pub fn bridges(&self) -> &[ThermalBridge] {
        &self.bridges
    }

    /// Replaces the opaque elements with their grouped equivalent.
    ///
    /// This is irreversible: per-element identity of merged elements is lost.
    pub fn group_opaques(&mut self, config: &GroupingConfig) -> &[OpaqueElement] {
        self.opaques = group_opaques(&self.opaques, config);
        &self.opaques
    }
}

fn ingest_collection<R, E>(
    collection: Collection,
    records: &[R],
    identity: impl Fn(&R) -> (&String, &String),
    validate: impl Fn(&R) -> Result<E, InvalidReason>,
    rejected: &mut Vec<InvalidElement>,
) -> Vec<E> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    let mut accepted = Vec::with_capacity(records.len());

    for record in records {
        let (id, name) = identity(record);

        let outcome = if ids.contains(id) {
            Err(InvalidReason::DuplicateId)
        } else if names.contains(name) {
            Err(InvalidReason::DuplicateName(name.clone()))
        } else {
            validate(record)
        };

        match outcome {
            Ok(element) => {
                ids.insert(id);
                names.insert(name);
                accepted.push(element);
            }
            Err(reason) => {
                warn!(%collection, %id, %reason, "rejected envelope record");
                rejected.push(InvalidElement {
                    collection,
                    id: id.clone(),
                    reason,
                });
            }
        }
    }

    accepted
}
