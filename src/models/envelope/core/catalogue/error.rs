use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

use crate::models::envelope::core::element::{InvalidBoundary, InvalidBridgeKind};

/// Collection a catalogue record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Opaques,
    Windows,
    Bridges,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Opaques => "opaque",
            Self::Windows => "window",
            Self::Bridges => "thermal bridge",
        })
    }
}

/// A record rejected during catalogue ingestion.
///
/// Rejection is per record: the remaining records are still ingested.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {collection} element `{id}`")]
pub struct InvalidElement {
    /// Collection the record was submitted in.
    pub collection: Collection,

    /// Id of the offending record, as submitted.
    pub id: String,

    /// Why the record was rejected.
    #[source]
    pub reason: InvalidReason,
}

/// Reason a record was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidReason {
    #[error("invalid area")]
    Area(#[source] ConstraintError),

    #[error("invalid transmittance")]
    Transmittance(#[source] ConstraintError),

    #[error("invalid length")]
    Length(#[source] ConstraintError),

    #[error("invalid linear transmittance")]
    LinearTransmittance(#[source] ConstraintError),

    #[error("invalid tilt")]
    Tilt(#[source] ConstraintError),

    #[error(transparent)]
    Boundary(#[from] InvalidBoundary),

    #[error(transparent)]
    BridgeKind(#[from] InvalidBridgeKind),

    #[error("duplicate id")]
    DuplicateId,

    #[error("duplicate name `{0}`")]
    DuplicateName(String),
}
