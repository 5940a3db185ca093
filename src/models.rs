//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Currently the only
//! domain is [`envelope`], the thermal envelope of a building.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail; the types its API needs are re-exported by the model
//! module.
//!
//! The [`twine_core::Model`] implementation should be a thin adapter that
//! delegates to the model-specific core API. A single `core` may be exposed
//! through multiple adapters, as [`envelope::KIndicator`] and
//! [`envelope::KBreakdown`] are.

pub mod envelope;
