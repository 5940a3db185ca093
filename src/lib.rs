//! # Twine Envelope
//!
//! Thermal-envelope transmittance models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a building's opaque elements, windows and linear thermal bridges,
//! the models in this crate compute the global transmittance indicator
//!
//! ```text
//! K = (Σ btr · A · U + Σ L · ψ) / Σ A
//! ```
//!
//! together with its breakdown by category, and merge opaque elements that
//! behave identically.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful outside that model.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for input records and reports.
//!   Quantities serialize as numbers in SI base units.
//!
//! ## Logging
//!
//! Rejected records and computation summaries are reported through
//! [`tracing`]. The crate installs no subscriber.

pub mod models;
pub mod support;
