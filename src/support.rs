//! Supporting utilities used by models.
//!
//! These modules are public because they're useful outside the models that
//! motivated them, but their APIs are not stable.

pub mod constraint;
pub mod units;
