//! Numeric thresholds shared by the grouper, aggregator consumers and the
//! indicator calculator.
//!
//! The thresholds are ordered: grouping must never merge transmittances that
//! the calculator would consider distinct, and anything the calculator treats
//! as significant must also survive the display cutoff's coarser scale.
//! The ordering is enforced at compile time.

/// Denominator guard for derived metrics (m², m or W/m²K).
///
/// A quotient whose denominator is at or below this value is undefined.
pub const SIGNIFICANCE_THRESHOLD: f64 = 1e-4;

/// Extent (m² or m) at or below which a breakdown row is not reported.
pub const DISPLAY_THRESHOLD: f64 = 1e-3;

/// Default bucket width (W/m²K) used when grouping opaque transmittances.
pub const GROUPING_TOLERANCE: f64 = 1e-6;

const _: () = {
    assert!(GROUPING_TOLERANCE <= SIGNIFICANCE_THRESHOLD);
    assert!(SIGNIFICANCE_THRESHOLD < DISPLAY_THRESHOLD);
};

/// Returns `true` if `value` is large enough to divide by.
#[must_use]
pub(crate) fn is_significant(value: f64) -> bool {
    value > SIGNIFICANCE_THRESHOLD
}

/// Returns `true` if a row with this extent should appear in a breakdown.
#[must_use]
pub(crate) fn is_displayable(extent: f64) -> bool {
    extent > DISPLAY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_ordered() {
        assert!(GROUPING_TOLERANCE <= SIGNIFICANCE_THRESHOLD);
        assert!(SIGNIFICANCE_THRESHOLD < DISPLAY_THRESHOLD);
    }

    #[test]
    fn guards_are_exclusive() {
        assert!(!is_significant(SIGNIFICANCE_THRESHOLD));
        assert!(is_significant(2.0 * SIGNIFICANCE_THRESHOLD));
        assert!(!is_displayable(DISPLAY_THRESHOLD));
        assert!(!is_displayable(0.0));
        assert!(is_displayable(0.01));
    }
}
