use uom::si::{angle::degree, f64::Angle};

const STEPS_PER_DEGREE: f64 = 1e9;

/// Wraps an angle into the interval `[0, 360)` degrees.
///
/// The angle is first snapped to a resolution of one nanodegree, so values
/// that only differ by unit-conversion noise (such as `120°` stored in
/// radians and read back) compare equal to their nominal value.
///
/// ```
/// use uom::si::{angle::degree, f64::Angle};
/// use twine_envelope::support::units::normalize_degrees;
///
/// let tilt = normalize_degrees(Angle::new::<degree>(-90.0));
/// assert_eq!(tilt, 270.0);
/// ```
#[must_use]
pub fn normalize_degrees(angle: Angle) -> f64 {
    let value = (angle.get::<degree>() * STEPS_PER_DEGREE).round() / STEPS_PER_DEGREE;
    let wrapped = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn wraps_into_range() {
        let cases = [
            (0.0, 0.0),
            (90.0, 90.0),
            (360.0, 0.0),
            (450.0, 90.0),
            (-90.0, 270.0),
            (-720.0, 0.0),
        ];
        for (input, expected) in cases {
            assert_relative_eq!(normalize_degrees(Angle::new::<degree>(input)), expected);
        }
    }

    #[test]
    fn removes_conversion_noise() {
        for deg in [60.0, 120.0, 240.0] {
            assert_eq!(normalize_degrees(Angle::new::<degree>(deg)), deg);
        }
    }

    #[test]
    fn tiny_negative_stays_below_full_turn() {
        let tilt = normalize_degrees(Angle::new::<degree>(-1e-15));
        assert!((0.0..360.0).contains(&tilt));
    }
}
