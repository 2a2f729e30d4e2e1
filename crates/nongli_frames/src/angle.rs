//! Angle normalization and rounding.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to (-180, 180] degrees.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Unsigned shorter-arc separation between two longitudes, in [0, 180].
pub fn shorter_arc(a_deg: f64, b_deg: f64) -> f64 {
    let d = normalize_360(a_deg - b_deg);
    d.min(360.0 - d)
}

/// Round to a fixed number of decimal digits.
///
/// Half-way cases round away from zero.
pub fn round_to_precision(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_basic() {
        assert!((normalize_360(45.0) - 45.0).abs() < 1e-15);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-10);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert_eq!(normalize_360(360.0), 0.0);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-18);
        assert!((0.0..360.0).contains(&r), "got {r}");
    }

    #[test]
    fn pm180_range() {
        assert!((normalize_to_pm180(190.0) - (-170.0)).abs() < 1e-10);
        assert!((normalize_to_pm180(-190.0) - 170.0).abs() < 1e-10);
        assert_eq!(normalize_to_pm180(180.0), 180.0);
        assert_eq!(normalize_to_pm180(0.0), 0.0);
    }

    #[test]
    fn shorter_arc_wraps() {
        assert!((shorter_arc(359.5, 0.25) - 0.75).abs() < 1e-10);
        assert!((shorter_arc(10.0, 350.0) - 20.0).abs() < 1e-10);
        assert!((shorter_arc(0.0, 180.0) - 180.0).abs() < 1e-10);
    }

    #[test]
    fn round_three_digits() {
        assert_eq!(round_to_precision(123.456_49, 3), 123.456);
        assert_eq!(round_to_precision(123.456_51, 3), 123.457);
        assert_eq!(round_to_precision(-0.000_4, 3), -0.0);
        assert_eq!(round_to_precision(359.999_8, 3), 360.0);
    }
}
