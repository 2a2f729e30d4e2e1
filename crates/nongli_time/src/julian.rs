//! Julian Date constants and conversions.

/// Julian Date of J2000.0 (2000-01-01T12:00:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Julian days per Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert Unix milliseconds to a Julian Date on the same time scale.
pub fn unix_millis_to_jd(millis: i64) -> f64 {
    UNIX_EPOCH_JD + millis as f64 / MILLIS_PER_DAY as f64
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_maps_to_jd() {
        assert_eq!(unix_millis_to_jd(0), UNIX_EPOCH_JD);
    }

    #[test]
    fn j2000_noon_from_millis() {
        // 2000-01-01T12:00:00Z
        let jd = unix_millis_to_jd(946_728_000_000);
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn centuries_at_j2000_is_zero() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((jd_to_centuries(J2000_JD + 36_525.0) - 1.0).abs() < 1e-12);
    }
}
