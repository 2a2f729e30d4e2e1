//! Built-in analytic ephemeris.
//!
//! Evaluates the truncated VSOP87 solar series and the ch. 47 lunar series
//! on TT = UTC + ΔT. Longitudes are geocentric, so the observer position is
//! accepted for contract compatibility but has no effect.

use nongli_time::Instant;

use crate::error::EngineError;
use crate::moon::moon_apparent_longitude_deg;
use crate::sun::sun_apparent_longitude_deg;
use crate::{Body, EphemerisProvider, GeoPosition};

/// Geocentric apparent longitudes from closed-form series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub const NAME: &'static str = "analytic";

    pub fn new() -> Self {
        Self
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn longitude(
        &self,
        body: Body,
        instant: Instant,
        _position: &GeoPosition,
    ) -> Result<f64, EngineError> {
        let jd_tt = instant.jd_tt();
        Ok(match body {
            Body::Sun => sun_apparent_longitude_deg(jd_tt),
            Body::Moon => moon_apparent_longitude_deg(jd_tt),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equinox_2000_near_zero() {
        // March equinox 2000: 2000-03-20T07:35Z
        let t = Instant::from_unix_millis(953_537_700_000).unwrap();
        let lon = AnalyticEphemeris
            .longitude(Body::Sun, t, &GeoPosition::default())
            .unwrap();
        let dist = lon.min(360.0 - lon);
        assert!(dist < 0.01, "got {lon}");
    }

    #[test]
    fn new_moon_2022_09_25_conjunction() {
        // 2022-09-25T21:54Z
        let t = Instant::from_unix_millis(1_664_142_840_000).unwrap();
        let pos = GeoPosition::default();
        let sun = AnalyticEphemeris.longitude(Body::Sun, t, &pos).unwrap();
        let moon = AnalyticEphemeris.longitude(Body::Moon, t, &pos).unwrap();
        let diff = (moon - sun).abs();
        assert!(diff.min(360.0 - diff) < 0.05, "sun={sun} moon={moon}");
    }

    #[test]
    fn position_does_not_change_geocentric_result() {
        let t = Instant::from_unix_millis(1_664_142_840_000).unwrap();
        let a = AnalyticEphemeris
            .longitude(Body::Moon, t, &GeoPosition::default())
            .unwrap();
        let b = AnalyticEphemeris
            .longitude(Body::Moon, t, &GeoPosition::new(-74.0, 40.7, 10.0))
            .unwrap();
        assert_eq!(a, b);
    }
}
