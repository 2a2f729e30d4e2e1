//! Apparent geocentric longitude of the Sun.
//!
//! Earth's heliocentric longitude from the truncated VSOP87D series
//! (Meeus, *Astronomical Algorithms* Appendix III), turned geocentric,
//! corrected to FK5, then shifted by nutation and annual aberration.
//! Accuracy is about 1″ over 1800–2200.

use nongli_frames::{ARCSEC_PER_DEG, normalize_360, nutation_in_longitude_deg};
use nongli_time::jd_to_centuries;

/// VSOP87 amplitudes are stored in units of 1e-8 radians.
const VSOP_SCALE: f64 = 1e-8;

/// FK5 frame correction in longitude (arcsec).
const FK5_CORRECTION_ARCSEC: f64 = -0.090_33;

/// Constant of annual aberration scaled for 1 AU (arcsec).
const ABERRATION_ARCSEC: f64 = 20.4898;

// Each row: (A, B, C) for A·cos(B + C·τ), τ in Julian millennia of TT.
#[rustfmt::skip]
const L0: [(f64, f64, f64); 64] = [
    (175_347_046.0, 0.0, 0.0),
    (3_341_656.0, 4.669_256_8, 6_283.075_85),
    (34_894.0, 4.626_1, 12_566.151_7),
    (3_497.0, 2.744_1, 5_753.384_9),
    (3_418.0, 2.828_9, 3.523_1),
    (3_136.0, 3.627_7, 77_713.771_5),
    (2_676.0, 4.418_1, 7_860.419_4),
    (2_343.0, 6.135_2, 3_930.209_7),
    (1_324.0, 0.742_5, 11_506.769_8),
    (1_273.0, 2.037_1, 529.691_0),
    (1_199.0, 1.109_6, 1_577.343_5),
    (990.0, 5.233, 5_884.927),
    (902.0, 2.045, 26.298),
    (857.0, 3.508, 398.149),
    (780.0, 1.179, 5_223.694),
    (753.0, 2.533, 5_507.553),
    (505.0, 4.583, 18_849.228),
    (492.0, 4.205, 775.523),
    (357.0, 2.920, 0.067),
    (317.0, 5.849, 11_790.629),
    (284.0, 1.899, 796.298),
    (271.0, 0.315, 10_977.079),
    (243.0, 0.345, 5_486.778),
    (206.0, 4.806, 2_544.314),
    (205.0, 1.869, 5_573.143),
    (202.0, 2.458, 6_069.777),
    (156.0, 0.833, 213.299),
    (132.0, 3.411, 2_942.463),
    (126.0, 1.083, 20.775),
    (115.0, 0.645, 0.980),
    (103.0, 0.636, 4_694.003),
    (102.0, 0.976, 15_720.839),
    (102.0, 4.267, 7.114),
    (99.0, 6.21, 2_146.17),
    (98.0, 0.68, 155.42),
    (86.0, 5.98, 161_000.69),
    (85.0, 1.30, 6_275.96),
    (85.0, 3.67, 71_430.70),
    (80.0, 1.81, 17_260.15),
    (79.0, 3.04, 12_036.46),
    (75.0, 1.76, 5_088.63),
    (74.0, 3.50, 3_154.69),
    (74.0, 4.68, 801.82),
    (70.0, 0.83, 9_437.76),
    (62.0, 3.98, 8_827.39),
    (61.0, 1.82, 7_084.90),
    (57.0, 2.78, 6_286.60),
    (56.0, 4.39, 14_143.50),
    (56.0, 3.47, 6_279.55),
    (52.0, 0.19, 12_139.55),
    (52.0, 1.33, 1_748.02),
    (51.0, 0.28, 5_856.48),
    (49.0, 0.49, 1_194.45),
    (41.0, 5.37, 8_429.24),
    (41.0, 2.40, 19_651.05),
    (39.0, 6.17, 10_447.39),
    (37.0, 6.04, 10_213.29),
    (37.0, 2.57, 1_059.38),
    (36.0, 1.71, 2_352.87),
    (36.0, 1.78, 6_812.77),
    (33.0, 0.59, 17_789.85),
    (30.0, 0.44, 83_996.85),
    (30.0, 2.74, 1_349.87),
    (25.0, 3.16, 4_690.48),
];

#[rustfmt::skip]
const L1: [(f64, f64, f64); 34] = [
    (628_331_966_747.0, 0.0, 0.0),
    (206_059.0, 2.678_235, 6_283.075_85),
    (4_303.0, 2.635_1, 12_566.151_7),
    (425.0, 1.590, 3.523),
    (119.0, 5.796, 26.298),
    (109.0, 2.966, 1_577.344),
    (93.0, 2.59, 18_849.23),
    (72.0, 1.14, 529.69),
    (68.0, 1.87, 398.15),
    (67.0, 4.41, 5_507.55),
    (59.0, 2.89, 5_223.69),
    (56.0, 2.17, 155.42),
    (45.0, 0.40, 796.30),
    (36.0, 0.47, 775.52),
    (29.0, 2.65, 7.11),
    (21.0, 5.34, 0.98),
    (19.0, 1.85, 5_486.78),
    (19.0, 4.97, 213.30),
    (17.0, 2.99, 6_275.96),
    (16.0, 0.03, 2_544.31),
    (16.0, 1.43, 2_146.17),
    (15.0, 1.21, 10_977.08),
    (12.0, 2.83, 1_748.02),
    (12.0, 3.26, 5_088.63),
    (12.0, 5.27, 1_194.45),
    (12.0, 2.08, 4_694.00),
    (11.0, 0.77, 553.57),
    (10.0, 1.30, 6_286.60),
    (10.0, 4.24, 1_349.87),
    (9.0, 2.70, 242.73),
    (9.0, 5.64, 951.72),
    (8.0, 5.30, 2_352.87),
    (6.0, 2.65, 9_437.76),
    (6.0, 4.67, 4_690.48),
];

#[rustfmt::skip]
const L2: [(f64, f64, f64); 20] = [
    (52_919.0, 0.0, 0.0),
    (8_720.0, 1.072_1, 6_283.075_8),
    (309.0, 0.867, 12_566.152),
    (27.0, 0.05, 3.52),
    (16.0, 5.19, 26.30),
    (16.0, 3.68, 155.42),
    (10.0, 0.76, 18_849.23),
    (9.0, 2.06, 77_713.77),
    (7.0, 0.83, 775.52),
    (5.0, 4.66, 1_577.34),
    (4.0, 1.03, 7.11),
    (4.0, 3.44, 5_573.14),
    (3.0, 5.14, 796.30),
    (3.0, 6.05, 5_507.55),
    (3.0, 1.19, 242.73),
    (3.0, 6.12, 529.69),
    (3.0, 0.31, 398.15),
    (3.0, 2.28, 553.57),
    (2.0, 4.38, 5_223.69),
    (2.0, 3.75, 0.98),
];

#[rustfmt::skip]
const L3: [(f64, f64, f64); 7] = [
    (289.0, 5.844, 6_283.076),
    (35.0, 0.0, 0.0),
    (17.0, 5.49, 12_566.15),
    (3.0, 5.20, 155.42),
    (1.0, 4.72, 3.52),
    (1.0, 5.30, 18_849.23),
    (1.0, 5.97, 242.73),
];

#[rustfmt::skip]
const L4: [(f64, f64, f64); 3] = [
    (114.0, 3.142, 0.0),
    (8.0, 4.13, 6_283.08),
    (1.0, 3.84, 12_566.15),
];

#[rustfmt::skip]
const L5: [(f64, f64, f64); 1] = [
    (1.0, 3.14, 0.0),
];

fn series(terms: &[(f64, f64, f64)], tau: f64) -> f64 {
    terms.iter().map(|&(a, b, c)| a * (b + c * tau).cos()).sum()
}

/// Earth's heliocentric ecliptic longitude (radians, unwrapped).
///
/// `tau` = Julian millennia of TT since J2000.0.
fn earth_heliocentric_longitude_rad(tau: f64) -> f64 {
    let powers: [&[(f64, f64, f64)]; 6] = [&L0, &L1, &L2, &L3, &L4, &L5];
    let mut sum = 0.0;
    let mut tau_n = 1.0;
    for terms in powers {
        sum += series(terms, tau) * tau_n;
        tau_n *= tau;
    }
    sum * VSOP_SCALE
}

/// Sun–Earth distance in AU from the Keplerian ellipse.
///
/// Only feeds the aberration term, where 1e-4 AU is ample.
fn sun_distance_au(t: f64) -> f64 {
    let e = 0.016_708_634 - 0.000_042_037 * t;
    let m = (357.529_11 + 35_999.050_29 * t).to_radians();
    let c = ((1.914_602 - 0.004_817 * t) * m.sin() + 0.019_993 * (2.0 * m).sin()).to_radians();
    let nu = m + c;
    1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos())
}

/// Geometric geocentric longitude of the Sun, FK5, degrees in [0, 360).
pub fn sun_geometric_longitude_deg(jd_tt: f64) -> f64 {
    let tau = jd_to_centuries(jd_tt) / 10.0;
    let helio = earth_heliocentric_longitude_rad(tau).to_degrees();
    normalize_360(helio + 180.0 + FK5_CORRECTION_ARCSEC / ARCSEC_PER_DEG)
}

/// Apparent geocentric longitude of the Sun, degrees in [0, 360).
pub fn sun_apparent_longitude_deg(jd_tt: f64) -> f64 {
    let t = jd_to_centuries(jd_tt);
    let aberration = -ABERRATION_ARCSEC / ARCSEC_PER_DEG / sun_distance_au(t);
    normalize_360(sun_geometric_longitude_deg(jd_tt) + nutation_in_longitude_deg(t) + aberration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25b() {
        // 1992 October 13.0 TD: apparent λ = 199°54′21.818″
        let lon = sun_apparent_longitude_deg(2_448_908.5);
        let expected = 199.0 + 54.0 / 60.0 + 21.818 / 3600.0;
        assert!(
            (lon - expected).abs() < 2.0 / 3600.0,
            "got {lon:.6}, expected {expected:.6}"
        );
    }

    #[test]
    fn distance_near_one_au() {
        for i in 0..12 {
            let r = sun_distance_au(i as f64 / 120.0);
            assert!((0.98..1.02).contains(&r), "r={r}");
        }
    }

    #[test]
    fn longitude_advances_about_one_degree_per_day() {
        let a = sun_apparent_longitude_deg(2_451_545.0);
        let b = sun_apparent_longitude_deg(2_451_546.0);
        let step = normalize_360(b - a);
        assert!((0.95..1.03).contains(&step), "step={step}");
    }
}
