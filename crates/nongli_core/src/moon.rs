//! Apparent geocentric longitude of the Moon.
//!
//! Periodic series for the Moon's longitude from Meeus, *Astronomical
//! Algorithms* ch. 47 (60 terms of ELP-2000/82 plus the Venus, Jupiter and
//! flattening corrections), with nutation added for the apparent place.
//! Accuracy is about 10″, i.e. roughly 20 seconds of time in the
//! Sun–Moon elongation.

use nongli_frames::{normalize_360, nutation_in_longitude_deg};
use nongli_time::jd_to_centuries;

/// Series amplitudes are stored in units of 1e-6 degree.
const SERIES_SCALE: f64 = 1e-6;

/// Periodic terms for Σl.
///
/// Each row: `[D, M, M', F, Σl]`. Terms with M are scaled by the Earth
/// eccentricity factor E (E² when |M| = 2).
#[rustfmt::skip]
static LONGITUDE_TERMS: [[i32; 5]; 60] = [
    //  D    M   M'    F         Σl
    [  0,   0,   1,   0,   6288774],
    [  2,   0,  -1,   0,   1274027],
    [  2,   0,   0,   0,    658314],
    [  0,   0,   2,   0,    213618],
    [  0,   1,   0,   0,   -185116],
    [  0,   0,   0,   2,   -114332],
    [  2,   0,  -2,   0,     58793],
    [  2,  -1,  -1,   0,     57066],
    [  2,   0,   1,   0,     53322],
    [  2,  -1,   0,   0,     45758],
    [  0,   1,  -1,   0,    -40923],
    [  1,   0,   0,   0,    -34720],
    [  0,   1,   1,   0,    -30383],
    [  2,   0,   0,  -2,     15327],
    [  0,   0,   1,   2,    -12528],
    [  0,   0,   1,  -2,     10980],
    [  4,   0,  -1,   0,     10675],
    [  0,   0,   3,   0,     10034],
    [  4,   0,  -2,   0,      8548],
    [  2,   1,  -1,   0,     -7888],
    [  2,   1,   0,   0,     -6766],
    [  1,   0,  -1,   0,     -5163],
    [  1,   1,   0,   0,      4987],
    [  2,  -1,   1,   0,      4036],
    [  2,   0,   2,   0,      3994],
    [  4,   0,   0,   0,      3861],
    [  2,   0,  -3,   0,      3665],
    [  0,   1,  -2,   0,     -2689],
    [  2,   0,  -1,   2,     -2602],
    [  2,  -1,  -2,   0,      2390],
    [  1,   0,   1,   0,     -2348],
    [  2,  -2,   0,   0,      2236],
    [  0,   1,   2,   0,     -2120],
    [  0,   2,   0,   0,     -2069],
    [  2,  -2,  -1,   0,      2048],
    [  2,   0,   1,  -2,     -1773],
    [  2,   0,   0,   2,     -1595],
    [  4,  -1,  -1,   0,      1215],
    [  0,   0,   2,   2,     -1110],
    [  3,   0,  -1,   0,      -892],
    [  2,   1,   1,   0,      -810],
    [  4,  -1,  -2,   0,       759],
    [  0,   2,  -1,   0,      -713],
    [  2,   2,  -1,   0,      -700],
    [  2,   1,  -2,   0,       691],
    [  2,  -1,   0,  -2,       596],
    [  4,   0,   1,   0,       549],
    [  0,   0,   4,   0,       537],
    [  4,  -1,   0,   0,       520],
    [  1,   0,  -2,   0,      -487],
    [  2,   1,   0,  -2,      -399],
    [  0,   0,   2,  -2,      -381],
    [  1,   1,   1,   0,       351],
    [  3,   0,  -2,   0,      -340],
    [  4,   0,  -3,   0,       330],
    [  2,  -1,   2,   0,       327],
    [  0,   2,   1,   0,      -323],
    [  1,   1,  -1,   0,       299],
    [  2,   0,   3,   0,       294],
    [  2,   0,  -1,  -2,         0],
];

/// Mean arguments (degrees) at `t` Julian centuries of TT.
struct MeanArguments {
    /// L': mean longitude of the Moon
    l_moon: f64,
    /// D: mean elongation of the Moon
    d: f64,
    /// M: mean anomaly of the Sun
    m_sun: f64,
    /// M': mean anomaly of the Moon
    m_moon: f64,
    /// F: argument of latitude of the Moon
    f: f64,
}

impl MeanArguments {
    fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            l_moon: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
                - t4 / 65_194_000.0,
            d: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
                - t4 / 113_065_000.0,
            m_sun: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
            m_moon: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
                - t4 / 14_712_000.0,
            f: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        }
    }
}

/// Sum of the periodic longitude terms, in 1e-6 degree.
fn longitude_perturbation(args: &MeanArguments, t: f64) -> f64 {
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;
    let mut sum = 0.0;
    for &[d, m, mp, f, coeff] in &LONGITUDE_TERMS {
        let arg = f64::from(d) * args.d
            + f64::from(m) * args.m_sun
            + f64::from(mp) * args.m_moon
            + f64::from(f) * args.f;
        let scale = match m.abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sum += f64::from(coeff) * scale * arg.to_radians().sin();
    }

    // Venus (A1), Jupiter (A2) and Earth flattening (L' - F)
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum + 3958.0 * a1.sin() + 1962.0 * (args.l_moon - args.f).to_radians().sin() + 318.0 * a2.sin()
}

/// Mean-equinox geocentric longitude of the Moon, degrees in [0, 360).
pub fn moon_geometric_longitude_deg(jd_tt: f64) -> f64 {
    let t = jd_to_centuries(jd_tt);
    let args = MeanArguments::at(t);
    normalize_360(args.l_moon + longitude_perturbation(&args, t) * SERIES_SCALE)
}

/// Apparent geocentric longitude of the Moon, degrees in [0, 360).
pub fn moon_apparent_longitude_deg(jd_tt: f64) -> f64 {
    let t = jd_to_centuries(jd_tt);
    normalize_360(moon_geometric_longitude_deg(jd_tt) + nutation_in_longitude_deg(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12.0 TD: geometric λ = 133.162655, apparent λ = 133.167265
        let jd = 2_448_724.5;
        let geometric = moon_geometric_longitude_deg(jd);
        assert!((geometric - 133.162_655).abs() < 1e-4, "got {geometric:.6}");
        let apparent = moon_apparent_longitude_deg(jd);
        assert!((apparent - 133.167_265).abs() < 3.0 / 3600.0, "got {apparent:.6}");
    }

    #[test]
    fn moves_about_thirteen_degrees_per_day() {
        let a = moon_apparent_longitude_deg(2_451_545.0);
        let b = moon_apparent_longitude_deg(2_451_546.0);
        let step = normalize_360(b - a);
        assert!((11.5..15.5).contains(&step), "step={step}");
    }

    #[test]
    fn table_has_sixty_rows() {
        assert_eq!(LONGITUDE_TERMS.len(), 60);
        assert_eq!(LONGITUDE_TERMS[0], [0, 0, 1, 0, 6_288_774]);
    }
}
