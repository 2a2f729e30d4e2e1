//! Nutation in longitude (Δψ).
//!
//! Four-term series from Meeus, *Astronomical Algorithms* ch. 22, good to
//! about 0.5″. Both the Sun and the Moon receive the same Δψ, so it cancels
//! out of the elongation entirely and shifts solar-term instants by seconds.

/// Arcseconds per degree.
pub const ARCSEC_PER_DEG: f64 = 3600.0;

/// Nutation in longitude in arcseconds.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn nutation_in_longitude_arcsec(t: f64) -> f64 {
    // Ω: longitude of the Moon's ascending node
    let om = (125.044_52 - 1_934.136_261 * t).to_radians();
    // L, L': mean longitudes of the Sun and the Moon
    let l_sun = (280.466_5 + 36_000.769_8 * t).to_radians();
    let l_moon = (218.316_5 + 481_267.881_3 * t).to_radians();

    -17.20 * om.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * om).sin()
}

/// Nutation in longitude in degrees.
pub fn nutation_in_longitude_deg(t: f64) -> f64 {
    nutation_in_longitude_arcsec(t) / ARCSEC_PER_DEG
}
