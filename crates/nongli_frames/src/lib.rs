//! Ecliptic angle helpers for the nongli calendar engine.
//!
//! Provides longitude normalization, fixed-precision rounding and the
//! nutation in longitude needed to turn mean positions into apparent ones.

pub mod angle;
pub mod nutation;

pub use angle::{normalize_360, normalize_to_pm180, round_to_precision, shorter_arc};
pub use nutation::{ARCSEC_PER_DEG, nutation_in_longitude_arcsec, nutation_in_longitude_deg};
