//! Time handling for the nongli calendar engine.
//!
//! This crate provides:
//! - [`Instant`]: an immutable UTC point in time with millisecond precision
//! - [`CivilDate`]: a civil day observed under a fixed UTC offset
//! - Julian Date helpers and the ΔT (TT − UT) model used by ephemeris providers
//!
//! Every operation is pure. Scans walk forward by producing fresh values
//! (`add_days`, `next`) rather than mutating a shared cursor.

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod instant;
pub mod julian;

pub use civil::{CivilDate, civil_instant, days_in_year, fixed_offset};
pub use delta_t::{decimal_year_from_jd, delta_t_seconds};
pub use error::TimeError;
pub use instant::Instant;
pub use julian::{
    J2000_JD, MILLIS_PER_DAY, SECONDS_PER_DAY, UNIX_EPOCH_JD, jd_to_centuries, unix_millis_to_jd,
};
