//! Immutable UTC instants.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Duration, FixedOffset, SecondsFormat, Utc};

use crate::delta_t::{decimal_year_from_jd, delta_t_seconds};
use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, unix_millis_to_jd};

/// A UTC point in time with millisecond precision.
///
/// Arithmetic returns new values; an `Instant` is never modified in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// Wrap a chrono UTC timestamp.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    /// Build from milliseconds since the Unix epoch.
    pub fn from_unix_millis(millis: i64) -> Result<Self, TimeError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or(TimeError::OutOfRange(millis))
    }

    /// Milliseconds since the Unix epoch.
    pub fn unix_millis(self) -> i64 {
        self.0.timestamp_millis()
    }

    /// The underlying chrono timestamp.
    pub fn datetime(self) -> DateTime<Utc> {
        self.0
    }

    /// The same instant expressed in a fixed civil offset.
    pub fn with_offset(self, offset: FixedOffset) -> DateTime<FixedOffset> {
        self.0.with_timezone(&offset)
    }

    pub fn add_days(self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    pub fn add_hours(self, hours: i64) -> Self {
        Self(self.0 + Duration::hours(hours))
    }

    pub fn add_minutes(self, minutes: i64) -> Self {
        Self(self.0 + Duration::minutes(minutes))
    }

    /// Julian Date on the UTC scale.
    pub fn jd_utc(self) -> f64 {
        unix_millis_to_jd(self.unix_millis())
    }

    /// Julian Date on the TT scale (UTC + ΔT).
    pub fn jd_tt(self) -> f64 {
        let jd = self.jd_utc();
        jd + delta_t_seconds(decimal_year_from_jd(jd)) / SECONDS_PER_DAY
    }

    /// ISO 8601 rendering in UTC with milliseconds, e.g. `2022-09-25T16:00:00.000Z`.
    pub fn to_iso_string(self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}
