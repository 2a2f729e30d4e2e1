//! Civil days under a fixed observer offset.
//!
//! A civil day spans `[start, next.start)`, where `start` is local midnight
//! in the observer's fixed UTC offset. Adjacent days share their boundary
//! instant, so an event exactly at midnight belongs to the day it starts.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::instant::Instant;

/// A Gregorian calendar day, independent of any time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CivilDate(NaiveDate);

impl CivilDate {
    /// Validate and build a civil date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(TimeError::InvalidDate { year, month, day })
    }

    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// First day (January 1) of a year.
    pub fn first_of_year(year: i32) -> Result<Self, TimeError> {
        Self::new(year, 1, 1)
    }

    /// The civil day containing `instant` in the given offset.
    pub fn of_instant(instant: Instant, offset: FixedOffset) -> Self {
        Self(instant.with_offset(offset).date_naive())
    }

    pub fn naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn add_days(self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    pub fn next(self) -> Self {
        self.add_days(1)
    }

    /// Signed number of days from `earlier` to `self`.
    pub fn days_since(self, earlier: Self) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    /// Local midnight at the start of this day.
    pub fn start(self, offset: FixedOffset) -> Instant {
        let local = NaiveDateTime::new(self.0, NaiveTime::MIN);
        let utc = local - Duration::seconds(i64::from(offset.local_minus_utc()));
        Instant::from_datetime(utc.and_utc())
    }

    /// Local midnight at the start of the following day (exclusive end).
    pub fn end(self, offset: FixedOffset) -> Instant {
        self.next().start(offset)
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A fixed UTC offset from minutes east of Greenwich.
pub fn fixed_offset(minutes_east: i32) -> Result<FixedOffset, TimeError> {
    minutes_east
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(TimeError::InvalidOffset(minutes_east))
}

/// Normalize civil components observed in `offset` to an absolute instant.
pub fn civil_instant(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    offset: FixedOffset,
) -> Result<Instant, TimeError> {
    let date = CivilDate::new(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(TimeError::InvalidTime {
        hour,
        minute,
        second,
    })?;
    let local = NaiveDateTime::new(date.naive(), time);
    let utc = local - Duration::seconds(i64::from(offset.local_minus_utc()));
    Ok(Instant::from_datetime(utc.and_utc()))
}

/// Number of days in a Gregorian year.
pub fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}
