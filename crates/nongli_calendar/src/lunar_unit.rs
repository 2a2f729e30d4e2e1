//! Lunar year, month and day records.
//!
//! Each record holds its ordinal and its offset into the 60-term cycle.
//! The offset is resolved per unit:
//! - year: lunar years since the year epoch;
//! - month: festival terms (节气) crossed since the month epoch;
//! - day: civil days since the day epoch.

use std::fmt::{Display, Formatter};

use nongli_search::{
    LongitudeService, LunarMonthSpan, count_festival_terms_between, lunar_month_of, lunar_year_of,
};
use nongli_time::CivilDate;

use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::numerals::{LEAP_PREFIX, day_numeral, month_numeral};
use crate::sexagesimal::Sexagesimal;

/// Common surface of the lunar date units.
pub trait LunarUnit: Sized {
    /// Resolve the unit holding civil day `day`.
    fn resolve(
        longitudes: &LongitudeService<'_>,
        config: &CalendarConfig,
        day: CivilDate,
    ) -> Result<Self, CalendarError>;

    /// Year number, month number or day of month.
    fn ordinal(&self) -> i32;

    /// Signed distance from the unit's epoch in its own steps.
    fn cycle_offset(&self) -> i64;

    /// Chinese rendering of the ordinal.
    fn capital(&self) -> String;

    /// Stem-branch name.
    fn sexagesimal(&self) -> Sexagesimal {
        Sexagesimal::from_offset(self.cycle_offset())
    }
}

/// A lunar year, named after the civil year in which it begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarYear {
    ordinal: i32,
    offset: i64,
}

impl LunarYear {
    /// Zodiac animal of the year.
    pub fn zodiac(&self) -> &'static str {
        self.sexagesimal().branch.zodiac()
    }
}

impl LunarUnit for LunarYear {
    fn resolve(
        longitudes: &LongitudeService<'_>,
        config: &CalendarConfig,
        day: CivilDate,
    ) -> Result<Self, CalendarError> {
        let ordinal = lunar_year_of(longitudes, day)?;
        let epoch = lunar_year_of(longitudes, config.year_epoch)?;
        Ok(Self {
            ordinal,
            offset: i64::from(ordinal - epoch),
        })
    }

    fn ordinal(&self) -> i32 {
        self.ordinal
    }

    fn cycle_offset(&self) -> i64 {
        self.offset
    }

    fn capital(&self) -> String {
        self.zodiac().to_owned()
    }
}

impl Display for LunarYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}年 {}年", self.sexagesimal(), self.zodiac())
    }
}

/// A lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarMonth {
    span: LunarMonthSpan,
    offset: i64,
}

impl LunarMonth {
    /// Build from a located month span.
    pub fn from_span(
        longitudes: &LongitudeService<'_>,
        config: &CalendarConfig,
        span: LunarMonthSpan,
        day: CivilDate,
    ) -> Result<Self, CalendarError> {
        let epoch = config.month_epoch;
        let offset = if day > epoch {
            count_festival_terms_between(longitudes, epoch.next(), day)?
        } else if day < epoch {
            -count_festival_terms_between(longitudes, day.next(), epoch)?
        } else {
            0
        };
        Ok(Self { span, offset })
    }

    pub fn is_leap(&self) -> bool {
        self.span.is_leap
    }

    /// New-moon day opening the month.
    pub fn first_day(&self) -> CivilDate {
        self.span.first_day
    }

    /// 29 or 30.
    pub fn length_days(&self) -> i64 {
        self.span.length_days()
    }

    pub fn span(&self) -> LunarMonthSpan {
        self.span
    }

    /// Numeral with the 闰 prefix on a leap month, e.g. 闰十.
    pub fn full_capital(&self) -> String {
        if self.is_leap() {
            format!("{LEAP_PREFIX}{}", self.capital())
        } else {
            self.capital()
        }
    }
}

impl LunarUnit for LunarMonth {
    fn resolve(
        longitudes: &LongitudeService<'_>,
        config: &CalendarConfig,
        day: CivilDate,
    ) -> Result<Self, CalendarError> {
        let span = lunar_month_of(longitudes, day)?;
        Self::from_span(longitudes, config, span, day)
    }

    fn ordinal(&self) -> i32 {
        i32::from(self.span.number)
    }

    fn cycle_offset(&self) -> i64 {
        self.offset
    }

    fn capital(&self) -> String {
        month_numeral(self.span.number).unwrap_or_default()
    }
}

impl Display for LunarMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}月 {}月", self.sexagesimal(), self.full_capital())
    }
}

/// A day of a lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDay {
    ordinal: u8,
    offset: i64,
}

impl LunarDay {
    /// Day `day` of the month that opens on `first_day`.
    pub fn in_month(
        config: &CalendarConfig,
        first_day: CivilDate,
        day: CivilDate,
    ) -> Result<Self, CalendarError> {
        let ordinal = day.days_since(first_day) + 1;
        if !(1..=30).contains(&ordinal) {
            return Err(CalendarError::InvalidLunarDay(ordinal));
        }
        Ok(Self {
            ordinal: ordinal as u8,
            offset: day.days_since(config.day_epoch),
        })
    }
}

impl LunarUnit for LunarDay {
    fn resolve(
        longitudes: &LongitudeService<'_>,
        config: &CalendarConfig,
        day: CivilDate,
    ) -> Result<Self, CalendarError> {
        let span = lunar_month_of(longitudes, day)?;
        Self::in_month(config, span.first_day, day)
    }

    fn ordinal(&self) -> i32 {
        i32::from(self.ordinal)
    }

    fn cycle_offset(&self) -> i64 {
        self.offset
    }

    fn capital(&self) -> String {
        day_numeral(self.ordinal).unwrap_or_default()
    }
}

impl Display for LunarDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}日 {}", self.sexagesimal(), self.capital())
    }
}
