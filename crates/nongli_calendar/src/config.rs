//! Calendar configuration: search settings and cycle epochs.

use chrono::NaiveDate;
use nongli_search::SearchConfig;
use nongli_time::CivilDate;
use serde::Deserialize;

/// Configuration threaded through every calendar query.
///
/// The three epochs are days at which the year, month and day cycles read
/// 甲子. They are independent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// New-moon, solar-term and observer settings.
    pub search: SearchConfig,
    /// Lunar new year of a 甲子 year (default 1984-02-02).
    pub year_epoch: CivilDate,
    /// A day inside a 甲子 month (default 2013-12-07).
    pub month_epoch: CivilDate,
    /// A 甲子 day (default 1949-10-01).
    pub day_epoch: CivilDate,
    /// First supported civil year (inclusive).
    pub min_year: i32,
    /// Last supported civil year (inclusive).
    pub max_year: i32,
}

/// Lunar new year of 甲子 1984.
pub const DEFAULT_YEAR_EPOCH: CivilDate = epoch(1984, 2, 2);
/// A day in the 甲子 month opening with 大雪 2013.
pub const DEFAULT_MONTH_EPOCH: CivilDate = epoch(2013, 12, 7);
/// A 甲子 day.
pub const DEFAULT_DAY_EPOCH: CivilDate = epoch(1949, 10, 1);

// Only called from const items, so a bad date fails the build.
const fn epoch(year: i32, month: u32, day: u32) -> CivilDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => CivilDate::from_naive(date),
        None => panic!("epoch is not a valid Gregorian date"),
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            year_epoch: DEFAULT_YEAR_EPOCH,
            month_epoch: DEFAULT_MONTH_EPOCH,
            day_epoch: DEFAULT_DAY_EPOCH,
            min_year: 1900,
            max_year: 2100,
        }
    }
}

impl CalendarConfig {
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn with_year_epoch(mut self, year_epoch: CivilDate) -> Self {
        self.year_epoch = year_epoch;
        self
    }

    pub fn with_month_epoch(mut self, month_epoch: CivilDate) -> Self {
        self.month_epoch = month_epoch;
        self
    }

    pub fn with_day_epoch(mut self, day_epoch: CivilDate) -> Self {
        self.day_epoch = day_epoch;
        self
    }

    pub fn with_year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.min_year > self.max_year {
            return Err("min_year must not be after max_year");
        }
        self.search.validate()
    }

    /// Whether `year` is inside the supported range.
    pub fn supports_year(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}
