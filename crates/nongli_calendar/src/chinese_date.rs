//! A civil instant with its lunar reading.

use std::fmt::{Display, Formatter};

use chrono::FixedOffset;
use nongli_core::Engine;
use nongli_search::{LongitudeService, lunar_month_of};
use nongli_time::{CivilDate, Instant, civil_instant, fixed_offset};
use tracing::debug;

use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::lunar_unit::{LunarDay, LunarMonth, LunarUnit, LunarYear};

/// An immutable civil instant together with its lunar year, month and day.
///
/// The lunar fields are computed once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ChineseDate {
    instant: Instant,
    offset: FixedOffset,
    civil: CivilDate,
    year: LunarYear,
    month: LunarMonth,
    day: LunarDay,
}

impl ChineseDate {
    /// Build from civil components read in the observer offset.
    ///
    /// Components and the year range are checked before any ephemeris work.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        engine: &Engine,
        config: &CalendarConfig,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, CalendarError> {
        config.validate().map_err(CalendarError::InvalidConfig)?;
        let offset = fixed_offset(config.search.utc_offset_minutes)?;
        let instant = civil_instant(year, month, day, hour, minute, second, offset)?;
        Self::from_instant(engine, config, instant)
    }

    /// Build from an absolute instant.
    #[tracing::instrument(level = "debug", skip(engine, config))]
    pub fn from_instant(
        engine: &Engine,
        config: &CalendarConfig,
        instant: Instant,
    ) -> Result<Self, CalendarError> {
        config.validate().map_err(CalendarError::InvalidConfig)?;
        let offset = fixed_offset(config.search.utc_offset_minutes)?;
        let civil = CivilDate::of_instant(instant, offset);
        if !config.supports_year(civil.year()) {
            return Err(CalendarError::UnsupportedYear {
                year: civil.year(),
                min: config.min_year,
                max: config.max_year,
            });
        }

        let longitudes = LongitudeService::new(engine, &config.search)?;
        let span = lunar_month_of(&longitudes, civil)?;
        let year = LunarYear::resolve(&longitudes, config, civil)?;
        let month = LunarMonth::from_span(&longitudes, config, span, civil)?;
        let day = LunarDay::in_month(config, span.first_day, civil)?;
        let stats = longitudes.stats();
        debug!(
            %civil,
            evaluations = stats.evaluations,
            cache_hits = stats.cache_hits,
            "lunar date resolved"
        );

        Ok(Self {
            instant,
            offset,
            civil,
            year,
            month,
            day,
        })
    }

    pub fn instant(&self) -> Instant {
        self.instant
    }

    /// Civil day in the observer offset.
    pub fn civil_date(&self) -> CivilDate {
        self.civil
    }

    /// UTC ISO-8601 with milliseconds, e.g. `2022-09-25T16:00:00.000Z`.
    pub fn to_iso_string(&self) -> String {
        self.instant.to_iso_string()
    }

    /// Civil date-time in the observer offset, e.g. `2022/9/26 00:00:00`.
    pub fn to_civil_string(&self) -> String {
        self.instant
            .with_offset(self.offset)
            .format("%Y/%-m/%-d %H:%M:%S")
            .to_string()
    }

    pub fn lunar_year(&self) -> LunarYear {
        self.year
    }

    pub fn lunar_month(&self) -> LunarMonth {
        self.month
    }

    pub fn lunar_day(&self) -> LunarDay {
        self.day
    }

    /// `农历{year}年{month}月{day}日`, e.g. `农历壬寅年九月甲申日`.
    pub fn to_lunar_string(&self) -> String {
        format!(
            "农历{}年{}月{}日",
            self.year.sexagesimal(),
            self.month.full_capital(),
            self.day.sexagesimal()
        )
    }
}

impl Display for ChineseDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_lunar_string())
    }
}
