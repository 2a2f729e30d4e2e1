//! Convenience surface owning an engine and a configuration.

use nongli_core::{Engine, EngineConfig};
use nongli_search::{LongitudeService, SolarTerm};
use nongli_time::CivilDate;

use crate::chinese_date::ChineseDate;
use crate::config::CalendarConfig;
use crate::error::CalendarError;

/// Calendar queries against one engine and configuration.
///
/// Each call opens its own longitude context, so a `Calendar` can be shared
/// across threads.
#[derive(Debug)]
pub struct Calendar {
    engine: Engine,
    config: CalendarConfig,
}

impl Calendar {
    /// Calendar on the built-in analytic ephemeris.
    pub fn new(config: CalendarConfig) -> Result<Self, CalendarError> {
        let engine = Engine::new(EngineConfig::default())?;
        Self::with_engine(engine, config)
    }

    /// Calendar on a caller-supplied engine.
    pub fn with_engine(engine: Engine, config: CalendarConfig) -> Result<Self, CalendarError> {
        config.validate().map_err(CalendarError::InvalidConfig)?;
        Ok(Self { engine, config })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Lunar reading of civil components in the observer offset.
    pub fn chinese_date(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<ChineseDate, CalendarError> {
        ChineseDate::new(
            &self.engine,
            &self.config,
            year,
            month,
            day,
            hour,
            minute,
            second,
        )
    }

    /// Lunar reading of a civil day at local midnight.
    pub fn chinese_date_of(&self, day: CivilDate) -> Result<ChineseDate, CalendarError> {
        self.chinese_date(day.year(), day.month(), day.day(), 0, 0, 0)
    }

    /// The 24 solar terms of a civil year, chronological.
    pub fn terms_of_year(&self, year: i32) -> Result<Vec<SolarTerm>, CalendarError> {
        self.check_year(year)?;
        let longitudes = self.longitudes()?;
        Ok(nongli_search::terms_of_year(&longitudes, year)?)
    }

    /// New-moon days in an inclusive range; reversed bounds are accepted.
    pub fn new_moons_between(
        &self,
        from: CivilDate,
        to: CivilDate,
    ) -> Result<Vec<CivilDate>, CalendarError> {
        self.check_year(from.year())?;
        self.check_year(to.year())?;
        let longitudes = self.longitudes()?;
        Ok(nongli_search::new_moons_between(&longitudes, from, to)?)
    }

    /// Whether `day` falls inside a leap month.
    pub fn is_leap_month(&self, day: CivilDate) -> Result<bool, CalendarError> {
        self.check_year(day.year())?;
        let longitudes = self.longitudes()?;
        Ok(nongli_search::is_leap_month(&longitudes, day)?)
    }

    /// 365 or 366.
    pub fn days_in_year(&self, year: i32) -> u32 {
        nongli_time::days_in_year(year)
    }

    fn longitudes(&self) -> Result<LongitudeService<'_>, CalendarError> {
        Ok(LongitudeService::new(&self.engine, &self.config.search)?)
    }

    fn check_year(&self, year: i32) -> Result<(), CalendarError> {
        if self.config.supports_year(year) {
            Ok(())
        } else {
            Err(CalendarError::UnsupportedYear {
                year,
                min: self.config.min_year,
                max: self.config.max_year,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_config() {
        let config = CalendarConfig::default().with_year_range(2100, 1900);
        assert_eq!(
            Calendar::new(config).unwrap_err(),
            CalendarError::InvalidConfig("min_year must not be after max_year")
        );
    }

    #[test]
    fn out_of_range_year_fails_fast() {
        let cal = Calendar::new(CalendarConfig::default()).unwrap();
        assert_eq!(
            cal.terms_of_year(1899).unwrap_err(),
            CalendarError::UnsupportedYear {
                year: 1899,
                min: 1900,
                max: 2100,
            }
        );
        let from = CivilDate::new(2100, 12, 1).unwrap();
        let to = CivilDate::new(2101, 1, 31).unwrap();
        assert!(matches!(
            cal.new_moons_between(from, to),
            Err(CalendarError::UnsupportedYear { year: 2101, .. })
        ));
    }

    #[test]
    fn days_in_year() {
        let cal = Calendar::new(CalendarConfig::default()).unwrap();
        assert_eq!(cal.days_in_year(2000), 366);
        assert_eq!(cal.days_in_year(2010), 365);
        assert_eq!(cal.days_in_year(2020), 366);
        assert_eq!(cal.days_in_year(1900), 365);
    }

    #[test]
    fn calendar_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Calendar>();
    }
}
