//! Chinese lunisolar calendar following GB/T 33661-2017.
//!
//! [`ChineseDate`] reads a civil instant as a lunar year, month and day,
//! each with its stem-branch (干支) name. [`Calendar`] bundles an engine
//! and a [`CalendarConfig`] for the common queries: solar terms of a year,
//! new moons in a range and leap-month status.
//!
//! ```rust,ignore
//! use nongli_calendar::{Calendar, CalendarConfig};
//!
//! let calendar = Calendar::new(CalendarConfig::default())?;
//! let date = calendar.chinese_date(2022, 9, 28, 0, 0, 0)?;
//! assert_eq!(date.to_lunar_string(), "农历壬寅年九月甲申日");
//! ```

pub mod calendar;
pub mod chinese_date;
pub mod config;
pub mod error;
pub mod lunar_unit;
pub mod numerals;
pub mod sexagesimal;

pub use calendar::Calendar;
pub use chinese_date::ChineseDate;
pub use config::{CalendarConfig, DEFAULT_DAY_EPOCH, DEFAULT_MONTH_EPOCH, DEFAULT_YEAR_EPOCH};
pub use error::CalendarError;
pub use lunar_unit::{LunarDay, LunarMonth, LunarUnit, LunarYear};
pub use numerals::{LEAP_PREFIX, day_numeral, month_numeral};
pub use sexagesimal::{ALL_BRANCHES, ALL_STEMS, Branch, CYCLE_LEN, Sexagesimal, Stem};

// Re-export the types callers need alongside the calendar.
pub use nongli_core::{Engine, EngineConfig, GeoPosition};
pub use nongli_search::{SearchConfig, SolarTerm, TermLocale};
pub use nongli_time::{CivilDate, Instant, days_in_year};
