//! Calendar event search: new moons, solar terms and lunar-month framing.
//!
//! This crate provides:
//! - Rounded, memoized longitude lookups per query ([`LongitudeService`])
//! - Day-level new-moon detection and range enumeration
//! - Solar-term location, yearly enumeration and range queries
//! - Winter-solstice month framing and leap-month resolution
//!
//! Every search runs at civil-day granularity under the fixed observer
//! offset of [`SearchConfig`].

pub mod error;
pub mod leap_month;
pub mod longitude;
pub mod month_frame;
pub mod month_types;
pub mod new_moon;
pub mod new_moon_types;
pub mod search_types;
pub mod solar_term;
pub mod solar_term_types;

pub use error::SearchError;
pub use leap_month::{is_leap_month, leap_month_index, resolve_leap_index};
pub use longitude::{LongitudeService, QueryStats};
pub use month_frame::{
    cycle_from_year, eleventh_month_cycle, eleventh_month_start, lunar_month_of, lunar_new_year,
    lunar_year_of,
};
pub use month_types::{LunarMonthSpan, MonthCycle, month_number};
pub use new_moon::{is_new_moon, new_moons_between, probe_new_moon};
pub use new_moon_types::NewMoonConfig;
pub use search_types::{CHINA_STANDARD_OFFSET_MINUTES, SearchConfig};
pub use solar_term::{
    count_festival_terms_between, festival_terms_between, find_term_between,
    mid_term_days_between, term_on_day, terms_between, terms_of_year, winter_solstice,
};
pub use solar_term_types::{SolarTerm, TermKind, TermLocale, all_solar_terms};
