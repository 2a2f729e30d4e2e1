//! Winter-solstice month framing.
//!
//! Month 11 is the lunar month holding the winter solstice. Its first day
//! anchors each lunar year: the new moons from one anchor up to (not
//! including) the next form a [`MonthCycle`] of 12 or 13 months.

use nongli_time::CivilDate;
use tracing::debug;

use crate::error::SearchError;
use crate::leap_month::leap_month_index;
use crate::longitude::LongitudeService;
use crate::month_types::{LEAP_CYCLE_LEN, LunarMonthSpan, MONTHS_PER_YEAR, MonthCycle};
use crate::new_moon::{is_new_moon, new_moons_between};
use crate::solar_term::winter_solstice;

/// First day of the lunar month holding the winter solstice of `year`.
pub fn eleventh_month_start(
    longitudes: &LongitudeService<'_>,
    year: i32,
) -> Result<CivilDate, SearchError> {
    let solstice = winter_solstice(longitudes, year)?
        .date
        .ok_or(SearchError::MonthFramingFailure {
            year,
            reason: "winter solstice has no date",
        })?;
    if is_new_moon(longitudes, solstice)? {
        return Ok(solstice);
    }

    let lookback = i64::from(longitudes.config().solstice_lookback_days);
    let anchor = new_moons_between(longitudes, solstice.add_days(-lookback), solstice.add_days(-1))?
        .last()
        .copied()
        .ok_or(SearchError::MonthFramingFailure {
            year,
            reason: "no new moon before winter solstice",
        })?;
    debug!(year, %solstice, %anchor, "eleventh month anchored");
    Ok(anchor)
}

/// The lunar year whose month-11 anchor falls in `year`.
///
/// The cycle runs from the month-11 start of `year` to that of `year + 1`.
pub fn cycle_from_year(
    longitudes: &LongitudeService<'_>,
    year: i32,
) -> Result<MonthCycle, SearchError> {
    let start = eleventh_month_start(longitudes, year)?;
    let end = eleventh_month_start(longitudes, year + 1)?;
    frame(longitudes, year, start, end)
}

/// The winter-solstice-framed cycle holding `reference`.
#[tracing::instrument(level = "debug", skip(longitudes))]
pub fn eleventh_month_cycle(
    longitudes: &LongitudeService<'_>,
    reference: CivilDate,
) -> Result<MonthCycle, SearchError> {
    let year = reference.year();
    let anchor = eleventh_month_start(longitudes, year)?;
    if reference >= anchor {
        let end = eleventh_month_start(longitudes, year + 1)?;
        frame(longitudes, year, anchor, end)
    } else {
        let start = eleventh_month_start(longitudes, year - 1)?;
        frame(longitudes, year - 1, start, anchor)
    }
}

fn frame(
    longitudes: &LongitudeService<'_>,
    year: i32,
    start: CivilDate,
    end: CivilDate,
) -> Result<MonthCycle, SearchError> {
    let mut new_moons = new_moons_between(longitudes, start, end)?;
    if new_moons.first() != Some(&start) || new_moons.last() != Some(&end) {
        return Err(SearchError::MonthFramingFailure {
            year,
            reason: "cycle does not open and close on its anchors",
        });
    }
    new_moons.pop();
    if !(MONTHS_PER_YEAR..=LEAP_CYCLE_LEN).contains(&new_moons.len()) {
        return Err(SearchError::MonthFramingFailure {
            year,
            reason: "cycle does not hold 12 or 13 months",
        });
    }

    let mut cycle = MonthCycle {
        new_moons,
        end,
        leap_index: None,
    };
    cycle.leap_index = leap_month_index(longitudes, &cycle)?;
    debug!(year, months = cycle.len(), leap = ?cycle.leap_index, "cycle framed");
    Ok(cycle)
}

/// The lunar month holding `day`.
pub fn lunar_month_of(
    longitudes: &LongitudeService<'_>,
    day: CivilDate,
) -> Result<LunarMonthSpan, SearchError> {
    let cycle = eleventh_month_cycle(longitudes, day)?;
    cycle
        .month_containing(day)
        .ok_or(SearchError::MonthFramingFailure {
            year: day.year(),
            reason: "day outside its framed cycle",
        })
}

/// First day of lunar month 1 (正月初一) in civil year `year`.
pub fn lunar_new_year(longitudes: &LongitudeService<'_>, year: i32) -> Result<CivilDate, SearchError> {
    cycle_from_year(longitudes, year - 1)?
        .months()
        .into_iter()
        .find(|m| m.number == 1 && !m.is_leap)
        .map(|m| m.first_day)
        .ok_or(SearchError::MonthFramingFailure {
            year,
            reason: "cycle holds no first month",
        })
}

/// Civil year in which the lunar year holding `day` began.
pub fn lunar_year_of(longitudes: &LongitudeService<'_>, day: CivilDate) -> Result<i32, SearchError> {
    let year = day.year();
    if day < lunar_new_year(longitudes, year)? {
        Ok(year - 1)
    } else {
        Ok(year)
    }
}
