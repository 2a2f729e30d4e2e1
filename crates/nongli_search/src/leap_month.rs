//! Leap-month (闰月) resolution.
//!
//! Only a cycle of 13 new moons carries a leap month: the first month that
//! holds no mid-term (中气). Should every month hold one, the last month
//! of the cycle is taken.

use nongli_time::CivilDate;
use tracing::debug;

use crate::error::SearchError;
use crate::longitude::LongitudeService;
use crate::month_frame::eleventh_month_cycle;
use crate::month_types::{LEAP_CYCLE_LEN, MonthCycle};
use crate::solar_term::mid_term_days_between;

/// Pick the leap month from known mid-term days.
///
/// `new_moons` are the month starts and `end` the exclusive end of the last
/// month. Returns `None` unless there are exactly 13 months.
pub fn resolve_leap_index(
    new_moons: &[CivilDate],
    end: CivilDate,
    mid_term_days: &[CivilDate],
) -> Option<usize> {
    if new_moons.len() != LEAP_CYCLE_LEN {
        return None;
    }
    let missing = (0..new_moons.len()).find(|&i| {
        let first = new_moons[i];
        let next = new_moons.get(i + 1).copied().unwrap_or(end);
        !mid_term_days.iter().any(|&d| d >= first && d < next)
    });
    Some(missing.unwrap_or(LEAP_CYCLE_LEN - 1))
}

/// Index of the leap month in `cycle`, or `None` for a 12-month cycle.
///
/// Any `leap_index` already stored on the cycle is ignored.
pub fn leap_month_index(
    longitudes: &LongitudeService<'_>,
    cycle: &MonthCycle,
) -> Result<Option<usize>, SearchError> {
    let Some(start) = cycle.start() else {
        return Ok(None);
    };
    if !cycle.is_leap_cycle() {
        return Ok(None);
    }
    let mid_terms = mid_term_days_between(longitudes, start, cycle.end)?;
    let index = resolve_leap_index(&cycle.new_moons, cycle.end, &mid_terms);
    debug!(%start, ?index, "leap month resolved");
    Ok(index)
}

/// Whether `day` falls inside a leap month.
pub fn is_leap_month(longitudes: &LongitudeService<'_>, day: CivilDate) -> Result<bool, SearchError> {
    let cycle = eleventh_month_cycle(longitudes, day)?;
    Ok(cycle.month_containing(day).is_some_and(|m| m.is_leap))
}
