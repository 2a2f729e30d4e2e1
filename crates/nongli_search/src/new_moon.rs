//! New-moon detection and enumeration at civil-day granularity.
//!
//! A day is a new-moon day when the Moon catches the Sun somewhere in
//! `[local midnight, next local midnight)`. The detector walks backward
//! from the end of the day in fixed steps looking for a sample whose
//! elongation is inside the threshold.

use nongli_time::CivilDate;
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::longitude::LongitudeService;

/// Decide whether `day` contains a Sun–Moon conjunction.
///
/// Returns [`SearchError::AmbiguousNewMoonSearch`] when the step cap runs
/// out before the walk reaches the start of the day.
///
/// Boundary guard: if the elongation at either midnight is already inside
/// the threshold, its sign decides ownership. Positive at the start means
/// the conjunction was yesterday; non-positive at the end means it is
/// tomorrow. The neighbour sees the same boundary sample, so exactly one
/// of the two days claims it.
pub fn probe_new_moon(longitudes: &LongitudeService<'_>, day: CivilDate) -> Result<bool, SearchError> {
    let config = &longitudes.config().new_moon;
    let threshold = config.threshold_deg;
    let offset = longitudes.offset();
    let start = day.start(offset);
    let end = day.end(offset);

    let at_start = longitudes.elongation(start)?;
    if at_start.abs() < threshold && at_start > 0.0 {
        return Ok(false);
    }
    let at_end = longitudes.elongation(end)?;
    if at_end.abs() < threshold && at_end <= 0.0 {
        return Ok(false);
    }

    let step = i64::from(config.step_minutes);
    let mut previous = f64::INFINITY;
    let mut cursor = end;
    for _ in 0..=config.max_steps {
        if cursor < start {
            return Ok(false);
        }
        let separation = longitudes.elongation(cursor)?.abs();
        if separation < threshold {
            return Ok(true);
        }
        // Moving away from conjunction as we walk back: it lies after this day.
        if separation > previous {
            return Ok(false);
        }
        previous = separation;
        cursor = cursor.add_minutes(-step);
    }
    if cursor < start {
        return Ok(false);
    }

    Err(SearchError::AmbiguousNewMoonSearch {
        day,
        max_steps: config.max_steps,
    })
}

/// Decide whether `day` is a new-moon day, degrading gracefully.
///
/// A step-cap overrun is logged and reads as "no conjunction seen", since
/// no sample of the partial walk came inside the threshold. Every other
/// error propagates.
pub fn is_new_moon(longitudes: &LongitudeService<'_>, day: CivilDate) -> Result<bool, SearchError> {
    match probe_new_moon(longitudes, day) {
        Err(SearchError::AmbiguousNewMoonSearch { day, max_steps }) => {
            warn!(%day, max_steps, "ambiguous new-moon search: walk did not cover the day");
            Ok(false)
        }
        other => other,
    }
}

/// All new-moon days in `[from, to]`, ascending.
///
/// Reversed ranges are accepted. After each hit the cursor jumps ahead by
/// `NewMoonConfig::skip_days` (less than one synodic month) so the same
/// lunation is never reported twice.
#[tracing::instrument(level = "debug", skip(longitudes))]
pub fn new_moons_between(
    longitudes: &LongitudeService<'_>,
    from: CivilDate,
    to: CivilDate,
) -> Result<Vec<CivilDate>, SearchError> {
    let (first, last) = if from <= to { (from, to) } else { (to, from) };
    let skip = i64::from(longitudes.config().new_moon.skip_days);

    let mut found = Vec::new();
    let mut day = first;
    while day <= last {
        if is_new_moon(longitudes, day)? {
            found.push(day);
            day = day.add_days(skip);
        } else {
            day = day.next();
        }
    }
    debug!(count = found.len(), "new moons enumerated");
    Ok(found)
}
