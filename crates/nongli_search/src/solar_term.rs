//! Solar-term location and enumeration.
//!
//! A civil day holds the term whose boundary `x` (a multiple of 15°)
//! satisfies `S <= x < E`, with `S` and `E` the Sun's rounded longitude at
//! this and the next local midnight. Both days adjacent to a midnight read
//! the same boundary sample, so a crossing exactly at midnight goes to the
//! day it starts and is never counted twice.

use nongli_core::Body;
use nongli_time::CivilDate;
use tracing::debug;

use crate::error::SearchError;
use crate::longitude::LongitudeService;
use crate::solar_term_types::{SolarTerm, TERM_COUNT, TERM_SPAN_DEG, WINTER_SOLSTICE_ORDER};

/// The solar term falling on `day`, if any.
pub fn term_on_day(
    longitudes: &LongitudeService<'_>,
    day: CivilDate,
) -> Result<Option<SolarTerm>, SearchError> {
    let offset = longitudes.offset();
    let start = longitudes.longitude_of(Body::Sun, day.start(offset))?;
    let mut end = longitudes.longitude_of(Body::Sun, day.end(offset))?;
    // 360° -> 0° wrap inside the day
    if end < start {
        end += 360.0;
    }

    let boundary = (start / TERM_SPAN_DEG).ceil() * TERM_SPAN_DEG;
    if boundary >= end {
        return Ok(None);
    }
    let order = (boundary.rem_euclid(360.0) / TERM_SPAN_DEG).round() as i64 + 1;
    Ok(Some(SolarTerm::from_order(order)?.on(day)))
}

/// First day in `[from, to]` holding the term with the given order.
pub fn find_term_between(
    longitudes: &LongitudeService<'_>,
    from: CivilDate,
    to: CivilDate,
    order: u8,
) -> Result<Option<SolarTerm>, SearchError> {
    let mut day = from;
    while day <= to {
        if let Some(term) = term_on_day(longitudes, day)? {
            if term.order() == order {
                return Ok(Some(term));
            }
        }
        day = day.next();
    }
    Ok(None)
}

/// The 24 solar terms of a civil year in chronological order.
///
/// The first entry is Lesser Cold (小寒, order 20) in early January.
#[tracing::instrument(level = "debug", skip(longitudes))]
pub fn terms_of_year(
    longitudes: &LongitudeService<'_>,
    year: i32,
) -> Result<Vec<SolarTerm>, SearchError> {
    let first = CivilDate::first_of_year(year)?;
    let last = CivilDate::new(year, 12, 31)?;
    let skip = i64::from(longitudes.config().term_skip_days);

    let mut terms = Vec::with_capacity(usize::from(TERM_COUNT));
    let mut day = first;
    while day <= last {
        match term_on_day(longitudes, day)? {
            Some(term) => {
                terms.push(term);
                day = day.add_days(skip + 1);
            }
            None => day = day.next(),
        }
    }
    terms.sort_by_key(|t| t.date);

    if terms.len() != usize::from(TERM_COUNT) {
        return Err(SearchError::IncompleteSolarTermYear {
            year,
            found: terms.len(),
        });
    }
    debug!(year, "solar terms located");
    Ok(terms)
}

/// All solar terms whose day lies in `[from, to]`, ascending.
///
/// Reversed ranges are accepted.
pub fn terms_between(
    longitudes: &LongitudeService<'_>,
    from: CivilDate,
    to: CivilDate,
) -> Result<Vec<SolarTerm>, SearchError> {
    let (first, last) = if from <= to { (from, to) } else { (to, from) };
    let mut out = Vec::new();
    for year in first.year()..=last.year() {
        out.extend(
            terms_of_year(longitudes, year)?
                .into_iter()
                .filter(|t| t.date.is_some_and(|d| d >= first && d <= last)),
        );
    }
    Ok(out)
}

/// Festival terms (节气) whose day lies in `[from, to]`, ascending.
pub fn festival_terms_between(
    longitudes: &LongitudeService<'_>,
    from: CivilDate,
    to: CivilDate,
) -> Result<Vec<SolarTerm>, SearchError> {
    let mut terms = terms_between(longitudes, from, to)?;
    terms.retain(SolarTerm::is_festival_term);
    Ok(terms)
}

/// Mid-term (中气) days in `[from, to]`, ascending.
pub fn mid_term_days_between(
    longitudes: &LongitudeService<'_>,
    from: CivilDate,
    to: CivilDate,
) -> Result<Vec<CivilDate>, SearchError> {
    Ok(terms_between(longitudes, from, to)?
        .into_iter()
        .filter(SolarTerm::is_mid_term)
        .filter_map(|t| t.date)
        .collect())
}

/// Number of festival terms (节气) whose day lies in `[from, to]`.
///
/// Every civil year holds exactly twelve, so only the two boundary years
/// are scanned. Reversed ranges are accepted.
pub fn count_festival_terms_between(
    longitudes: &LongitudeService<'_>,
    from: CivilDate,
    to: CivilDate,
) -> Result<i64, SearchError> {
    let (first, last) = if from <= to { (from, to) } else { (to, from) };
    let festival_in = |year: i32, lo: CivilDate, hi: CivilDate| -> Result<i64, SearchError> {
        Ok(terms_of_year(longitudes, year)?
            .iter()
            .filter(|t| t.is_festival_term() && t.date.is_some_and(|d| d >= lo && d <= hi))
            .count() as i64)
    };

    if first.year() == last.year() {
        return festival_in(first.year(), first, last);
    }
    let head = festival_in(first.year(), first, CivilDate::new(first.year(), 12, 31)?)?;
    let tail = festival_in(last.year(), CivilDate::first_of_year(last.year())?, last)?;
    let full_years = i64::from(last.year() - first.year() - 1);
    Ok(head + 12 * full_years + tail)
}

/// The winter solstice (冬至, 270°) of a civil year.
///
/// Only December is scanned; the solstice always falls on the 21st–23rd.
pub fn winter_solstice(
    longitudes: &LongitudeService<'_>,
    year: i32,
) -> Result<SolarTerm, SearchError> {
    let from = CivilDate::new(year, 12, 1)?;
    let to = CivilDate::new(year, 12, 31)?;
    find_term_between(longitudes, from, to, WINTER_SOLSTICE_ORDER)?.ok_or(
        SearchError::MonthFramingFailure {
            year,
            reason: "no winter solstice found in December",
        },
    )
}
