//! Error types for calendar event search.

use nongli_core::EngineError;
use nongli_time::{CivilDate, TimeError};

/// Errors from new-moon, solar-term and month-framing searches.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Engine-level error.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
    /// Civil date or offset error.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid search configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// The hourly walk ran out of steps before covering the day.
    #[error("new-moon search on {day} exceeded {max_steps} steps")]
    AmbiguousNewMoonSearch { day: CivilDate, max_steps: u32 },
    /// No anchor new moon near a winter solstice, or a malformed cycle.
    #[error("month framing failed for {year}: {reason}")]
    MonthFramingFailure { year: i32, reason: &'static str },
    /// A solar-term order outside 1..=24.
    #[error("solar term order {0} outside 1..=24")]
    InvalidSolarTermIndex(i64),
    /// A civil year did not yield exactly 24 solar terms.
    #[error("found {found} solar terms in {year}, expected 24")]
    IncompleteSolarTermYear { year: i32, found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            SearchError::InvalidSolarTermIndex(25).to_string(),
            "solar term order 25 outside 1..=24"
        );
        let err = SearchError::MonthFramingFailure {
            year: 1984,
            reason: "no new moon before winter solstice",
        };
        assert_eq!(
            err.to_string(),
            "month framing failed for 1984: no new moon before winter solstice"
        );
        let day = CivilDate::new(2022, 9, 26).unwrap();
        let err = SearchError::AmbiguousNewMoonSearch { day, max_steps: 24 };
        assert_eq!(
            err.to_string(),
            "new-moon search on 2022-09-26 exceeded 24 steps"
        );
    }

    #[test]
    fn engine_error_converts() {
        let err: SearchError = EngineError::InvalidQuery("bad").into();
        assert!(matches!(err, SearchError::Engine(_)));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
