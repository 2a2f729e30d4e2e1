//! Error types for lunar calendar queries.

use nongli_core::EngineError;
use nongli_search::SearchError;
use nongli_time::TimeError;

/// Errors from building or reading a [`ChineseDate`](crate::ChineseDate).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Civil components do not form a valid date or time.
    #[error("invalid date components: {0}")]
    InvalidDateComponents(#[from] TimeError),
    /// Civil year outside the supported range.
    #[error("year {year} outside supported range {min}..={max}")]
    UnsupportedYear { year: i32, min: i32, max: i32 },
    /// Engine construction failed.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// Underlying astronomical search failed.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// Invalid calendar configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// A lunar day computed outside 1..=30.
    #[error("lunar day {0} outside 1..=30")]
    InvalidLunarDay(i64),
}
