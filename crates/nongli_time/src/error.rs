//! Error types for civil date and instant construction.

/// Errors from building civil dates, offsets or instants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day do not form a valid proleptic Gregorian date.
    #[error("invalid civil date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour/minute/second are outside the civil clock range.
    #[error("invalid civil time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
    /// UTC offset is outside ±24h.
    #[error("invalid UTC offset: {0} minutes")]
    InvalidOffset(i32),
    /// Millisecond timestamp cannot be represented.
    #[error("timestamp out of range: {0} ms")]
    OutOfRange(i64),
}
