//! Error types for the query engine and ephemeris providers.

/// Core engine errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("invalid query: {0}")]
    InvalidQuery(&'static str),
    /// Instant lies outside the provider's supported span.
    #[error("epoch out of range: JD {jd_utc}")]
    EpochOutOfRange { jd_utc: f64 },
    /// Provider produced a non-finite or otherwise unusable value.
    #[error("ephemeris provider {provider} failed: {message}")]
    Provider {
        provider: &'static str,
        message: String,
    },
}
