//! Ephemeris seam and query engine.
//!
//! The calendar search never talks to a position model directly. It asks an
//! [`Engine`] for the apparent geocentric ecliptic longitude of a [`Body`],
//! and the engine forwards the request to a pluggable [`EphemerisProvider`]
//! after validating it. [`AnalyticEphemeris`] is the built-in provider.

pub mod analytic;
pub mod error;
pub mod moon;
pub mod sun;

use std::fmt::{Debug, Formatter};

use nongli_frames::normalize_360;
use nongli_time::{Instant, decimal_year_from_jd};
use serde::Deserialize;

pub use analytic::AnalyticEphemeris;
pub use error::EngineError;

/// Engine configuration used at startup time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Upper bound on memoized longitudes held by one query context.
    pub cache_capacity: usize,
    /// Reject positions and instants outside the supported span.
    pub strict_validation: bool,
    /// First supported Gregorian year (inclusive).
    pub min_year: i32,
    /// Last supported Gregorian year (inclusive).
    pub max_year: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 4096,
            strict_validation: true,
            min_year: 1800,
            max_year: 2200,
        }
    }
}

impl EngineConfig {
    pub fn with_cache_capacity(mut self, cache_capacity: usize) -> Self {
        self.cache_capacity = cache_capacity;
        self
    }

    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    pub fn with_year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.cache_capacity == 0 {
            return Err(EngineError::InvalidConfig(
                "cache_capacity must be greater than zero",
            ));
        }
        if self.min_year > self.max_year {
            return Err(EngineError::InvalidConfig(
                "min_year must not be after max_year",
            ));
        }
        Ok(())
    }
}

/// Bodies whose longitude the calendar needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
        }
    }
}

/// Geographic observer position.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeoPosition {
    /// East longitude in degrees.
    pub longitude_deg: f64,
    /// Geodetic latitude in degrees.
    pub latitude_deg: f64,
    /// Height above the ellipsoid in metres.
    pub height_m: f64,
}

impl GeoPosition {
    /// China Standard Position: 120°E on the equator.
    pub const CHINA_STANDARD: Self = Self {
        longitude_deg: 120.0,
        latitude_deg: 0.0,
        height_m: 0.0,
    };

    pub fn new(longitude_deg: f64, latitude_deg: f64, height_m: f64) -> Self {
        Self {
            longitude_deg,
            latitude_deg,
            height_m,
        }
    }

    fn validate(&self) -> Result<(), EngineError> {
        if !self.longitude_deg.is_finite()
            || !self.latitude_deg.is_finite()
            || !self.height_m.is_finite()
        {
            return Err(EngineError::InvalidQuery("position must be finite"));
        }
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(EngineError::InvalidQuery(
                "latitude must be within [-90, 90]",
            ));
        }
        if !(-180.0..=360.0).contains(&self.longitude_deg) {
            return Err(EngineError::InvalidQuery(
                "longitude must be within [-180, 360]",
            ));
        }
        Ok(())
    }
}

impl Default for GeoPosition {
    fn default() -> Self {
        Self::CHINA_STANDARD
    }
}

/// Source of apparent geocentric ecliptic longitudes.
///
/// Implementations must be deterministic for fixed inputs: the search layer
/// memoizes answers and relies on repeated calls agreeing bit for bit.
pub trait EphemerisProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Apparent ecliptic longitude of `body` at `instant`, in degrees.
    ///
    /// The value need not be wrapped; the engine normalizes it to [0, 360).
    fn longitude(
        &self,
        body: Body,
        instant: Instant,
        position: &GeoPosition,
    ) -> Result<f64, EngineError>;
}

/// Single longitude request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub body: Body,
    pub instant: Instant,
    pub position: GeoPosition,
}

/// Core query engine.
///
/// `Engine` is [`Send`] + [`Sync`], so it can be shared across threads
/// via `Arc<Engine>`. It holds no mutable state; memoization lives in the
/// per-query context built on top of it.
pub struct Engine {
    config: EngineConfig,
    provider: Box<dyn EphemerisProvider>,
}

impl Debug for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl Engine {
    /// Create an engine backed by the built-in [`AnalyticEphemeris`].
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_provider(config, AnalyticEphemeris::new())
    }

    /// Create an engine backed by a caller-supplied provider.
    pub fn with_provider<P>(config: EngineConfig, provider: P) -> Result<Self, EngineError>
    where
        P: EphemerisProvider + 'static,
    {
        config.validate()?;
        tracing::debug!(provider = provider.name(), ?config, "engine ready");
        Ok(Self {
            config,
            provider: Box::new(provider),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Evaluate a query, returning the longitude wrapped to [0, 360).
    pub fn query(&self, query: Query) -> Result<f64, EngineError> {
        if self.config.strict_validation {
            query.position.validate()?;
            let jd_utc = query.instant.jd_utc();
            let year = decimal_year_from_jd(jd_utc);
            if year < f64::from(self.config.min_year) || year >= f64::from(self.config.max_year + 1)
            {
                return Err(EngineError::EpochOutOfRange { jd_utc });
            }
        }
        let raw = self
            .provider
            .longitude(query.body, query.instant, &query.position)?;
        if !raw.is_finite() {
            return Err(EngineError::Provider {
                provider: self.provider.name(),
                message: format!("non-finite {} longitude", query.body.name()),
            });
        }
        Ok(normalize_360(raw))
    }

    /// Shorthand for [`Engine::query`].
    pub fn longitude(
        &self,
        body: Body,
        instant: Instant,
        position: &GeoPosition,
    ) -> Result<f64, EngineError> {
        self.query(Query {
            body,
            instant,
            position: *position,
        })
    }
}
