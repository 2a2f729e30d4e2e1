//! Search-wide configuration.

use nongli_core::GeoPosition;
use serde::Deserialize;

use crate::new_moon_types::NewMoonConfig;

/// UTC+8, China Standard Time.
pub const CHINA_STANDARD_OFFSET_MINUTES: i32 = 480;

/// Minimum spacing between consecutive solar terms in whole days.
const MIN_TERM_SPACING_DAYS: u32 = 14;

/// Configuration threaded through every search query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Observer position passed to the ephemeris provider.
    pub position: GeoPosition,
    /// Fixed civil offset in minutes east of UTC; sets day boundaries.
    pub utc_offset_minutes: i32,
    /// Decimal digits kept when rounding longitudes (default 4).
    pub precision: u32,
    /// New-moon detector settings.
    pub new_moon: NewMoonConfig,
    /// Days skipped after a solar-term hit (default 13).
    pub term_skip_days: u32,
    /// Days searched before a winter solstice for its new moon (default 30).
    pub solstice_lookback_days: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            position: GeoPosition::CHINA_STANDARD,
            utc_offset_minutes: CHINA_STANDARD_OFFSET_MINUTES,
            precision: 4,
            new_moon: NewMoonConfig::default(),
            term_skip_days: 13,
            solstice_lookback_days: 30,
        }
    }
}

impl SearchConfig {
    pub fn with_position(mut self, position: GeoPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_new_moon(mut self, new_moon: NewMoonConfig) -> Self {
        self.new_moon = new_moon;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(1..=6).contains(&self.precision) {
            return Err("precision must be within 1..=6");
        }
        if !(-14 * 60..=14 * 60).contains(&self.utc_offset_minutes) {
            return Err("utc_offset_minutes must be within ±14h");
        }
        if self.term_skip_days >= MIN_TERM_SPACING_DAYS {
            return Err("term_skip_days must be below 14");
        }
        if !(30..=60).contains(&self.solstice_lookback_days) {
            return Err("solstice_lookback_days must be within 30..=60");
        }
        self.new_moon.validate()
    }
}
