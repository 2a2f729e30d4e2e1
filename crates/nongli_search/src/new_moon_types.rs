//! Types for day-level new-moon detection.

use serde::Deserialize;

/// Fastest Moon-minus-Sun motion, degrees per hour (perigee Moon, aphelion Sun).
pub const MAX_RELATIVE_SPEED_DEG_PER_HOUR: f64 = 0.62;

/// Shortest synodic month in whole days.
const MIN_SYNODIC_DAYS: u32 = 29;

/// Configuration for the hourly new-moon walk.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewMoonConfig {
    /// Elongation below which a sample counts as conjunction (default 0.5°).
    pub threshold_deg: f64,
    /// Spacing of the backward walk in minutes (default 60).
    pub step_minutes: u32,
    /// Step cap for one day's walk (default 24).
    pub max_steps: u32,
    /// Days the enumerator jumps after a hit (default 27).
    pub skip_days: u32,
}

impl Default for NewMoonConfig {
    fn default() -> Self {
        Self {
            threshold_deg: 0.5,
            step_minutes: 60,
            max_steps: 24,
            skip_days: 27,
        }
    }
}

impl NewMoonConfig {
    pub fn with_threshold_deg(mut self, threshold_deg: f64) -> Self {
        self.threshold_deg = threshold_deg;
        self
    }

    pub fn with_step_minutes(mut self, step_minutes: u32) -> Self {
        self.step_minutes = step_minutes;
        self
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.threshold_deg.is_finite() || self.threshold_deg <= 0.0 {
            return Err("threshold_deg must be positive");
        }
        if self.threshold_deg > 2.0 {
            return Err("threshold_deg must not exceed 2 degrees");
        }
        if self.step_minutes == 0 || self.step_minutes > 24 * 60 {
            return Err("step_minutes must be within 1..=1440");
        }
        let half_step_motion =
            0.5 * MAX_RELATIVE_SPEED_DEG_PER_HOUR * f64::from(self.step_minutes) / 60.0;
        if self.threshold_deg < half_step_motion {
            return Err("threshold_deg too small for step_minutes: conjunction could fall between samples");
        }
        if self.max_steps == 0 {
            return Err("max_steps must be > 0");
        }
        if self.skip_days == 0 || self.skip_days >= MIN_SYNODIC_DAYS {
            return Err("skip_days must be within 1..29");
        }
        Ok(())
    }
}
