//! Rounded longitude lookups with per-query memoization.
//!
//! Every comparison in the search layer runs on longitudes wrapped to
//! [0, 360) and rounded to `SearchConfig::precision` digits. Unrounded
//! values flap across day boundaries.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use chrono::FixedOffset;
use nongli_core::{Body, Engine};
use nongli_frames::{normalize_360, normalize_to_pm180, round_to_precision};
use nongli_time::{CivilDate, Instant, fixed_offset};

use crate::error::SearchError;
use crate::search_types::SearchConfig;

/// Telemetry from one query context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryStats {
    pub evaluations: u32,
    pub cache_hits: u32,
}

/// Per-query longitude context.
///
/// Created at the start of a query and dropped at its end. Keys are
/// `(body, unix millis)`: day boundaries are shared between adjacent days,
/// so each midnight is evaluated once.
pub struct LongitudeService<'a> {
    engine: &'a Engine,
    config: &'a SearchConfig,
    offset: FixedOffset,
    memo: RefCell<HashMap<(Body, i64), f64>>,
    stats: Cell<QueryStats>,
}

impl<'a> LongitudeService<'a> {
    /// Validate `config` and open a query context.
    pub fn new(engine: &'a Engine, config: &'a SearchConfig) -> Result<Self, SearchError> {
        config.validate().map_err(SearchError::InvalidConfig)?;
        let offset = fixed_offset(config.utc_offset_minutes)?;
        Ok(Self {
            engine,
            config,
            offset,
            memo: RefCell::new(HashMap::new()),
            stats: Cell::new(QueryStats::default()),
        })
    }

    pub fn engine(&self) -> &'a Engine {
        self.engine
    }

    pub fn config(&self) -> &'a SearchConfig {
        self.config
    }

    /// Observer civil offset.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Civil day of an instant in the observer offset.
    pub fn civil_date_of(&self, instant: Instant) -> CivilDate {
        CivilDate::of_instant(instant, self.offset)
    }

    pub fn stats(&self) -> QueryStats {
        self.stats.get()
    }

    /// Apparent longitude of `body`, wrapped to [0, 360) and rounded.
    pub fn longitude_of(&self, body: Body, instant: Instant) -> Result<f64, SearchError> {
        let key = (body, instant.unix_millis());
        let mut stats = self.stats.get();
        if let Some(&cached) = self.memo.borrow().get(&key) {
            stats.cache_hits += 1;
            self.stats.set(stats);
            return Ok(cached);
        }

        let raw = self
            .engine
            .longitude(body, instant, &self.config.position)?;
        // Rounding 359.9996 yields 360.0, so wrap again afterwards.
        let value = normalize_360(round_to_precision(
            normalize_360(raw),
            self.config.precision,
        ));
        stats.evaluations += 1;
        self.stats.set(stats);

        let mut memo = self.memo.borrow_mut();
        if memo.len() >= self.engine.config().cache_capacity {
            memo.clear();
        }
        memo.insert(key, value);
        Ok(value)
    }

    /// Signed Moon − Sun elongation in (−180, 180], rounded.
    ///
    /// Positive once the Moon has passed the Sun; the shorter-arc distance
    /// is its absolute value.
    pub fn elongation(&self, instant: Instant) -> Result<f64, SearchError> {
        let sun = self.longitude_of(Body::Sun, instant)?;
        let moon = self.longitude_of(Body::Moon, instant)?;
        Ok(round_to_precision(
            normalize_to_pm180(moon - sun),
            self.config.precision,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nongli_core::{EngineConfig, EngineError, EphemerisProvider, GeoPosition};

    struct Linear {
        sun_at_epoch: f64,
    }

    impl EphemerisProvider for Linear {
        fn name(&self) -> &'static str {
            "linear"
        }

        fn longitude(
            &self,
            body: Body,
            instant: Instant,
            _: &GeoPosition,
        ) -> Result<f64, EngineError> {
            let days = instant.unix_millis() as f64 / 86_400_000.0;
            Ok(match body {
                Body::Sun => self.sun_at_epoch + days,
                Body::Moon => self.sun_at_epoch - 10.0 + 13.0 * days,
            })
        }
    }

    fn engine(sun_at_epoch: f64) -> Engine {
        Engine::with_provider(
            EngineConfig::default().with_strict_validation(false),
            Linear { sun_at_epoch },
        )
        .unwrap()
    }

    fn epoch() -> Instant {
        Instant::from_unix_millis(0).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let engine = engine(0.0);
        let config = SearchConfig::default().with_precision(0);
        assert!(matches!(
            LongitudeService::new(&engine, &config),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rounds_to_precision() {
        let engine = engine(12.345_678);
        let config = SearchConfig::default();
        let svc = LongitudeService::new(&engine, &config).unwrap();
        assert_eq!(svc.longitude_of(Body::Sun, epoch()).unwrap(), 12.3457);

        let config = SearchConfig::default().with_precision(3);
        let svc = LongitudeService::new(&engine, &config).unwrap();
        assert_eq!(svc.longitude_of(Body::Sun, epoch()).unwrap(), 12.346);
    }

    #[test]
    fn wraps_after_rounding() {
        let engine = engine(359.999_98);
        let config = SearchConfig::default();
        let svc = LongitudeService::new(&engine, &config).unwrap();
        assert_eq!(svc.longitude_of(Body::Sun, epoch()).unwrap(), 0.0);
    }

    #[test]
    fn wraps_negative_provider_output() {
        let engine = engine(-15.0);
        let config = SearchConfig::default();
        let svc = LongitudeService::new(&engine, &config).unwrap();
        assert_eq!(svc.longitude_of(Body::Sun, epoch()).unwrap(), 345.0);
    }

    #[test]
    fn elongation_is_signed() {
        let engine = engine(5.0);
        let config = SearchConfig::default();
        let svc = LongitudeService::new(&engine, &config).unwrap();
        // Moon trails by 10° at the epoch.
        assert_eq!(svc.elongation(epoch()).unwrap(), -10.0);
        // 12°/day relative motion: ahead by 2° one day later.
        assert_eq!(svc.elongation(epoch().add_days(1)).unwrap(), 2.0);
    }

    #[test]
    fn memo_counts_hits() {
        let engine = engine(0.0);
        let config = SearchConfig::default();
        let svc = LongitudeService::new(&engine, &config).unwrap();
        svc.longitude_of(Body::Sun, epoch()).unwrap();
        svc.longitude_of(Body::Sun, epoch()).unwrap();
        svc.longitude_of(Body::Moon, epoch()).unwrap();
        assert_eq!(
            svc.stats(),
            QueryStats {
                evaluations: 2,
                cache_hits: 1
            }
        );
    }

    #[test]
    fn memo_is_bounded() {
        let engine = Engine::with_provider(
            EngineConfig::default()
                .with_strict_validation(false)
                .with_cache_capacity(2),
            Linear { sun_at_epoch: 0.0 },
        )
        .unwrap();
        let config = SearchConfig::default();
        let svc = LongitudeService::new(&engine, &config).unwrap();
        for h in 0..5 {
            svc.longitude_of(Body::Sun, epoch().add_hours(h)).unwrap();
        }
        assert!(svc.memo.borrow().len() <= 2);
    }

    #[test]
    fn civil_date_uses_observer_offset() {
        let engine = engine(0.0);
        let config = SearchConfig::default();
        let svc = LongitudeService::new(&engine, &config).unwrap();
        // 1970-01-01T16:00Z is midnight of Jan 2 at UTC+8.
        let t = epoch().add_hours(16);
        assert_eq!(svc.civil_date_of(t), CivilDate::new(1970, 1, 2).unwrap());
    }
}
