//! Solar-term types and name tables.
//!
//! Orders run 1..=24 from the Spring Equinox (0°), so a term's longitude is
//! `(order - 1) * 15`. Odd orders sit on multiples of 30° and are mid-terms
//! (中气); even orders are festival terms (节气).

use std::fmt::{Display, Formatter};

use nongli_time::CivilDate;

use crate::error::SearchError;

/// Number of solar terms in a tropical year.
pub const TERM_COUNT: u8 = 24;

/// Ecliptic span between consecutive terms, in degrees.
pub const TERM_SPAN_DEG: f64 = 15.0;

/// Order of the winter solstice (冬至, 270°).
pub const WINTER_SOLSTICE_ORDER: u8 = 19;

/// Term names in simplified Chinese, indexed by `order - 1`.
pub const TERM_NAMES_ZH: [&str; 24] = [
    "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至", "小暑", "大暑", "立秋", "处暑", "白露",
    "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒", "立春", "雨水", "惊蛰",
];

/// Term names in English, indexed by `order - 1`.
pub const TERM_NAMES_EN: [&str; 24] = [
    "Spring Equinox",
    "Clear and Bright",
    "Grain Rain",
    "Start of Summer",
    "Grain Buds",
    "Grain in Ear",
    "Summer Solstice",
    "Minor Heat",
    "Major Heat",
    "Start of Autumn",
    "End of Heat",
    "White Dew",
    "Autumn Equinox",
    "Cold Dew",
    "Frost's Descent",
    "Start of Winter",
    "Minor Snow",
    "Major Snow",
    "Winter Solstice",
    "Minor Cold",
    "Major Cold",
    "Start of Spring",
    "Rain Water",
    "Awakening of Insects",
];

/// Label language for solar terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TermLocale {
    #[default]
    Chinese,
    English,
}

/// Principal (中气) or sectional (节气) term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    /// Longitude ≡ 0 mod 30°; drives leap-month detection.
    MidTerm,
    /// Longitude ≡ 15 mod 30°; drives the month stem-branch cycle.
    FestivalTerm,
}

/// One of the 24 solar terms, optionally pinned to the civil day it falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolarTerm {
    order: u8,
    /// Civil day containing the crossing, when located by a search.
    pub date: Option<CivilDate>,
}

impl SolarTerm {
    /// Build an undated term from its 1-based order.
    pub fn from_order(order: i64) -> Result<Self, SearchError> {
        if !(1..=i64::from(TERM_COUNT)).contains(&order) {
            return Err(SearchError::InvalidSolarTermIndex(order));
        }
        Ok(Self {
            order: order as u8,
            date: None,
        })
    }

    /// The same term pinned to a civil day.
    pub fn on(self, date: CivilDate) -> Self {
        Self {
            date: Some(date),
            ..self
        }
    }

    pub fn order(&self) -> u8 {
        self.order
    }

    /// Ecliptic longitude of the term boundary, degrees in [0, 360).
    pub fn longitude_deg(&self) -> f64 {
        f64::from(self.order - 1) * TERM_SPAN_DEG
    }

    pub fn kind(&self) -> TermKind {
        if self.order % 2 == 1 {
            TermKind::MidTerm
        } else {
            TermKind::FestivalTerm
        }
    }

    pub fn is_mid_term(&self) -> bool {
        self.kind() == TermKind::MidTerm
    }

    pub fn is_festival_term(&self) -> bool {
        self.kind() == TermKind::FestivalTerm
    }

    pub fn label(&self, locale: TermLocale) -> &'static str {
        let idx = usize::from(self.order - 1);
        match locale {
            TermLocale::Chinese => TERM_NAMES_ZH[idx],
            TermLocale::English => TERM_NAMES_EN[idx],
        }
    }
}

impl Display for SolarTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.date {
            Some(date) => write!(f, "{} {}", self.label(TermLocale::Chinese), date),
            None => f.write_str(self.label(TermLocale::Chinese)),
        }
    }
}

/// The 24 undated terms in order 1..=24.
pub fn all_solar_terms() -> Vec<SolarTerm> {
    (1..=TERM_COUNT)
        .map(|order| SolarTerm { order, date: None })
        .collect()
}
