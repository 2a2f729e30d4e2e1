//! Lunar-month framing types.

use nongli_time::CivilDate;

/// Months in a common lunar year.
pub const MONTHS_PER_YEAR: usize = 12;

/// New moons in a lunar year carrying a leap month.
pub const LEAP_CYCLE_LEN: usize = 13;

/// One winter-solstice-framed lunar year.
///
/// `new_moons[0]` is the first day of month 11; `end` is the first day of
/// the following month 11 and is not part of the cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCycle {
    pub new_moons: Vec<CivilDate>,
    pub end: CivilDate,
    /// Index into `new_moons` of the leap month, for 13-month cycles.
    pub leap_index: Option<usize>,
}

/// One lunar month located inside a [`MonthCycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarMonthSpan {
    /// Month number 1..=12; a leap month repeats its predecessor's number.
    pub number: u8,
    pub is_leap: bool,
    /// New-moon day opening the month.
    pub first_day: CivilDate,
    /// First day of the next month (exclusive).
    pub end: CivilDate,
    /// Position within the cycle.
    pub cycle_index: usize,
}

impl LunarMonthSpan {
    pub fn contains(&self, day: CivilDate) -> bool {
        day >= self.first_day && day < self.end
    }

    /// 29 or 30.
    pub fn length_days(&self) -> i64 {
        self.end.days_since(self.first_day)
    }
}

/// Month number for a cycle index, given the cycle's leap index.
///
/// Index 0 is month 11, index 1 month 12, index 2 month 1. Indices at or
/// after the leap month shift back by one so the leap month repeats the
/// number before it.
pub fn month_number(index: usize, leap_index: Option<usize>) -> u8 {
    let shifted = match leap_index {
        Some(leap) if index >= leap => index - 1,
        _ => index,
    };
    ((shifted + 10) % MONTHS_PER_YEAR + 1) as u8
}

impl MonthCycle {
    /// First day of month 11.
    pub fn start(&self) -> Option<CivilDate> {
        self.new_moons.first().copied()
    }

    pub fn len(&self) -> usize {
        self.new_moons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.new_moons.is_empty()
    }

    pub fn is_leap_cycle(&self) -> bool {
        self.new_moons.len() == LEAP_CYCLE_LEN
    }

    pub fn contains(&self, day: CivilDate) -> bool {
        self.start().is_some_and(|start| day >= start && day < self.end)
    }

    /// All months of the cycle in order.
    pub fn months(&self) -> Vec<LunarMonthSpan> {
        self.new_moons
            .iter()
            .enumerate()
            .map(|(i, &first_day)| LunarMonthSpan {
                number: month_number(i, self.leap_index),
                is_leap: self.leap_index == Some(i),
                first_day,
                end: self.new_moons.get(i + 1).copied().unwrap_or(self.end),
                cycle_index: i,
            })
            .collect()
    }

    /// The month holding `day`, if the cycle covers it.
    pub fn month_containing(&self, day: CivilDate) -> Option<LunarMonthSpan> {
        if !self.contains(day) {
            return None;
        }
        self.months().into_iter().find(|m| m.contains(day))
    }
}
