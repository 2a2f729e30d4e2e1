//! Heavenly stems, earthly branches and the 60-term cycle (干支).
//!
//! Years, months and days each run an independent cycle from their own
//! epoch; offset 0 is 甲子.

use std::fmt::{Display, Formatter};

/// Length of the stem-branch cycle (lcm of 10 and 12).
pub const CYCLE_LEN: i64 = 60;

/// The ten heavenly stems (天干).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All stems in order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Stem {
    /// Stem for an offset from a 甲 epoch.
    pub fn from_offset(offset: i64) -> Self {
        ALL_STEMS[offset.rem_euclid(10) as usize]
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }
}

/// The twelve earthly branches (地支).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All branches in order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const ZODIAC_NAMES: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

impl Branch {
    /// Branch for an offset from a 子 epoch.
    pub fn from_offset(offset: i64) -> Self {
        ALL_BRANCHES[offset.rem_euclid(12) as usize]
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// Zodiac animal (生肖) of the branch.
    pub fn zodiac(self) -> &'static str {
        ZODIAC_NAMES[self.index() as usize]
    }
}

/// A stem-branch pair, e.g. 甲子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sexagesimal {
    pub stem: Stem,
    pub branch: Branch,
}

impl Sexagesimal {
    /// Name at `offset` steps from 甲子; negative offsets count backward.
    pub fn from_offset(offset: i64) -> Self {
        Self {
            stem: Stem::from_offset(offset),
            branch: Branch::from_offset(offset),
        }
    }

    /// Position in the cycle, 0 (甲子) ..= 59 (癸亥).
    pub fn index(self) -> u8 {
        // stem and branch share parity, so 6s - 5b is the unique solution mod 60
        let s = i64::from(self.stem.index());
        let b = i64::from(self.branch.index());
        (6 * s - 5 * b).rem_euclid(CYCLE_LEN) as u8
    }
}

impl Display for Sexagesimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}
