//! Golden-value integration tests for lunar dates.
//!
//! Values from the Purple Mountain Observatory almanac at UTC+8.

use std::sync::OnceLock;

use nongli_calendar::{Calendar, CalendarConfig, CalendarError, ChineseDate, LunarUnit};

fn calendar() -> &'static Calendar {
    static CALENDAR: OnceLock<Calendar> = OnceLock::new();
    CALENDAR.get_or_init(|| Calendar::new(CalendarConfig::default()).expect("default calendar"))
}

fn at(y: i32, m: u32, d: u32) -> ChineseDate {
    calendar().chinese_date(y, m, d, 0, 0, 0).unwrap()
}

#[test]
fn civil_instant_renderings() {
    let date = at(2022, 9, 26);
    assert_eq!(date.to_iso_string(), "2022-09-25T16:00:00.000Z");
    assert_eq!(date.to_civil_string(), "2022/9/26 00:00:00");
    assert_eq!(date.civil_date().to_string(), "2022-09-26");

    let date = at(2014, 9, 24);
    assert_eq!(date.to_iso_string(), "2014-09-23T16:00:00.000Z");
    assert_eq!(date.to_civil_string(), "2014/9/24 00:00:00");
}

#[test]
fn day_cycle_epoch() {
    assert_eq!(at(1949, 10, 1).lunar_day().sexagesimal().to_string(), "甲子");
    assert_eq!(at(1949, 10, 2).lunar_day().sexagesimal().to_string(), "乙丑");
    assert_eq!(at(1949, 9, 30).lunar_day().sexagesimal().to_string(), "癸亥");
}

#[test]
fn year_names_change_at_lunar_new_year() {
    let cases = [
        ((1982, 3, 9), "壬戌"),
        ((1983, 8, 1), "癸亥"),
        ((1984, 2, 1), "癸亥"),
        ((1984, 2, 2), "甲子"),
        ((1984, 2, 3), "甲子"),
        ((1985, 2, 19), "甲子"),
        ((1985, 2, 20), "乙丑"),
        ((1985, 2, 21), "乙丑"),
    ];
    for ((y, m, d), expected) in cases {
        let year = at(y, m, d).lunar_year();
        assert_eq!(year.sexagesimal().to_string(), expected, "{y}-{m}-{d}");
    }
}

#[test]
fn year_boundary_to_the_second() {
    let cal = calendar();
    let name = |y, m, d, h, mi, s| {
        cal.chinese_date(y, m, d, h, mi, s)
            .unwrap()
            .lunar_year()
            .sexagesimal()
            .to_string()
    };
    assert_eq!(name(1984, 2, 2, 0, 0, 0), "甲子");
    assert_eq!(name(1984, 2, 1, 23, 59, 59), "癸亥");
    assert_eq!(name(1985, 2, 19, 23, 59, 59), "甲子");
}

#[test]
fn lunar_strings() {
    let date = at(2013, 12, 7);
    assert_eq!(date.lunar_month().sexagesimal().to_string(), "甲子");
    assert_eq!(date.to_lunar_string(), "农历癸巳年十一月丁未日");

    let date = at(2022, 9, 28);
    assert_eq!(date.lunar_month().sexagesimal().to_string(), "己酉");
    assert_eq!(date.to_lunar_string(), "农历壬寅年九月甲申日");
    assert_eq!(date.lunar_year().to_string(), "壬寅年 虎年");
    assert_eq!(date.lunar_month().to_string(), "己酉月 九月");
    assert_eq!(date.lunar_day().to_string(), "甲申日 初三");
    assert_eq!(date.to_string(), "农历壬寅年九月甲申日");

    let date = at(1949, 10, 1);
    assert_eq!(date.to_lunar_string(), "农历己丑年八月甲子日");
    assert_eq!(date.lunar_month().sexagesimal().to_string(), "癸酉");
    assert_eq!(date.lunar_day().capital(), "初十");

    // 1999 十一月廿五 seen from the civil new year
    let date = at(2000, 1, 1);
    assert_eq!(date.to_lunar_string(), "农历己卯年十一月戊午日");
    assert_eq!(date.lunar_month().sexagesimal().to_string(), "丙子");
    assert_eq!(date.lunar_day().ordinal(), 25);

    let date = at(2023, 1, 22);
    assert_eq!(date.to_lunar_string(), "农历癸卯年一月庚辰日");
    assert_eq!(date.lunar_month().sexagesimal().to_string(), "癸丑");
    assert_eq!(date.lunar_day().capital(), "初一");
}

#[test]
fn leap_month_1984() {
    let month = at(1984, 10, 24).lunar_month();
    assert_eq!(month.capital(), "十");
    assert!(!month.is_leap());

    let date = at(1984, 11, 23);
    let month = date.lunar_month();
    assert!(month.is_leap());
    assert_eq!(month.capital(), "十");
    assert_eq!(month.full_capital(), "闰十");
    assert_eq!(date.to_lunar_string(), "农历甲子年闰十月辛酉日");

    assert_eq!(at(1984, 12, 22).lunar_month().capital(), "十一");
    let month = at(1985, 2, 20).lunar_month();
    assert_eq!(month.capital(), "一");
    assert!(!month.is_leap());
}

#[test]
fn leap_eleventh_month_2033() {
    let date = at(2033, 12, 22);
    assert_eq!(date.to_lunar_string(), "农历癸丑年闰十一月丁未日");
    assert_eq!(date.lunar_month().sexagesimal().to_string(), "甲子");
}

/// Leap months 1900–2047: (first day, last day, numeral).
const LEAP_MONTHS: [((i32, u32, u32), (i32, u32, u32), &str); 55] = [
    ((1900, 9, 24), (1900, 10, 22), "八"),
    ((1903, 6, 25), (1903, 7, 23), "五"),
    ((1906, 5, 23), (1906, 6, 21), "四"),
    ((1909, 3, 22), (1909, 4, 19), "二"),
    ((1911, 7, 26), (1911, 8, 23), "六"),
    ((1914, 6, 23), (1914, 7, 22), "五"),
    ((1917, 3, 23), (1917, 4, 20), "二"),
    ((1919, 8, 25), (1919, 9, 23), "七"),
    ((1922, 6, 25), (1922, 7, 23), "五"),
    ((1925, 5, 22), (1925, 6, 20), "四"),
    ((1928, 3, 22), (1928, 4, 19), "二"),
    ((1930, 7, 26), (1930, 8, 23), "六"),
    ((1933, 6, 23), (1933, 7, 22), "五"),
    ((1936, 4, 21), (1936, 5, 20), "三"),
    ((1938, 8, 25), (1938, 9, 23), "七"),
    ((1941, 7, 24), (1941, 8, 22), "六"),
    ((1944, 5, 22), (1944, 6, 20), "四"),
    ((1947, 3, 23), (1947, 4, 20), "二"),
    ((1949, 8, 24), (1949, 9, 21), "七"),
    ((1952, 6, 22), (1952, 7, 21), "五"),
    ((1955, 4, 22), (1955, 5, 21), "三"),
    ((1957, 9, 24), (1957, 10, 22), "八"),
    ((1960, 7, 24), (1960, 8, 21), "六"),
    ((1963, 5, 23), (1963, 6, 20), "四"),
    ((1966, 4, 21), (1966, 5, 19), "三"),
    ((1968, 8, 24), (1968, 9, 21), "七"),
    ((1971, 6, 23), (1971, 7, 21), "五"),
    ((1974, 5, 22), (1974, 6, 19), "四"),
    ((1976, 9, 24), (1976, 10, 22), "八"),
    ((1979, 7, 24), (1979, 8, 22), "六"),
    ((1982, 5, 23), (1982, 6, 20), "四"),
    ((1984, 11, 23), (1984, 12, 21), "十"),
    ((1987, 7, 26), (1987, 8, 23), "六"),
    ((1990, 6, 23), (1990, 7, 21), "五"),
    ((1993, 4, 22), (1993, 5, 20), "三"),
    ((1995, 9, 25), (1995, 10, 23), "八"),
    ((1998, 6, 24), (1998, 7, 22), "五"),
    ((2001, 5, 23), (2001, 6, 20), "四"),
    ((2004, 3, 21), (2004, 4, 18), "二"),
    ((2006, 8, 24), (2006, 9, 21), "七"),
    ((2009, 6, 23), (2009, 7, 21), "五"),
    ((2012, 5, 21), (2012, 6, 18), "四"),
    ((2014, 10, 24), (2014, 11, 21), "九"),
    ((2017, 7, 23), (2017, 8, 21), "六"),
    ((2020, 5, 23), (2020, 6, 20), "四"),
    ((2023, 3, 22), (2023, 4, 19), "二"),
    ((2025, 7, 25), (2025, 8, 22), "六"),
    ((2028, 6, 23), (2028, 7, 21), "五"),
    ((2031, 4, 22), (2031, 5, 20), "三"),
    ((2033, 12, 22), (2034, 1, 19), "十一"),
    ((2036, 7, 23), (2036, 8, 21), "六"),
    ((2039, 6, 22), (2039, 7, 20), "五"),
    ((2042, 3, 22), (2042, 4, 19), "二"),
    ((2044, 8, 23), (2044, 9, 20), "七"),
    ((2047, 6, 23), (2047, 7, 22), "五"),
];

#[test]
fn leap_month_table() {
    let cal = calendar();
    for ((y, m, d), (ly, lm, ld), numeral) in LEAP_MONTHS {
        let first = at(y, m, d);
        let month = first.lunar_month();
        assert!(month.is_leap(), "{y}-{m}-{d}");
        assert_eq!(month.capital(), numeral, "{y}-{m}-{d}");
        assert_eq!(first.lunar_day().capital(), "初一", "{y}-{m}-{d}");

        let last = at(ly, lm, ld);
        assert_eq!(last.lunar_month().first_day(), month.first_day(), "{ly}-{lm}-{ld}");
        let after = last.civil_date().next();
        assert!(!cal.is_leap_month(after).unwrap(), "{after}");
    }
}

#[test]
fn month_first_day_round_trip() {
    let cal = calendar();
    let mut day = nongli_calendar::CivilDate::new(2020, 1, 1).unwrap();
    let end = nongli_calendar::CivilDate::new(2020, 12, 31).unwrap();
    while day <= end {
        let month = cal.chinese_date_of(day).unwrap().lunar_month();
        let first = month.first_day();
        let found = cal.new_moons_between(first, first).unwrap();
        assert_eq!(found, vec![first], "{day}");
        day = day.add_days(17);
    }
}

#[test]
fn invalid_components_rejected_before_search() {
    let cal = calendar();
    assert!(matches!(
        cal.chinese_date(2023, 2, 29, 0, 0, 0),
        Err(CalendarError::InvalidDateComponents(_))
    ));
    assert!(matches!(
        cal.chinese_date(2023, 1, 1, 24, 0, 0),
        Err(CalendarError::InvalidDateComponents(_))
    ));
    assert!(matches!(
        cal.chinese_date(1850, 6, 1, 0, 0, 0),
        Err(CalendarError::UnsupportedYear { year: 1850, .. })
    ));
}

#[test]
fn sexagesimal_periods_are_independent() {
    // Sixty days apart: same day name, different month and year names.
    let a = at(2022, 9, 28);
    let b = at(2022, 11, 27);
    assert_eq!(a.lunar_day().sexagesimal(), b.lunar_day().sexagesimal());
    assert_ne!(a.lunar_month().sexagesimal(), b.lunar_month().sexagesimal());
    assert_eq!(a.lunar_year().sexagesimal(), b.lunar_year().sexagesimal());
}
