//! Chinese numerals for lunar months and days.

/// Chinese digits; index 0 is 十 so `n % 10` indexes directly.
const DIGITS: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Prefix marking an intercalary month.
pub const LEAP_PREFIX: &str = "闰";

/// Month numeral without the 月 suffix: 一..十, 十一, 十二.
pub fn month_numeral(month: u8) -> Option<String> {
    match month {
        1..=10 => Some(DIGITS[usize::from(month % 10)].to_owned()),
        11 | 12 => Some(format!("十{}", DIGITS[usize::from(month % 10)])),
        _ => None,
    }
}

/// Day numeral: 初一..初十, 十一..十九, 二十, 廿一..廿九, 三十.
pub fn day_numeral(day: u8) -> Option<String> {
    let tens = match day {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => return None,
    };
    Some(format!("{tens}{}", DIGITS[usize::from(day % 10)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months() {
        let all: Vec<String> = (1..=12).filter_map(month_numeral).collect();
        assert_eq!(
            all,
            ["一", "二", "三", "四", "五", "六", "七", "八", "九", "十", "十一", "十二"]
        );
        assert_eq!(month_numeral(0), None);
        assert_eq!(month_numeral(13), None);
    }

    #[test]
    fn days() {
        for (day, expected) in [
            (1, "初一"),
            (10, "初十"),
            (11, "十一"),
            (19, "十九"),
            (20, "二十"),
            (21, "廿一"),
            (29, "廿九"),
            (30, "三十"),
        ] {
            assert_eq!(day_numeral(day).as_deref(), Some(expected));
        }
        assert_eq!(day_numeral(0), None);
        assert_eq!(day_numeral(31), None);
    }
}
