// src/utils/date.rs

//! Japanese localized publication dates (`2025年9月1日`).

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static LOCALIZED_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)年([0-9]+)月([0-9]+)日").expect("localized date pattern"));

/// Date assigned to anything that does not parse.
///
/// The earliest representable date, so it stays below every parsed date
/// including ones before 1970.
pub fn sentinel_date() -> NaiveDate {
    NaiveDate::MIN
}

/// Parse `<Y>年<M>月<D>日` into a calendar date.
///
/// Never fails: strings without the pattern, or with numbers that do not
/// form a real calendar date, yield [`sentinel_date`] so they sort as oldest.
pub fn parse_localized_date(s: &str) -> NaiveDate {
    LOCALIZED_DATE
        .captures(s)
        .and_then(|caps| {
            let year: i32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            let day: u32 = caps[3].parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, day)
        })
        .unwrap_or_else(sentinel_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_single_digit_month_and_day() {
        assert_eq!(parse_localized_date("2025年9月1日"), ymd(2025, 9, 1));
        assert_eq!(parse_localized_date("2024年12月31日"), ymd(2024, 12, 31));
    }

    #[test]
    fn accepts_zero_padded_numbers() {
        assert_eq!(parse_localized_date("2025年09月01日"), ymd(2025, 9, 1));
    }

    #[test]
    fn finds_pattern_inside_longer_text() {
        assert_eq!(
            parse_localized_date("公開日: 2025年5月10日 12:00"),
            ymd(2025, 5, 10)
        );
    }

    #[test]
    fn unparseable_strings_yield_sentinel() {
        for input in ["invalid", "", "2025-05-10", "2025年5月", "年月日"] {
            assert_eq!(parse_localized_date(input), sentinel_date(), "{input}");
        }
    }

    #[test]
    fn impossible_calendar_dates_yield_sentinel() {
        assert_eq!(parse_localized_date("2024年2月30日"), sentinel_date());
        assert_eq!(parse_localized_date("2024年13月1日"), sentinel_date());
        assert_eq!(parse_localized_date("2024年0月1日"), sentinel_date());
        assert_eq!(
            parse_localized_date("99999999999年1月1日"),
            sentinel_date()
        );
    }

    #[test]
    fn sentinel_sorts_before_parsed_dates() {
        assert!(sentinel_date() < parse_localized_date("1年1月1日"));
        assert!(sentinel_date() < parse_localized_date("1900年1月1日"));
        assert!(parse_localized_date("2024年1月1日") < parse_localized_date("2025年5月10日"));
    }
}
