//! Tabular Islamic (Hijri) calendar.
//!
//! Arithmetic approximation of the lunar calendar: odd months have 30 days,
//! even months 29, and Dhu al-Hijjah gains a day in 11 years of every
//! 30-year cycle. Actual observance depends on sighting the crescent and may
//! differ by a day or two.

use crate::calendar::{self, Calendar};
use crate::error::CalendarError;

/// JDN of 1 Muharram AH 1 (16 July 622, Julian).
const EPOCH: i64 = 1948440;

const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-awwal",
    "Rabi' al-thani",
    "Jumada al-awwal",
    "Jumada al-thani",
    "Rajab",
    "Sha'aban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// The tabular Islamic calendar.
///
/// # Example
///
/// ```
/// use jdn_calendar::{Arabic, Calendar};
///
/// assert_eq!(Ok((1420, 9, 24)), Arabic.jd_to_ymd(2451545)); // 24 Ramadan 1420
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Arabic;

/// JDN of `day` in `month` of `year`, without validation.
fn to_jdn(year: i64, month: i64, day: i64) -> i64 {
    // (59m + 1) / 2 is ceil(29.5m)
    day + (59 * (month - 1) + 1) / 2 + (year - 1) * 354 + (3 + 11 * year).div_euclid(30) + EPOCH
        - 1
}

impl Calendar for Arabic {
    fn name(&self) -> &'static str {
        "arabic"
    }

    fn jd_start(&self) -> u32 {
        EPOCH as u32
    }

    fn is_leap_year(&self, year: i32) -> bool {
        (11 * i64::from(year) + 14).rem_euclid(30) < 11
    }

    fn days_in_month(&self, year: i32, month: u32) -> Result<u32, CalendarError> {
        calendar::check_month(self, month)?;
        Ok(if month % 2 == 1 || month == 12 && self.is_leap_year(year) {
            30
        } else {
            29
        })
    }

    fn jd_to_ymd(&self, jdn: u32) -> Result<(i32, u32, u32), CalendarError> {
        let jdn = calendar::check_jdn(self, jdn)?;
        let year = (30 * (jdn - EPOCH) + 10646).div_euclid(10631);
        let day_of_year = jdn - to_jdn(year, 1, 1);
        // ceil(2 * (day_of_year - 29) / 59), negative in Muharram
        let month = (-(2 * (29 - day_of_year)).div_euclid(59) + 1).min(12);
        let day = jdn - to_jdn(year, month, 1) + 1;
        Ok((year as i32, month as u32, day as u32))
    }

    fn ymd_to_jd(&self, year: i32, month: u32, day: u32) -> Result<u32, CalendarError> {
        calendar::check_day(self, year, month, day)?;
        let jdn = to_jdn(i64::from(year), i64::from(month), i64::from(day));
        calendar::bounded_jdn(self, jdn)
    }

    fn month_name(&self, _year: i32, month: u32) -> Result<&'static str, CalendarError> {
        calendar::month_from_table(self, &MONTH_NAMES, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        for ((y, m, d), jdn) in [
            ((1, 1, 1), 1948440),
            ((1420, 9, 24), 2451545),
            ((1421, 1, 1), 2451641),
        ] {
            assert_eq!(Ok(jdn), Arabic.ymd_to_jd(y, m, d), "{y}-{m}-{d}");
            assert_eq!(Ok((y, m, d)), Arabic.jd_to_ymd(jdn), "{jdn}");
        }
    }

    #[test]
    fn leap_years() {
        let leaps: Vec<i32> = (1..=30).filter(|&y| Arabic.is_leap_year(y)).collect();
        assert_eq!(vec![2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29], leaps);
        for year in 1..=90 {
            let length =
                Arabic.ymd_to_jd(year + 1, 1, 1).unwrap() - Arabic.ymd_to_jd(year, 1, 1).unwrap();
            assert_eq!(Ok(length), Arabic.days_in_year(year), "{year}");
        }
    }

    #[test]
    fn month_lengths() {
        assert_eq!(Ok(30), Arabic.days_in_month(1420, 1));
        assert_eq!(Ok(29), Arabic.days_in_month(1420, 2));
        assert_eq!(Ok(30), Arabic.days_in_month(1420, 12));
        assert_eq!(Ok(29), Arabic.days_in_month(1421, 12));
        assert!(Arabic.ymd_to_jd(1421, 12, 30).is_err());
        assert_eq!(Ok("Ramadan"), Arabic.month_name(1420, 9));
    }

    #[test]
    fn before_epoch() {
        assert!(Arabic.jd_to_ymd(1948439).is_err());
        assert!(Arabic.ymd_to_jd(0, 12, 29).is_err());
    }
}
