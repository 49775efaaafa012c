//! French Republican calendar, as used from year I (1792) to year XIV
//! (1805).
//!
//! Twelve months of thirty days are followed by five or six complementary
//! days, counted here as a thirteenth month. Years III, VII and XI are
//! sextile (leap) years. Weeks are ten-day décades.

use crate::calendar::{self, Calendar};
use crate::error::CalendarError;

/// Day before the epoch, counting four-year cycles from a virtual year 0.
const OFFSET: i64 = 2375474;

/// Days in four years.
const DAYS_PER_4_YEARS: i64 = 1461;

const MONTH_NAMES: [&str; 13] = [
    "Vendémiaire",
    "Brumaire",
    "Frimaire",
    "Nivôse",
    "Pluviôse",
    "Ventôse",
    "Germinal",
    "Floréal",
    "Prairial",
    "Messidor",
    "Thermidor",
    "Fructidor",
    "Jours complémentaires",
];

/// The French Republican calendar.
///
/// # Example
///
/// ```
/// use jdn_calendar::{Calendar, French};
///
/// // 1 Vendémiaire I
/// assert_eq!(Ok(2375840), French.ymd_to_jd(1, 1, 1));
/// assert_eq!(Ok((2, 9, 1)), French.jd_to_ymd(2376445));
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct French;

impl Calendar for French {
    fn name(&self) -> &'static str {
        "french"
    }

    fn jd_start(&self) -> u32 {
        2375840
    }

    /// Last day of year XIV.
    fn jd_end(&self) -> u32 {
        2380952
    }

    fn months_in_year(&self) -> u32 {
        13
    }

    fn is_leap_year(&self, year: i32) -> bool {
        year.rem_euclid(4) == 3
    }

    fn days_in_month(&self, year: i32, month: u32) -> Result<u32, CalendarError> {
        calendar::check_month(self, month)?;
        Ok(match month {
            13 if self.is_leap_year(year) => 6,
            13 => 5,
            _ => 30,
        })
    }

    fn jd_to_ymd(&self, jdn: u32) -> Result<(i32, u32, u32), CalendarError> {
        let jdn = calendar::check_jdn(self, jdn)?;
        let temp = (jdn - OFFSET) * 4 - 1;
        let year = temp / DAYS_PER_4_YEARS;
        let day_of_year = (temp % DAYS_PER_4_YEARS) / 4;
        Ok((
            year as i32,
            (day_of_year / 30 + 1) as u32,
            (day_of_year % 30 + 1) as u32,
        ))
    }

    fn ymd_to_jd(&self, year: i32, month: u32, day: u32) -> Result<u32, CalendarError> {
        calendar::check_day(self, year, month, day)?;
        let jdn = (i64::from(year) * DAYS_PER_4_YEARS).div_euclid(4)
            + i64::from(month - 1) * 30
            + i64::from(day)
            + OFFSET;
        calendar::bounded_jdn(self, jdn)
    }

    fn month_name(&self, _year: i32, month: u32) -> Result<&'static str, CalendarError> {
        calendar::month_from_table(self, &MONTH_NAMES, month)
    }

    fn days_in_week(&self) -> u32 {
        10
    }

    /// Day of the décade, from 0 (primidi) to 9 (décadi).
    fn day_of_week(&self, jdn: u32) -> u32 {
        jdn % 10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        for ((y, m, d), jdn) in [
            ((1, 1, 1), 2375840),
            ((1, 13, 5), 2376204),
            ((3, 13, 6), 2376935),
            ((4, 1, 1), 2376936),
            ((14, 13, 5), 2380952),
        ] {
            assert_eq!(Ok(jdn), French.ymd_to_jd(y, m, d), "{y}-{m}-{d}");
            assert_eq!(Ok((y, m, d)), French.jd_to_ymd(jdn), "{jdn}");
        }
    }

    #[test]
    fn sextile_years() {
        let leaps: Vec<i32> = (1..=14).filter(|&y| French.is_leap_year(y)).collect();
        assert_eq!(vec![3, 7, 11], leaps);
        assert_eq!(Ok(366), French.days_in_year(3));
        assert_eq!(Ok(365), French.days_in_year(4));
        assert!(French.ymd_to_jd(4, 13, 6).is_err());
    }

    #[test]
    fn bounded_to_the_republic() {
        assert!(matches!(
            French.jd_to_ymd(2375839),
            Err(CalendarError::OutOfRange { .. })
        ));
        assert!(matches!(
            French.jd_to_ymd(2380953),
            Err(CalendarError::OutOfRange { .. })
        ));
        assert!(matches!(
            French.ymd_to_jd(15, 1, 1),
            Err(CalendarError::OutOfRange { jdn: 2380953, .. })
        ));
    }

    #[test]
    fn decades() {
        assert_eq!(10, French.days_in_week());
        assert_eq!(0, French.day_of_week(2375840));
        assert_eq!(9, French.day_of_week(2375849));
        assert_eq!(Ok("Thermidor"), French.month_name(2, 11));
    }
}
