//! Persian (Solar Hijri) calendar, arithmetic variant.
//!
//! Leap years follow a 2820-year cycle of 683 leap years rather than the
//! observed vernal equinox, so a few years around the end of each 33-year
//! subcycle differ from the official Iranian calendar (e.g. this calendar
//! makes 1404 leap where the observed calendar has 1403).

use crate::calendar::{self, Calendar};
use crate::error::CalendarError;

/// Day before 1 Farvardin AP 1 (19 March 622, Julian).
const EPOCH: i64 = 1948320;

/// Days in a 2820-year cycle.
const DAYS_PER_CYCLE: i64 = 1029983;

const MONTH_NAMES: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// The arithmetic Persian calendar.
///
/// # Example
///
/// ```
/// use jdn_calendar::{Calendar, Persian};
///
/// assert_eq!(Ok((1378, 10, 11)), Persian.jd_to_ymd(2451545)); // 11 Dey 1378
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Persian;

/// Splits `year` (AP 1 or later) into whole cycles since AP 474 and the
/// year's position in its cycle, counted from 474.
fn cycle_position(year: i64) -> (i64, i64) {
    let base = year - 474;
    (base.div_euclid(2820), 474 + base.rem_euclid(2820))
}

fn to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let (cycle, position) = cycle_position(year);
    let month_days = if month <= 7 {
        (month - 1) * 31
    } else {
        (month - 1) * 30 + 6
    };
    day + month_days
        + (position * 682 - 110).div_euclid(2816)
        + (position - 1) * 365
        + cycle * DAYS_PER_CYCLE
        + EPOCH
}

impl Calendar for Persian {
    fn name(&self) -> &'static str {
        "persian"
    }

    fn jd_start(&self) -> u32 {
        EPOCH as u32 + 1
    }

    fn is_leap_year(&self, year: i32) -> bool {
        if year < 1 {
            return false;
        }
        let (_, position) = cycle_position(i64::from(year));
        ((position + 38) * 682).rem_euclid(2816) < 682
    }

    fn days_in_month(&self, year: i32, month: u32) -> Result<u32, CalendarError> {
        if year < 1 {
            return Err(calendar::invalid_year(self, year));
        }
        calendar::check_month(self, month)?;
        Ok(match month {
            1..=6 => 31,
            7..=11 => 30,
            _ if self.is_leap_year(year) => 30,
            _ => 29,
        })
    }

    fn jd_to_ymd(&self, jdn: u32) -> Result<(i32, u32, u32), CalendarError> {
        let jdn = calendar::check_jdn(self, jdn)?;
        let days = jdn - to_jdn(475, 1, 1);
        let cycle = days.div_euclid(DAYS_PER_CYCLE);
        let day_of_cycle = days.rem_euclid(DAYS_PER_CYCLE);
        let year_of_cycle = if day_of_cycle == DAYS_PER_CYCLE - 1 {
            2820
        } else {
            let a = day_of_cycle / 366;
            let b = day_of_cycle % 366;
            (2134 * a + 2816 * b + 2815) / 1028522 + a + 1
        };
        let year = year_of_cycle + 2820 * cycle + 474;

        let day_of_year = jdn - to_jdn(year, 1, 1) + 1;
        let month = if day_of_year <= 186 {
            (day_of_year + 30) / 31
        } else {
            (day_of_year - 6 + 29) / 30
        };
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
            ((1, 1, 1), 1948321),
            ((1378, 10, 11), 2451545),
            ((1379, 1, 1), 2451624),
            ((1403, 1, 1), 2460390),
        ] {
            assert_eq!(Ok(jdn), Persian.ymd_to_jd(y, m, d), "{y}-{m}-{d}");
            assert_eq!(Ok((y, m, d)), Persian.jd_to_ymd(jdn), "{jdn}");
        }
    }

    #[test]
    fn leap_years() {
        let leaps: Vec<i32> = (1395..=1410).filter(|&y| Persian.is_leap_year(y)).collect();
        assert_eq!(vec![1395, 1399, 1404, 1408], leaps);
        for year in 1..=3000 {
            let length =
                Persian.ymd_to_jd(year + 1, 1, 1).unwrap() - Persian.ymd_to_jd(year, 1, 1).unwrap();
            assert_eq!(Ok(length), Persian.days_in_year(year), "{year}");
        }
    }

    #[test]
    fn month_boundaries() {
        // 1 Farvardin 1379 is JDN 2451624
        assert_eq!(Ok((1379, 6, 31)), Persian.jd_to_ymd(2451624 + 185));
        assert_eq!(Ok((1379, 7, 1)), Persian.jd_to_ymd(2451624 + 186));
        assert_eq!(Ok((1378, 12, 29)), Persian.jd_to_ymd(2451623));
        assert_eq!(Ok(29), Persian.days_in_month(1403, 12));
        assert_eq!(Ok(30), Persian.days_in_month(1404, 12));
        assert!(Persian.days_in_month(1404, 13).is_err());
    }

    #[test]
    fn no_year_zero() {
        for (y, m, d) in [(0, 1, 1), (0, 12, 29), (-1, 6, 31)] {
            assert!(
                matches!(
                    Persian.ymd_to_jd(y, m, d),
                    Err(CalendarError::InvalidYear { .. })
                ),
                "{y}-{m}-{d}"
            );
        }
        assert!(Persian.days_in_year(0).is_err());
        assert!(!Persian.is_leap_year(0));
        assert_eq!(Ok(1948321), Persian.ymd_to_jd(1, 1, 1));
        assert_eq!(Ok(365), Persian.days_in_year(1));
    }
}
