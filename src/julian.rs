//! Proleptic Julian calendar, numbered like [`Gregorian`](crate::Gregorian):
//! no year 0, year `-1` is 1 BC.

use crate::calendar::{self, Calendar};
use crate::error::CalendarError;
use crate::gregorian::{
    MONTH_LENGTHS, MONTH_NAMES, astronomical, easter_month_day, historical, paschal_sunday,
};

/// The proleptic Julian calendar.
///
/// # Example
///
/// ```
/// use jdn_calendar::{Calendar, Julian};
///
/// assert!(Julian.is_leap_year(1900));
/// assert_eq!(Ok((1582, 10, 5)), Julian.jd_to_ymd(2299161));
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Julian;

impl Calendar for Julian {
    fn name(&self) -> &'static str {
        "julian"
    }

    fn jd_start(&self) -> u32 {
        0
    }

    /// Year 0 does not exist and is never a leap year.
    fn is_leap_year(&self, year: i32) -> bool {
        year != 0 && astronomical(year) % 4 == 0
    }

    fn days_in_month(&self, year: i32, month: u32) -> Result<u32, CalendarError> {
        if year == 0 {
            return Err(calendar::invalid_year(self, year));
        }
        calendar::check_month(self, month)?;
        if month == 2 && self.is_leap_year(year) {
            Ok(29)
        } else {
            Ok(MONTH_LENGTHS[month as usize - 1])
        }
    }

    fn jd_to_ymd(&self, jdn: u32) -> Result<(i32, u32, u32), CalendarError> {
        let jdn = calendar::check_jdn(self, jdn)?;
        let c = jdn + 32082;
        let d = (4 * c + 3) / 1461;
        let e = c - 1461 * d / 4;
        let m = (5 * e + 2) / 153;
        let day = e - (153 * m + 2) / 5 + 1;
        let month = m + 3 - 12 * (m / 10);
        let year = d - 4800 + m / 10;
        Ok((historical(year), month as u32, day as u32))
    }

    fn ymd_to_jd(&self, year: i32, month: u32, day: u32) -> Result<u32, CalendarError> {
        calendar::check_day(self, year, month, day)?;
        let a = i64::from(month <= 2);
        let y = astronomical(year) + 4800 - a;
        let m = i64::from(month) + 12 * a - 3;
        let jdn = i64::from(day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - 32083;
        calendar::bounded_jdn(self, jdn)
    }

    fn month_name(&self, _year: i32, month: u32) -> Result<&'static str, CalendarError> {
        calendar::month_from_table(self, &MONTH_NAMES, month)
    }
}

impl Julian {
    /// Returns the number of days after 21 March (Julian) on which Easter
    /// Sunday falls in `year`.
    ///
    /// # Example
    ///
    /// ```
    /// use jdn_calendar::Julian;
    ///
    /// assert_eq!(Ok(27), Julian.easter_days(2000)); // 17 April
    /// ```
    pub fn easter_days(&self, year: i32) -> Result<u32, CalendarError> {
        if year < 1 {
            return Err(calendar::invalid_year(self, year));
        }
        let year = i64::from(year);
        let golden = year % 19 + 1;
        let dom = (year + year / 4 + 5) % 7;
        let pfm = (3 - 11 * golden - 7).rem_euclid(30);
        Ok(paschal_sunday(golden, pfm, dom))
    }

    /// Returns the `(month, day)` of Easter Sunday in `year`, as a Julian
    /// date.
    pub fn easter_date(&self, year: i32) -> Result<(u32, u32), CalendarError> {
        self.easter_days(year).map(easter_month_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        for ((y, m, d), jdn) in [
            ((-4713, 1, 1), 0),
            ((1582, 10, 4), 2299160),
            ((1999, 12, 19), 2451545),
            ((2000, 1, 1), 2451558),
            ((1, 1, 1), 1721424),
            ((-1, 12, 31), 1721423),
        ] {
            assert_eq!(Ok(jdn), Julian.ymd_to_jd(y, m, d), "{y}-{m}-{d}");
            assert_eq!(Ok((y, m, d)), Julian.jd_to_ymd(jdn), "{jdn}");
        }
    }

    #[test]
    fn leap_years() {
        for (year, std) in [(1900, true), (2000, true), (1901, false), (-1, true), (-5, true), (0, false)] {
            assert_eq!(std, Julian.is_leap_year(year), "{year}");
        }
        assert_eq!(Ok(29), Julian.days_in_month(1900, 2));
        assert_eq!(Ok(366), Julian.days_in_year(-4713));
    }

    #[test]
    fn easter() {
        for (year, days) in [(2000, 27), (2011, 21), (2024, 32), (2025, 17)] {
            assert_eq!(Ok(days), Julian.easter_days(year), "{year}");
        }
        assert_eq!(Ok((4, 17)), Julian.easter_date(2000));
        assert!(Julian.easter_date(-1).is_err());
        assert_eq!(Ok(13), Julian.easter_days(2_000_000_000));
        assert_eq!(Ok(24), Julian.easter_days(i32::MAX));
    }

    #[test]
    fn rejects_invalid_dates() {
        assert!(Julian.ymd_to_jd(1900, 2, 30).is_err());
        assert!(Julian.ymd_to_jd(2000, 0, 1).is_err());
        assert!(Julian.ymd_to_jd(0, 6, 1).is_err());
        assert!(Julian.ymd_to_jd(-4714, 12, 31).is_err());
    }
}
