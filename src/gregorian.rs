//! Proleptic Gregorian calendar.
//!
//! Years use the historical numbering: there is no year 0, and year `-1` is
//! 1 BC.

use crate::calendar::{self, Calendar};
use crate::error::CalendarError;

/// Month names shared with the Julian calendar.
pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month lengths of a common year, shared with the Julian calendar.
pub(crate) const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// The proleptic Gregorian calendar.
///
/// # Example
///
/// ```
/// use jdn_calendar::{Calendar, Gregorian};
///
/// assert_eq!(Ok(2451545), Gregorian.ymd_to_jd(2000, 1, 1));
/// assert_eq!(Ok((2000, 1, 1)), Gregorian.jd_to_ymd(2451545));
/// assert!(Gregorian.is_leap_year(2000));
/// assert!(!Gregorian.is_leap_year(1900));
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Gregorian;

/// Converts a historical year into an astronomical one (1 BC is year 0).
pub(crate) fn astronomical(year: i32) -> i64 {
    if year < 0 {
        i64::from(year) + 1
    } else {
        i64::from(year)
    }
}

/// Converts an astronomical year back into the historical numbering.
pub(crate) fn historical(year: i64) -> i32 {
    (if year <= 0 { year - 1 } else { year }) as i32
}

impl Calendar for Gregorian {
    fn name(&self) -> &'static str {
        "gregorian"
    }

    fn jd_start(&self) -> u32 {
        0
    }

    /// Year 0 does not exist and is never a leap year.
    fn is_leap_year(&self, year: i32) -> bool {
        if year == 0 {
            return false;
        }
        let y = astronomical(year);
        y % 4 == 0 && y % 100 != 0 || y % 400 == 0
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
        let a = jdn + 32044;
        let b = (4 * a + 3) / 146097;
        let c = a - 146097 * b / 4;
        let d = (4 * c + 3) / 1461;
        let e = c - 1461 * d / 4;
        let m = (5 * e + 2) / 153;
        let day = e - (153 * m + 2) / 5 + 1;
        let month = m + 3 - 12 * (m / 10);
        let year = 100 * b + d - 4800 + m / 10;
        Ok((historical(year), month as u32, day as u32))
    }

    fn ymd_to_jd(&self, year: i32, month: u32, day: u32) -> Result<u32, CalendarError> {
        calendar::check_day(self, year, month, day)?;
        // Count from March so the leap day ends the year
        let a = i64::from(month <= 2);
        let y = astronomical(year) + 4800 - a;
        let m = i64::from(month) + 12 * a - 3;
        let jdn = i64::from(day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4)
            - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045;
        calendar::bounded_jdn(self, jdn)
    }

    fn month_name(&self, _year: i32, month: u32) -> Result<&'static str, CalendarError> {
        calendar::month_from_table(self, &MONTH_NAMES, month)
    }
}

impl Gregorian {
    /// Returns the number of days after 21 March on which Easter Sunday falls
    /// in `year`.
    ///
    /// # Example
    ///
    /// ```
    /// use jdn_calendar::Gregorian;
    ///
    /// assert_eq!(Ok(33), Gregorian.easter_days(2000)); // 23 April
    /// ```
    pub fn easter_days(&self, year: i32) -> Result<u32, CalendarError> {
        if year < 1 {
            return Err(calendar::invalid_year(self, year));
        }
        let year = i64::from(year);
        let golden = year % 19 + 1;
        let dom = (year + year / 4 - year / 100 + year / 400) % 7;
        // Solar and lunar corrections to the Julian epacts
        let solar = (year - 1600) / 100 - (year - 1600) / 400;
        let lunar = ((year - 1400) / 100 * 8) / 25;
        let pfm = (3 - 11 * golden + solar - lunar).rem_euclid(30);
        Ok(paschal_sunday(golden, pfm, dom))
    }

    /// Returns the `(month, day)` of Easter Sunday in `year`.
    ///
    /// # Example
    ///
    /// ```
    /// use jdn_calendar::Gregorian;
    ///
    /// assert_eq!(Ok((3, 31)), Gregorian.easter_date(2024));
    /// ```
    pub fn easter_date(&self, year: i32) -> Result<(u32, u32), CalendarError> {
        self.easter_days(year).map(easter_month_day)
    }
}

/// Finds the Sunday after the paschal full moon, as days after 21 March.
pub(crate) fn paschal_sunday(golden: i64, mut pfm: i64, dom: i64) -> u32 {
    if pfm == 29 || (pfm == 28 && golden > 11) {
        pfm -= 1;
    }
    let to_sunday = (4 - pfm - dom).rem_euclid(7);
    (pfm + to_sunday + 1) as u32
}

pub(crate) fn easter_month_day(days: u32) -> (u32, u32) {
    if days <= 10 {
        (3, 21 + days)
    } else {
        (4, days - 10)
    }
}
