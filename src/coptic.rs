//! Coptic calendar, counted from the Era of Martyrs (AD 284).

use crate::calendar::{self, Calendar};
use crate::error::CalendarError;

/// JDN of 1 Thout AM 1 (29 August 284, Julian).
const EPOCH: i64 = 1825030;

const MONTH_NAMES: [&str; 13] = [
    "Thout",
    "Paopi",
    "Hathor",
    "Koiak",
    "Tobi",
    "Meshir",
    "Paremhat",
    "Parmouti",
    "Pashons",
    "Paoni",
    "Epip",
    "Mesori",
    "Pi Kogi Enavot",
];

/// The Coptic calendar: twelve months of 30 days and a short thirteenth month
/// of five days, six in the year before a Julian leap year.
///
/// # Example
///
/// ```
/// use jdn_calendar::{Calendar, Coptic};
///
/// assert_eq!(Ok((1716, 4, 22)), Coptic.jd_to_ymd(2451545)); // 22 Koiak 1716
/// assert!(Coptic.is_leap_year(1715));
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Coptic;

fn to_jdn(year: i64, month: i64, day: i64) -> i64 {
    EPOCH - 1 + 365 * (year - 1) + year.div_euclid(4) + 30 * (month - 1) + day
}

impl Calendar for Coptic {
    fn name(&self) -> &'static str {
        "coptic"
    }

    fn jd_start(&self) -> u32 {
        EPOCH as u32
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
        let year = (4 * (jdn - EPOCH) + 1463) / 1461;
        let month = (jdn - to_jdn(year, 1, 1)) / 30 + 1;
        let day = jdn + 1 - to_jdn(year, month, 1);
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
