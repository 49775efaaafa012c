//! Jewish (Hebrew) calendar.
//!
//! Years are counted *anno mundi* from 1 Tishri AM 1 (JDN 347998). The year
//! starts at Tishri, and months are numbered in that order:
//!
//! | # | Month | Days |
//! |---|-------|------|
//! | 1 | Tishri | 30 |
//! | 2 | Heshvan | 29 or 30 |
//! | 3 | Kislev | 29 or 30 |
//! | 4 | Tevet | 29 |
//! | 5 | Shevat | 30 |
//! | 6 | Adar I | 30 in leap years, otherwise empty |
//! | 7 | Adar (Adar II in leap years) | 29 |
//! | 8..=13 | Nisan, Iyar, Sivan, Tamuz, Av, Elul | 30, 29, 30, 29, 30, 29 |
//!
//! New years are computed from the molad (mean conjunction) of Tishri with
//! the postponement rules (dehiyyot).

use crate::calendar::{self, Calendar};
use crate::error::CalendarError;

pub mod fmt;

/// JDN of 1 Tishri AM 1.
const EPOCH: i64 = 347998;

/// Parts (1/1080 hour) in a day.
const PARTS_PER_DAY: i64 = 25920;

/// Lengths of the months whose length does not depend on the year.
const FIXED_MONTH_LENGTHS: [u32; 14] = [0, 30, 0, 0, 29, 30, 0, 29, 30, 29, 30, 29, 30, 29];

const MONTH_NAMES: [&str; 13] = [
    "Tishri", "Heshvan", "Kislev", "Tevet", "Shevat", "Adar I", "Adar II", "Nisan", "Iyar",
    "Sivan", "Tamuz", "Av", "Elul",
];

/// The Jewish calendar.
///
/// # Example
///
/// ```
/// use jdn_calendar::{Calendar, Jewish};
///
/// assert_eq!(Ok((5760, 4, 23)), Jewish.jd_to_ymd(2451545)); // 23 Tevet 5760
/// assert!(Jewish.is_leap_year(5760));
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Jewish;

/// Days from the epoch's molad reckoning to 1 Tishri of `year`, before the
/// postponements that depend on neighbouring years.
fn elapsed_days(year: i64) -> i64 {
    let months = (235 * year - 234).div_euclid(19);
    let parts = 12084 + 13753 * months;
    let days = 29 * months + parts.div_euclid(PARTS_PER_DAY);
    // Rosh Hashanah never falls on Sunday, Wednesday or Friday
    if (3 * (days + 1)).rem_euclid(7) < 3 {
        days + 1
    } else {
        days
    }
}

/// Postponement keeping every year within 353..=355 or 383..=385 days.
fn year_length_correction(year: i64) -> i64 {
    let ny0 = elapsed_days(year - 1);
    let ny1 = elapsed_days(year);
    let ny2 = elapsed_days(year + 1);
    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

/// JDN of 1 Tishri of `year`.
fn new_year(year: i64) -> i64 {
    EPOCH + elapsed_days(year) + year_length_correction(year)
}

fn year_length(year: i64) -> i64 {
    new_year(year + 1) - new_year(year)
}

impl Calendar for Jewish {
    fn name(&self) -> &'static str {
        "jewish"
    }

    fn jd_start(&self) -> u32 {
        EPOCH as u32
    }

    fn months_in_year(&self) -> u32 {
        13
    }

    fn is_leap_year(&self, year: i32) -> bool {
        (7 * i64::from(year) + 1).rem_euclid(19) < 7
    }

    fn days_in_month(&self, year: i32, month: u32) -> Result<u32, CalendarError> {
        calendar::check_month(self, month)?;
        Ok(match month {
            // Heshvan is long in complete years (355, 385 days)
            2 => 29 + u32::from(year_length(i64::from(year)) % 10 == 5),
            // Kislev is short in deficient years (353, 383 days)
            3 => 30 - u32::from(year_length(i64::from(year)) % 10 == 3),
            6 if self.is_leap_year(year) => 30,
            m => FIXED_MONTH_LENGTHS[m as usize],
        })
    }

    fn days_in_year(&self, year: i32) -> Result<u32, CalendarError> {
        Ok(year_length(i64::from(year)) as u32)
    }

    fn jd_to_ymd(&self, jdn: u32) -> Result<(i32, u32, u32), CalendarError> {
        let jdn = calendar::check_jdn(self, jdn)?;
        // Mean year is 35975351/98496 days; the estimate is off by at most one
        let approx = (98496 * (jdn - EPOCH)).div_euclid(35975351) + 1;
        let year = approx - 1
            + i64::from(new_year(approx) <= jdn)
            + i64::from(new_year(approx + 1) <= jdn);
        let mut day = (jdn - new_year(year)) as u32;
        let year = year as i32;

        let mut month = 1;
        while month < self.months_in_year() {
            let length = self.days_in_month(year, month)?;
            if day < length {
                break;
            }
            day -= length;
            month += 1;
        }
        Ok((year, month, day + 1))
    }

    fn ymd_to_jd(&self, year: i32, month: u32, day: u32) -> Result<u32, CalendarError> {
        calendar::check_day(self, year, month, day)?;
        let mut jdn = new_year(i64::from(year)) + i64::from(day) - 1;
        for m in 1..month {
            jdn += i64::from(self.days_in_month(year, m)?);
        }
        calendar::bounded_jdn(self, jdn)
    }

    fn month_name(&self, year: i32, month: u32) -> Result<&'static str, CalendarError> {
        if month == 7 && !self.is_leap_year(year) {
            return Ok("Adar");
        }
        calendar::month_from_table(self, &MONTH_NAMES, month)
    }
}
