//! Calendar-independant date.

use std::ops::{Add, Sub};

use crate::calendar::Calendar;
use crate::error::CalendarError;
use crate::gregorian::Gregorian;

/// A calendar-independant date, identified by its Julian day number (JDN).
///
/// Convert to and from civil dates of any [`Calendar`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` from a civil date of `calendar`.
    ///
    /// # Example
    ///
    /// ```
    /// use jdn_calendar::{Date, Jewish};
    ///
    /// let date = Date::from_ymd(&Jewish, 5761, 1, 1).unwrap();
    /// assert_eq!("2000-09-30", date.iso_gregorian().unwrap());
    /// ```
    pub fn from_ymd<C>(calendar: &C, year: i32, month: u32, day: u32) -> Result<Self, CalendarError>
    where
        C: Calendar + ?Sized,
    {
        calendar.ymd_to_jd(year, month, day).map(Self::from_jdn)
    }
    /// Represents the date in `calendar`, in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use jdn_calendar::{Date, Julian};
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!(Ok((1999, 12, 19)), date.ymd(&Julian));
    /// ```
    pub fn ymd<C>(&self, calendar: &C) -> Result<(i32, u32, u32), CalendarError>
    where
        C: Calendar + ?Sized,
    {
        calendar.jd_to_ymd(self.jdn)
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` has no year 0: 1 BC is `-1`.
    ///
    /// # Example
    ///
    /// ```
    /// use jdn_calendar::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        Self::from_ymd(&Gregorian, year, month, day)
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use jdn_calendar::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!(Ok((2000, 1, 1)), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> Result<(i32, u32, u32), CalendarError> {
        self.ymd(&Gregorian)
    }
    /// Formats the date in ISO 8601 format, which numbers 1 BC as year 0.
    ///
    /// # Example
    ///
    /// ```
    /// use jdn_calendar::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian().unwrap());
    /// let date = Date::from_gregorian(-1, 12, 31).unwrap();
    /// assert_eq!("0000-12-31", date.iso_gregorian().unwrap());
    /// ```
    pub fn iso_gregorian(&self) -> Result<String, CalendarError> {
        let (y, m, d) = self.gregorian()?;
        let y = if y < 0 { y + 1 } else { y };
        Ok(if y < 0 {
            format!("-{:04}-{:02}-{:02}", -y, m, d)
        } else {
            format!("{:04}-{:02}-{:02}", y, m, d)
        })
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use jdn_calendar::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        self.jdn % 7 + 1
    }

    /// Moves the date by `days`, or returns `None` if the result has no
    /// Julian day number.
    ///
    /// # Example
    ///
    /// ```
    /// use jdn_calendar::Date;
    ///
    /// assert_eq!(Some(Date::from_jdn(9)), Date::from_jdn(10).checked_add(-1));
    /// assert_eq!(None, Date::from_jdn(0).checked_add(-1));
    /// ```
    pub fn checked_add(self, days: i32) -> Option<Self> {
        self.jdn.checked_add_signed(days).map(Self::from_jdn)
    }
}

/// Moves the date by a number of days.
///
/// Overflow follows integer addition: it panics in debug builds. Use
/// [`Date::checked_add`] near JDN 0.
impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(if rhs >= 0 {
            self.jdn + rhs as u32
        } else {
            self.jdn - rhs.unsigned_abs()
        })
    }
}
impl Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> Self::Output {
        i64::from(self.jdn) - i64::from(rhs.jdn)
    }
}
