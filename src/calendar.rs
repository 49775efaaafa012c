//! The conversion contract shared by every calendar system, and selection of
//! a system at runtime.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;
use crate::{Arabic, Coptic, French, Gregorian, Jewish, Julian, Persian};

/// Largest Julian day number any calendar in this crate converts.
pub const JD_MAX: u32 = i32::MAX as u32;

/// A calendar system: converts between civil `(year, month, day)` triples and
/// Julian day numbers (JDN).
///
/// Implementations are stateless; every method is a pure function of its
/// arguments. `jd_to_ymd` and `ymd_to_jd` are exact inverses over
/// `jd_start()..=jd_end()`.
///
/// # Example
///
/// ```
/// use jdn_calendar::{Calendar, Gregorian, Julian};
///
/// let jdn = Gregorian.ymd_to_jd(2000, 1, 1).unwrap();
/// assert_eq!(2451545, jdn);
/// assert_eq!((1999, 12, 19), Julian.jd_to_ymd(jdn).unwrap());
/// ```
pub trait Calendar {
    /// Lower-case identifier of the calendar, e.g. `"gregorian"`.
    fn name(&self) -> &'static str;

    /// First Julian day number the calendar can represent.
    fn jd_start(&self) -> u32;

    /// Last Julian day number the calendar can represent.
    fn jd_end(&self) -> u32 {
        JD_MAX
    }

    /// Number of months in every year, including months that are empty in
    /// some years.
    fn months_in_year(&self) -> u32 {
        12
    }

    /// Determines whether `year` is a leap year.
    fn is_leap_year(&self, year: i32) -> bool;

    /// Returns the number of days in `month` of `year`, allowing for leap
    /// years.
    fn days_in_month(&self, year: i32, month: u32) -> Result<u32, CalendarError>;

    /// Converts a Julian day number into `(year, month, day)`.
    fn jd_to_ymd(&self, jdn: u32) -> Result<(i32, u32, u32), CalendarError>;

    /// Converts `(year, month, day)` into a Julian day number.
    fn ymd_to_jd(&self, year: i32, month: u32, day: u32) -> Result<u32, CalendarError>;

    /// Returns the name of `month`.
    fn month_name(&self, year: i32, month: u32) -> Result<&'static str, CalendarError>;

    /// Returns the number of days in `year`.
    fn days_in_year(&self, year: i32) -> Result<u32, CalendarError> {
        (1..=self.months_in_year())
            .map(|month| self.days_in_month(year, month))
            .sum()
    }

    /// Number of days in a week.
    fn days_in_week(&self) -> u32 {
        7
    }

    /// Returns the day of week of `jdn`, numbered from 0 (Sunday).
    fn day_of_week(&self, jdn: u32) -> u32 {
        (jdn % 7 + 1) % 7
    }
}

pub(crate) fn check_month<C>(calendar: &C, month: u32) -> Result<(), CalendarError>
where
    C: Calendar + ?Sized,
{
    let months_in_year = calendar.months_in_year();
    if (1..=months_in_year).contains(&month) {
        return Ok(());
    }
    tracing::debug!(calendar = calendar.name(), month, "month out of range");
    Err(CalendarError::InvalidMonth {
        calendar: calendar.name(),
        month,
        months_in_year,
    })
}

pub(crate) fn check_day<C>(calendar: &C, year: i32, month: u32, day: u32) -> Result<(), CalendarError>
where
    C: Calendar + ?Sized,
{
    let days_in_month = calendar.days_in_month(year, month)?;
    if (1..=days_in_month).contains(&day) {
        return Ok(());
    }
    tracing::debug!(calendar = calendar.name(), year, month, day, "day out of range");
    Err(CalendarError::InvalidDay {
        calendar: calendar.name(),
        year,
        month,
        day,
        days_in_month,
    })
}

pub(crate) fn invalid_year<C>(calendar: &C, year: i32) -> CalendarError
where
    C: Calendar + ?Sized,
{
    tracing::debug!(calendar = calendar.name(), year, "no such year");
    CalendarError::InvalidYear {
        calendar: calendar.name(),
        year,
    }
}

/// Checks that `jdn` is convertible and widens it for arithmetic.
pub(crate) fn check_jdn<C>(calendar: &C, jdn: u32) -> Result<i64, CalendarError>
where
    C: Calendar + ?Sized,
{
    bounded_jdn(calendar, i64::from(jdn)).map(i64::from)
}

/// Narrows a computed day number, rejecting it outside the calendar's range.
pub(crate) fn bounded_jdn<C>(calendar: &C, jdn: i64) -> Result<u32, CalendarError>
where
    C: Calendar + ?Sized,
{
    let (start, end) = (calendar.jd_start(), calendar.jd_end());
    if (i64::from(start)..=i64::from(end)).contains(&jdn) {
        return Ok(jdn as u32);
    }
    tracing::debug!(calendar = calendar.name(), jdn, "julian day out of range");
    Err(CalendarError::OutOfRange {
        calendar: calendar.name(),
        jdn,
        start,
        end,
    })
}

/// Looks up `month` in a table of month names.
pub(crate) fn month_from_table<C>(
    calendar: &C,
    names: &[&'static str],
    month: u32,
) -> Result<&'static str, CalendarError>
where
    C: Calendar + ?Sized,
{
    check_month(calendar, month)?;
    Ok(names[month as usize - 1])
}

/// Selects one of the calendar systems implemented by this crate.
///
/// Parses from (and displays as) the calendar's identifier, so it can be read
/// from configuration.
///
/// # Example
///
/// ```
/// use jdn_calendar::{Calendar, CalendarSystem};
///
/// let calendar: CalendarSystem = "hebrew".parse().unwrap();
/// assert_eq!(CalendarSystem::Jewish, calendar);
/// assert_eq!((5760, 4, 23), calendar.jd_to_ymd(2451545).unwrap());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum CalendarSystem {
    Gregorian,
    Julian,
    Jewish,
    French,
    Arabic,
    Persian,
    Coptic,
}

impl CalendarSystem {
    /// Every supported system.
    pub const ALL: [CalendarSystem; 7] = [
        Self::Gregorian,
        Self::Julian,
        Self::Jewish,
        Self::French,
        Self::Arabic,
        Self::Persian,
        Self::Coptic,
    ];

    /// Returns the implementation behind this variant.
    pub fn calendar(self) -> &'static dyn Calendar {
        match self {
            Self::Gregorian => &Gregorian,
            Self::Julian => &Julian,
            Self::Jewish => &Jewish,
            Self::French => &French,
            Self::Arabic => &Arabic,
            Self::Persian => &Persian,
            Self::Coptic => &Coptic,
        }
    }

    /// Converts a date of this calendar into the `target` calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use jdn_calendar::CalendarSystem::*;
    ///
    /// assert_eq!(Ok((1582, 10, 15)), Julian.convert(Gregorian, 1582, 10, 5));
    /// ```
    pub fn convert(
        self,
        target: CalendarSystem,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<(i32, u32, u32), CalendarError> {
        let jdn = self.ymd_to_jd(year, month, day)?;
        target.jd_to_ymd(jdn)
    }
}

impl Calendar for CalendarSystem {
    fn name(&self) -> &'static str {
        self.calendar().name()
    }
    fn jd_start(&self) -> u32 {
        self.calendar().jd_start()
    }
    fn jd_end(&self) -> u32 {
        self.calendar().jd_end()
    }
    fn months_in_year(&self) -> u32 {
        self.calendar().months_in_year()
    }
    fn is_leap_year(&self, year: i32) -> bool {
        self.calendar().is_leap_year(year)
    }
    fn days_in_month(&self, year: i32, month: u32) -> Result<u32, CalendarError> {
        self.calendar().days_in_month(year, month)
    }
    fn jd_to_ymd(&self, jdn: u32) -> Result<(i32, u32, u32), CalendarError> {
        self.calendar().jd_to_ymd(jdn)
    }
    fn ymd_to_jd(&self, year: i32, month: u32, day: u32) -> Result<u32, CalendarError> {
        self.calendar().ymd_to_jd(year, month, day)
    }
    fn month_name(&self, year: i32, month: u32) -> Result<&'static str, CalendarError> {
        self.calendar().month_name(year, month)
    }
    fn days_in_year(&self, year: i32) -> Result<u32, CalendarError> {
        self.calendar().days_in_year(year)
    }
    fn days_in_week(&self) -> u32 {
        self.calendar().days_in_week()
    }
    fn day_of_week(&self, jdn: u32) -> u32 {
        self.calendar().day_of_week(jdn)
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalendarSystem {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "gregorian" => Self::Gregorian,
            "julian" => Self::Julian,
            "jewish" | "hebrew" => Self::Jewish,
            "french" | "french-republican" => Self::French,
            "arabic" | "hijri" | "islamic" => Self::Arabic,
            "persian" | "jalali" | "solar-hijri" => Self::Persian,
            "coptic" => Self::Coptic,
            _ => {
                tracing::debug!(identifier = s, "unknown calendar system");
                return Err(CalendarError::UnknownCalendar(s.to_owned()));
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_identifiers() {
        for (s, std) in [
            ("gregorian", CalendarSystem::Gregorian),
            ("Julian", CalendarSystem::Julian),
            ("hebrew", CalendarSystem::Jewish),
            (" FRENCH ", CalendarSystem::French),
            ("hijri", CalendarSystem::Arabic),
            ("jalali", CalendarSystem::Persian),
            ("coptic", CalendarSystem::Coptic),
        ] {
            assert_eq!(Ok(std), s.parse::<CalendarSystem>(), "{s}");
        }
        assert_eq!(
            Err(CalendarError::UnknownCalendar("mayan".into())),
            "mayan".parse::<CalendarSystem>()
        );
    }

    #[test]
    fn display_parses_back() {
        for system in CalendarSystem::ALL {
            assert_eq!(Ok(system), system.to_string().parse());
        }
    }

    #[test]
    fn same_day_everywhere() {
        let jdn = 2451545;
        let dataset = [
            (CalendarSystem::Gregorian, (2000, 1, 1)),
            (CalendarSystem::Julian, (1999, 12, 19)),
            (CalendarSystem::Jewish, (5760, 4, 23)),
            (CalendarSystem::Arabic, (1420, 9, 24)),
            (CalendarSystem::Persian, (1378, 10, 11)),
            (CalendarSystem::Coptic, (1716, 4, 22)),
        ];
        for (system, (y, m, d)) in dataset {
            assert_eq!(Ok((y, m, d)), system.jd_to_ymd(jdn), "{system}");
            assert_eq!(Ok(jdn), system.ymd_to_jd(y, m, d), "{system}");
        }
        assert!(CalendarSystem::French.jd_to_ymd(jdn).is_err());
    }

    #[test]
    fn convert_between_systems() {
        let (french, jewish) = (CalendarSystem::French, CalendarSystem::Jewish);
        let (gregorian, persian) = (CalendarSystem::Gregorian, CalendarSystem::Persian);
        assert_eq!(Ok((1792, 9, 22)), french.convert(gregorian, 1, 1, 1));
        assert_eq!(Ok((2000, 9, 30)), jewish.convert(gregorian, 5761, 1, 1));
        assert_eq!(Ok((1403, 1, 1)), gregorian.convert(persian, 2024, 3, 20));
    }

    #[test]
    fn day_of_week() {
        // 2000-01-01 was a Saturday
        assert_eq!(6, Gregorian.day_of_week(2451545));
        assert_eq!(0, Gregorian.day_of_week(2451546));
        assert_eq!(7, Gregorian.days_in_week());
    }

    #[test]
    fn month_out_of_range() {
        assert_eq!(
            Err(CalendarError::InvalidMonth {
                calendar: "gregorian",
                month: 13,
                months_in_year: 12,
            }),
            check_month(&Gregorian, 13)
        );
        assert!(check_month(&Gregorian, 0).is_err());
        assert!(check_month(&Gregorian, 12).is_ok());
    }

    #[test]
    fn jdn_bounds() {
        assert_eq!(Ok(0), bounded_jdn(&Gregorian, 0));
        assert_eq!(Ok(JD_MAX), bounded_jdn(&Gregorian, i64::from(JD_MAX)));
        assert!(bounded_jdn(&Gregorian, -1).is_err());
        assert!(bounded_jdn(&Gregorian, i64::from(JD_MAX) + 1).is_err());
        assert!(check_jdn(&Jewish, 347997).is_err());
    }

    #[test]
    fn dyn_dispatch() {
        let calendars: Vec<&dyn Calendar> =
            CalendarSystem::ALL.iter().map(|c| c.calendar()).collect();
        for calendar in calendars {
            for jdn in [calendar.jd_start(), calendar.jd_end()] {
                let (y, m, d) = calendar.jd_to_ymd(jdn).unwrap();
                assert_eq!(Ok(jdn), calendar.ymd_to_jd(y, m, d), "{}", calendar.name());
            }
        }
        // Calendars counted from an era start on 1/1/1
        for system in [
            CalendarSystem::Jewish,
            CalendarSystem::French,
            CalendarSystem::Arabic,
            CalendarSystem::Persian,
            CalendarSystem::Coptic,
        ] {
            assert_eq!(Ok((1, 1, 1)), system.jd_to_ymd(system.jd_start()), "{system}");
        }
    }
}
