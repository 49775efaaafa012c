//! Errors reported by calendar conversions.

/// The two ways a conversion can fail.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// A civil date field, or a calendar identifier, is not valid.
    InvalidArgument,
    /// A Julian day number lies outside the range a calendar supports.
    OutOfRange,
}

/// Error type for every fallible operation in this crate.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// The year does not exist in the calendar's numbering (year 0 of the
    /// Gregorian and Julian calendars, or a year before the Easter tables).
    #[error("{calendar} calendar has no year {year}")]
    InvalidYear {
        /// Calendar the year was given for.
        calendar: &'static str,
        /// The rejected year.
        year: i32,
    },

    /// The month is outside `1..=months_in_year`.
    #[error("month {month} is not in 1..={months_in_year} in the {calendar} calendar")]
    InvalidMonth {
        /// Calendar the month was given for.
        calendar: &'static str,
        /// The rejected month.
        month: u32,
        /// Number of months the calendar has.
        months_in_year: u32,
    },

    /// The day is outside `1..=days_in_month` for that year and month.
    #[error("day {day} is not in 1..={days_in_month} for {year}-{month} in the {calendar} calendar")]
    InvalidDay {
        /// Calendar the day was given for.
        calendar: &'static str,
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: u32,
        /// The rejected day.
        day: u32,
        /// Length of that month, `0` if the month is absent that year.
        days_in_month: u32,
    },

    /// The Julian day number is outside the calendar's supported range.
    #[error("julian day {jdn} is outside {start}..={end} of the {calendar} calendar")]
    OutOfRange {
        /// Calendar that cannot represent the day.
        calendar: &'static str,
        /// The day number, possibly negative when computed from a civil date.
        jdn: i64,
        /// First supported day.
        start: u32,
        /// Last supported day.
        end: u32,
    },

    /// No calendar system is known by this identifier.
    #[error("unknown calendar system `{0}`")]
    UnknownCalendar(String),
}

impl CalendarError {
    /// Classifies the error.
    ///
    /// # Example
    ///
    /// ```
    /// use jdn_calendar::{Calendar, ErrorKind, Gregorian};
    ///
    /// let err = Gregorian.ymd_to_jd(2001, 2, 29).unwrap_err();
    /// assert_eq!(ErrorKind::InvalidArgument, err.kind());
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidYear { .. }
            | Self::InvalidMonth { .. }
            | Self::InvalidDay { .. }
            | Self::UnknownCalendar(_) => ErrorKind::InvalidArgument,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = CalendarError::InvalidMonth {
            calendar: "persian",
            month: 13,
            months_in_year: 12,
        };
        assert_eq!(e.to_string(), "month 13 is not in 1..=12 in the persian calendar");

        let e = CalendarError::InvalidDay {
            calendar: "gregorian",
            year: 1900,
            month: 2,
            day: 29,
            days_in_month: 28,
        };
        assert_eq!(
            e.to_string(),
            "day 29 is not in 1..=28 for 1900-2 in the gregorian calendar"
        );

        let e = CalendarError::OutOfRange {
            calendar: "french",
            jdn: 2380953,
            start: 2375840,
            end: 2380952,
        };
        assert_eq!(
            e.to_string(),
            "julian day 2380953 is outside 2375840..=2380952 of the french calendar"
        );

        let e = CalendarError::InvalidYear {
            calendar: "julian",
            year: 0,
        };
        assert_eq!(e.to_string(), "julian calendar has no year 0");

        let e = CalendarError::UnknownCalendar("mayan".into());
        assert_eq!(e.to_string(), "unknown calendar system `mayan`");
    }

    #[test]
    fn kinds() {
        let e = CalendarError::OutOfRange {
            calendar: "jewish",
            jdn: -1,
            start: 347998,
            end: 2147483647,
        };
        assert_eq!(ErrorKind::OutOfRange, e.kind());
        assert_eq!(
            ErrorKind::InvalidArgument,
            CalendarError::UnknownCalendar(String::new()).kind()
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
