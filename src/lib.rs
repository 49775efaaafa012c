//! Utilities for converting between dates in different calendars.
//!
//! Every calendar system converts between its civil `(year, month, day)`
//! dates and the Julian day number (JDN), a continuous count of days shared
//! by all systems. Supported systems:
//!
//! - [`Gregorian`] and [`Julian`], proleptic, with no year 0
//! - [`Jewish`], with Hebrew numerals in [`jewish::fmt`]
//! - [`French`] Republican, years I to XIV
//! - [`Arabic`], the tabular Islamic calendar
//! - [`Persian`], the arithmetic Solar Hijri calendar
//! - [`Coptic`]
//!
//! All conversions are pure functions. Invalid civil dates and days outside a
//! calendar's range are reported as [`CalendarError`]s and logged with
//! [`tracing`] at debug level.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use jdn_calendar::{Date, Julian};
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! assert_eq!(Ok((1999, 12, 19)), date.ymd(&Julian));
//! ```
//!
//! Selecting a calendar at runtime:
//!
//! ```
//! use jdn_calendar::{Calendar, CalendarSystem};
//!
//! let calendar: CalendarSystem = "persian".parse().unwrap();
//! let jdn = calendar.ymd_to_jd(1403, 1, 1).unwrap();
//!
//! assert_eq!(Ok((2024, 3, 20)), CalendarSystem::Gregorian.jd_to_ymd(jdn));
//! ```

pub mod arabic;
pub mod calendar;
pub mod coptic;
pub mod date;
pub mod error;
pub mod french;
pub mod gregorian;
pub mod jewish;
pub mod julian;
pub mod persian;

pub use arabic::Arabic;
pub use calendar::{Calendar, CalendarSystem, JD_MAX};
pub use coptic::Coptic;
pub use date::Date;
pub use error::{CalendarError, ErrorKind};
pub use french::French;
pub use gregorian::Gregorian;
pub use jewish::Jewish;
pub use julian::Julian;
pub use persian::Persian;
