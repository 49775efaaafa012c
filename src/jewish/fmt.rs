//! Hebrew numerals and Hebrew-script dates.

use super::Jewish;
use crate::calendar::{self, Calendar};
use crate::error::CalendarError;

/// Geresh, marks a single letter as a number.
pub const GERESH: char = '\u{05F3}';
/// Gershayim, placed before the last letter of a multi-letter number.
pub const GERSHAYIM: char = '\u{05F4}';
/// The word "thousands".
pub const ALAFIM: &str = "אלפים";

/// Letters for `1..=9`. Item 0 is unused.
pub const UNITS: &[char] = &['\0', 'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט'];
/// Letters for `10..=90`. Item 0 is unused.
pub const TENS: &[char] = &['\0', 'י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ'];
/// Letters for `100..=400`. Item 0 is unused; larger hundreds combine
/// with ת.
pub const HUNDREDS: &[char] = &['\0', 'ק', 'ר', 'ש', 'ת'];

const MONTH_NAMES: [&str; 13] = [
    "תשרי", "חשון", "כסלו", "טבת", "שבט", "אדר א׳", "אדר ב׳", "ניסן", "אייר", "סיון", "תמוז",
    "אב", "אלול",
];

/// How [`numerals`] writes a number.
///
/// Without a thousands flag, the thousands are dropped, so the year 5761 is
/// written as 761.
///
/// # Example
///
/// ```
/// use jdn_calendar::jewish::fmt::{self, NumeralStyle};
///
/// let style = NumeralStyle::new().with_alafim(true);
/// assert_eq!("ה אלפים תשסא", fmt::numerals(5761, &style));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NumeralStyle {
    gereshayim: bool,
    alafim_geresh: bool,
    alafim: bool,
}

impl NumeralStyle {
    /// Bare letters, thousands dropped.
    pub fn new() -> Self {
        Self {
            gereshayim: false,
            alafim_geresh: false,
            alafim: false,
        }
    }

    /// Marks numbers with geresh or gershayim.
    pub fn with_gereshayim(mut self, on: bool) -> Self {
        self.gereshayim = on;
        self
    }

    /// Keeps the thousands, followed by a geresh.
    pub fn with_alafim_geresh(mut self, on: bool) -> Self {
        self.alafim_geresh = on;
        self
    }

    /// Keeps the thousands, followed by the word "thousands".
    pub fn with_alafim(mut self, on: bool) -> Self {
        self.alafim = on;
        self
    }

    fn keeps_thousands(&self) -> bool {
        self.alafim_geresh || self.alafim
    }
}

/// Gereshayim and a geresh after the thousands, e.g. ה׳תשס״א.
impl Default for NumeralStyle {
    fn default() -> Self {
        Self::new().with_gereshayim(true).with_alafim_geresh(true)
    }
}

/// Letters for `num % 1000`, hundreds first.
fn letters(num: u32) -> String {
    let mut rt = String::new();
    let mut hundreds = num % 1000 / 100;
    while hundreds > 4 {
        rt.push(HUNDREDS[4]);
        hundreds -= 4;
    }
    if hundreds > 0 {
        rt.push(HUNDREDS[hundreds as usize]);
    }
    match num % 100 {
        // Not יה and יו, which spell the divine name
        15 => rt.push_str("טו"),
        16 => rt.push_str("טז"),
        n => {
            if n >= 10 {
                rt.push(TENS[(n / 10) as usize]);
            }
            if n % 10 > 0 {
                rt.push(UNITS[(n % 10) as usize]);
            }
        }
    }
    rt
}

fn mark(letters: String) -> String {
    let mut chars: Vec<char> = letters.chars().collect();
    match chars.len() {
        0 => {}
        1 => chars.push(GERESH),
        n => chars.insert(n - 1, GERSHAYIM),
    }
    chars.into_iter().collect()
}

/// Writes `num` in Hebrew numerals.
///
/// # Example
///
/// ```
/// use jdn_calendar::jewish::fmt::{self, NumeralStyle};
///
/// let style = NumeralStyle::default();
/// assert_eq!("ה׳תשס״א", fmt::numerals(5761, &style));
/// assert_eq!("ט״ו", fmt::numerals(15, &style));
/// assert_eq!("תשסא", fmt::numerals(5761, &NumeralStyle::new()));
/// ```
pub fn numerals(num: u32, style: &NumeralStyle) -> String {
    let mut rt = String::new();
    let thousands = num / 1000;
    let rest = num % 1000;
    if thousands > 0 && style.keeps_thousands() {
        rt += &letters(thousands);
        if style.alafim_geresh {
            rt.push(GERESH);
        }
        if style.alafim {
            rt.push(' ');
            rt += ALAFIM;
            if rest > 0 {
                rt.push(' ');
            }
        }
    }
    let rest = letters(rest);
    if style.gereshayim {
        rt += &mark(rest);
    } else {
        rt += &rest;
    }
    rt
}

/// Returns the Hebrew name of `month`. Month 7 is plain Adar in common
/// years.
///
/// # Example
///
/// ```
/// use jdn_calendar::jewish::fmt;
///
/// assert_eq!(Ok("תשרי"), fmt::month(5761, 1));
/// assert_eq!(Ok("אדר"), fmt::month(5761, 7));
/// assert_eq!(Ok("אדר ב׳"), fmt::month(5760, 7));
/// ```
pub fn month(year: i32, month: u32) -> Result<&'static str, CalendarError> {
    if month == 7 && !Jewish.is_leap_year(year) {
        return Ok("אדר");
    }
    calendar::month_from_table(&Jewish, &MONTH_NAMES, month)
}

/// Formats a Jewish date as day, month and year in Hebrew script.
///
/// # Example
///
/// ```
/// use jdn_calendar::jewish::fmt::{self, NumeralStyle};
///
/// assert_eq!(
///     Ok("כ״ג טבת ה׳תש״ס".to_owned()),
///     fmt::date(5760, 4, 23, &NumeralStyle::default())
/// );
/// ```
pub fn date(year: i32, month: u32, day: u32, style: &NumeralStyle) -> Result<String, CalendarError> {
    // Validates the whole date, including years before the epoch
    Jewish.ymd_to_jd(year, month, day)?;
    let day_style = NumeralStyle::new().with_gereshayim(style.gereshayim);
    Ok(format!(
        "{} {} {}",
        numerals(day, &day_style),
        self::month(year, month)?,
        numerals(year as u32, style)
    ))
}
