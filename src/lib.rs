mod bisect;
mod consts;
mod datetime;
mod format;
mod literal;
mod path;
mod prelude;
mod range;
mod types;
mod validate;

pub use bisect::{split_map, split_slice};
pub use consts::*;
pub use datetime::{CalendarDateTime, TimeOfDay, UtcOffset};
pub use format::{DATE_FORMAT, DATE_FORMAT_COMPACT, DATE_TIME_FORMAT, DateFormat, date_str};
pub use literal::{is_date, is_date_time};
pub use path::join as join_path;
pub use range::dates;
pub use types::{Day, Month, Year};
pub use validate::EnumMembership;

use crate::prelude::*;
use std::str::FromStr;
use types::{days_in_month, is_leap_year};

/// A calendar date in the proleptic Gregorian calendar.
///
/// Every value is fully validated at construction: month is 1..=12 and day
/// is valid for its (year, month) including leap years. Dates order by
/// (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

/// The single error kind for every rejected call: absent/empty input,
/// unparseable or malformed literals, and out-of-range components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("empty input")]
    Empty,
    #[error("unsupported date format: {0:?}")]
    UnsupportedFormat(String),
    #[error("invalid year: {0} (must be 1-9999)")]
    Year(u16),
    #[error("invalid month: {0} (must be 1-12)")]
    Month(u8),
    #[error("invalid day {day} for month {year:04}-{month:02}")]
    Day { year: u16, month: u8, day: u8 },
    #[error("invalid hour: {0} (must be 0-23)")]
    Hour(u8),
    #[error("invalid minute: {0} (must be 0-59)")]
    Minute(u8),
    #[error("invalid second: {0} (must be 0-59)")]
    Second(u8),
    #[error("invalid utc offset: {0}s (must be less than one day)")]
    Offset(i32),
    #[error("epoch day {0} is outside the supported date range")]
    EpochDays(i64),
    #[error("empty format pattern")]
    EmptyPattern,
    #[error("unsupported format pattern: {0:?}")]
    UnsupportedPattern(String),
}

impl CalendarDate {
    /// Creates a date from raw components, validating each of them.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the year, month, or day is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, InvalidInput> {
        let year_t = types::Year::new(year)?;
        let month_t = types::Month::new(month)?;
        let day_t = types::Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Creates a date from already-validated components.
    pub const fn from_parts(year: types::Year, month: types::Month, day: types::Day) -> Self {
        Self { year, month, day }
    }

    /// Returns the year component (1..=9999)
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component (1..=31)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the validated components as a tuple
    pub const fn parts(&self) -> (types::Year, types::Month, types::Day) {
        (self.year, self.month, self.day)
    }

    /// First day of this date's month.
    /// Example: 2025-03-14 -> 2025-03-01
    pub const fn month_begin(&self) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: types::Day::FIRST,
        }
    }

    /// Last day of this date's month, accounting for leap years.
    /// Example: 2025-03-14 -> 2025-03-31
    pub const fn month_end(&self) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: types::Day::last_of(self.year.get(), self.month.get()),
        }
    }

    /// The next calendar day, or `None` past 9999-12-31.
    pub fn succ(&self) -> Option<Self> {
        next_day(self.year.get(), self.month.get(), self.day.get())
            .and_then(|(y, m, d)| Self::new(y, m, d).ok())
    }

    /// Day of year, 1-based (1..=366).
    pub fn ordinal(&self) -> u16 {
        let base = DAYS_BEFORE_MONTH[self.month.get() as usize] + u16::from(self.day.get());
        if self.month.get() > FEBRUARY && is_leap_year(self.year.get()) {
            base + 1
        } else {
            base
        }
    }

    /// Days since 1970-01-01 (negative before the epoch).
    pub fn to_epoch_days(&self) -> i64 {
        days_from_civil(
            i64::from(self.year.get()),
            i64::from(self.month.get()),
            i64::from(self.day.get()),
        )
    }

    /// Date at the given number of days since 1970-01-01.
    ///
    /// # Errors
    /// Returns `InvalidInput::EpochDays` if the day count falls outside
    /// years 1..=9999.
    pub fn from_epoch_days(days: i64) -> Result<Self, InvalidInput> {
        let (y, m, d) = civil_from_days(days);
        let year = u16::try_from(y).map_err(|_| InvalidInput::EpochDays(days))?;
        Self::new(year, m, d).map_err(|_| InvalidInput::EpochDays(days))
    }

    /// Day of week, 1 = Monday .. 7 = Sunday.
    pub fn weekday_number(&self) -> u8 {
        weekday_from_epoch_days(self.to_epoch_days())
    }

    /// Week number under the convention where weeks start on Monday and
    /// week 1 is the week containing the year's first Thursday.
    ///
    /// Days before week 1 belong to the terminal week (52 or 53) of the
    /// previous year; days after the last week belong to week 1 of the
    /// next year.
    pub fn week_of_year(&self) -> u8 {
        let week = (i32::from(self.ordinal()) - i32::from(self.weekday_number()) + 10) / 7;
        if week < 1 {
            weeks_in_year(self.year.get() - 1)
        } else if week > i32::from(weeks_in_year(self.year.get())) {
            1
        } else {
            week as u8
        }
    }
}

// --- calendar arithmetic helpers ---

fn next_month(year: u16, month: u8) -> Option<(u16, u8)> {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    if month == DECEMBER {
        if year >= MAX_YEAR {
            None
        } else {
            Some((year + 1, JANUARY))
        }
    } else {
        Some((year, month + 1))
    }
}

fn next_day(year: u16, month: u8, day: u8) -> Option<(u16, u8, u8)> {
    let max = days_in_month(year, month);
    if day < max {
        Some((year, month, day + 1))
    } else {
        // roll to first of next month (respects MAX_YEAR limit)
        next_month(year, month).map(|(ny, nm)| (ny, nm, MIN_DAY))
    }
}

/// Days since 1970-01-01 for a civil (year, month, day).
pub(crate) fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= i64::from(FEBRUARY) {
        year - 1
    } else {
        year
    };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Civil (year, month, day) for days since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let y = if m <= FEBRUARY { y + 1 } else { y };
    (y, m, d)
}

fn weekday_from_epoch_days(days: i64) -> u8 {
    // 1970-01-01 was a Thursday (ISO number 4)
    ((days + 3).rem_euclid(7) + 1) as u8
}

fn weeks_in_year(year: u16) -> u8 {
    let jan1 = weekday_from_epoch_days(days_from_civil(i64::from(year), 1, 1));
    const THURSDAY: u8 = 4;
    const WEDNESDAY: u8 = 3;
    if jan1 == THURSDAY || (is_leap_year(year) && jan1 == WEDNESDAY) {
        53
    } else {
        52
    }
}

fn numeric_u16(part: &str, whole: &str) -> Result<u16, InvalidInput> {
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidInput::UnsupportedFormat(whole.to_owned()));
    }
    part.parse::<u16>()
        .map_err(|_| InvalidInput::UnsupportedFormat(whole.to_owned()))
}

pub(crate) fn numeric_u8(part: &str, whole: &str) -> Result<u8, InvalidInput> {
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidInput::UnsupportedFormat(whole.to_owned()));
    }
    part.parse::<u8>()
        .map_err(|_| InvalidInput::UnsupportedFormat(whole.to_owned()))
}

impl FromStr for CalendarDate {
    type Err = InvalidInput;

    /// Parses a date literal, dispatching on byte length alone.
    ///
    /// Exactly three shapes are accepted: `yyyy-MM-dd` (10 bytes),
    /// `yyyy-MM` (7 bytes, day = 1), and `yyyy` (4 bytes, month = day = 1).
    /// Every other length is rejected, including otherwise well-formed
    /// literals such as `yyyy-MM-dd HH:mm:ss`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidInput::Empty);
        }
        if !s.is_ascii() {
            return Err(InvalidInput::UnsupportedFormat(s.to_owned()));
        }

        const SEP: u8 = DATE_SEPARATOR as u8;
        let bytes = s.as_bytes();
        match s.len() {
            DATE_LITERAL_LEN => {
                if bytes[4] != SEP || bytes[7] != SEP {
                    return Err(InvalidInput::UnsupportedFormat(s.to_owned()));
                }
                let year = numeric_u16(&s[0..4], s)?;
                let month = numeric_u8(&s[5..7], s)?;
                let day = numeric_u8(&s[8..10], s)?;
                Self::new(year, month, day)
            }
            MONTH_LITERAL_LEN => {
                if bytes[4] != SEP {
                    return Err(InvalidInput::UnsupportedFormat(s.to_owned()));
                }
                let year = numeric_u16(&s[0..4], s)?;
                let month = numeric_u8(&s[5..7], s)?;
                Self::new(year, month, MIN_DAY)
            }
            YEAR_LITERAL_LEN => {
                let year = numeric_u16(s, s)?;
                Self::new(year, JANUARY, MIN_DAY)
            }
            _ => Err(InvalidInput::UnsupportedFormat(s.to_owned())),
        }
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
