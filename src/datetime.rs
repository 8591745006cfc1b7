use crate::consts::{
    DATE_LITERAL_LEN, DATE_TIME_LITERAL_LEN, DATE_TIME_SEPARATOR, MAX_HOUR, MAX_MINUTE, MAX_SECOND,
    SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MINUTE, TIME_SEPARATOR,
};
use crate::prelude::*;
use crate::{CalendarDate, InvalidInput, numeric_u8};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A wall-clock time of day with whole-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}:{:02}:{:02}", hour, minute, second)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// 00:00:00
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// 23:59:59, the last representable second of a day.
    /// Sub-second precision is out of scope.
    pub const LAST_SECOND: Self = Self {
        hour: MAX_HOUR,
        minute: MAX_MINUTE,
        second: MAX_SECOND,
    };

    /// Creates a time of day, validating each component independently.
    ///
    /// # Errors
    /// Returns `InvalidInput::Hour`/`Minute`/`Second` for the first
    /// component out of range.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Result<Self, InvalidInput> {
        if hour > MAX_HOUR {
            return Err(InvalidInput::Hour(hour));
        }
        if minute > MAX_MINUTE {
            return Err(InvalidInput::Minute(minute));
        }
        if second > MAX_SECOND {
            return Err(InvalidInput::Second(second));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Returns the hour (0..=23)
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59)
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59)
    pub const fn second(self) -> u8 {
        self.second
    }
}

/// A calendar date with a time of day, still a plain civil value:
/// it designates an instant only once paired with a [`UtcOffset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{} {}", date, time)]
pub struct CalendarDateTime {
    date: CalendarDate,
    time: TimeOfDay,
}

impl CalendarDateTime {
    /// Pairs a date with a time of day.
    pub const fn new(date: CalendarDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Creates a date-time from raw components, validating all of them.
    ///
    /// # Errors
    /// Returns `InvalidInput` for the first component out of range.
    pub fn from_parts(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, InvalidInput> {
        Ok(Self {
            date: CalendarDate::new(year, month, day)?,
            time: TimeOfDay::new(hour, minute, second)?,
        })
    }

    /// Returns the date part
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the time part
    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Seconds since 1970-01-01 00:00:00 UTC for this civil date-time
    /// observed at the given fixed offset.
    pub fn timestamp(&self, offset: UtcOffset) -> i64 {
        let time_secs = i64::from(self.time.hour()) * SECS_PER_HOUR
            + i64::from(self.time.minute()) * SECS_PER_MINUTE
            + i64::from(self.time.second());
        self.date.to_epoch_days() * SECS_PER_DAY + time_secs - i64::from(offset.seconds())
    }

    /// Absolute instant for this civil date-time observed at the given
    /// fixed offset.
    pub fn to_instant(&self, offset: UtcOffset) -> SystemTime {
        let secs = self.timestamp(offset);
        if secs >= 0 {
            UNIX_EPOCH + Duration::from_secs(secs.unsigned_abs())
        } else {
            UNIX_EPOCH - Duration::from_secs(secs.unsigned_abs())
        }
    }
}

impl CalendarDate {
    /// This date at 00:00:00.
    /// Example: 2025-03-14 -> 2025-03-14 00:00:00
    pub const fn start_of_day(self) -> CalendarDateTime {
        CalendarDateTime::new(self, TimeOfDay::MIDNIGHT)
    }

    /// This date at 23:59:59.
    /// Example: 2025-03-14 -> 2025-03-14 23:59:59
    pub const fn end_of_day(self) -> CalendarDateTime {
        CalendarDateTime::new(self, TimeOfDay::LAST_SECOND)
    }

    /// This date at the given time of day.
    pub const fn at(self, time: TimeOfDay) -> CalendarDateTime {
        CalendarDateTime::new(self, time)
    }
}

impl FromStr for CalendarDateTime {
    type Err = InvalidInput;

    /// Parses a strict `yyyy-MM-dd HH:mm:ss` literal (19 bytes, no other
    /// shape accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidInput::Empty);
        }
        if !s.is_ascii() || s.len() != DATE_TIME_LITERAL_LEN {
            return Err(InvalidInput::UnsupportedFormat(s.to_owned()));
        }

        let bytes = s.as_bytes();
        if bytes[DATE_LITERAL_LEN] != DATE_TIME_SEPARATOR as u8
            || bytes[13] != TIME_SEPARATOR as u8
            || bytes[16] != TIME_SEPARATOR as u8
        {
            return Err(InvalidInput::UnsupportedFormat(s.to_owned()));
        }

        let date = s[..DATE_LITERAL_LEN].parse::<CalendarDate>()?;
        let hour = numeric_u8(&s[11..13], s)?;
        let minute = numeric_u8(&s[14..16], s)?;
        let second = numeric_u8(&s[17..19], s)?;
        Ok(Self::new(date, TimeOfDay::new(hour, minute, second)?))
    }
}

impl serde::Serialize for CalendarDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A fixed offset from UTC, the only time-zone notion this crate carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    seconds: i32,
}

impl UtcOffset {
    /// The zero offset.
    pub const UTC: Self = Self { seconds: 0 };

    /// Creates an offset from a signed number of seconds east of UTC.
    ///
    /// # Errors
    /// Returns `InvalidInput::Offset` if the magnitude is a day or more.
    pub fn from_seconds(seconds: i32) -> Result<Self, InvalidInput> {
        if i64::from(seconds).abs() >= SECS_PER_DAY {
            return Err(InvalidInput::Offset(seconds));
        }
        Ok(Self { seconds })
    }

    /// Creates an offset from whole hours east of UTC.
    ///
    /// # Errors
    /// Returns `InvalidInput::Offset` if the magnitude is a day or more.
    pub fn from_hours(hours: i8) -> Result<Self, InvalidInput> {
        Self::from_seconds(i32::from(hours) * 3_600)
    }

    /// Returns the offset in seconds east of UTC
    pub const fn seconds(self) -> i32 {
        self.seconds
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let total = self.seconds.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", total / 3_600, (total % 3_600) / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_valid() {
        assert!(TimeOfDay::new(0, 0, 0).is_ok());
        assert!(TimeOfDay::new(23, 59, 59).is_ok());
        assert!(TimeOfDay::new(12, 34, 56).is_ok());
    }

    #[test]
    fn test_time_of_day_invalid_components() {
        assert!(matches!(TimeOfDay::new(24, 0, 0), Err(InvalidInput::Hour(24))));
        assert!(matches!(
            TimeOfDay::new(12, 60, 0),
            Err(InvalidInput::Minute(60))
        ));
        assert!(matches!(
            TimeOfDay::new(12, 0, 60),
            Err(InvalidInput::Second(60))
        ));
    }

    #[test]
    fn test_time_of_day_display() {
        let time = TimeOfDay::new(7, 5, 9).unwrap();
        assert_eq!(time.to_string(), "07:05:09");
    }

    #[test]
    fn test_start_of_day() {
        let date = CalendarDate::new(2025, 3, 14).unwrap();
        let start = date.start_of_day();
        assert_eq!(start.date(), date);
        assert_eq!(start.time().hour(), 0);
        assert_eq!(start.time().minute(), 0);
        assert_eq!(start.time().second(), 0);
    }

    #[test]
    fn test_end_of_day() {
        let date = CalendarDate::new(2025, 3, 14).unwrap();
        let end = date.end_of_day();
        assert_eq!(end.date(), date);
        assert_eq!(end.time().hour(), 23);
        assert_eq!(end.time().minute(), 59);
        assert_eq!(end.time().second(), 59);
    }

    #[test]
    fn test_start_before_end() {
        let date = CalendarDate::new(2025, 3, 14).unwrap();
        assert!(date.start_of_day() < date.end_of_day());
    }

    #[test]
    fn test_display() {
        let dt = CalendarDateTime::from_parts(2025, 3, 14, 12, 34, 56).unwrap();
        assert_eq!(dt.to_string(), "2025-03-14 12:34:56");
    }

    #[test]
    fn test_parse_round_trip() {
        let dt = "2025-03-14 12:34:56".parse::<CalendarDateTime>().unwrap();
        assert_eq!(dt, CalendarDateTime::from_parts(2025, 3, 14, 12, 34, 56).unwrap());
        assert_eq!(dt.to_string(), "2025-03-14 12:34:56");
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        // Wrong length
        assert!("2025-03-14 1:34:56".parse::<CalendarDateTime>().is_err());
        // Date-only literal
        assert!("2025-03-14".parse::<CalendarDateTime>().is_err());
        // ISO 'T' separator is not the accepted shape
        assert!("2025-03-14T12:34:56".parse::<CalendarDateTime>().is_err());
        // Empty input
        assert!(matches!(
            "".parse::<CalendarDateTime>(),
            Err(InvalidInput::Empty)
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range_time() {
        assert!(matches!(
            "2025-03-14 24:00:00".parse::<CalendarDateTime>(),
            Err(InvalidInput::Hour(24))
        ));
        assert!(matches!(
            "2025-03-14 12:60:00".parse::<CalendarDateTime>(),
            Err(InvalidInput::Minute(60))
        ));
        assert!(matches!(
            "2025-03-14 12:00:60".parse::<CalendarDateTime>(),
            Err(InvalidInput::Second(60))
        ));
    }

    #[test]
    fn test_timestamp_epoch() {
        let dt = CalendarDateTime::from_parts(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(dt.timestamp(UtcOffset::UTC), 0);
    }

    #[test]
    fn test_timestamp() {
        let dt = CalendarDateTime::from_parts(2025, 3, 14, 0, 0, 0).unwrap();
        assert_eq!(dt.timestamp(UtcOffset::UTC), 1_741_910_400);

        let dt = CalendarDateTime::from_parts(2025, 3, 14, 12, 34, 56).unwrap();
        assert_eq!(dt.timestamp(UtcOffset::UTC), 1_741_910_400 + 12 * 3_600 + 34 * 60 + 56);
    }

    #[test]
    fn test_timestamp_with_offset() {
        // 08:00 east of UTC: local midnight is 8 hours before UTC midnight
        let offset = UtcOffset::from_hours(8).unwrap();
        let dt = CalendarDateTime::from_parts(2025, 3, 14, 0, 0, 0).unwrap();
        assert_eq!(dt.timestamp(offset), 1_741_910_400 - 8 * 3_600);

        let offset = UtcOffset::from_hours(-5).unwrap();
        assert_eq!(dt.timestamp(offset), 1_741_910_400 + 5 * 3_600);
    }

    #[test]
    fn test_to_instant() {
        let dt = CalendarDateTime::from_parts(1970, 1, 1, 0, 0, 1).unwrap();
        assert_eq!(
            dt.to_instant(UtcOffset::UTC),
            UNIX_EPOCH + Duration::from_secs(1)
        );

        // Pre-epoch instants are representable
        let dt = CalendarDateTime::from_parts(1969, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(
            dt.to_instant(UtcOffset::UTC),
            UNIX_EPOCH - Duration::from_secs(1)
        );
    }

    #[test]
    fn test_offset_bounds() {
        assert!(UtcOffset::from_seconds(0).is_ok());
        assert!(UtcOffset::from_seconds(86_399).is_ok());
        assert!(UtcOffset::from_seconds(-86_399).is_ok());
        assert!(matches!(
            UtcOffset::from_seconds(86_400),
            Err(InvalidInput::Offset(86_400))
        ));
        assert!(UtcOffset::from_hours(24).is_err());
    }

    #[test]
    fn test_offset_display() {
        assert_eq!(UtcOffset::UTC.to_string(), "+00:00");
        assert_eq!(UtcOffset::from_hours(8).unwrap().to_string(), "+08:00");
        assert_eq!(
            UtcOffset::from_seconds(-5 * 3_600 - 30 * 60).unwrap().to_string(),
            "-05:30"
        );
    }

    #[test]
    fn test_serde() {
        let dt = CalendarDateTime::from_parts(2025, 3, 14, 12, 34, 56).unwrap();
        let json = serde_json::to_string(&dt).unwrap();
        assert_eq!(json, r#""2025-03-14 12:34:56""#);

        let parsed: CalendarDateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(dt, parsed);

        let result: Result<CalendarDateTime, _> =
            serde_json::from_str(r#""2025-02-30 00:00:00""#);
        assert!(result.is_err());
    }
}
