/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for implicit-day literals
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Last hour of the day
pub const MAX_HOUR: u8 = 23;
/// Last minute of an hour
pub const MAX_MINUTE: u8 = 59;
/// Last second of a minute
pub const MAX_SECOND: u8 = 59;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed before each month in a non-leap year (index 0 unused).
/// `ordinal = DAYS_BEFORE_MONTH[month] + day`, plus one after February
/// in leap years.
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the date and time parts of a date-time literal
pub const DATE_TIME_SEPARATOR: char = ' ';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Path segment separator
pub const PATH_SEPARATOR: char = '/';

/// Byte length of a full-precision date literal (`yyyy-MM-dd`)
pub const DATE_LITERAL_LEN: usize = 10;
/// Byte length of a month-precision date literal (`yyyy-MM`)
pub const MONTH_LITERAL_LEN: usize = 7;
/// Byte length of a year-precision date literal (`yyyy`)
pub const YEAR_LITERAL_LEN: usize = 4;
/// Byte length of a date-time literal (`yyyy-MM-dd HH:mm:ss`)
pub const DATE_TIME_LITERAL_LEN: usize = 19;

/// Default date pattern
pub const DATE_PATTERN: &str = "yyyy-MM-dd";
/// Compact date pattern
pub const DATE_PATTERN_COMPACT: &str = "yyyyMMdd";
/// Default date-time pattern
pub const DATE_TIME_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";

pub(crate) const SECS_PER_MINUTE: i64 = 60;
pub(crate) const SECS_PER_HOUR: i64 = 3_600;
pub(crate) const SECS_PER_DAY: i64 = 86_400;
