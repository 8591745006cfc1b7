use crate::consts::{DATE_PATTERN, DATE_PATTERN_COMPACT, DATE_TIME_PATTERN};
use crate::datetime::{CalendarDateTime, TimeOfDay};
use crate::{CalendarDate, InvalidInput};
use std::sync::LazyLock;

/// Default `yyyy-MM-dd` descriptor, compiled once at first use.
pub static DATE_FORMAT: LazyLock<DateFormat> =
    LazyLock::new(|| DateFormat::new(DATE_PATTERN).expect("built-in pattern compiles"));

/// Compact `yyyyMMdd` descriptor, compiled once at first use.
pub static DATE_FORMAT_COMPACT: LazyLock<DateFormat> =
    LazyLock::new(|| DateFormat::new(DATE_PATTERN_COMPACT).expect("built-in pattern compiles"));

/// `yyyy-MM-dd HH:mm:ss` descriptor, compiled once at first use.
pub static DATE_TIME_FORMAT: LazyLock<DateFormat> =
    LazyLock::new(|| DateFormat::new(DATE_TIME_PATTERN).expect("built-in pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// `yyyy`, zero-padded to 4 digits
    Year,
    /// `MM`, zero-padded to 2 digits
    Month,
    /// `dd`, zero-padded to 2 digits
    Day,
    /// `HH`, zero-padded to 2 digits
    Hour,
    /// `mm`, zero-padded to 2 digits
    Minute,
    /// `ss`, zero-padded to 2 digits
    Second,
    /// Any non-alphabetic character, copied through
    Literal(char),
}

/// A format descriptor compiled once from a pattern string and reusable
/// for any number of render calls.
///
/// Recognized fields are `yyyy`, `MM`, `dd`, `HH`, `mm`, and `ss`;
/// non-alphabetic characters pass through verbatim. Time fields render
/// as midnight when formatting a bare date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    tokens: Vec<Token>,
}

impl DateFormat {
    /// Compiles a pattern string.
    ///
    /// # Errors
    /// Returns `InvalidInput::EmptyPattern` for an empty pattern and
    /// `InvalidInput::UnsupportedPattern` for an unrecognized field run.
    pub fn new(pattern: &str) -> Result<Self, InvalidInput> {
        if pattern.is_empty() {
            return Err(InvalidInput::EmptyPattern);
        }

        let chars: Vec<char> = pattern.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            if c.is_ascii_alphabetic() {
                let mut run = 1;
                while i + run < chars.len() && chars[i + run] == c {
                    run += 1;
                }
                let token = match (c, run) {
                    ('y', 4) => Token::Year,
                    ('M', 2) => Token::Month,
                    ('d', 2) => Token::Day,
                    ('H', 2) => Token::Hour,
                    ('m', 2) => Token::Minute,
                    ('s', 2) => Token::Second,
                    _ => return Err(InvalidInput::UnsupportedPattern(pattern.to_owned())),
                };
                tokens.push(token);
                i += run;
            } else {
                tokens.push(Token::Literal(c));
                i += 1;
            }
        }
        Ok(Self { tokens })
    }

    fn render(&self, date: CalendarDate, time: TimeOfDay) -> String {
        let mut out = String::with_capacity(self.tokens.len() * 2);
        for token in &self.tokens {
            match *token {
                Token::Year => out.push_str(&format!("{:04}", date.year())),
                Token::Month => out.push_str(&format!("{:02}", date.month())),
                Token::Day => out.push_str(&format!("{:02}", date.day())),
                Token::Hour => out.push_str(&format!("{:02}", time.hour())),
                Token::Minute => out.push_str(&format!("{:02}", time.minute())),
                Token::Second => out.push_str(&format!("{:02}", time.second())),
                Token::Literal(c) => out.push(c),
            }
        }
        out
    }
}

impl CalendarDate {
    /// Renders this date through a precompiled descriptor.
    pub fn format(&self, format: &DateFormat) -> String {
        format.render(*self, TimeOfDay::MIDNIGHT)
    }

    /// Renders this date through a one-off pattern string.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the pattern is empty or unrecognized.
    pub fn format_pattern(&self, pattern: &str) -> Result<String, InvalidInput> {
        Ok(self.format(&DateFormat::new(pattern)?))
    }
}

impl CalendarDateTime {
    /// Renders this date-time through a precompiled descriptor.
    pub fn format(&self, format: &DateFormat) -> String {
        format.render(self.date(), self.time())
    }

    /// Renders this date-time through a one-off pattern string.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the pattern is empty or unrecognized.
    pub fn format_pattern(&self, pattern: &str) -> Result<String, InvalidInput> {
        Ok(self.format(&DateFormat::new(pattern)?))
    }
}

/// Renders a date with the default pattern, or the compact `yyyyMMdd`
/// pattern when `compact` is set.
pub fn date_str(date: CalendarDate, compact: bool) -> String {
    if compact {
        date.format(&DATE_FORMAT_COMPACT)
    } else {
        date.format(&DATE_FORMAT)
    }
}
