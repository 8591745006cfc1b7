//! Shallow, pattern-shape validation of date and date-time literals.
//!
//! These checks are deliberately syntactic: day is only constrained to
//! `01..=31`, so a literal like `"2025-02-30"` matches even though it is
//! not a real calendar date. Callers needing calendar validity parse with
//! [`CalendarDate`](crate::CalendarDate) instead.

use regex::Regex;
use std::sync::LazyLock;

// yyyy-MM-dd
static DATE_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").expect("date pattern compiles")
});

// yyyy-MM-dd HH:mm:ss
static DATE_TIME_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01]) ([01]\d|2[0-3]):[0-5]\d:[0-5]\d$")
        .expect("date-time pattern compiles")
});

/// Whether `text` has the shape of a `yyyy-MM-dd` literal.
///
/// Never fails; empty input is simply `false`.
pub fn is_date(text: &str) -> bool {
    DATE_LITERAL.is_match(text)
}

/// Whether `text` has the shape of a `yyyy-MM-dd HH:mm:ss` literal.
///
/// Never fails; empty input is simply `false`.
pub fn is_date_time(text: &str) -> bool {
    DATE_TIME_LITERAL.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_date_accepts_well_formed() {
        assert!(is_date("2025-03-14"));
        assert!(is_date("0001-01-01"));
        assert!(is_date("9999-12-31"));
    }

    #[test]
    fn test_is_date_is_shape_only() {
        // Not a real calendar date, but the shape matches
        assert!(is_date("2025-02-30"));
        assert!(is_date("2025-04-31"));
    }

    #[test]
    fn test_is_date_rejects_out_of_shape_components() {
        assert!(!is_date("2025-00-14"));
        assert!(!is_date("2025-13-14"));
        assert!(!is_date("2025-03-00"));
        assert!(!is_date("2025-03-32"));
    }

    #[test]
    fn test_is_date_rejects_other_shapes() {
        assert!(!is_date(""));
        assert!(!is_date("2025-03"));
        assert!(!is_date("2025"));
        assert!(!is_date("2025-3-14"));
        assert!(!is_date("2025/03/14"));
        assert!(!is_date("2025-03-14 "));
        assert!(!is_date("2025-03-14 12:34:56"));
    }

    #[test]
    fn test_is_date_time_accepts_well_formed() {
        assert!(is_date_time("2025-03-14 00:00:00"));
        assert!(is_date_time("2025-03-14 23:59:59"));
        assert!(is_date_time("2025-03-14 12:34:56"));
    }

    #[test]
    fn test_is_date_time_is_shape_only() {
        assert!(is_date_time("2025-02-30 12:00:00"));
    }

    #[test]
    fn test_is_date_time_rejects_out_of_shape_components() {
        assert!(!is_date_time("2025-03-14 24:00:00"));
        assert!(!is_date_time("2025-03-14 12:60:00"));
        assert!(!is_date_time("2025-03-14 12:00:60"));
    }

    #[test]
    fn test_is_date_time_rejects_other_shapes() {
        assert!(!is_date_time(""));
        assert!(!is_date_time("2025-03-14"));
        assert!(!is_date_time("2025-03-14T12:34:56"));
        assert!(!is_date_time("2025-03-14 12:34"));
    }
}
