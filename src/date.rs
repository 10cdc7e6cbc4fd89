//! Calendar-day helpers.
//!
//! Due dates are whole days in the user's local timezone, persisted as
//! `YYYY-MM-DD`. Comparing the formatted strings and comparing the parsed
//! dates order identically.

use chrono::{Local, NaiveDate};

use crate::error::{Error, Result};

/// Persisted day format.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Today as a calendar day in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a day in the persisted `YYYY-MM-DD` form.
pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` day string.
pub fn parse_day(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DAY_FORMAT)
        .map_err(|_| Error::Validation(format!("invalid date \"{value}\" (expected YYYY-MM-DD)")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format_round_trip() {
        let day = parse_day("2025-03-09").expect("date");
        assert_eq!(format_day(day), "2025-03-09");
    }

    #[test]
    fn parse_trims_whitespace() {
        let day = parse_day(" 2025-03-09 ").expect("date");
        assert_eq!(format_day(day), "2025-03-09");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_day("tomorrow").is_err());
        assert!(parse_day("2025/03/09").is_err());
        assert!(parse_day("").is_err());
    }

    #[test]
    fn formatted_order_matches_date_order() {
        let earlier = parse_day("2025-03-09").expect("date");
        let later = parse_day("2025-11-02").expect("date");
        assert!(earlier < later);
        assert!(format_day(earlier) < format_day(later));
    }
}
