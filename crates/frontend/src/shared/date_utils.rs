//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::{DateTime, NaiveDate};

/// Format ISO datetime string to "Mar 15, 2024" form
/// Example: "2024-03-15T14:02:26.123Z" -> "Mar 15, 2024"
pub fn format_date(date_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return dt.format("%b %-d, %Y").to_string();
    }
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    date_str.to_string()
}

/// Format ISO datetime string to "Mar 15, 2024 14:02:26" form
/// Example: "2024-03-15T14:02:26.123Z" -> "Mar 15, 2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.format("%b %-d, %Y %H:%M:%S").to_string();
    }
    datetime_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "Mar 15, 2024");
        assert_eq!(format_date("2024-03-05"), "Mar 5, 2024");
        assert_eq!(format_date("2024-12-31T23:59:59Z"), "Dec 31, 2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "Mar 15, 2024 14:02:26"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
