//! Conversions between `NaiveDate` and the `<input type="date">` value format.

use chrono::NaiveDate;

/// Format a date as "YYYY-MM-DD".
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a "YYYY-MM-DD" date input value.
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        assert_eq!(format_date(&date), "2024-02-09");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2023-12-31").unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
        );
        assert!(parse_date("31/12/2023").is_err());
        assert!(parse_date("").is_err());
    }
}
