//! Transaction date parsing and display.

use chrono::{Datelike, NaiveDate};

use crate::DATE_INPUT_FORMAT;

/// Parse the value of a date input. Blank or malformed input means no date.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    match NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            log::debug!("Ignoring date input {:?}: {}", value, e);
            None
        }
    }
}

/// Value to put back into a date input.
pub fn to_input_value(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

/// Long display form, e.g. "January 15th, 2024".
pub fn format_long_date(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        day,
        ordinal_suffix(day),
        date.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_input() {
        assert_eq!(
            parse_date_input("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("  "), None);
        assert_eq!(parse_date_input("15/01/2024"), None);
        assert_eq!(parse_date_input("2024-02-30"), None);
    }

    #[test]
    fn test_format_long_date() {
        let cases = [
            ((2024, 1, 15), "January 15th, 2024"),
            ((2024, 3, 1), "March 1st, 2024"),
            ((2024, 3, 2), "March 2nd, 2024"),
            ((2024, 3, 3), "March 3rd, 2024"),
            ((2024, 3, 11), "March 11th, 2024"),
            ((2024, 3, 12), "March 12th, 2024"),
            ((2024, 3, 13), "March 13th, 2024"),
            ((2024, 3, 21), "March 21st, 2024"),
            ((2024, 3, 22), "March 22nd, 2024"),
            ((2024, 3, 31), "March 31st, 2024"),
        ];

        for ((y, m, d), expected) in cases {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            assert_eq!(format_long_date(date), expected);
        }
    }

    #[test]
    fn test_input_value_round_trips() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 5).unwrap();
        assert_eq!(to_input_value(date), "2023-12-05");
        assert_eq!(parse_date_input(&to_input_value(date)), Some(date));
    }
}
