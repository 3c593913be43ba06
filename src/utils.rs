use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::calendar::last_day_of_month;

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Reads a calendar date out of `YYYY-MM-DD`, an RFC 3339 timestamp, or a
/// bare `YYYY-MM-DDTHH:MM:SS[.fff]`. Timestamps keep the date as written.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Ok(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(timestamp.date());
    }

    Err(anyhow!("Unrecognised date: {:?}", input))
}

pub fn format_date_str(input: &str) -> Result<String> {
    parse_date(input).map(format_date)
}

/// "February 2024" style heading for the picker.
pub fn month_title(month: u32, year: i32) -> Option<String> {
    let title = NaiveDate::from_ymd_opt(year, month, 1)?
        .format("%B %Y")
        .to_string();

    let mut chars = title.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

pub fn dates_in_month(month: u32, year: i32) -> Vec<NaiveDate> {
    last_day_of_month(month, year)
        .map(|last| {
            (1..=last)
                .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date(date), "2024-03-07");
    }

    #[test]
    fn format_date_str_accepts_common_shapes() {
        assert_eq!(format_date_str("2024-03-07").unwrap(), "2024-03-07");
        assert_eq!(format_date_str("2024-03-07T18:45:00").unwrap(), "2024-03-07");
        assert_eq!(
            format_date_str("2024-03-07T23:30:00-05:00").unwrap(),
            "2024-03-07"
        );
        assert_eq!(format_date_str(" 2024-12-31 ").unwrap(), "2024-12-31");
    }

    #[test]
    fn format_date_str_accepts_fractional_seconds() {
        assert_eq!(format_date_str("2024-03-07T18:45:00.000").unwrap(), "2024-03-07");
        assert_eq!(format_date_str("2024-03-07T18:45:00.123456").unwrap(), "2024-03-07");
        assert_eq!(format_date_str("2024-03-07T18:45:00.000Z").unwrap(), "2024-03-07");
    }

    #[test]
    fn format_date_str_rejects_garbage() {
        assert!(format_date_str("yesterday").is_err());
        assert!(format_date_str("2024-02-30").is_err());
    }

    #[test]
    fn month_title_spells_out_month() {
        assert_eq!(month_title(2, 2024).as_deref(), Some("February 2024"));
        assert_eq!(month_title(12, 1999).as_deref(), Some("December 1999"));
        assert_eq!(month_title(13, 1999), None);
    }

    #[test]
    fn dates_in_month_stops_at_last_day() {
        let dates = dates_in_month(2, 2023);
        assert_eq!(dates.len(), 28);
        assert_eq!(dates.last().map(|d| format_date(*d)).as_deref(), Some("2023-02-28"));
        assert!(dates_in_month(0, 2023).is_empty());
        assert_eq!(dates_in_month(2, 2024).len(), 29);
        assert_eq!(dates_in_month(12, 2023).len(), 31);
    }
}
