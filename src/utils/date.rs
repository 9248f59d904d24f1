use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses the dates users type (`2024-01-05`) as well as the timestamps the
/// backend sends back (`2024-01-05T00:00:00`, with or without an offset).
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc).date_naive());
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|date| date.date())
        .map_err(|_| anyhow!("Invalid date `{value}`, expected YYYY-MM-DD"))
}

/// UTC midnight in the `2024-01-05T00:00:00.000Z` form the API expects.
pub fn to_timestamp(date: NaiveDate) -> String {
    date.and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc()
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

/// `January 5, 2024`
pub fn format_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Backend value reduced to `YYYY-MM-DD` for prefilling inputs, empty when
/// missing or unreadable.
pub fn input_value(value: Option<&str>) -> String {
    value
        .and_then(|value| parse_date(value).ok())
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-01-05").unwrap(), date(2024, 1, 5));
        assert_eq!(parse_date(" 2024-01-05 ").unwrap(), date(2024, 1, 5));
        assert_eq!(parse_date("2024-01-05T00:00:00").unwrap(), date(2024, 1, 5));
        assert_eq!(
            parse_date("2024-01-05T13:45:10.123456").unwrap(),
            date(2024, 1, 5)
        );
        assert_eq!(
            parse_date("2024-01-05T00:00:00.000Z").unwrap(),
            date(2024, 1, 5)
        );
        assert_eq!(
            parse_date("2024-01-05T23:30:00-02:00").unwrap(),
            date(2024, 1, 6)
        );
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("").is_err());
        assert!(parse_date("05/01/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn test_to_timestamp() {
        assert_eq!(to_timestamp(date(2024, 1, 5)), "2024-01-05T00:00:00.000Z");
    }

    #[test]
    fn test_format_long() {
        assert_eq!(format_long(date(2024, 1, 5)), "January 5, 2024");
        assert_eq!(format_long(date(2019, 11, 30)), "November 30, 2019");
    }

    #[test]
    fn test_input_value() {
        assert_eq!(input_value(Some("2023-06-01T00:00:00")), "2023-06-01");
        assert_eq!(input_value(Some("garbage")), "");
        assert_eq!(input_value(None), "");
    }
}
