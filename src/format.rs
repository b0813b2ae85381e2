use std::fmt::Display;

use chrono::{DateTime, TimeZone};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M %Z";

/// Keeps `,` and `;` from splitting a delimited column by quoting the
/// rendered value when it contains either.
pub fn csv_scrub<T: Display + ?Sized>(value: &T) -> String {
    let s = value.to_string();
    if s.contains(',') || s.contains(';') {
        format!("\"{s}\"")
    } else {
        s
    }
}

/// Dollars and cents: two decimal places.
pub fn to_currency_string(amount: f64) -> String {
    format!("{amount:.2}")
}

/// `2024-03-09 14:05 UTC` style timestamp.
pub fn to_timestamp<Tz>(ts: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn to_timestamp_opt<Tz>(ts: Option<&DateTime<Tz>>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.map(to_timestamp).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn scrub_quotes_only_when_needed() {
        assert_eq!(csv_scrub("plain"), "plain");
        assert_eq!(csv_scrub("a,b"), "\"a,b\"");
        assert_eq!(csv_scrub("a;b"), "\"a;b\"");
        assert_eq!(csv_scrub(&42), "42");
        assert_eq!(csv_scrub(&1.5), "1.5");
    }

    #[test]
    fn currency() {
        assert_eq!(to_currency_string(3.14159), "3.14");
        assert_eq!(to_currency_string(2.0), "2.00");
    }

    #[test]
    fn timestamps() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        assert_eq!(to_timestamp(&ts), "2024-03-09 14:05 UTC");
        assert_eq!(to_timestamp_opt(Some(&ts)), "2024-03-09 14:05 UTC");
        assert_eq!(to_timestamp_opt::<Utc>(None), "");
    }
}
