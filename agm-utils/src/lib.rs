//! Shared utility functions for AGM crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate, TimeDelta};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Get the Sunday on or before the given date.
    ///
    /// Weekly buckets are keyed by this date: a record dated on a Sunday
    /// maps to itself, every other weekday maps back to the preceding
    /// Sunday. Locale-independent (date minus its days-from-Sunday offset).
    pub fn week_start(date: &NaiveDate) -> NaiveDate {
        let offset = date.weekday().num_days_from_sunday() as i64;
        *date - TimeDelta::try_days(offset).unwrap()
    }

    /// Get the first day of the month containing the given date.
    pub fn first_of_month(date: &NaiveDate) -> NaiveDate {
        NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
    }

    /// Format a "YYYY-MM" month key for the given date.
    pub fn month_key(date: &NaiveDate) -> String {
        date.format("%Y-%m").to_string()
    }

}
