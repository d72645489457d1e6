//! The (year, month) partition key for time-bucketed collections
//!
//! Growing collections are sharded under `collection/{year}/{month}/...`.
//! A `Period` can be entered two ways: as an explicit `"YYYY-MM"` string
//! (bills), split on the separator with no date parsing, or extracted from
//! an ISO date field (payments, expenses, other income). Both forms must
//! render identical zero-padded path segments so records sharing a period
//! land under the same leaf regardless of entry path.
//!
//! Unparsable input is always an error. Writing a record to a malformed
//! partition segment would make it unreachable by id search, so the facade
//! rejects the write instead.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when deriving a partition key
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    /// Input was not of the form "YYYY-MM"
    #[error("malformed period (expected YYYY-MM): {value}")]
    Malformed { value: String },

    /// Month component was outside 1..=12
    #[error("month out of range (expected 1-12): {month}")]
    MonthOutOfRange { month: u32 },

    /// Year component was not a four-digit calendar year
    #[error("year out of range (expected 1000-9999): {year}")]
    YearOutOfRange { year: i32 },

    /// Date field could not be parsed as an ISO date or RFC 3339 timestamp
    #[error("unparsable date: {value}")]
    UnparsableDate { value: String },
}

/// A calendar (year, month) pair used to shard growing collections by time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Build a period from raw components
    ///
    /// # Errors
    ///
    /// Returns `YearOutOfRange` for years outside 1000..=9999 (a path
    /// segment must always be a four-digit numeral) and `MonthOutOfRange`
    /// for months outside 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1000..=9999).contains(&year) {
            return Err(PeriodError::YearOutOfRange { year });
        }
        if !(1..=12).contains(&month) {
            return Err(PeriodError::MonthOutOfRange { month });
        }
        Ok(Self { year, month })
    }

    /// Parse an explicit `"YYYY-MM"` period string
    ///
    /// Splits on the separator directly; no date parsing is involved. The
    /// month may be entered without the leading zero ("2024-3"): segment
    /// rendering normalises it.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` when the shape is wrong, otherwise the range
    /// errors from [`Period::new`].
    pub fn parse(value: &str) -> Result<Self, PeriodError> {
        let malformed = || PeriodError::Malformed {
            value: value.to_string(),
        };
        let (year_part, month_part) = value.trim().split_once('-').ok_or_else(malformed)?;
        if year_part.len() != 4 || !year_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let year: i32 = year_part.parse().map_err(|_| malformed())?;
        let month: u32 = month_part.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }

    /// Derive a period from an ISO date field (`"2024-03-15"`) or a full
    /// RFC 3339 timestamp (`"2024-03-15T09:30:00+05:30"`)
    ///
    /// # Errors
    ///
    /// Returns `UnparsableDate` when neither form parses.
    pub fn from_date_str(value: &str) -> Result<Self, PeriodError> {
        let value = value.trim();
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Self::new(date.year(), date.month());
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
            return Self::new(ts.year(), ts.month());
        }
        Err(PeriodError::UnparsableDate {
            value: value.to_string(),
        })
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month, 1..=12
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The year path segment, always a four-digit numeral
    pub fn year_segment(&self) -> String {
        format!("{:04}", self.year)
    }

    /// The month path segment, always zero-padded to two digits
    pub fn month_segment(&self) -> String {
        format!("{:02}", self.month)
    }
}

impl std::fmt::Display for Period {
    /// Renders as the canonical "YYYY-MM" period string
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_period_string() {
        let period = Period::parse("2024-03").unwrap();
        assert_eq!(period.year(), 2024);
        assert_eq!(period.month(), 3);
        assert_eq!(period.year_segment(), "2024");
        assert_eq!(period.month_segment(), "03");
    }

    #[test]
    fn test_parse_unpadded_month_normalises() {
        let period = Period::parse("2024-3").unwrap();
        assert_eq!(period.month_segment(), "03");
        assert_eq!(period, Period::parse("2024-03").unwrap());
    }

    #[test]
    fn test_from_iso_date() {
        let period = Period::from_date_str("2024-03-15").unwrap();
        assert_eq!(period.year_segment(), "2024");
        assert_eq!(period.month_segment(), "03");
    }

    #[test]
    fn test_from_rfc3339_timestamp() {
        let period = Period::from_date_str("2024-11-05T09:30:00+05:30").unwrap();
        assert_eq!(period.year_segment(), "2024");
        assert_eq!(period.month_segment(), "11");
    }

    #[test]
    fn test_both_entry_forms_render_identical_segments() {
        let from_period = Period::parse("2024-03").unwrap();
        let from_date = Period::from_date_str("2024-03-15").unwrap();
        assert_eq!(from_period.year_segment(), from_date.year_segment());
        assert_eq!(from_period.month_segment(), from_date.month_segment());
    }

    #[test]
    fn test_malformed_period_rejected() {
        for value in ["202403", "NaN-NaN", "", "24-03", "2024-", "-03", "2024-03-15"] {
            let result = Period::parse(value);
            assert!(result.is_err(), "expected rejection for {value:?}");
        }
    }

    #[test]
    fn test_month_out_of_range_rejected() {
        assert_eq!(
            Period::parse("2024-13"),
            Err(PeriodError::MonthOutOfRange { month: 13 })
        );
        assert_eq!(
            Period::parse("2024-0"),
            Err(PeriodError::MonthOutOfRange { month: 0 })
        );
    }

    #[test]
    fn test_unparsable_date_rejected() {
        assert!(matches!(
            Period::from_date_str("not-a-date"),
            Err(PeriodError::UnparsableDate { .. })
        ));
        assert!(matches!(
            Period::from_date_str(""),
            Err(PeriodError::UnparsableDate { .. })
        ));
    }

    #[test]
    fn test_display_is_canonical_period_string() {
        let period = Period::new(2024, 3).unwrap();
        assert_eq!(period.to_string(), "2024-03");
    }

    proptest! {
        #[test]
        fn prop_display_parse_round_trip(year in 1000i32..=9999, month in 1u32..=12) {
            let period = Period::new(year, month).unwrap();
            let back = Period::parse(&period.to_string()).unwrap();
            prop_assert_eq!(period, back);
        }

        #[test]
        fn prop_date_entry_matches_period_entry(year in 1000i32..=9999, month in 1u32..=12, day in 1u32..=28) {
            let from_date = Period::from_date_str(&format!("{year:04}-{month:02}-{day:02}")).unwrap();
            let from_period = Period::parse(&format!("{year:04}-{month:02}")).unwrap();
            prop_assert_eq!(from_date, from_period);
        }
    }
}
