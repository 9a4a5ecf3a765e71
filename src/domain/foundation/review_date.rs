//! Calendar-date value object for document review scheduling.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A calendar date with no time component, used for `fechaRevision`.
///
/// Review dates are compared as whole days. Parsing them as timestamps
/// would shift documents across day boundaries depending on the zone of
/// the machine doing the comparison, so the type never carries a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewDate(NaiveDate);

impl ReviewDate {
    /// Creates a review date from a `NaiveDate`.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses an ISO calendar date (`YYYY-MM-DD`).
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("fechaRevision", e.to_string()))
    }

    /// Today's date, normalized to the local calendar day.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Returns the inner `NaiveDate`.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns a new date the given number of days later.
    ///
    /// Negative values move backwards.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Returns the year of this date.
    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl fmt::Display for ReviewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> ReviewDate {
        ReviewDate::parse(s).unwrap()
    }

    #[test]
    fn parses_iso_calendar_date() {
        let d = date("2026-03-15");
        assert_eq!(d.year(), 2026);
        assert_eq!(format!("{}", d), "2026-03-15");
    }

    #[test]
    fn rejects_timestamps_and_garbage() {
        assert!(ReviewDate::parse("2026-03-15T10:00:00Z").is_err());
        assert!(ReviewDate::parse("15/03/2026").is_err());
        assert!(ReviewDate::parse("not-a-date").is_err());
    }

    #[test]
    fn plus_days_crosses_month_boundary() {
        assert_eq!(date("2026-01-30").plus_days(5), date("2026-02-04"));
    }

    #[test]
    fn plus_days_negative_moves_backwards() {
        assert_eq!(date("2026-03-01").plus_days(-1), date("2026-02-28"));
    }

    #[test]
    fn ordering_is_calendar_order() {
        assert!(date("2026-03-14") < date("2026-03-15"));
        assert!(date("2026-03-15") <= date("2026-03-15"));
    }

    #[test]
    fn serializes_as_plain_date_string() {
        let json = serde_json::to_string(&date("2026-03-15")).unwrap();
        assert_eq!(json, "\"2026-03-15\"");
    }

    #[test]
    fn deserializes_from_plain_date_string() {
        let d: ReviewDate = serde_json::from_str("\"2026-03-15\"").unwrap();
        assert_eq!(d, date("2026-03-15"));
    }
}
