//! Calendar months and the month axis
//!
//! The month axis is the shared column header of the budget table. It holds
//! display labels such as "January 2024" in insertion order and only ever
//! grows.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month, returning `None` for a month number outside 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Parse a date-input value of the form "YYYY-MM"
    ///
    /// The value is completed to the first day of the month ("YYYY-MM-01")
    /// and parsed as a calendar date.
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let date = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        Ok(Self::from(date))
    }

    /// Parse a column label such as "March 2024"
    pub fn parse_label(label: &str) -> Result<Self, MonthParseError> {
        let label = label.trim();
        let date = NaiveDate::parse_from_str(&format!("1 {}", label), "%d %B %Y")
            .map_err(|_| MonthParseError::InvalidLabel(label.to_string()))?;
        Ok(Self::from(date))
    }

    /// First day of this month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// The column label, "<Month name> <Year>"
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// The following calendar month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Number of months from `start` to `end` inclusive; zero when start > end
    pub fn span(start: Month, end: Month) -> u64 {
        let months = (i64::from(end.year) - i64::from(start.year)) * 12 + i64::from(end.month)
            - i64::from(start.month)
            + 1;
        u64::try_from(months).unwrap_or(0)
    }

    /// Every month from `start` to `end` inclusive; empty when start > end
    pub fn range_inclusive(start: Month, end: Month) -> impl Iterator<Item = Month> {
        std::iter::successors(Some(start), |m| Some(m.next())).take_while(move |m| *m <= end)
    }
}

impl From<NaiveDate> for Month {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidLabel(String),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid month (expected YYYY-MM): {}", s),
            Self::InvalidLabel(s) => write!(f, "Invalid month label: {}", s),
        }
    }
}

impl std::error::Error for MonthParseError {}

/// Ordered, duplicate-free sequence of month column labels
///
/// Serialised as a plain list. A hash index over the labels keeps membership
/// checks constant-time while appending long ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct MonthAxis {
    labels: Vec<String>,
    index: HashSet<String>,
}

impl From<Vec<String>> for MonthAxis {
    // Repeats are kept so `has_duplicates` can report them on load.
    fn from(labels: Vec<String>) -> Self {
        let index = labels.iter().cloned().collect();
        Self { labels, index }
    }
}

impl From<MonthAxis> for Vec<String> {
    fn from(axis: MonthAxis) -> Self {
        axis.labels
    }
}

impl MonthAxis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an axis from labels, dropping repeats
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut axis = Self::new();
        for label in labels {
            axis.push_if_absent(label.into());
        }
        axis
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains(label)
    }

    /// Append a label unless it is already present. Returns whether it was added.
    pub fn push_if_absent(&mut self, label: String) -> bool {
        if !self.index.insert(label.clone()) {
            return false;
        }
        self.labels.push(label);
        true
    }

    /// Resolve a month column from user input
    ///
    /// Accepts a zero-based index, a label (case-insensitive) or "YYYY-MM".
    pub fn resolve(&self, identifier: &str) -> Option<usize> {
        let identifier = identifier.trim();

        if let Ok(index) = identifier.parse::<usize>() {
            return (index < self.len()).then_some(index);
        }

        if let Some(index) = self
            .labels
            .iter()
            .position(|l| l.eq_ignore_ascii_case(identifier))
        {
            return Some(index);
        }

        let label = Month::parse(identifier).ok()?.label();
        self.labels.iter().position(|l| *l == label)
    }

    /// Check that no label appears twice (used on data loaded from disk)
    pub fn has_duplicates(&self) -> bool {
        self.index.len() != self.labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_month() {
        let m = Month::parse("2024-03").unwrap();
        assert_eq!(m.year(), 2024);
        assert_eq!(m.month(), 3);
        assert_eq!(m.to_string(), "2024-03");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Month::parse("").is_err());
        assert!(Month::parse("2024-13").is_err());
        assert!(Month::parse("March").is_err());
        assert!(Month::parse("2024-03-15").is_err());
    }

    #[test]
    fn test_label() {
        assert_eq!(Month::new(2024, 1).unwrap().label(), "January 2024");
        assert_eq!(Month::new(2025, 12).unwrap().label(), "December 2025");
        assert!(Month::new(2024, 0).is_none());
    }

    #[test]
    fn test_parse_label() {
        let m = Month::parse_label("February 2024").unwrap();
        assert_eq!(m, Month::new(2024, 2).unwrap());
        assert!(Month::parse_label("Smarch 2024").is_err());
    }

    #[test]
    fn test_range_crosses_year_boundary() {
        let start = Month::new(2024, 11).unwrap();
        let end = Month::new(2025, 2).unwrap();
        let labels: Vec<String> = Month::range_inclusive(start, end).map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec!["November 2024", "December 2024", "January 2025", "February 2025"]
        );
    }

    #[test]
    fn test_range_empty_when_reversed() {
        let start = Month::new(2024, 5).unwrap();
        let end = Month::new(2024, 4).unwrap();
        assert_eq!(Month::range_inclusive(start, end).count(), 0);
        assert_eq!(Month::range_inclusive(start, start).count(), 1);
    }

    #[test]
    fn test_span() {
        let jan = Month::new(2024, 1).unwrap();
        assert_eq!(Month::span(jan, jan), 1);
        assert_eq!(Month::span(jan, Month::new(2025, 3).unwrap()), 15);
        assert_eq!(Month::span(Month::new(2024, 2).unwrap(), jan), 0);
        assert_eq!(
            Month::span(Month::new(1, 1).unwrap(), Month::new(9999, 12).unwrap()),
            119_988
        );
    }

    #[test]
    fn test_axis_dedups() {
        let mut axis = MonthAxis::from_labels(["January 2024", "January 2024", "February 2024"]);
        assert_eq!(axis.len(), 2);
        assert!(!axis.push_if_absent("February 2024".into()));
        assert!(axis.push_if_absent("March 2024".into()));
        assert_eq!(axis.get(2), Some("March 2024"));
    }

    #[test]
    fn test_axis_resolve() {
        let axis = MonthAxis::from_labels(["January 2024", "February 2024"]);
        assert_eq!(axis.resolve("1"), Some(1));
        assert_eq!(axis.resolve("2"), None);
        assert_eq!(axis.resolve("january 2024"), Some(0));
        assert_eq!(axis.resolve("2024-02"), Some(1));
        assert_eq!(axis.resolve("2024-03"), None);
    }

    #[test]
    fn test_axis_serializes_as_list() {
        let axis = MonthAxis::from_labels(["January 2024"]);
        assert_eq!(serde_json::to_string(&axis).unwrap(), r#"["January 2024"]"#);
        let duplicated: MonthAxis =
            serde_json::from_str(r#"["January 2024","January 2024"]"#).unwrap();
        assert!(duplicated.has_duplicates());

        let loaded: MonthAxis = serde_json::from_str(r#"["May 2024","June 2024"]"#).unwrap();
        assert!(!loaded.has_duplicates());
        assert!(loaded.contains("June 2024"));
        assert_eq!(loaded, MonthAxis::from_labels(["May 2024", "June 2024"]));
    }
}
