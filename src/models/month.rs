//! Calendar month token
//!
//! A year-month pair used to bucket transactions for summaries, budgets, and
//! comparisons. Serialized and parsed as "YYYY-MM".

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar year-month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Month {
    /// Calendar year
    pub year: i32,
    /// Month number (1-12)
    pub month: u32,
}

impl Month {
    /// Create a month from a year and month number (1-12)
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Get the month containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Get the first day of this month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap())
    }

    /// Get the last day of this month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        let next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next_month.unwrap() - Duration::days(1)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Get the next month
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

    /// Get the previous month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Short display label, e.g. "Mar 2024"
    pub fn label(&self) -> String {
        self.start_date().format("%b %Y").to_string()
    }

    /// Parse a month from a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();

        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = parts[0]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }

        Ok(Self { year, month })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Ord for Month {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for Month {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range() {
        let jan = Month::new(2024, 1);
        assert_eq!(jan.start_date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(jan.end_date(), NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());

        // Leap year February
        let feb = Month::new(2024, 2);
        assert_eq!(feb.end_date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_navigation() {
        let jan = Month::new(2024, 1);
        assert_eq!(jan.next(), Month::new(2024, 2));
        assert_eq!(jan.prev(), Month::new(2023, 12));

        let dec = Month::new(2024, 12);
        assert_eq!(dec.next(), Month::new(2025, 1));
    }

    #[test]
    fn test_contains() {
        let mar = Month::new(2024, 3);
        assert!(mar.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(mar.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
        assert!(!mar.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
        assert!(!mar.contains(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()));
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(Month::from_date(date), Month::new(2024, 3));
    }

    #[test]
    fn test_label() {
        assert_eq!(Month::new(2024, 1).label(), "Jan 2024");
        assert_eq!(Month::new(2024, 12).label(), "Dec 2024");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Month::parse("2024-03").unwrap(), Month::new(2024, 3));
        assert_eq!(Month::parse("2024-12").unwrap(), Month::new(2024, 12));
        assert!(Month::parse("2024-13").is_err());
        assert!(Month::parse("2024").is_err());
        assert!(Month::parse("2024-03-15").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Month::new(2024, 3)), "2024-03");
    }

    #[test]
    fn test_ordering() {
        assert!(Month::new(2024, 3) < Month::new(2024, 4));
        assert!(Month::new(2023, 12) < Month::new(2024, 1));
    }

    #[test]
    fn test_serialization() {
        let month = Month::new(2024, 3);
        let json = serde_json::to_string(&month).unwrap();
        let deserialized: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, deserialized);
    }
}
