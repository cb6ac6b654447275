//! Calendar month value types
//!
//! All temporal reasoning in the engine happens at month granularity.
//! `YearMonth` is parsed from raw date strings with a direct string split
//! rather than a date parser, so a `"2025-03-31"` recorded in one timezone
//! can never shift into a neighboring month. Day-of-month is discarded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month (year + month), the engine's unit of time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    /// Calendar year
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
}

impl YearMonth {
    /// Create a new YearMonth, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Parse a `"YYYY-MM"` or `"YYYY-MM-DD..."` string by splitting on `-`
    ///
    /// Deliberately not a date parse: only the year and month components are
    /// read, and any trailing day/time component is ignored.
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let mut parts = s.trim().splitn(3, '-');

        let year: i32 = parts
            .next()
            .filter(|p| !p.is_empty())
            .and_then(|p| p.parse().ok())
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let month: u32 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
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

    /// Calendar quarter this month falls in, 1-4
    pub const fn quarter(&self) -> u32 {
        (self.month - 1) / 3 + 1
    }

    /// First day of the month, used as the representative date of a period
    pub fn first_day(&self) -> NaiveDate {
        // month is validated to 1-12 at construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// An inclusive range of calendar months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRange {
    /// First month in range (inclusive)
    pub start: YearMonth,
    /// Last month in range (inclusive)
    pub end: YearMonth,
}

impl MonthRange {
    /// Create a range; `start` must not come after `end`
    pub fn new(start: YearMonth, end: YearMonth) -> Result<Self, MonthParseError> {
        if start > end {
            return Err(MonthParseError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Number of months in the range (inclusive of both ends)
    ///
    /// An inverted range (only constructible through the public fields,
    /// `new` rejects it) has length zero rather than a wrapped negative.
    pub fn len(&self) -> usize {
        let months = (self.end.year - self.start.year) * 12
            + (self.end.month as i32 - self.start.month as i32)
            + 1;
        months.max(0) as usize
    }

    /// Check if the range covers no months
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a month falls within the range
    pub fn contains(&self, month: YearMonth) -> bool {
        month >= self.start && month <= self.end
    }

    /// Iterate the months of the range in order
    pub fn iter(&self) -> MonthIter {
        MonthIter {
            current: (self.start <= self.end).then_some(self.start),
            end: self.end,
        }
    }
}

impl fmt::Display for MonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Iterator over the months of a `MonthRange`
pub struct MonthIter {
    current: Option<YearMonth>,
    end: YearMonth,
}

impl Iterator for MonthIter {
    type Item = YearMonth;

    fn next(&mut self) -> Option<YearMonth> {
        let current = self.current?;
        self.current = if current < self.end {
            Some(current.next())
        } else {
            None
        };
        Some(current)
    }
}

/// Error type for month and range construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    InvertedRange { start: YearMonth, end: YearMonth },
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
            MonthParseError::InvertedRange { start, end } => {
                write!(f, "Range start {} is after end {}", start, end)
            }
        }
    }
}

impl std::error::Error for MonthParseError {}
