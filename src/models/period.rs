//! Projected period value objects
//!
//! Periods are computed fresh on every projection call and never persisted.
//! A month starts as a bare `MonthlyTotal`, gains a `TimeState` when
//! classified, and may be folded into a `QuarterBucket` for long horizons.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::month::YearMonth;

/// Where a period sits relative to "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeState {
    Past,
    Current,
    Predicted,
}

impl TimeState {
    /// Classify a month against the injected "now" month
    ///
    /// Strictly before now is `Past`, equal is `Current`, strictly after is
    /// `Predicted`. Pure comparison; no clock access.
    pub fn of(month: YearMonth, now: YearMonth) -> Self {
        match month.cmp(&now) {
            std::cmp::Ordering::Less => Self::Past,
            std::cmp::Ordering::Equal => Self::Current,
            std::cmp::Ordering::Greater => Self::Predicted,
        }
    }
}

impl fmt::Display for TimeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Past => write!(f, "past"),
            Self::Current => write!(f, "current"),
            Self::Predicted => write!(f, "predicted"),
        }
    }
}

/// One month of the projected series, before classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// The month
    pub month: YearMonth,

    /// Sum of all applicable entry amounts for the month
    pub total: Money,
}

impl MonthlyTotal {
    /// Period key, e.g. `"2025-03"`
    pub fn key(&self) -> String {
        self.month.to_string()
    }

    /// Representative date for chart axes (first day of the month)
    pub fn representative_date(&self) -> NaiveDate {
        self.month.first_day()
    }
}

/// A classified month: total plus its time-state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedMonth {
    /// The month
    pub month: YearMonth,

    /// Sum of all applicable entry amounts for the month
    pub total: Money,

    /// Position of the month relative to "now"
    pub time_state: TimeState,
}

impl ClassifiedMonth {
    /// Period key, e.g. `"2025-03"`
    pub fn key(&self) -> String {
        self.month.to_string()
    }

    /// Representative date for chart axes (first day of the month)
    pub fn representative_date(&self) -> NaiveDate {
        self.month.first_day()
    }
}

/// A quarter bucket folded from up to 3 consecutive classified months
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterBucket {
    /// Period key, e.g. `"2025-Q1"`
    pub key: String,

    /// First month of the bucket
    pub start_month: YearMonth,

    /// Sum of the constituent month totals
    pub total: Money,

    /// State derived from the constituent months' states
    pub time_state: TimeState,
}

impl QuarterBucket {
    /// Representative date for chart axes (first day of the first month)
    pub fn representative_date(&self) -> NaiveDate {
        self.start_month.first_day()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_classify_past_current_predicted() {
        let now = ym(2025, 6);
        assert_eq!(TimeState::of(ym(2025, 5), now), TimeState::Past);
        assert_eq!(TimeState::of(ym(2024, 12), now), TimeState::Past);
        assert_eq!(TimeState::of(ym(2025, 6), now), TimeState::Current);
        assert_eq!(TimeState::of(ym(2025, 7), now), TimeState::Predicted);
        assert_eq!(TimeState::of(ym(2026, 1), now), TimeState::Predicted);
    }

    #[test]
    fn test_month_key_and_date() {
        let p = MonthlyTotal {
            month: ym(2025, 3),
            total: Money::from_major(1200),
        };
        assert_eq!(p.key(), "2025-03");
        assert_eq!(
            p.representative_date(),
            chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_time_state_serde_lowercase() {
        assert_eq!(serde_json::to_string(&TimeState::Past).unwrap(), "\"past\"");
        assert_eq!(
            serde_json::to_string(&TimeState::Predicted).unwrap(),
            "\"predicted\""
        );
    }
}
