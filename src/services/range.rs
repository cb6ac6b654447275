//! Date-range resolver
//!
//! Maps a named horizon plus an injected "now" month onto concrete month
//! bounds. "Now" is always a parameter: nothing in the engine reads the
//! system clock, so every call site is deterministic and testable.

use serde::{Deserialize, Serialize};

use crate::models::{MonthRange, YearMonth};

/// A named time window requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Horizon {
    /// Jan-Dec of the current year
    CurrentYear,
    /// Jan-Dec of the prior year
    LastYear,
    /// Jan of last year through Dec of the current year
    TwoYears,
    /// Jan four years back through Dec of the current year
    FiveYears,
}

impl Horizon {
    /// Whether quarter granularity is the natural display for this horizon
    pub const fn prefers_quarters(&self) -> bool {
        matches!(self, Self::FiveYears)
    }
}

/// Resolve a horizon into concrete month bounds
///
/// With `include_future_months` set, ranges ending in the current year run
/// through December; otherwise they are capped at the current month (expense
/// views cap, income projections do not; the flag makes the choice explicit
/// instead of branching on entry type). `LastYear` lies entirely in the past,
/// so the flag has no effect on it.
pub fn resolve_range(horizon: Horizon, now: YearMonth, include_future_months: bool) -> MonthRange {
    let jan = |year: i32| YearMonth { year, month: 1 };
    let dec = |year: i32| YearMonth { year, month: 12 };

    let (start, end) = match horizon {
        Horizon::CurrentYear => (jan(now.year), current_year_end(now, include_future_months)),
        Horizon::LastYear => (jan(now.year - 1), dec(now.year - 1)),
        Horizon::TwoYears => (
            jan(now.year - 1),
            current_year_end(now, include_future_months),
        ),
        Horizon::FiveYears => (
            jan(now.year - 4),
            current_year_end(now, include_future_months),
        ),
    };

    // start is January of a year at or before end's year, so the range can
    // never invert
    MonthRange { start, end }
}

fn current_year_end(now: YearMonth, include_future_months: bool) -> YearMonth {
    if include_future_months {
        YearMonth {
            year: now.year,
            month: 12,
        }
    } else {
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_current_year_full() {
        let range = resolve_range(Horizon::CurrentYear, ym(2025, 6), true);
        assert_eq!(range.start, ym(2025, 1));
        assert_eq!(range.end, ym(2025, 12));
        assert_eq!(range.len(), 12);
    }

    #[test]
    fn test_current_year_capped_at_now() {
        let range = resolve_range(Horizon::CurrentYear, ym(2025, 6), false);
        assert_eq!(range.end, ym(2025, 6));
        assert_eq!(range.len(), 6);
    }

    #[test]
    fn test_last_year_ignores_flag() {
        for flag in [true, false] {
            let range = resolve_range(Horizon::LastYear, ym(2025, 6), flag);
            assert_eq!(range.start, ym(2024, 1));
            assert_eq!(range.end, ym(2024, 12));
        }
    }

    #[test]
    fn test_two_years() {
        let range = resolve_range(Horizon::TwoYears, ym(2025, 6), true);
        assert_eq!(range.start, ym(2024, 1));
        assert_eq!(range.end, ym(2025, 12));
        assert_eq!(range.len(), 24);

        let capped = resolve_range(Horizon::TwoYears, ym(2025, 6), false);
        assert_eq!(capped.end, ym(2025, 6));
    }

    #[test]
    fn test_five_years() {
        let range = resolve_range(Horizon::FiveYears, ym(2025, 6), true);
        assert_eq!(range.start, ym(2021, 1));
        assert_eq!(range.end, ym(2025, 12));
        assert_eq!(range.len(), 60);
    }

    #[test]
    fn test_january_now_capped_range_is_single_month() {
        let range = resolve_range(Horizon::CurrentYear, ym(2025, 1), false);
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn test_prefers_quarters() {
        assert!(Horizon::FiveYears.prefers_quarters());
        assert!(!Horizon::CurrentYear.prefers_quarters());
    }
}
