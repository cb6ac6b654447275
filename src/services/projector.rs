//! Temporal projector
//!
//! The core of the engine: projects a snapshot of financial entries onto a
//! resolved month range, producing one total per month. The series is always
//! contiguous and zero-filled: charts depend on never skipping an empty
//! month. Accumulation is in integer cents, so repeated addition cannot
//! drift.

use crate::models::{ClassifiedMonth, FinancialEntry, Money, MonthRange, MonthlyTotal, TimeState, YearMonth};

/// Project entries onto every month of a range
///
/// For each month, every entry is tested for applicability (one-off hits its
/// start month only; recurring hits its inclusive active range). O(periods ×
/// entries), which is fine at UI data scales: hundreds of entries across at
/// most 60 periods.
pub fn project(entries: &[FinancialEntry], range: &MonthRange) -> Vec<MonthlyTotal> {
    range
        .iter()
        .map(|month| {
            let total: Money = entries
                .iter()
                .filter(|entry| entry.applies_to(month))
                .map(|entry| entry.amount)
                .sum();
            MonthlyTotal { month, total }
        })
        .collect()
}

/// Attach a time-state to every month of a projected series
pub fn classify_months(series: &[MonthlyTotal], now: YearMonth) -> Vec<ClassifiedMonth> {
    series
        .iter()
        .map(|p| ClassifiedMonth {
            month: p.month,
            total: p.total,
            time_state: TimeState::of(p.month, now),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryCategory;
    use crate::services::range::{resolve_range, Horizon};

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn entry(
        amount: i64,
        start: YearMonth,
        end: Option<YearMonth>,
        recurring: bool,
    ) -> FinancialEntry {
        FinancialEntry {
            category: EntryCategory::Salary,
            description: "entry".into(),
            amount: Money::from_major(amount),
            start,
            end,
            is_recurring: recurring,
        }
    }

    fn year_2025() -> MonthRange {
        resolve_range(Horizon::CurrentYear, ym(2025, 6), true)
    }

    #[test]
    fn test_open_ended_recurring_fills_whole_year() {
        // 5000/month recurring from Jan with no end date
        let entries = vec![entry(5000, ym(2025, 1), None, true)];
        let series = project(&entries, &year_2025());

        assert_eq!(series.len(), 12);
        for p in &series {
            assert_eq!(p.total, Money::from_major(5000));
        }
        let sum: Money = series.iter().map(|p| p.total).sum();
        assert_eq!(sum, Money::from_major(60000));
    }

    #[test]
    fn test_bounded_recurring_march_through_may() {
        // 1200 recurring Mar through May inclusive
        let entries = vec![entry(1200, ym(2025, 3), Some(ym(2025, 5)), true)];
        let series = project(&entries, &year_2025());

        for p in &series {
            let expected = if (3..=5).contains(&p.month.month) {
                Money::from_major(1200)
            } else {
                Money::zero()
            };
            assert_eq!(p.total, expected, "month {}", p.month);
        }
    }

    #[test]
    fn test_one_off_contributes_exactly_once() {
        let entries = vec![entry(750, ym(2025, 7), None, false)];
        let series = project(&entries, &year_2025());

        let nonzero: Vec<_> = series.iter().filter(|p| !p.total.is_zero()).collect();
        assert_eq!(nonzero.len(), 1);
        assert_eq!(nonzero[0].month, ym(2025, 7));
        assert_eq!(nonzero[0].total, Money::from_major(750));
    }

    #[test]
    fn test_bounded_recurrence_month_count() {
        // start S, end E contributes to exactly E - S + 1 months
        let entries = vec![entry(100, ym(2024, 11), Some(ym(2025, 2)), true)];
        let range = resolve_range(Horizon::TwoYears, ym(2025, 6), true);
        let series = project(&entries, &range);

        let hit = series.iter().filter(|p| !p.total.is_zero()).count();
        assert_eq!(hit, 4);
    }

    #[test]
    fn test_zero_fill_with_no_entries() {
        let series = project(&[], &year_2025());
        assert_eq!(series.len(), 12);
        assert!(series.iter().all(|p| p.total.is_zero()));
    }

    #[test]
    fn test_series_is_ordered_and_contiguous() {
        let series = project(&[], &resolve_range(Horizon::TwoYears, ym(2025, 6), true));
        for pair in series.windows(2) {
            assert_eq!(pair[0].month.next(), pair[1].month);
        }
    }

    #[test]
    fn test_entries_outside_range_ignored() {
        let entries = vec![
            entry(999, ym(2019, 5), None, false),
            entry(999, ym(2026, 1), None, false),
        ];
        let series = project(&entries, &year_2025());
        assert!(series.iter().all(|p| p.total.is_zero()));
    }

    #[test]
    fn test_mixed_entries_sum_per_month() {
        let entries = vec![
            entry(5000, ym(2025, 1), None, true),
            entry(-1200, ym(2025, 1), None, true),
            entry(300, ym(2025, 6), None, false),
        ];
        let series = project(&entries, &year_2025());
        assert_eq!(series[0].total, Money::from_major(3800));
        assert_eq!(series[5].total, Money::from_major(4100));
        assert_eq!(series[11].total, Money::from_major(3800));
    }

    #[test]
    fn test_project_is_deterministic() {
        let entries = vec![
            entry(5000, ym(2025, 1), None, true),
            entry(1200, ym(2025, 3), Some(ym(2025, 5)), true),
        ];
        let range = year_2025();
        assert_eq!(project(&entries, &range), project(&entries, &range));
    }

    #[test]
    fn test_classify_months() {
        let series = project(&[], &year_2025());
        let classified = classify_months(&series, ym(2025, 6));

        assert_eq!(classified[4].time_state, TimeState::Past);
        assert_eq!(classified[5].time_state, TimeState::Current);
        assert_eq!(classified[6].time_state, TimeState::Predicted);
    }
}
