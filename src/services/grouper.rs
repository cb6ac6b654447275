//! Period grouper
//!
//! Folds a classified monthly series into quarter buckets for long horizons.
//! Buckets are consecutive chunks of 3 months; a trailing partial chunk is
//! emitted rather than dropped, so no month ever disappears from a chart.

use crate::models::{ClassifiedMonth, Money, QuarterBucket, TimeState};

/// Group a classified monthly series into quarter buckets
///
/// Quarter total is the sum of the constituent month totals. Quarter state
/// precedence: all months predicted → predicted; otherwise any month current
/// → current; otherwise past. The per-month classifier is not reapplied at
/// quarter granularity.
pub fn group_to_quarters(series: &[ClassifiedMonth]) -> Vec<QuarterBucket> {
    series
        .chunks(3)
        .map(|months| {
            let first = &months[0];
            QuarterBucket {
                key: format!("{:04}-Q{}", first.month.year, first.month.quarter()),
                start_month: first.month,
                total: months.iter().map(|m| m.total).sum(),
                time_state: quarter_state(months),
            }
        })
        .collect()
}

fn quarter_state(months: &[ClassifiedMonth]) -> TimeState {
    if months
        .iter()
        .all(|m| m.time_state == TimeState::Predicted)
    {
        TimeState::Predicted
    } else if months.iter().any(|m| m.time_state == TimeState::Current) {
        TimeState::Current
    } else {
        TimeState::Past
    }
}
