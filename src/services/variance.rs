//! Variance analyzer
//!
//! Compares a planned budget total against an actual total for one
//! category/period and classifies the result into an under/close/over band.
//! Deterministic, side-effect-free, used purely for presentation coloring.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{BudgetEntry, Money};

/// How actual spend compares to the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarianceBand {
    Under,
    Close,
    Over,
}

impl fmt::Display for VarianceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Under => write!(f, "under"),
            Self::Close => write!(f, "close"),
            Self::Over => write!(f, "over"),
        }
    }
}

/// Result of comparing one planned total against one actual total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarianceReport {
    /// Band classification
    pub band: VarianceBand,

    /// Signed difference, actual minus planned
    pub diff: Money,

    /// Actual as a percentage of planned; 0.0 when planned is zero
    pub percent: f64,
}

/// Band boundaries: within ±10% of the plan counts as close
const OVER_RATIO: f64 = 1.10;
const UNDER_RATIO: f64 = 0.90;

/// Classify actual spend against a plan
///
/// When `planned` is zero there is no ratio to take: any spend at all is
/// `Over`, and "no budget, no spend" is `Under`. The reported percentage is
/// 0.0 in both degenerate branches.
pub fn analyze_variance(planned: Money, actual: Money) -> VarianceReport {
    let diff = actual - planned;

    let (band, percent) = match actual.ratio_to(planned) {
        None => {
            let band = if actual.is_positive() {
                VarianceBand::Over
            } else {
                VarianceBand::Under
            };
            (band, 0.0)
        }
        Some(ratio) => {
            let band = if ratio > OVER_RATIO {
                VarianceBand::Over
            } else if ratio < UNDER_RATIO {
                VarianceBand::Under
            } else {
                VarianceBand::Close
            };
            (band, ratio * 100.0)
        }
    };

    VarianceReport {
        band,
        diff,
        percent,
    }
}

/// Classify a budget entry, treating a missing actual as zero spend
pub fn analyze_budget_entry(entry: &BudgetEntry) -> VarianceReport {
    analyze_variance(entry.planned, entry.actual.unwrap_or_default())
}
