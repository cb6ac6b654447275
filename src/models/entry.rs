//! Financial entry models
//!
//! `RawEntry` is the serde-facing shape handed to the engine by the CRUD
//! layer; the normalizer turns it into a validated `FinancialEntry`.
//! `BudgetEntry` is the planned-vs-actual record produced by the budgeting
//! feature, one per (month, category, entry type).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::money::Money;
use super::month::YearMonth;

/// Closed set of entry categories, with an explicit fallback
///
/// Keeping categories as a tagged enum rather than loose strings lets match
/// arms over categories be checked for exhaustiveness; anything the host
/// application sends that is not recognized lands in `Other` with the
/// original label preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryCategory {
    Salary,
    Investment,
    Housing,
    Utilities,
    Groceries,
    Transport,
    Healthcare,
    Insurance,
    Entertainment,
    DebtPayment,
    Savings,
    Other(String),
}

impl EntryCategory {
    /// The canonical label for this category
    pub fn name(&self) -> &str {
        match self {
            Self::Salary => "salary",
            Self::Investment => "investment",
            Self::Housing => "housing",
            Self::Utilities => "utilities",
            Self::Groceries => "groceries",
            Self::Transport => "transport",
            Self::Healthcare => "healthcare",
            Self::Insurance => "insurance",
            Self::Entertainment => "entertainment",
            Self::DebtPayment => "debt_payment",
            Self::Savings => "savings",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for EntryCategory {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "salary" => Self::Salary,
            "investment" => Self::Investment,
            "housing" => Self::Housing,
            "utilities" => Self::Utilities,
            "groceries" => Self::Groceries,
            "transport" => Self::Transport,
            "healthcare" => Self::Healthcare,
            "insurance" => Self::Insurance,
            "entertainment" => Self::Entertainment,
            "debt_payment" => Self::DebtPayment,
            "savings" => Self::Savings,
            _ => Self::Other(s),
        }
    }
}

impl From<EntryCategory> for String {
    fn from(c: EntryCategory) -> String {
        c.name().to_string()
    }
}

impl fmt::Display for EntryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The kind of financial flow a budget entry plans for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryType {
    Income,
    Expense,
    LoanPayment,
}

/// A financial entry as received from the host application
///
/// Fields mirror the wire shape: dates are strings, the amount may be a
/// number, a numeric string, or garbage, and the optional fields may be
/// absent. Nothing here is trusted until normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    /// Category label; absent means uncategorized
    #[serde(default)]
    pub category: Option<String>,

    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Amount; any JSON value, coerced during normalization
    #[serde(default)]
    pub amount: Value,

    /// Start date string, expected "YYYY-MM" or "YYYY-MM-DD..."
    #[serde(default)]
    pub date: Option<String>,

    /// Optional inclusive end date string, same format
    #[serde(default)]
    pub end_date: Option<String>,

    /// Whether the entry recurs monthly; absent means one-off
    #[serde(default)]
    pub is_recurring: Option<bool>,
}

/// A validated financial entry, the projector's input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialEntry {
    /// Entry category
    pub category: EntryCategory,

    /// Free-text description
    pub description: String,

    /// Signed amount contributed per applicable month
    pub amount: Money,

    /// First month the entry is active
    pub start: YearMonth,

    /// Last active month, inclusive; `None` means open-ended
    #[serde(default)]
    pub end: Option<YearMonth>,

    /// Whether the entry repeats every month of its active range
    #[serde(default)]
    pub is_recurring: bool,
}

impl FinancialEntry {
    /// Whether this entry contributes to the given month
    ///
    /// One-off entries hit exactly their start month. Recurring entries hit
    /// every month from start through end (or forever when open-ended).
    /// Comparison is by year/month only.
    pub fn applies_to(&self, month: YearMonth) -> bool {
        if !self.is_recurring {
            return self.start == month;
        }
        if month < self.start {
            return false;
        }
        match self.end {
            Some(end) => month <= end,
            None => true,
        }
    }
}

/// A planned-vs-actual budget record for one month, category, and entry type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetEntry {
    /// What kind of flow is being budgeted
    pub entry_type: EntryType,

    /// Budget category
    pub category: EntryCategory,

    /// The month this budget line covers
    pub month: YearMonth,

    /// Planned amount
    pub planned: Money,

    /// Actual amount, once known
    #[serde(default)]
    pub actual: Option<Money>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn entry(start: YearMonth, end: Option<YearMonth>, recurring: bool) -> FinancialEntry {
        FinancialEntry {
            category: EntryCategory::Groceries,
            description: "weekly shop".into(),
            amount: Money::from_major(400),
            start,
            end,
            is_recurring: recurring,
        }
    }

    #[test]
    fn test_one_off_applies_to_start_month_only() {
        let e = entry(ym(2025, 3), None, false);
        assert!(e.applies_to(ym(2025, 3)));
        assert!(!e.applies_to(ym(2025, 2)));
        assert!(!e.applies_to(ym(2025, 4)));
    }

    #[test]
    fn test_open_ended_recurring_applies_from_start() {
        let e = entry(ym(2025, 3), None, true);
        assert!(!e.applies_to(ym(2025, 2)));
        assert!(e.applies_to(ym(2025, 3)));
        assert!(e.applies_to(ym(2031, 12)));
    }

    #[test]
    fn test_bounded_recurring_is_inclusive_both_ends() {
        let e = entry(ym(2025, 3), Some(ym(2025, 5)), true);
        assert!(!e.applies_to(ym(2025, 2)));
        assert!(e.applies_to(ym(2025, 3)));
        assert!(e.applies_to(ym(2025, 5)));
        assert!(!e.applies_to(ym(2025, 6)));
    }

    #[test]
    fn test_category_round_trip() {
        let c: EntryCategory = "groceries".to_string().into();
        assert_eq!(c, EntryCategory::Groceries);

        let c: EntryCategory = "Pet Supplies".to_string().into();
        assert_eq!(c, EntryCategory::Other("Pet Supplies".into()));
        assert_eq!(c.name(), "Pet Supplies");
    }

    #[test]
    fn test_raw_entry_tolerates_sparse_json() {
        let raw: RawEntry = serde_json::from_str(r#"{"date": "2025-01-15"}"#).unwrap();
        assert_eq!(raw.date.as_deref(), Some("2025-01-15"));
        assert!(raw.amount.is_null());
        assert!(raw.is_recurring.is_none());
    }
}
