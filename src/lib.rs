//! fincast - temporal aggregation engine for personal-finance data
//!
//! This library is the computation core of a personal-finance tracker. It
//! takes snapshots of financial entries (income, expenses, budget lines,
//! loan balances, savings), each either recurring over a bounded or
//! open-ended month range or a one-off single-month event, and projects
//! them onto a chosen horizon to produce per-period totals, time-state
//! labels, budget-vs-actual variance bands, and multi-step goal progress.
//!
//! The engine does not fetch, persist, or render anything. All computation
//! is synchronous and pure: "now" is always an injected parameter, calls
//! are idempotent, and there is no shared mutable state.
//!
//! # Architecture
//!
//! - `config`: user-tunable goal settings
//! - `error`: custom error types
//! - `models`: core value types (money, months, entries, periods, goals)
//! - `services`: the stateless computation pipeline
//! - `cache`: an injected short-TTL cache for callers that front the engine
//!   with fetched entry lists
//!
//! # Example
//!
//! ```rust
//! use fincast::{
//!     classify_months, group_to_quarters, normalize_all, project, resolve_range, Horizon,
//!     RawEntry, YearMonth,
//! };
//!
//! let raws: Vec<RawEntry> = serde_json::from_str(
//!     r#"[{"category": "salary", "amount": 5000, "date": "2025-01-15", "isRecurring": true}]"#,
//! )
//! .unwrap();
//!
//! let now = YearMonth::new(2025, 6).unwrap();
//! let (entries, _rejected) = normalize_all(&raws);
//! let range = resolve_range(Horizon::CurrentYear, now, true);
//! let monthly = project(&entries, &range);
//! let labeled = classify_months(&monthly, now);
//! let quarters = group_to_quarters(&labeled);
//!
//! assert_eq!(monthly.len(), 12);
//! assert_eq!(quarters.len(), 4);
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use cache::TtlCache;
pub use config::GoalSettings;
pub use error::{EngineError, EngineResult};
pub use models::{
    BudgetEntry, ClassifiedMonth, DependentsFund, DomainAggregates, EntryCategory, EntryType,
    FinancialEntry, GoalStep, GoalStepKind, Money, MonthRange, MonthlyTotal, MortgageBalance,
    QuarterBucket, RawEntry, TimeState, YearMonth,
};
pub use services::{
    aggregate_goal_steps, analyze_budget_entry, analyze_variance, classify_months, current_step,
    group_to_quarters, normalize, normalize_all, project, resolve_range,
    split_current_historical, EntryRejection, Horizon, RecurringSplit, VarianceBand,
    VarianceReport,
};
