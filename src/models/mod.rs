//! Core data models for the fincast engine
//!
//! All types here are plain values: cheap to clone, serde-friendly, and free
//! of I/O. Entries are snapshots owned by the surrounding application; the
//! engine only reads them.

pub mod entry;
pub mod goals;
pub mod money;
pub mod month;
pub mod period;

pub use entry::{BudgetEntry, EntryCategory, EntryType, FinancialEntry, RawEntry};
pub use goals::{DependentsFund, DomainAggregates, GoalStep, GoalStepKind, MortgageBalance};
pub use money::{Money, MoneyParseError};
pub use month::{MonthParseError, MonthRange, YearMonth};
pub use period::{ClassifiedMonth, MonthlyTotal, QuarterBucket, TimeState};
