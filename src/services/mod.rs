//! Engine services
//!
//! Stateless computation over the model types. Every function here is pure:
//! "now" and all inputs are parameters, nothing reads a clock or performs
//! I/O, and identical inputs always yield identical outputs.

pub mod goals;
pub mod grouper;
pub mod normalizer;
pub mod projector;
pub mod range;
pub mod variance;

pub use goals::{aggregate_goal_steps, current_step};
pub use grouper::group_to_quarters;
pub use normalizer::{
    normalize, normalize_all, split_current_historical, EntryRejection, RecurringSplit,
};
pub use projector::{classify_months, project};
pub use range::{resolve_range, Horizon};
pub use variance::{analyze_budget_entry, analyze_variance, VarianceBand, VarianceReport};
