//! Goal step models
//!
//! Seven fixed, ordered financial milestones ("baby steps") plus the
//! cross-domain aggregate snapshot the caller assembles from loans, savings,
//! income, and settings data. The engine never fetches any of this itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{EngineError, EngineResult};

/// The seven fixed milestones, in their canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalStepKind {
    SeedEmergencyFund,
    DebtPayoff,
    FullEmergencyFund,
    RetirementInvesting,
    DependentsFund,
    MortgagePayoff,
    IndependenceNumber,
}

impl GoalStepKind {
    /// All steps in canonical order
    pub const ALL: [GoalStepKind; 7] = [
        Self::SeedEmergencyFund,
        Self::DebtPayoff,
        Self::FullEmergencyFund,
        Self::RetirementInvesting,
        Self::DependentsFund,
        Self::MortgagePayoff,
        Self::IndependenceNumber,
    ];

    /// 1-based step number
    pub const fn number(&self) -> u8 {
        match self {
            Self::SeedEmergencyFund => 1,
            Self::DebtPayoff => 2,
            Self::FullEmergencyFund => 3,
            Self::RetirementInvesting => 4,
            Self::DependentsFund => 5,
            Self::MortgagePayoff => 6,
            Self::IndependenceNumber => 7,
        }
    }
}

impl fmt::Display for GoalStepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SeedEmergencyFund => "seed emergency fund",
            Self::DebtPayoff => "debt payoff",
            Self::FullEmergencyFund => "full emergency fund",
            Self::RetirementInvesting => "retirement investing",
            Self::DependentsFund => "dependents' fund",
            Self::MortgagePayoff => "mortgage payoff",
            Self::IndependenceNumber => "independence number",
        };
        write!(f, "{}", name)
    }
}

/// Computed progress for one milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalStep {
    /// Which milestone this is
    pub kind: GoalStepKind,

    /// Amount target; `None` for qualitative steps
    pub target_amount: Option<Money>,

    /// Current amount counted toward the target
    pub current_amount: Money,

    /// Progress in 0..=100
    pub progress_percent: f64,

    /// Whether the step is satisfied
    pub is_completed: bool,

    /// Date the step was observed complete; `None` while incomplete
    pub completion_date: Option<NaiveDate>,
}

/// Outstanding mortgage figures, when one exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageBalance {
    /// Principal at origination
    pub original_principal: Money,

    /// Remaining balance
    pub remaining_balance: Money,
}

/// Dependents' fund status, an optional and skippable step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum DependentsFund {
    /// The user has marked the step as not applicable to them
    NotApplicable,
    /// Tracked with an amount target
    Tracked { target: Money, current: Money },
}

/// Cross-domain aggregate snapshot supplied by the caller
///
/// Every field is a plain precomputed figure; the engine does no fetching
/// and holds no history, which is why the debt progress ratio (which needs
/// an initial balance) is caller-derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainAggregates {
    /// Snapshot date; stamped onto completed steps
    pub as_of: NaiveDate,

    /// Liquid (non-invested) savings balance
    pub liquid_savings: Money,

    /// Total non-mortgage debt balance
    pub non_mortgage_debt: Money,

    /// Caller-derived payoff ratio in 0..=1 (e.g. 1 - remaining/initial);
    /// `None` when the caller has no history to derive it from
    #[serde(default)]
    pub debt_progress: Option<f64>,

    /// Average monthly expenses, used to size the full emergency fund
    pub monthly_expenses: Money,

    /// Retirement contribution rate achieved, as a percentage of income
    pub retirement_contribution_rate: f64,

    /// Dependents' fund status
    pub dependents_fund: DependentsFund,

    /// Mortgage figures; `None` means no mortgage exists
    #[serde(default)]
    pub mortgage: Option<MortgageBalance>,

    /// Annual expenses, used to size the independence number
    pub annual_expenses: Money,

    /// Total investable net worth counted toward independence
    pub investable_net_worth: Money,
}

impl DomainAggregates {
    /// Sanity-check caller-supplied figures
    ///
    /// Aggregation itself clamps rather than fails; this is for callers that
    /// want to surface bad upstream data instead of silently clamping it.
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(ratio) = self.debt_progress {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(EngineError::Goal(format!(
                    "debt progress ratio out of range: {}",
                    ratio
                )));
            }
        }

        if self.retirement_contribution_rate < 0.0 {
            return Err(EngineError::Goal(format!(
                "negative retirement contribution rate: {}",
                self.retirement_contribution_rate
            )));
        }

        if self.non_mortgage_debt.is_negative() {
            return Err(EngineError::Goal(
                "non-mortgage debt balance is negative".into(),
            ));
        }

        Ok(())
    }
}
