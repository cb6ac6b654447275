//! Goal plan settings
//!
//! User-tunable parameters for the goal progress aggregator. Persistence is
//! owned by the host application; the engine only consumes a deserialized
//! snapshot.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Money;

/// User settings for goal progress computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalSettings {
    /// Target for the seed emergency fund (step 1)
    #[serde(default = "default_seed_fund_target")]
    pub seed_fund_target: Money,

    /// How many months of expenses the full emergency fund should cover
    /// (step 3), typically 3-6
    #[serde(default = "default_emergency_fund_months")]
    pub emergency_fund_months: u32,

    /// Retirement contribution rate considered sufficient, as a percentage
    /// of income (step 4)
    #[serde(default = "default_retirement_target_rate")]
    pub retirement_target_rate: f64,

    /// Multiple of annual expenses that defines the independence number
    /// (step 7)
    #[serde(default = "default_independence_multiplier")]
    pub independence_multiplier: u32,
}

impl GoalSettings {
    /// Validate the settings snapshot
    pub fn validate(&self) -> EngineResult<()> {
        if self.seed_fund_target.is_negative() {
            return Err(EngineError::Validation(
                "seed fund target cannot be negative".into(),
            ));
        }

        if self.emergency_fund_months == 0 {
            return Err(EngineError::Validation(
                "emergency fund must cover at least one month".into(),
            ));
        }

        if self.retirement_target_rate < 0.0 {
            return Err(EngineError::Validation(format!(
                "negative retirement target rate: {}",
                self.retirement_target_rate
            )));
        }

        if self.independence_multiplier == 0 {
            return Err(EngineError::Validation(
                "independence multiplier must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

fn default_seed_fund_target() -> Money {
    Money::from_major(1000)
}

fn default_emergency_fund_months() -> u32 {
    3
}

fn default_retirement_target_rate() -> f64 {
    15.0
}

fn default_independence_multiplier() -> u32 {
    25
}

impl Default for GoalSettings {
    fn default() -> Self {
        Self {
            seed_fund_target: default_seed_fund_target(),
            emergency_fund_months: default_emergency_fund_months(),
            retirement_target_rate: default_retirement_target_rate(),
            independence_multiplier: default_independence_multiplier(),
        }
    }
}
