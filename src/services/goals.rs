//! Goal progress aggregator
//!
//! Computes progress and completion for the seven fixed milestones from the
//! cross-domain aggregate snapshot the caller assembles. Each step is
//! computed independently: a later step can show partial progress while an
//! earlier one is incomplete; only the "current focus" pointer follows the
//! lowest-incomplete rule.

use crate::config::GoalSettings;
use crate::models::{
    DependentsFund, DomainAggregates, GoalStep, GoalStepKind, Money, MortgageBalance,
};

/// Compute all seven goal steps, in canonical order
pub fn aggregate_goal_steps(
    aggregates: &DomainAggregates,
    settings: &GoalSettings,
) -> Vec<GoalStep> {
    GoalStepKind::ALL
        .iter()
        .map(|kind| compute_step(*kind, aggregates, settings))
        .collect()
}

/// The step the user should focus on: lowest-numbered incomplete step, or
/// the last step when everything is complete
pub fn current_step(steps: &[GoalStep]) -> GoalStepKind {
    steps
        .iter()
        .find(|step| !step.is_completed)
        .map(|step| step.kind)
        .unwrap_or(GoalStepKind::IndependenceNumber)
}

fn compute_step(
    kind: GoalStepKind,
    aggregates: &DomainAggregates,
    settings: &GoalSettings,
) -> GoalStep {
    match kind {
        GoalStepKind::SeedEmergencyFund => amount_step(
            kind,
            settings.seed_fund_target,
            aggregates.liquid_savings,
            aggregates,
        ),
        GoalStepKind::DebtPayoff => debt_payoff_step(aggregates),
        GoalStepKind::FullEmergencyFund => {
            let target = aggregates.monthly_expenses * settings.emergency_fund_months as i64;
            amount_step(kind, target, aggregates.liquid_savings, aggregates)
        }
        GoalStepKind::RetirementInvesting => retirement_step(aggregates, settings),
        GoalStepKind::DependentsFund => dependents_step(aggregates),
        GoalStepKind::MortgagePayoff => mortgage_step(aggregates),
        GoalStepKind::IndependenceNumber => {
            let target = aggregates.annual_expenses * settings.independence_multiplier as i64;
            amount_step(kind, target, aggregates.investable_net_worth, aggregates)
        }
    }
}

/// The common amount-toward-target shape shared by steps 1, 3, and 7
fn amount_step(
    kind: GoalStepKind,
    target: Money,
    current: Money,
    aggregates: &DomainAggregates,
) -> GoalStep {
    let completed = current >= target;
    finish(
        kind,
        Some(target),
        current,
        current.percent_toward(target),
        completed,
        aggregates,
    )
}

/// Step 2: qualitative. Done when non-mortgage debt is gone. Progress is
/// the caller-derived payoff ratio, since the engine holds no history and
/// cannot know the initial balance.
fn debt_payoff_step(aggregates: &DomainAggregates) -> GoalStep {
    let completed = !aggregates.non_mortgage_debt.is_positive();
    let progress = if completed {
        100.0
    } else {
        aggregates
            .debt_progress
            .map(|ratio| (ratio * 100.0).clamp(0.0, 100.0))
            .unwrap_or(0.0)
    };
    finish(
        GoalStepKind::DebtPayoff,
        None,
        aggregates.non_mortgage_debt,
        progress,
        completed,
        aggregates,
    )
}

/// Step 4: target is a contribution rate, not an amount
fn retirement_step(aggregates: &DomainAggregates, settings: &GoalSettings) -> GoalStep {
    let achieved = aggregates.retirement_contribution_rate;
    let target = settings.retirement_target_rate;
    let completed = achieved >= target;
    let progress = if target <= 0.0 {
        100.0
    } else {
        (achieved / target * 100.0).clamp(0.0, 100.0)
    };
    finish(
        GoalStepKind::RetirementInvesting,
        None,
        Money::zero(),
        progress,
        completed,
        aggregates,
    )
}

/// Step 5: skippable. "Not applicable" counts as complete without amounts
fn dependents_step(aggregates: &DomainAggregates) -> GoalStep {
    match aggregates.dependents_fund {
        DependentsFund::NotApplicable => finish(
            GoalStepKind::DependentsFund,
            None,
            Money::zero(),
            100.0,
            true,
            aggregates,
        ),
        DependentsFund::Tracked { target, current } => {
            amount_step(GoalStepKind::DependentsFund, target, current, aggregates)
        }
    }
}

/// Step 6: having no mortgage is a valid terminal state, not an error
fn mortgage_step(aggregates: &DomainAggregates) -> GoalStep {
    match aggregates.mortgage {
        None => finish(
            GoalStepKind::MortgagePayoff,
            None,
            Money::zero(),
            100.0,
            true,
            aggregates,
        ),
        Some(MortgageBalance {
            original_principal,
            remaining_balance,
        }) => {
            let completed = !remaining_balance.is_positive();
            let paid = original_principal - remaining_balance;
            let progress = if completed {
                100.0
            } else {
                paid.percent_toward(original_principal)
            };
            finish(
                GoalStepKind::MortgagePayoff,
                Some(original_principal),
                paid,
                progress,
                completed,
                aggregates,
            )
        }
    }
}

fn finish(
    kind: GoalStepKind,
    target_amount: Option<Money>,
    current_amount: Money,
    progress_percent: f64,
    is_completed: bool,
    aggregates: &DomainAggregates,
) -> GoalStep {
    GoalStep {
        kind,
        target_amount,
        current_amount,
        progress_percent,
        is_completed,
        completion_date: is_completed.then_some(aggregates.as_of),
    }
}
