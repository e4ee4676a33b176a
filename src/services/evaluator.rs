//! Budget evaluation
//!
//! Applies the 50/30/20 rule of thumb to one month of income and spending:
//! totals, net cash flow, goal funding and a prioritized list of
//! optimization messages.
//!
//! The evaluator is pure. It performs no I/O, holds no shared state and is
//! defined for every `f64` input, including zero or negative income. Input
//! validation is the caller's responsibility and is deliberately not done
//! here.

use serde::{Deserialize, Serialize};

use crate::models::money::{format_amount, format_ratio};
use crate::models::{BudgetInput, BudgetResult, GoalFundingStatus};

/// Share of income above which discretionary spending is flagged
pub const DISCRETIONARY_LIMIT: f64 = 0.30;

/// Share of income above which fixed expenses are flagged
pub const FIXED_COST_LIMIT: f64 = 0.50;

/// Share of income below which a positive surplus counts as thin
pub const SURPLUS_BUFFER: f64 = 0.10;

/// Default currency symbol used in messages
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Policy ratios for the evaluation checks, each a fraction of income
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_discretionary_limit")]
    pub discretionary_limit: f64,

    #[serde(default = "default_fixed_cost_limit")]
    pub fixed_cost_limit: f64,

    #[serde(default = "default_surplus_buffer")]
    pub surplus_buffer: f64,
}

fn default_discretionary_limit() -> f64 {
    DISCRETIONARY_LIMIT
}

fn default_fixed_cost_limit() -> f64 {
    FIXED_COST_LIMIT
}

fn default_surplus_buffer() -> f64 {
    SURPLUS_BUFFER
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            discretionary_limit: DISCRETIONARY_LIMIT,
            fixed_cost_limit: FIXED_COST_LIMIT,
            surplus_buffer: SURPLUS_BUFFER,
        }
    }
}

/// Capability handed to callers: give it a month of figures, get a summary
pub trait BudgetAnalyzer {
    fn analyze(&self, input: &BudgetInput) -> BudgetResult;
}

/// Stateless budget evaluator
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetEvaluator {
    thresholds: Thresholds,
    currency_symbol: String,
}

impl Default for BudgetEvaluator {
    fn default() -> Self {
        Self::new(Thresholds::default(), DEFAULT_CURRENCY_SYMBOL)
    }
}

impl BudgetEvaluator {
    pub fn new(thresholds: Thresholds, currency_symbol: impl Into<String>) -> Self {
        Self {
            thresholds,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Evaluate one month of income and spending
    ///
    /// Messages are ordered: discretionary overspending, then thin surplus,
    /// then fixed-cost load. A deficit warning is inserted ahead of all of
    /// them. Every comparison is strict, so a figure sitting exactly on a
    /// threshold is not flagged.
    pub fn evaluate(&self, input: &BudgetInput) -> BudgetResult {
        let income = input.monthly_net_income;
        let total_expenses = input.total_expenses();
        let net_cash_flow = income - total_expenses;

        let mut optimization_areas = Vec::new();

        let discretionary_cap = self.thresholds.discretionary_limit * income;
        if input.discretionary_spending > discretionary_cap {
            let excess = input.discretionary_spending - discretionary_cap;
            optimization_areas.push(self.discretionary_message(excess));
        }

        if net_cash_flow < 0.0 {
            optimization_areas.insert(0, self.deficit_message(net_cash_flow.abs()));
        } else if net_cash_flow < self.thresholds.surplus_buffer * income {
            optimization_areas.push(thin_surplus_message());
        }

        if input.fixed_expenses > self.thresholds.fixed_cost_limit * income {
            optimization_areas.push(self.fixed_load_message());
        }

        let goal_funding_status = if net_cash_flow >= input.target_savings {
            GoalFundingStatus::OnTrack
        } else {
            GoalFundingStatus::Shortfall
        };
        let funding_shortfall = (input.target_savings - net_cash_flow).max(0.0);

        BudgetResult {
            total_income: income,
            total_expenses,
            net_cash_flow,
            goal_funding_status,
            funding_shortfall,
            optimization_areas,
        }
    }

    fn discretionary_message(&self, excess: f64) -> String {
        format!(
            "Your discretionary ('wants') spending is above recommended levels. \
             You could potentially reduce **{}** to align with the {} guideline.",
            format_amount(excess, &self.currency_symbol),
            format_ratio(self.thresholds.discretionary_limit)
        )
    }

    fn deficit_message(&self, deficit: f64) -> String {
        format!(
            "You are running a **monthly deficit of {}**. \
             Immediate expense reduction or income adjustments are recommended.",
            format_amount(deficit, &self.currency_symbol)
        )
    }

    fn fixed_load_message(&self) -> String {
        format!(
            "Your fixed expenses exceed {} of your income. Consider reviewing rent, \
             large EMIs, or refinancing options to reduce fixed burden.",
            format_ratio(self.thresholds.fixed_cost_limit)
        )
    }
}

fn thin_surplus_message() -> String {
    "Your monthly surplus is small. Consider optimizing variable expenses \
     like utilities, subscriptions, or grocery spend."
        .to_string()
}

impl BudgetAnalyzer for BudgetEvaluator {
    fn analyze(&self, input: &BudgetInput) -> BudgetResult {
        self.evaluate(input)
    }
}

/// Evaluate with the default thresholds and currency symbol
///
/// Pass `0.0` as `target_savings` when there is no savings goal.
pub fn evaluate(
    monthly_net_income: f64,
    fixed_expenses: f64,
    variable_expenses: f64,
    discretionary_spending: f64,
    target_savings: f64,
) -> BudgetResult {
    let input = BudgetInput::new(
        monthly_net_income,
        fixed_expenses,
        variable_expenses,
        discretionary_spending,
    )
    .with_target_savings(target_savings);
    BudgetEvaluator::default().evaluate(&input)
}
