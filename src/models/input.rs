//! Budget input model
//!
//! The five figures a caller hands to the evaluator for one month.

use serde::{Deserialize, Serialize};

/// Monthly income and spending figures for a single evaluation
///
/// Values are expected to be sanitized upstream. Nothing here rejects
/// negative or zero amounts: the evaluator runs its arithmetic on whatever it
/// is given, and callers that need validation must do it before building
/// the input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetInput {
    /// Monthly take-home income after tax
    #[serde(rename = "monthly_net_income_inr")]
    pub monthly_net_income: f64,

    /// Non-discretionary recurring costs (rent, EMIs, insurance)
    #[serde(rename = "fixed_expenses_inr")]
    pub fixed_expenses: f64,

    /// Necessities that fluctuate (utilities, groceries, fuel)
    #[serde(rename = "variable_expenses_inr")]
    pub variable_expenses: f64,

    /// Wants (dining out, entertainment, shopping)
    #[serde(rename = "discretionary_spending_inr")]
    pub discretionary_spending: f64,

    /// Amount the caller wants left over after expenses
    #[serde(rename = "target_savings_inr", default)]
    pub target_savings: f64,
}

impl BudgetInput {
    /// Create an input with no savings target
    pub fn new(
        monthly_net_income: f64,
        fixed_expenses: f64,
        variable_expenses: f64,
        discretionary_spending: f64,
    ) -> Self {
        Self {
            monthly_net_income,
            fixed_expenses,
            variable_expenses,
            discretionary_spending,
            target_savings: 0.0,
        }
    }

    /// Set the monthly savings target
    pub fn with_target_savings(mut self, target_savings: f64) -> Self {
        self.target_savings = target_savings;
        self
    }

    /// Sum of the three expense categories
    pub fn total_expenses(&self) -> f64 {
        self.fixed_expenses + self.variable_expenses + self.discretionary_spending
    }
}
