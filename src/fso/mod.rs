//! Financial state object integration
//!
//! A financial state object (FSO) is the JSON document a planning workflow
//! passes between its steps. The evaluator never touches it. Instead the
//! caller runs the explicit merge step here:
//!
//! 1. pull a [`BudgetInput`] out of the document's top-level fields,
//! 2. hand it to a [`BudgetAnalyzer`],
//! 3. write the outcome under `budget_analysis_summary` in a copy of the
//!    document.
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_optimizer::fso::merge_budget_analysis;
//! use budget_optimizer::services::BudgetEvaluator;
//!
//! let merged = merge_budget_analysis(&fso, &BudgetEvaluator::default())?;
//! println!("{}", serde_json::to_string_pretty(&merged.document)?);
//! ```

pub mod retirement;
pub mod summary;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{OptimizerError, OptimizerResult};
use crate::models::{BudgetInput, BudgetResult};
use crate::services::BudgetAnalyzer;

pub use retirement::{
    assess_withdrawal_rate, emergency_fund_months, WithdrawalRateSafety, WithdrawalRating,
};
pub use summary::{BudgetAnalysisSummary, CashFlowStatus};

/// Key the summary is written under
pub const SUMMARY_KEY: &str = "budget_analysis_summary";

/// Employment status recorded in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Working,
    Retired,
}

impl UserStatus {
    /// Read `user_status`; anything other than "retired" counts as working
    pub fn from_fso(fso: &Map<String, Value>) -> Self {
        match fso.get("user_status").and_then(Value::as_str) {
            Some(status) if status.trim().eq_ignore_ascii_case("retired") => Self::Retired,
            _ => Self::Working,
        }
    }
}

/// Outcome of a merge: the updated document plus what produced it
#[derive(Debug, Clone)]
pub struct MergedState {
    pub document: Value,
    pub input: BudgetInput,
    pub result: BudgetResult,
    pub summary: BudgetAnalysisSummary,
}

fn as_object(fso: &Value) -> OptimizerResult<&Map<String, Value>> {
    fso.as_object()
        .ok_or_else(|| OptimizerError::Fso("document is not a JSON object".into()))
}

fn required_number(fso: &Map<String, Value>, key: &str) -> OptimizerResult<f64> {
    fso.get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| OptimizerError::missing_field(key))
}

fn optional_number(fso: &Map<String, Value>, key: &str) -> Option<f64> {
    fso.get(key).and_then(Value::as_f64)
}

/// Build the evaluator input from a financial state object
///
/// Retired users are evaluated against `monthly_pension_or_drawdown`
/// instead of `monthly_net_income`. The savings target falls back to
/// `savings_per_month` and then to zero.
pub fn extract_input(fso: &Value) -> OptimizerResult<BudgetInput> {
    let fso = as_object(fso)?;

    let income_key = match UserStatus::from_fso(fso) {
        UserStatus::Working => "monthly_net_income",
        UserStatus::Retired => "monthly_pension_or_drawdown",
    };

    let input = BudgetInput::new(
        required_number(fso, income_key)?,
        required_number(fso, "fixed_expenses")?,
        required_number(fso, "variable_expenses")?,
        required_number(fso, "discretionary_spending")?,
    );

    let target = optional_number(fso, "target_savings")
        .or_else(|| optional_number(fso, "savings_per_month"))
        .unwrap_or(0.0);

    Ok(input.with_target_savings(target))
}

/// Evaluate the document's figures and return an updated copy
///
/// Any existing `budget_analysis_summary` is replaced; every other key is
/// carried over unchanged. The input document is left as is.
pub fn merge_budget_analysis<A>(fso: &Value, analyzer: &A) -> OptimizerResult<MergedState>
where
    A: BudgetAnalyzer + ?Sized,
{
    let object = as_object(fso)?;
    let input = extract_input(fso)?;
    let result = analyzer.analyze(&input);

    let withdrawal = match UserStatus::from_fso(object) {
        UserStatus::Retired => optional_number(object, "retirement_corpus")
            .and_then(|corpus| assess_withdrawal_rate(input.monthly_net_income, corpus)),
        UserStatus::Working => None,
    };
    let fund_months = optional_number(object, "emergency_fund_amount")
        .and_then(|fund| emergency_fund_months(fund, result.total_expenses));

    let summary = BudgetAnalysisSummary::from_result(&result)
        .with_withdrawal_rate(withdrawal)
        .with_emergency_fund_months(fund_months);

    let mut updated = object.clone();
    if updated.contains_key(SUMMARY_KEY) {
        debug!("replacing existing {}", SUMMARY_KEY);
    }
    updated.insert(SUMMARY_KEY.to_string(), serde_json::to_value(&summary)?);

    Ok(MergedState {
        document: Value::Object(updated),
        input,
        result,
        summary,
    })
}
