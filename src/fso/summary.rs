//! Budget analysis summary
//!
//! The block written under `budget_analysis_summary` in a financial state
//! object. It restates the evaluator's result in the shape downstream
//! planning steps read.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::retirement::WithdrawalRateSafety;
use crate::models::{BudgetResult, GoalFundingStatus};

/// Sign of the month's net cash flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CashFlowStatus {
    Surplus,
    Deficit,
    #[serde(rename = "Break-even")]
    BreakEven,
}

impl CashFlowStatus {
    pub fn from_net(net_cash_flow: f64) -> Self {
        if net_cash_flow > 0.0 {
            Self::Surplus
        } else if net_cash_flow < 0.0 {
            Self::Deficit
        } else {
            Self::BreakEven
        }
    }
}

impl fmt::Display for CashFlowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CashFlowStatus::Surplus => write!(f, "Surplus"),
            CashFlowStatus::Deficit => write!(f, "Deficit"),
            CashFlowStatus::BreakEven => write!(f, "Break-even"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAnalysisSummary {
    pub cash_flow_status: CashFlowStatus,

    /// Net cash flow; negative for a deficit
    pub surplus_or_deficit_amount: f64,

    pub goal_funding_status: GoalFundingStatus,

    pub funding_shortfall: f64,

    pub optimization_suggestions: Vec<String>,

    /// Only present for retired users with a known corpus
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawal_rate_safety: Option<WithdrawalRateSafety>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_fund_months: Option<f64>,
}

impl BudgetAnalysisSummary {
    pub fn from_result(result: &BudgetResult) -> Self {
        Self {
            cash_flow_status: CashFlowStatus::from_net(result.net_cash_flow),
            surplus_or_deficit_amount: result.net_cash_flow,
            goal_funding_status: result.goal_funding_status,
            funding_shortfall: result.funding_shortfall,
            optimization_suggestions: result.optimization_areas.clone(),
            withdrawal_rate_safety: None,
            emergency_fund_months: None,
        }
    }

    pub fn with_withdrawal_rate(mut self, safety: Option<WithdrawalRateSafety>) -> Self {
        self.withdrawal_rate_safety = safety;
        self
    }

    pub fn with_emergency_fund_months(mut self, months: Option<f64>) -> Self {
        self.emergency_fund_months = months;
        self
    }
}
