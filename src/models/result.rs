//! Budget result model
//!
//! The six-field cash-flow summary produced by one evaluation. Serialized key
//! names follow the `*_inr` convention existing callers expect.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the net cash flow covers the savings target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalFundingStatus {
    #[serde(rename = "On track")]
    OnTrack,
    #[serde(rename = "Shortfall")]
    Shortfall,
}

impl GoalFundingStatus {
    pub fn is_on_track(&self) -> bool {
        matches!(self, Self::OnTrack)
    }
}

impl fmt::Display for GoalFundingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalFundingStatus::OnTrack => write!(f, "On track"),
            GoalFundingStatus::Shortfall => write!(f, "Shortfall"),
        }
    }
}

/// Cash-flow summary with prioritized optimization messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetResult {
    /// Echo of the monthly net income
    #[serde(rename = "total_monthly_net_income_inr")]
    pub total_income: f64,

    /// Fixed + variable + discretionary
    #[serde(rename = "total_monthly_expenses_inr")]
    pub total_expenses: f64,

    /// Income minus total expenses; negative means a deficit
    #[serde(rename = "net_cash_flow_inr")]
    pub net_cash_flow: f64,

    pub goal_funding_status: GoalFundingStatus,

    /// How far the net cash flow falls short of the target, never negative
    #[serde(rename = "funding_shortfall_inr")]
    pub funding_shortfall: f64,

    /// Suggestions in priority order; a deficit warning always comes first
    pub optimization_areas: Vec<String>,
}

impl BudgetResult {
    /// Check if there is nothing to optimize
    pub fn is_clean(&self) -> bool {
        self.optimization_areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> BudgetResult {
        BudgetResult {
            total_income: 100000.0,
            total_expenses: 70000.0,
            net_cash_flow: 30000.0,
            goal_funding_status: GoalFundingStatus::OnTrack,
            funding_shortfall: 0.0,
            optimization_areas: Vec::new(),
        }
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GoalFundingStatus::OnTrack.to_string(), "On track");
        assert_eq!(GoalFundingStatus::Shortfall.to_string(), "Shortfall");
        assert!(GoalFundingStatus::OnTrack.is_on_track());
    }

    #[test]
    fn test_serialized_key_set() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "funding_shortfall_inr",
                "goal_funding_status",
                "net_cash_flow_inr",
                "optimization_areas",
                "total_monthly_expenses_inr",
                "total_monthly_net_income_inr",
            ]
        );
        assert_eq!(value["goal_funding_status"], json!("On track"));
    }

    #[test]
    fn test_deserialize_shortfall() {
        let value = json!({
            "total_monthly_net_income_inr": 50000.0,
            "total_monthly_expenses_inr": 55000.0,
            "net_cash_flow_inr": -5000.0,
            "goal_funding_status": "Shortfall",
            "funding_shortfall_inr": 10000.0,
            "optimization_areas": ["a"]
        });
        let result: BudgetResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.goal_funding_status, GoalFundingStatus::Shortfall);
        assert!(!result.is_clean());
    }
}
