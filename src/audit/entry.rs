//! Audit entry data structures
//!
//! One entry per evaluation: when it ran, where the figures came from, and
//! the input and result themselves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{BudgetInput, BudgetResult};

/// Where the evaluated figures came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluationSource {
    /// Figures passed as command-line arguments
    Arguments,
    /// A BudgetInput JSON file
    InputFile,
    /// A financial state object merge
    Fso,
}

impl std::fmt::Display for EvaluationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluationSource::Arguments => write!(f, "arguments"),
            EvaluationSource::InputFile => write!(f, "input-file"),
            EvaluationSource::Fso => write!(f, "fso"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,

    /// When the evaluation ran (UTC)
    pub timestamp: DateTime<Utc>,

    pub source: EvaluationSource,

    pub input: BudgetInput,

    pub result: BudgetResult,
}

impl AuditEntry {
    /// Create an entry for an evaluation that just ran
    pub fn evaluation(source: EvaluationSource, input: BudgetInput, result: BudgetResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            source,
            input,
            result,
        }
    }

    /// Short form of the entry ID for display
    pub fn short_id(&self) -> String {
        self.id.to_string()[..8].to_string()
    }

    /// Check that every figure can be stored
    ///
    /// JSON has no representation for infinity or NaN; serde_json writes them
    /// as `null`, which cannot be read back into an `f64`.
    pub fn has_finite_figures(&self) -> bool {
        let input = &self.input;
        let result = &self.result;
        [
            input.monthly_net_income,
            input.fixed_expenses,
            input.variable_expenses,
            input.discretionary_spending,
            input.target_savings,
            result.total_income,
            result.total_expenses,
            result.net_cash_flow,
            result.funding_shortfall,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::evaluate;

    fn sample_entry() -> AuditEntry {
        let input = BudgetInput::new(50000.0, 20000.0, 10000.0, 25000.0)
            .with_target_savings(5000.0);
        let result = evaluate(50000.0, 20000.0, 10000.0, 25000.0, 5000.0);
        AuditEntry::evaluation(EvaluationSource::Arguments, input, result)
    }

    #[test]
    fn test_source_display() {
        assert_eq!(EvaluationSource::Arguments.to_string(), "arguments");
        assert_eq!(EvaluationSource::InputFile.to_string(), "input-file");
        assert_eq!(EvaluationSource::Fso.to_string(), "fso");
    }

    #[test]
    fn test_entries_get_distinct_ids() {
        assert_ne!(sample_entry().id, sample_entry().id);
    }

    #[test]
    fn test_serialization_uses_result_keys() {
        let json = serde_json::to_value(sample_entry()).unwrap();
        assert_eq!(json["source"], "arguments");
        assert_eq!(json["input"]["monthly_net_income_inr"], 50000.0);
        assert_eq!(json["result"]["net_cash_flow_inr"], -5000.0);

        assert_eq!(
            serde_json::to_value(EvaluationSource::InputFile).unwrap(),
            "input-file"
        );
        let parsed: EvaluationSource = serde_json::from_str("\"input-file\"").unwrap();
        assert_eq!(parsed, EvaluationSource::InputFile);
    }

    #[test]
    fn test_finite_figures() {
        assert!(sample_entry().has_finite_figures());

        let input = BudgetInput::new(1.0, 1e308, 1e308, 0.0);
        let result = evaluate(1.0, 1e308, 1e308, 0.0, 0.0);
        let entry = AuditEntry::evaluation(EvaluationSource::InputFile, input, result);
        assert!(!entry.has_finite_figures());
    }
}
