//! Business logic layer
//!
//! Holds the budget evaluator, the only component with real financial logic.

pub mod evaluator;

pub use evaluator::{evaluate, BudgetAnalyzer, BudgetEvaluator, Thresholds};
