//! budget-optimizer - rule-of-thumb cash-flow evaluation
//!
//! The heart of this crate is a pure budget evaluator: given monthly income,
//! fixed, variable and discretionary expenses and an optional savings target,
//! it returns totals, net cash flow, goal-funding status and a prioritized
//! list of optimization suggestions based on the 50/30/20 heuristic.
//!
//! # Architecture
//!
//! - `services`: the evaluator and its policy thresholds
//! - `models`: input and result value objects, amount formatting
//! - `fso`: caller-side merge of results into a financial state object
//! - `config`: configuration and path management
//! - `audit`: evaluation history log
//! - `export`: JSON/YAML/CSV rendering
//! - `display`: terminal formatting
//! - `cli`: command handlers for the binary
//! - `error`: custom error types
//!
//! # Example
//!
//! ```
//! use budget_optimizer::services::evaluate;
//! use budget_optimizer::models::GoalFundingStatus;
//!
//! let result = evaluate(50000.0, 20000.0, 10000.0, 25000.0, 5000.0);
//! assert_eq!(result.net_cash_flow, -5000.0);
//! assert_eq!(result.goal_funding_status, GoalFundingStatus::Shortfall);
//! assert!(result.optimization_areas[0].contains("monthly deficit"));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod fso;
pub mod models;
pub mod services;

pub use error::{OptimizerError, OptimizerResult};
pub use models::{BudgetInput, BudgetResult, GoalFundingStatus};
pub use services::{evaluate, BudgetAnalyzer, BudgetEvaluator, Thresholds};
