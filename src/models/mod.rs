//! Core data models for the budget optimizer
//!
//! Transient value objects: the figures a caller supplies for one month and
//! the summary the evaluator returns. Neither is persisted by the core.

pub mod input;
pub mod money;
pub mod result;

pub use input::BudgetInput;
pub use money::format_amount;
pub use result::{BudgetResult, GoalFundingStatus};
