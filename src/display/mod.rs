//! Display formatting for terminal output
//!
//! Provides text renderings of evaluation results and the evaluation
//! history.

pub mod history;
pub mod result;

pub use history::format_history;
pub use result::format_result;
