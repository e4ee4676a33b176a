//! Export module for the budget optimizer
//!
//! Renders an evaluation result in machine-readable formats:
//! - JSON: the six-key shape existing callers consume
//! - YAML: human-readable, with a comment header
//! - CSV: metric/value rows for spreadsheets

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_result_csv;
pub use json::{export_result_json, export_value_json};
pub use yaml::export_result_yaml;
