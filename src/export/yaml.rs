//! YAML export
//!
//! Writes a result as YAML with a short comment header, for reading by eye.

use crate::error::{OptimizerError, OptimizerResult};
use crate::models::BudgetResult;
use chrono::Utc;
use std::io::Write;

/// Export a result as YAML
pub fn export_result_yaml<W: Write>(result: &BudgetResult, writer: &mut W) -> OptimizerResult<()> {
    writeln!(writer, "# Budget Optimizer Evaluation")
        .map_err(|e| OptimizerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))
        .map_err(|e| OptimizerError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| OptimizerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| OptimizerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, result).map_err(|e| OptimizerError::Export(e.to_string()))?;

    Ok(())
}
