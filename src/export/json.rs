//! JSON export
//!
//! Writes a result with the six `*_inr` keys existing callers consume.

use crate::error::{OptimizerError, OptimizerResult};
use crate::models::BudgetResult;
use serde::Serialize;
use std::io::Write;

/// Export a result as JSON
pub fn export_result_json<W: Write>(
    result: &BudgetResult,
    writer: &mut W,
    pretty: bool,
) -> OptimizerResult<()> {
    export_value_json(result, writer, pretty)
}

/// Export any serializable document (e.g. a merged financial state object)
pub fn export_value_json<T: Serialize + ?Sized, W: Write>(
    value: &T,
    writer: &mut W,
    pretty: bool,
) -> OptimizerResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)
    } else {
        serde_json::to_writer(&mut *writer, value)
    }
    .map_err(|e| OptimizerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| OptimizerError::Export(e.to_string()))?;
    Ok(())
}
