//! CSV export
//!
//! Writes a result as `metric,value` rows, followed by one row per
//! optimization area, for spreadsheet use.

use crate::error::{OptimizerError, OptimizerResult};
use crate::models::BudgetResult;
use std::io::Write;

/// Export a result to CSV
pub fn export_result_csv<W: Write>(result: &BudgetResult, writer: &mut W) -> OptimizerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let rows = [
        ("total_monthly_net_income_inr", format!("{:.2}", result.total_income)),
        ("total_monthly_expenses_inr", format!("{:.2}", result.total_expenses)),
        ("net_cash_flow_inr", format!("{:.2}", result.net_cash_flow)),
        ("goal_funding_status", result.goal_funding_status.to_string()),
        ("funding_shortfall_inr", format!("{:.2}", result.funding_shortfall)),
    ];

    csv_writer
        .write_record(["metric", "value"])
        .map_err(|e| OptimizerError::Export(e.to_string()))?;

    for (metric, value) in rows.iter() {
        csv_writer
            .write_record([*metric, value.as_str()])
            .map_err(|e| OptimizerError::Export(e.to_string()))?;
    }

    for area in &result.optimization_areas {
        csv_writer
            .write_record(["optimization_area", area.as_str()])
            .map_err(|e| OptimizerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| OptimizerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::evaluate;

    #[test]
    fn test_csv_export() {
        let result = evaluate(50000.0, 20000.0, 10000.0, 25000.0, 5000.0);
        let mut output = Vec::new();
        export_result_csv(&result, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "metric,value");
        assert_eq!(lines[1], "total_monthly_net_income_inr,50000.00");
        assert_eq!(lines[3], "net_cash_flow_inr,-5000.00");
        assert_eq!(lines[4], "goal_funding_status,Shortfall");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_csv_quotes_messages() {
        let result = evaluate(50000.0, 20000.0, 10000.0, 25000.0, 5000.0);
        let mut output = Vec::new();
        export_result_csv(&result, &mut output).unwrap();

        let mut reader = csv::Reader::from_reader(output.as_slice());
        let areas: Vec<String> = reader
            .records()
            .map(|r| r.unwrap())
            .filter(|r| &r[0] == "optimization_area")
            .map(|r| r[1].to_string())
            .collect();

        assert_eq!(areas, result.optimization_areas);
    }
}
