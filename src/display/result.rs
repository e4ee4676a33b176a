//! Evaluation result display formatting
//!
//! Formats a budget result for terminal output.

use crate::models::money::format_amount;
use crate::models::BudgetResult;

const WIDTH: usize = 44;

/// Format a result as a labelled summary followed by numbered suggestions
pub fn format_result(result: &BudgetResult, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Budget Evaluation\n");
    output.push_str(&"═".repeat(WIDTH));
    output.push('\n');

    output.push_str(&summary_line(
        "Monthly net income",
        &format_amount(result.total_income, symbol),
    ));
    output.push_str(&summary_line(
        "Total expenses",
        &format_amount(result.total_expenses, symbol),
    ));
    output.push_str(&summary_line(
        "Net cash flow",
        &format_amount(result.net_cash_flow, symbol),
    ));

    let status = if result.goal_funding_status.is_on_track() {
        result.goal_funding_status.to_string()
    } else {
        format!(
            "{} ({} short)",
            result.goal_funding_status,
            format_amount(result.funding_shortfall, symbol)
        )
    };
    output.push_str(&summary_line("Goal funding", &status));

    output.push_str(&"─".repeat(WIDTH));
    output.push('\n');

    if result.is_clean() {
        output.push_str("No optimization areas found. Spending is within guidelines.\n");
    } else {
        output.push_str("Optimization areas:\n");
        for (i, area) in result.optimization_areas.iter().enumerate() {
            // Messages carry markdown emphasis for chat surfaces
            output.push_str(&format!("  {}. {}\n", i + 1, area.replace("**", "")));
        }
    }

    output
}

fn summary_line(label: &str, value: &str) -> String {
    format!("{:<20} {:>23}\n", label, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::evaluate;

    #[test]
    fn test_format_deficit() {
        let result = evaluate(50000.0, 20000.0, 10000.0, 25000.0, 5000.0);
        let output = format_result(&result, "₹");

        assert!(output.contains("Net cash flow"));
        assert!(output.contains("-₹5,000.00"));
        assert!(output.contains("Shortfall (₹10,000.00 short)"));
        assert!(output.contains("  1. You are running a monthly deficit of ₹5,000.00."));
        assert!(output.contains("  2. Your discretionary"));
        assert!(!output.contains("**"));
    }

    #[test]
    fn test_format_clean_budget() {
        let result = evaluate(100000.0, 40000.0, 20000.0, 10000.0, 0.0);
        let output = format_result(&result, "$");

        assert!(output.contains("$100,000.00"));
        assert!(output.contains("On track"));
        assert!(output.contains("No optimization areas found."));
    }
}
