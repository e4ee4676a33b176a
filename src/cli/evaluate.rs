//! CLI command for evaluating a month of figures
//!
//! Figures come either from flags or from a JSON file using the
//! `*_inr` parameter names.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use super::{open_output, record_evaluation, OutputFormat, PolicyArgs};
use crate::audit::EvaluationSource;
use crate::config::{OptimizerPaths, Settings};
use crate::display::format_result;
use crate::error::{OptimizerError, OptimizerResult};
use crate::export::{export_result_csv, export_result_json, export_result_yaml};
use crate::models::{BudgetInput, BudgetResult};

/// Arguments for `evaluate`
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Monthly take-home income
    #[arg(long, allow_hyphen_values = true, required_unless_present = "input")]
    pub income: Option<f64>,

    /// Fixed expenses (rent, EMIs, insurance)
    #[arg(long, allow_hyphen_values = true, required_unless_present = "input")]
    pub fixed: Option<f64>,

    /// Variable expenses (utilities, groceries, fuel)
    #[arg(long, allow_hyphen_values = true, required_unless_present = "input")]
    pub variable: Option<f64>,

    /// Discretionary spending (dining, entertainment, shopping)
    #[arg(long, allow_hyphen_values = true, required_unless_present = "input")]
    pub discretionary: Option<f64>,

    /// Monthly savings target
    #[arg(long, allow_hyphen_values = true)]
    pub target: Option<f64>,

    /// Read figures from a JSON file instead of flags
    #[arg(
        short,
        long,
        conflicts_with_all = ["income", "fixed", "variable", "discretionary", "target"]
    )]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Do not record this evaluation in the history log
    #[arg(long)]
    pub no_history: bool,
}

impl EvaluateArgs {
    fn budget_input(&self) -> OptimizerResult<(BudgetInput, EvaluationSource)> {
        if let Some(path) = &self.input {
            return Ok((read_input_file(path)?, EvaluationSource::InputFile));
        }

        let figure = |value: Option<f64>, flag: &str| {
            value.ok_or_else(|| OptimizerError::Validation(format!("{} is required", flag)))
        };

        let input = BudgetInput::new(
            figure(self.income, "--income")?,
            figure(self.fixed, "--fixed")?,
            figure(self.variable, "--variable")?,
            figure(self.discretionary, "--discretionary")?,
        )
        .with_target_savings(self.target.unwrap_or(0.0));

        Ok((input, EvaluationSource::Arguments))
    }
}

/// Read a BudgetInput JSON file
pub fn read_input_file(path: &Path) -> OptimizerResult<BudgetInput> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        OptimizerError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        OptimizerError::Json(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write a result in the requested format
pub fn write_result<W: Write>(
    result: &BudgetResult,
    format: OutputFormat,
    symbol: &str,
    writer: &mut W,
) -> OptimizerResult<()> {
    match format {
        OutputFormat::Text => {
            write!(writer, "{}", format_result(result, symbol))?;
            Ok(())
        }
        OutputFormat::Json => export_result_json(result, writer, true),
        OutputFormat::Yaml => export_result_yaml(result, writer),
        OutputFormat::Csv => export_result_csv(result, writer),
    }
}

/// Handle the evaluate command
pub fn handle_evaluate_command(
    paths: &OptimizerPaths,
    settings: &Settings,
    args: EvaluateArgs,
) -> OptimizerResult<()> {
    let settings = args.policy.apply(settings)?;
    let (input, source) = args.budget_input()?;

    debug!(?source, ?input, "evaluating budget");
    let result = settings.evaluator().evaluate(&input);

    record_evaluation(paths, &settings, args.no_history, source, &input, &result);

    let mut writer = open_output(args.output.as_deref())?;
    write_result(&result, args.format, &settings.currency_symbol, &mut writer)?;
    writer.flush()?;

    if let Some(path) = &args.output {
        eprintln!("Wrote evaluation to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::evaluate;
    use tempfile::TempDir;

    #[test]
    fn test_read_input_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.json");
        std::fs::write(
            &path,
            r#"{"monthly_net_income_inr": 100000, "fixed_expenses_inr": 40000,
                "variable_expenses_inr": 20000, "discretionary_spending_inr": 10000}"#,
        )
        .unwrap();

        let input = read_input_file(&path).unwrap();
        assert_eq!(input, BudgetInput::new(100000.0, 40000.0, 20000.0, 10000.0));
    }

    #[test]
    fn test_read_input_file_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.json");
        std::fs::write(&path, r#"{"monthly_net_income_inr": 100000}"#).unwrap();

        let err = read_input_file(&path).unwrap_err();
        assert!(matches!(err, OptimizerError::Json(_)));
    }

    #[test]
    fn test_write_result_formats() {
        let result = evaluate(60000.0, 35000.0, 5000.0, 5000.0, 0.0);

        for (format, needle) in [
            (OutputFormat::Text, "Optimization areas:"),
            (OutputFormat::Json, "\"net_cash_flow_inr\": 15000.0"),
            (OutputFormat::Yaml, "net_cash_flow_inr: 15000.0"),
            (OutputFormat::Csv, "net_cash_flow_inr,15000.00"),
        ] {
            let mut output = Vec::new();
            write_result(&result, format, "₹", &mut output).unwrap();
            let text = String::from_utf8(output).unwrap();
            assert!(text.contains(needle), "{:?} output missing {}", format, needle);
        }
    }
}
