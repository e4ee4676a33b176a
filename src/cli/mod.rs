//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the evaluator and its
//! supporting layers.

pub mod evaluate;
pub mod fso;
pub mod history;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::{Args, ValueEnum};
use tracing::warn;

use crate::audit::{AuditEntry, AuditLogger, EvaluationSource};
use crate::config::{OptimizerPaths, Settings};
use crate::error::{OptimizerError, OptimizerResult};
use crate::models::{BudgetInput, BudgetResult};

pub use evaluate::{handle_evaluate_command, EvaluateArgs};
pub use fso::{handle_fso_command, FsoCommands};
pub use history::{handle_history_command, HistoryArgs};

/// Output format for evaluation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
    Csv,
}

/// Per-run overrides of the saved settings
#[derive(Args, Debug, Clone, Default)]
pub struct PolicyArgs {
    /// Currency symbol for messages (overrides settings)
    #[arg(long)]
    pub currency: Option<String>,

    /// Discretionary share of income before flagging (e.g. 0.30)
    #[arg(long)]
    pub discretionary_limit: Option<f64>,

    /// Fixed-expense share of income before flagging (e.g. 0.50)
    #[arg(long)]
    pub fixed_limit: Option<f64>,

    /// Surplus share of income below which it counts as thin (e.g. 0.10)
    #[arg(long)]
    pub surplus_buffer: Option<f64>,
}

impl PolicyArgs {
    /// Apply the overrides on top of saved settings
    pub fn apply(&self, settings: &Settings) -> OptimizerResult<Settings> {
        let mut settings = settings.clone();

        if let Some(symbol) = &self.currency {
            settings.currency_symbol = symbol.clone();
        }

        let thresholds = &mut settings.thresholds;
        let overrides = [
            (
                "--discretionary-limit",
                self.discretionary_limit,
                &mut thresholds.discretionary_limit,
            ),
            (
                "--fixed-limit",
                self.fixed_limit,
                &mut thresholds.fixed_cost_limit,
            ),
            (
                "--surplus-buffer",
                self.surplus_buffer,
                &mut thresholds.surplus_buffer,
            ),
        ];
        for (flag, value, slot) in overrides {
            if let Some(ratio) = value {
                if !ratio.is_finite() {
                    return Err(OptimizerError::Validation(format!(
                        "{} must be a finite ratio, got {}",
                        flag, ratio
                    )));
                }
                *slot = ratio;
            }
        }

        Ok(settings)
    }
}

/// Append an evaluation to the history log if enabled
///
/// A history write failure never fails the evaluation itself. Entries with
/// infinite or NaN figures are skipped, since they could not be read back.
pub(crate) fn record_evaluation(
    paths: &OptimizerPaths,
    settings: &Settings,
    skip: bool,
    source: EvaluationSource,
    input: &BudgetInput,
    result: &BudgetResult,
) {
    if skip || !settings.history_enabled {
        return;
    }

    let logger = AuditLogger::new(paths.history_log());
    let entry = AuditEntry::evaluation(source, *input, result.clone());
    if !entry.has_finite_figures() {
        warn!(id = %entry.id, "not recording evaluation with non-finite figures");
        return;
    }
    if let Err(e) = logger.log(&entry) {
        warn!(error = %e, "could not record evaluation history");
    }
}

/// Open the output destination: a file when given, stdout otherwise
pub(crate) fn open_output(path: Option<&Path>) -> OptimizerResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                OptimizerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}
