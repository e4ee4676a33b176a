//! CLI commands for financial state objects

use std::io::Write;
use std::path::PathBuf;

use clap::Subcommand;
use serde_json::Value;
use tracing::info;

use super::{open_output, record_evaluation, PolicyArgs};
use crate::audit::EvaluationSource;
use crate::config::{OptimizerPaths, Settings};
use crate::error::{OptimizerError, OptimizerResult};
use crate::export::export_value_json;
use crate::fso::merge_budget_analysis;

/// Financial state object subcommands
#[derive(Subcommand, Debug)]
pub enum FsoCommands {
    /// Evaluate the document's figures and write it back with a budget_analysis_summary
    Merge {
        /// Path to the financial state object (JSON)
        file: PathBuf,

        /// Write the updated document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        policy: PolicyArgs,

        /// Do not record this evaluation in the history log
        #[arg(long)]
        no_history: bool,
    },
}

/// Handle financial state object commands
pub fn handle_fso_command(
    paths: &OptimizerPaths,
    settings: &Settings,
    cmd: FsoCommands,
) -> OptimizerResult<()> {
    match cmd {
        FsoCommands::Merge {
            file,
            output,
            policy,
            no_history,
        } => {
            let settings = policy.apply(settings)?;

            let contents = std::fs::read_to_string(&file).map_err(|e| {
                OptimizerError::Io(format!("Failed to read {}: {}", file.display(), e))
            })?;
            let document: Value = serde_json::from_str(&contents).map_err(|e| {
                OptimizerError::Fso(format!("{} is not valid JSON: {}", file.display(), e))
            })?;

            let merged = merge_budget_analysis(&document, &settings.evaluator())?;
            info!(
                status = %merged.summary.cash_flow_status,
                suggestions = merged.summary.optimization_suggestions.len(),
                "merged budget analysis"
            );

            record_evaluation(
                paths,
                &settings,
                no_history,
                EvaluationSource::Fso,
                &merged.input,
                &merged.result,
            );

            let mut writer = open_output(output.as_deref())?;
            export_value_json(&merged.document, &mut writer, true)?;
            writer.flush()?;

            Ok(())
        }
    }
}
