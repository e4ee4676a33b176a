//! CLI command for the evaluation history

use clap::Args;

use crate::audit::AuditLogger;
use crate::config::{OptimizerPaths, Settings};
use crate::display::format_history;
use crate::error::OptimizerResult;

/// Arguments for `history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of most recent evaluations to show
    #[arg(short, long, default_value = "10")]
    pub count: usize,
}

/// Handle the history command
pub fn handle_history_command(
    paths: &OptimizerPaths,
    settings: &Settings,
    args: HistoryArgs,
) -> OptimizerResult<()> {
    let logger = AuditLogger::new(paths.history_log());
    let entries = logger.read_recent(args.count)?;

    println!("{}", format_history(&entries, &settings.currency_symbol));

    let total = logger.entry_count()?;
    if total > entries.len() {
        println!("Showing {} of {} evaluations.", entries.len(), total);
    }

    Ok(())
}
