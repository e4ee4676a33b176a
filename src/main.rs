use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budget_optimizer::cli::{
    handle_evaluate_command, handle_fso_command, handle_history_command, EvaluateArgs,
    FsoCommands, HistoryArgs,
};
use budget_optimizer::config::{OptimizerPaths, Settings};

#[derive(Parser)]
#[command(
    name = "budget-optimizer",
    author = "Kaylee Beyene",
    version,
    about = "Cash-flow evaluation with rule-of-thumb budget suggestions",
    long_about = "budget-optimizer checks a month of income and spending against the \
                  50/30/20 rule of thumb. It reports net cash flow, whether a savings \
                  target is funded, and where spending could be trimmed."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate income and expenses for one month
    #[command(alias = "eval")]
    Evaluate(EvaluateArgs),

    /// Financial state object commands
    #[command(subcommand)]
    Fso(FsoCommands),

    /// Show recent evaluations
    History(HistoryArgs),

    /// Write default settings to the config directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let paths = OptimizerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Evaluate(args)) => {
            handle_evaluate_command(&paths, &settings, args)?;
        }
        Some(Commands::Fso(cmd)) => {
            handle_fso_command(&paths, &settings, cmd)?;
        }
        Some(Commands::History(args)) => {
            handle_history_command(&paths, &settings, args)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Budget Optimizer Configuration");
            println!("==============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("History log:      {}", paths.history_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Discretionary limit:  {}", settings.thresholds.discretionary_limit);
            println!("  Fixed-cost limit:     {}", settings.thresholds.fixed_cost_limit);
            println!("  Surplus buffer:       {}", settings.thresholds.surplus_buffer);
            println!("  History enabled:      {}", settings.history_enabled);
        }
        None => {
            println!("budget-optimizer - rule-of-thumb cash-flow evaluation");
            println!();
            println!("Run 'budget-optimizer --help' for usage information.");
            println!("Run 'budget-optimizer evaluate --help' to get started.");
        }
    }

    Ok(())
}
