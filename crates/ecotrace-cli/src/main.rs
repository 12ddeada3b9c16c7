use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "ecotrace-cli", version, about = "EcoTrace carbon footprint CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive questionnaire
    Wizard(commands::wizard::WizardArgs),
    /// Score answers given on the command line
    Score(commands::score::ScoreArgs),
    /// List the question catalog
    Questions(commands::questions::QuestionsArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Logs go to stderr so stdout stays parseable. Filter with ECOTRACE_LOG.
fn init_logging() {
    let filter = EnvFilter::try_from_env("ECOTRACE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Wizard(args) => commands::wizard::run(args),
        Commands::Score(args) => commands::score::run(args),
        Commands::Questions(args) => commands::questions::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
