use clap::Parser;

use calcgreet::Settings;
use calcgreet::cli::commands::{calc, demo, greet, init};
use calcgreet::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        // An explicit path that cannot be loaded is fatal
        Some(path) => Settings::load_file(path).unwrap_or_else(|e| {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }),
        None => Settings::load().unwrap_or_else(|e| {
            eprintln!("Configuration error: {e}");
            eprintln!("Using default configuration for now.");
            Settings::default()
        }),
    };

    calcgreet::logging::init_with_config(&config.logging);
    tracing::debug!(command = ?cli.effective_command(), "dispatching");

    match cli.effective_command() {
        Commands::Demo => demo::run_demo(),
        Commands::Calc { op, a, b } => calc::run_calc(*op, *a, *b),
        Commands::Greet { name } => greet::run_greet(name.as_deref(), &config),
        Commands::Init { force } => init::run_init(*force),
        Commands::Config => init::run_config(&config),
    }
}
