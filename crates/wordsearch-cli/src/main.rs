mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod render;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!(
        "🚀 wordsearch CLI v{} starting up.",
        env!("CARGO_PKG_VERSION")
    );
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = match cli.command {
        Commands::Generate(args) => {
            info!("Dispatching to 'generate' command.");
            commands::generate::run(args, cli.quiet)
        }
        Commands::Verify(args) => {
            info!("Dispatching to 'verify' command.");
            commands::verify::run(args)
        }
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
