mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `order` and `build --stdout` output stays clean
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let layout = cli.command.layout();
    match &cli.command {
        Commands::Build {
            dry_run, stdout, ..
        } => {
            commands::Build::execute(&cli, layout, *dry_run, *stdout)
                .context("Failed to execute build command")?;
        }
        Commands::Order { .. } => {
            commands::Order::execute(&cli, layout).context("Failed to execute order command")?;
        }
        Commands::Check { .. } => {
            commands::Check::execute(&cli, layout).context("Failed to execute check command")?;
        }
        Commands::Config { .. } => {
            commands::Config::execute(&cli, layout)
                .context("Failed to execute config command")?;
        }
    }

    Ok(())
}
