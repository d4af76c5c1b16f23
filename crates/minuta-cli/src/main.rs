//! Minuta CLI entry point.
//!
//! Binary name: `minuta`
//!
//! Parses CLI arguments, loads configuration and the stored history,
//! then dispatches to the appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,minuta=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Initialize application state (config, history)
    let mut state = AppState::init().await?;

    match cli.command {
        Commands::Draft {
            objective,
            party_a,
            party_b,
            tone,
            clauses,
        } => {
            cli::draft::run(
                &mut state,
                objective,
                party_a,
                party_b,
                &tone,
                clauses,
                cli.json,
                cli.quiet,
            )
            .await?;
        }

        Commands::Chat { contract } => {
            cli::chat::run(&mut state, contract.as_deref(), cli.quiet).await?;
        }

        Commands::List => {
            cli::history::list(&state, cli.json)?;
        }

        Commands::Show { contract } => {
            cli::history::show(&state, &contract, cli.json)?;
        }

        Commands::Save { contract, file } => {
            cli::history::save(&mut state, &contract, &file, cli.json).await?;
        }

        Commands::Export { contract, out } => {
            cli::export::run(&state, &contract, out, cli.json).await?;
        }
    }

    Ok(())
}
