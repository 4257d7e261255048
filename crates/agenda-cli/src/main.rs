//! Agenda CLI - browse and search the conference agenda from the terminal
//!
//! Works against a local dataset file or a running agenda API.

mod cli;
mod commands;
mod error;


use agenda_core::client::SessionQuery;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::common::{resolve_api_url, resolve_data_path, Backend};
use crate::commands::completions::run_completions;
use crate::commands::locations::run_locations;
use crate::commands::rate::run_rate;
use crate::commands::sessions::{run_session, run_sessions};
use crate::commands::speakers::run_speakers;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("agenda_cli=warn,agenda_core=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help().map_err(CliError::Io)?;
        println!();
        return Ok(());
    };

    if let Commands::Completions { shell, output } = &command {
        return run_completions(*shell, output.as_deref());
    }

    let data_path = resolve_data_path(cli.data);
    let api_url = resolve_api_url(cli.api_url);
    let backend = Backend::open(&data_path, api_url.as_deref())?;

    match command {
        Commands::Sessions {
            search,
            title,
            tag,
            limit,
            json,
        } => {
            let query = SessionQuery {
                id: None,
                title,
                tag,
                search,
            };
            run_sessions(&backend, &query, limit, json).await?;
        }
        Commands::Session { id, json } => run_session(&backend, &id, json).await?,
        Commands::Speakers { name, json } => {
            run_speakers(&backend, name.as_deref(), json).await?;
        }
        Commands::Locations { name, json } => {
            run_locations(&backend, name.as_deref(), json).await?;
        }
        Commands::Rate { id, rating } => run_rate(&backend, &id, rating).await?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
