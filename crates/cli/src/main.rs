// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow unwrap in test code
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! chops - practice log storage CLI

mod adapters;
mod commands;
mod completions;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{data, storage, transfer};
use completions::CompletionsArgs;
use error::ChopsError;
use output::OutputFormat;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "chops",
    version,
    about = "Chops - build your skills, track your progress"
)]
struct Cli {
    /// Keep each slice under its own key instead of in a data folder
    #[arg(long, global = true)]
    local_storage: bool,

    /// Output format for status
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Storage location management
    Storage(storage::StorageArgs),
    /// Print a slice as JSON
    Get(data::GetArgs),
    /// Set a slice from JSON
    Set(data::SetArgs),
    /// Write a backup of the practice log
    Export(transfer::ExportArgs),
    /// Replace practice data from a backup
    Import(transfer::ImportArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ChopsError>() {
                Some(err) => eprint!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Commands::Completions(args) = cli.command {
        completions::generate_completions::<Cli>(args.shell);
        return Ok(());
    }

    let persistence = adapters::open(cli.local_storage).await?;

    let result = match cli.command {
        Commands::Storage(args) => storage::handle(args.command, &persistence, cli.format).await,
        Commands::Get(args) => data::get(args, &persistence).await,
        Commands::Set(args) => data::set(args, &persistence).await,
        Commands::Export(args) => transfer::export(args, &persistence).await,
        Commands::Import(args) => transfer::import(args, &persistence).await,
        Commands::Completions(_) => Ok(()),
    };

    // Pending changes are written before the process exits
    persistence.shutdown().await;
    result
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
