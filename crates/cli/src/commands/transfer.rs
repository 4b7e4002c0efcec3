// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backup export and import

use crate::adapters::{require_configured, CliPersistence};
use crate::error::ChopsError;
use anyhow::{Context, Result};
use chops_core::Backup;
use chrono::Utc;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct ExportArgs {
    /// File to write, or a directory to write a dated backup into.
    /// Prints to stdout when omitted.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Backup file written by `chops export`
    pub file: PathBuf,
}

pub async fn export(args: ExportArgs, persistence: &CliPersistence) -> Result<()> {
    require_configured(persistence)?;

    let state = persistence.bind_practice();
    state.loaded().await;
    let now = Utc::now();
    let json = state.export(now).to_pretty_json()?;

    match args.output {
        None => println!("{}", json),
        Some(output) => {
            let path = backup_path(&output, now.date_naive());
            std::fs::write(&path, format!("{}\n", json))
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
    }
    Ok(())
}

pub async fn import(args: ImportArgs, persistence: &CliPersistence) -> Result<()> {
    require_configured(persistence)?;

    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let backup = Backup::parse(&text).map_err(|e| ChopsError::invalid_backup(&args.file, e))?;

    let state = persistence.bind_practice();
    state.loaded().await;
    state
        .import(&backup)
        .map_err(|e| ChopsError::invalid_backup(&args.file, e))?;

    println!("Imported {}", args.file.display());
    Ok(())
}

fn backup_path(output: &Path, date: chrono::NaiveDate) -> PathBuf {
    if output.is_dir() {
        output.join(Backup::file_name(date))
    } else {
        output.to_path_buf()
    }
}
