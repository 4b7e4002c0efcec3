// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Storage location commands

use crate::adapters::{user_error, CliPersistence};
use crate::output::{self, OutputFormat};
use anyhow::Result;
use chops_core::Location;
use chops_engine::StorageStatus;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct StorageArgs {
    #[command(subcommand)]
    pub command: StorageCommand,
}

#[derive(Subcommand)]
pub enum StorageCommand {
    /// Show where practice data is stored
    Status,
    /// Store data in PATH, or the default folder when omitted
    Setup {
        /// Folder for the practice log
        path: Option<PathBuf>,
    },
    /// Choose a folder interactively
    Choose,
    /// Copy the practice log to PATH and use it from now on
    Migrate {
        /// New folder for the practice log
        path: PathBuf,
    },
    /// Forget the configured folder (the data stays on disk)
    Reset,
}

#[derive(Serialize)]
#[serde(transparent)]
struct StatusReport(StorageStatus);

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = &self.0;
        writeln!(f, "mode:       {}", status.mode)?;
        writeln!(
            f,
            "configured: {}",
            if status.configured { "yes" } else { "no" }
        )?;
        match &status.location {
            Some(location) => writeln!(f, "location:   {}", location),
            None => writeln!(f, "location:   -"),
        }
    }
}

pub async fn handle(
    command: StorageCommand,
    persistence: &CliPersistence,
    format: OutputFormat,
) -> Result<()> {
    match command {
        StorageCommand::Status => {
            output::print(&StatusReport(persistence.status()), format);
        }
        StorageCommand::Setup { path } => {
            let custom = path.as_deref().map(absolute).transpose()?;
            let location = persistence.setup(custom).await.map_err(user_error)?;
            println!("Storage configured: {}", location);
        }
        StorageCommand::Choose => match persistence.choose_folder().await.map_err(user_error)? {
            Some(location) => println!("Storage configured: {}", location),
            None => println!("No folder chosen"),
        },
        StorageCommand::Migrate { path } => {
            let target = absolute(&path)?;
            persistence.migrate(&target).await.map_err(user_error)?;
            println!("Practice data moved to {}", target);
        }
        StorageCommand::Reset => {
            persistence.reset().await.map_err(user_error)?;
            println!("Storage configuration reset");
        }
    }
    Ok(())
}

/// Resolve a command-line path against the working directory
fn absolute(path: &Path) -> Result<Location> {
    if path.is_absolute() {
        return Ok(Location::new(path));
    }
    Ok(Location::new(std::env::current_dir()?.join(path)))
}
