// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read and write individual slices

use crate::adapters::{require_configured, CliPersistence};
use crate::error::ChopsError;
use anyhow::Result;
use chops_core::slice;
use clap::Args;
use serde_json::Value;

#[derive(Args)]
pub struct GetArgs {
    /// Slice name, e.g. practiceItems
    pub key: String,
}

#[derive(Args)]
pub struct SetArgs {
    /// Slice name, e.g. colorTheme
    pub key: String,
    /// New value as JSON
    pub value: String,
}

/// Print a slice's value, or its default when nothing is stored
pub async fn get(args: GetArgs, persistence: &CliPersistence) -> Result<()> {
    require_configured(persistence)?;

    let default = slice::lookup(&args.key)
        .map(|known| known.default_value())
        .unwrap_or(Value::Null);
    let binding = persistence.bind(&args.key, default);
    binding.loaded().await;

    println!("{}", serde_json::to_string_pretty(&binding.get())?);
    Ok(())
}

/// Replace a known slice's value
pub async fn set(args: SetArgs, persistence: &CliPersistence) -> Result<()> {
    require_configured(persistence)?;

    let value: Value = serde_json::from_str(&args.value)
        .map_err(|e| ChopsError::invalid_json(&args.key, e))?;

    let state = persistence.bind_practice();
    state.loaded().await;
    state
        .set(&args.key, value)
        .map_err(ChopsError::invalid_value)?;

    tracing::info!(key = %args.key, "slice updated");
    println!("Saved {}", args.key);
    Ok(())
}
