//! `check` サブコマンド
//!
//! desired state / prior state はJSONファイルで受け取り、結果の状態を返す。

use crate::resources::{CheckConfig, CheckState, HealthcheckResource};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// Arguments for the `check` subcommand
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Check operation to perform
    #[command(subcommand)]
    pub command: CheckCommand,
}

/// Check operations
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Create a check from a desired-state JSON file
    Create {
        /// Desired state file
        #[arg(long)]
        config: PathBuf,
    },
    /// Read the current state of a check
    Read {
        /// Prior state file (needs at least `id`)
        #[arg(long)]
        state: PathBuf,
    },
    /// Update a check when a tracked attribute changed, then re-read it
    Update {
        /// Prior state file
        #[arg(long)]
        state: PathBuf,
        /// Desired state file
        #[arg(long)]
        config: PathBuf,
    },
    /// Delete a check
    Delete {
        /// Check ID
        #[arg(long)]
        id: String,
    },
    /// Import an existing check by ID
    Import {
        /// Check ID
        #[arg(long)]
        id: String,
    },
}

/// `read` に必要な最小限の prior state
#[derive(Debug, Deserialize)]
struct StateRef {
    id: String,
    #[serde(default)]
    channels: Vec<String>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Execute a check operation and return the JSON to print
pub async fn execute(resource: &HealthcheckResource, command: &CheckCommand) -> Result<Value> {
    match command {
        CheckCommand::Create { config } => {
            let desired: CheckConfig = read_json(config)?;
            let state = resource.create(&desired).await?;
            Ok(serde_json::to_value(state)?)
        }
        CheckCommand::Read { state } => {
            let prior: StateRef = read_json(state)?;
            let current = resource.read(&prior.id, &prior.channels).await?;
            Ok(serde_json::to_value(current)?)
        }
        CheckCommand::Update { state, config } => {
            let prior: CheckState = read_json(state)?;
            let desired: CheckConfig = read_json(config)?;
            let current = resource.update(&prior, &desired).await?;
            Ok(serde_json::to_value(current)?)
        }
        CheckCommand::Delete { id } => {
            resource.delete(id).await?;
            Ok(json!({ "id": id, "deleted": true }))
        }
        CheckCommand::Import { id } => {
            let current = resource.import(id).await?;
            Ok(serde_json::to_value(current)?)
        }
    }
}
