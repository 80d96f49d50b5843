//! `channel` サブコマンド

use crate::resources::{ChannelDataSource, ChannelQuery};
use anyhow::Result;
use clap::Args;
use serde_json::Value;

/// Arguments for the `channel` subcommand
#[derive(Args, Debug)]
pub struct ChannelArgs {
    /// Channel kind (e.g. email, slack)
    #[arg(long)]
    pub kind: String,

    /// Channel name; when empty the first channel of `kind` is returned
    #[arg(long, default_value = "")]
    pub name: String,
}

/// Look up a channel and return the JSON to print (`null` when nothing matches)
pub async fn execute(source: &ChannelDataSource, args: &ChannelArgs) -> Result<Value> {
    let query = ChannelQuery {
        name: args.name.clone(),
        kind: args.kind.clone(),
    };
    let found = source.read(&query).await?;
    Ok(serde_json::to_value(found)?)
}
