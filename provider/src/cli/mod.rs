//! CLI module for healthchecksio-provider
//!
//! 状態をJSONファイルで受け渡しする簡易オーケストレーションドライバ。

pub mod channel;
pub mod check;

use crate::client::{self, HealthchecksApi};
use crate::config::resolve_provider_config;
use crate::error::ProviderResult;
use crate::resources::{ChannelDataSource, HealthcheckResource};
use crate::schema::provider_schema;
use clap::{Parser, Subcommand};
use healthchecksio_common::config::ProviderSettings;
use serde_json::Value;
use std::sync::Arc;

/// healthchecks.io provider - reconcile checks against the healthchecks.io management API
#[derive(Parser, Debug)]
#[command(name = "healthchecksio-provider")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    HEALTHCHECKSIO_API_KEY               API key (used when --api-key is not given)
    HEALTHCHECKSIO_API_URL               API base URL (default: https://healthchecks.io/api/v1/)
    HEALTHCHECKSIO_REQUEST_TIMEOUT_SECS  HTTP request timeout (default: 30)
    HEALTHCHECKSIO_LOG_LEVEL             Log filter (default: info)
"#)]
pub struct Cli {
    /// healthchecks.io API key
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// healthchecks.io API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, global = true)]
    pub request_timeout_secs: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// 明示的に指定されたプロバイダ設定
    pub fn settings(&self) -> ProviderSettings {
        ProviderSettings {
            api_key: self.api_key.clone(),
            api_url: self.api_url.clone(),
            request_timeout_secs: self.request_timeout_secs,
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage healthchecksio_check resources
    Check(check::CheckArgs),
    /// Look up a healthchecksio_channel
    Channel(channel::ChannelArgs),
    /// Print the provider schema
    Schema,
}

/// コマンドを実行し、標準出力に書き出すJSONを返す
pub async fn run(cli: Cli) -> Result<Value, anyhow::Error> {
    let settings = cli.settings();
    match cli.command {
        Commands::Check(args) => {
            let resource = HealthcheckResource::new(connect(settings)?);
            check::execute(&resource, &args.command).await
        }
        Commands::Channel(args) => {
            let source = ChannelDataSource::new(connect(settings)?);
            channel::execute(&source, &args).await
        }
        Commands::Schema => Ok(serde_json::to_value(provider_schema())?),
    }
}

/// 設定を解決してAPIクライアントを構築する
fn connect(settings: ProviderSettings) -> ProviderResult<Arc<dyn HealthchecksApi>> {
    let config = resolve_provider_config(settings)?;
    client::configure(&config)
}
