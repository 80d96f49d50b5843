//! CLIサブコマンドのファイル入出力

use crate::support::fake_api::FakeHealthchecksApi;
use clap::Parser;
use healthchecksio_common::types::Channel;
use healthchecksio_provider::cli::{self, channel::ChannelArgs, check::CheckCommand, Cli};
use healthchecksio_provider::resources::{ChannelDataSource, HealthcheckResource};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

fn write_json(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
    path
}

#[test]
fn help_and_version_are_available() {
    let err = Cli::try_parse_from(["healthchecksio-provider", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

    let err = Cli::try_parse_from(["healthchecksio-provider", "--version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[test]
fn update_requires_state_and_config() {
    let result = Cli::try_parse_from([
        "healthchecksio-provider",
        "check",
        "update",
        "--state",
        "prior.json",
    ]);
    assert!(result.is_err());
}

#[tokio::test]
async fn create_read_update_delete_through_files() {
    let api = Arc::new(FakeHealthchecksApi::new());
    let resource = HealthcheckResource::new(api.clone());
    let dir = TempDir::new().unwrap();

    let config = write_json(
        &dir,
        "desired.json",
        &json!({ "name": "api", "tags": ["web"], "description": "public api" }),
    );
    let created = cli::check::execute(&resource, &CheckCommand::Create { config: config.clone() })
        .await
        .unwrap();
    assert_eq!(created["name"], "api");
    assert_eq!(created["desc"], "public api");
    let id = created["id"].as_str().unwrap().to_string();

    let state = write_json(&dir, "state.json", &created);
    let read = cli::check::execute(&resource, &CheckCommand::Read { state: state.clone() })
        .await
        .unwrap();
    assert_eq!(read, created);

    let updated = cli::check::execute(&resource, &CheckCommand::Update { state, config })
        .await
        .unwrap();
    assert_eq!(updated, created);
    assert_eq!(api.calls.update(), 0);

    let deleted = cli::check::execute(&resource, &CheckCommand::Delete { id: id.clone() })
        .await
        .unwrap();
    assert_eq!(deleted, json!({ "id": id, "deleted": true }));

    let gone = cli::check::execute(&resource, &CheckCommand::Import { id })
        .await
        .unwrap();
    assert_eq!(gone, Value::Null);
}

#[tokio::test]
async fn read_accepts_minimal_state() {
    let api = Arc::new(FakeHealthchecksApi::new());
    let resource = HealthcheckResource::new(api);
    let dir = TempDir::new().unwrap();

    let state = write_json(&dir, "state.json", &json!({ "id": "missing" }));
    let output = cli::check::execute(&resource, &CheckCommand::Read { state })
        .await
        .unwrap();
    assert_eq!(output, Value::Null);
}

#[tokio::test]
async fn malformed_config_file_is_reported() {
    let api = Arc::new(FakeHealthchecksApi::new());
    let resource = HealthcheckResource::new(api.clone());
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("desired.json");
    std::fs::write(&config, "{ not json").unwrap();

    let err = cli::check::execute(&resource, &CheckCommand::Create { config })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("failed to parse"));
    assert_eq!(api.calls.create(), 0);
}

#[tokio::test]
async fn channel_lookup_outputs_match() {
    let api = Arc::new(FakeHealthchecksApi::with_channels(vec![Channel {
        id: "4ec5a071-2d08-4baa-898a-eb4eb3cd6941".to_string(),
        name: "ops".to_string(),
        kind: "email".to_string(),
    }]));
    let source = ChannelDataSource::new(api);

    let args = ChannelArgs {
        kind: "email".to_string(),
        name: String::new(),
    };
    let output = cli::channel::execute(&source, &args).await.unwrap();
    assert_eq!(output["id"], "4ec5a071-2d08-4baa-898a-eb4eb3cd6941");

    let args = ChannelArgs {
        kind: "slack".to_string(),
        name: String::new(),
    };
    assert_eq!(cli::channel::execute(&source, &args).await.unwrap(), Value::Null);
}
