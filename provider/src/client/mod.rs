//! healthchecks.io 管理APIクライアント
//!
//! リコンサイラはこのモジュールの`HealthchecksApi` traitにのみ依存する。
//! 実装は`reqwest`ベースの`HealthchecksClient`（テストではフェイク実装）。

mod http;

pub use http::HealthchecksClient;

use async_trait::async_trait;
use healthchecksio_common::config::ProviderConfig;
use healthchecksio_common::types::{Channel, HealthcheckRequest, HealthcheckResponse};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::error::ProviderResult;

/// Error types for healthchecks.io API calls
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-2xx status
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// The base URL cannot take path segments
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// The response body could not be decoded
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// healthchecks.io 管理APIの操作
///
/// 単一チェックの取得エンドポイントは使わず、読み取りは常に一覧取得で行う。
#[async_trait]
pub trait HealthchecksApi: Send + Sync {
    /// 通知チャンネル一覧を取得
    async fn list_channels(&self) -> Result<Vec<Channel>, ApiError>;
    /// チェック一覧を取得
    async fn list_healthchecks(&self) -> Result<Vec<HealthcheckResponse>, ApiError>;
    /// チェックを作成
    async fn create_healthcheck(
        &self,
        check: &HealthcheckRequest,
    ) -> Result<HealthcheckResponse, ApiError>;
    /// チェックを更新
    async fn update_healthcheck(
        &self,
        id: &str,
        check: &HealthcheckRequest,
    ) -> Result<HealthcheckResponse, ApiError>;
    /// チェックを削除
    async fn delete_healthcheck(&self, id: &str) -> Result<(), ApiError>;
}

/// 解決済みの設定からAPIクライアントを構築する（Client Factory）
///
/// ネットワークアクセスは行わない。失敗するのはベースURLが不正な場合か
/// HTTPクライアントの初期化に失敗した場合のみ。
pub fn configure(config: &ProviderConfig) -> ProviderResult<Arc<dyn HealthchecksApi>> {
    let client = HealthchecksClient::new(config)?;
    info!(api_url = %client.base_url(), "healthchecks.io client configured");
    Ok(Arc::new(client))
}
