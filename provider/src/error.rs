//! エラー型定義
//!
//! プロバイダの統一エラー型（thiserror使用）
//!
//! リモートに存在しないリソース（NotFound）はエラーではなく`Option::None`で表す。

use crate::client::ApiError;
use healthchecksio_common::error::CommonError;
use thiserror::Error;

/// Provider error type
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Common layer error (configuration / validation / serialization)
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Client construction failed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A remote call failed; the underlying message is preserved
    #[error("failed to {operation}: {source}")]
    Remote {
        /// Operation that failed, e.g. "create healthcheck"
        operation: &'static str,
        /// Underlying client error
        #[source]
        source: ApiError,
    },

    /// Remote data could not be mapped to local state
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Result alias used across the provider
pub type ProviderResult<T> = Result<T, ProviderError>;

impl ProviderError {
    /// リモート呼び出しの失敗をラップする
    pub fn remote(operation: &'static str, source: ApiError) -> Self {
        Self::Remote { operation, source }
    }

    /// エラー分類を返す
    ///
    /// - `configuration_error`: 認証情報・接続先の設定不備
    /// - `validation_error`: 属性の制約違反（リモート呼び出し前に検出）
    /// - `remote_error`: リモート呼び出しの失敗
    /// - `encoding_error`: ワイヤ形式とローカル状態の変換失敗
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Common(CommonError::Config(_)) | Self::Configuration(_) => "configuration_error",
            Self::Common(CommonError::Validation { .. }) => "validation_error",
            Self::Common(CommonError::Serialization(_)) | Self::Encoding(_) => "encoding_error",
            Self::Remote { .. } => "remote_error",
        }
    }

    /// バリデーションエラーかどうか
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Common(CommonError::Validation { .. }))
    }
}
