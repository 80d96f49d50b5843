//! エラー型定義
//!
//! 共通層のエラー型（thiserror使用）

use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation error on a single attribute
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Attribute name
        field: &'static str,
        /// Human readable reason
        message: String,
    },
}

impl CommonError {
    /// 属性名付きのバリデーションエラーを作成
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}
