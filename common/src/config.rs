//! 設定管理
//!
//! ProviderConfig（APIキー・ベースURL・タイムアウト）と、その解決ロジック。
//! 環境変数は暗黙のグローバル状態として読まず、`resolve`に渡される
//! lookup関数を通して参照する。

use crate::error::CommonError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// APIキーのフォールバック環境変数
pub const API_KEY_ENV: &str = "HEALTHCHECKSIO_API_KEY";

/// ベースURLのフォールバック環境変数
pub const API_URL_ENV: &str = "HEALTHCHECKSIO_API_URL";

/// リクエストタイムアウト（秒）のフォールバック環境変数
pub const REQUEST_TIMEOUT_ENV: &str = "HEALTHCHECKSIO_REQUEST_TIMEOUT_SECS";

/// healthchecks.io 管理APIのデフォルトベースURL
pub const DEFAULT_API_URL: &str = "https://healthchecks.io/api/v1/";

/// 明示的に指定されたプロバイダ設定（provider block / CLI引数）
///
/// 未指定の項目は`None`のままにしておき、解決時に環境変数・デフォルト値で補う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// APIキー
    #[serde(default)]
    pub api_key: Option<String>,
    /// ベースURLの上書き
    #[serde(default)]
    pub api_url: Option<String>,
    /// トランスポートのタイムアウト（秒）
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// 解決済みのプロバイダ設定
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// APIキー（必須）
    pub api_key: String,

    /// ベースURL (デフォルト: "https://healthchecks.io/api/v1/")
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// リクエストタイムアウト（秒）(デフォルト: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ProviderConfig {
    /// APIキーのみを指定して、その他をデフォルト値で構築
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }

    /// 明示的な設定 → 環境変数 → デフォルト値 の順に解決する
    ///
    /// `lookup` は環境変数名を受け取り値を返す関数。プロセス環境を使う場合は
    /// `|name| std::env::var(name).ok()` を渡す。
    pub fn resolve<F>(settings: ProviderSettings, lookup: F) -> Result<Self, CommonError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(settings.api_key)
            .or_else(|| non_empty(lookup(API_KEY_ENV)))
            .ok_or_else(|| {
                CommonError::Config(format!(
                    "api_key is required (set it explicitly or via {})",
                    API_KEY_ENV
                ))
            })?;

        let api_url = non_empty(settings.api_url)
            .or_else(|| non_empty(lookup(API_URL_ENV)))
            .unwrap_or_else(default_api_url);
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(CommonError::Config(format!(
                "api_url must be an http(s) URL, got '{}'",
                api_url
            )));
        }

        let request_timeout_secs = match settings.request_timeout_secs {
            Some(secs) => secs,
            None => match non_empty(lookup(REQUEST_TIMEOUT_ENV)) {
                Some(raw) => raw.parse().map_err(|_| {
                    CommonError::Config(format!(
                        "{} must be an integer number of seconds, got '{}'",
                        REQUEST_TIMEOUT_ENV, raw
                    ))
                })?,
                None => default_request_timeout(),
            },
        };
        if request_timeout_secs == 0 {
            return Err(CommonError::Config(
                "request timeout must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            api_url,
            request_timeout_secs,
        })
    }
}

// APIキーはログに出さない
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
