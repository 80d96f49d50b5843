//! reqwestベースのhealthchecks.io APIクライアント

use super::{ApiError, HealthchecksApi};
use crate::error::{ProviderError, ProviderResult};
use async_trait::async_trait;
use healthchecksio_common::config::ProviderConfig;
use healthchecksio_common::types::{
    Channel, ChannelsEnvelope, HealthcheckRequest, HealthcheckResponse, HealthchecksEnvelope,
};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// 認証ヘッダー名
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// healthchecks.io のエラーレスポンス `{"error": "..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// healthchecks.io APIクライアント
#[derive(Clone)]
pub struct HealthchecksClient {
    http_client: Client,
    base_url: Url,
    api_key: String,
}

impl HealthchecksClient {
    /// 新しいクライアントを作成
    pub fn new(config: &ProviderConfig) -> ProviderResult<Self> {
        let base_url = Url::parse(&config.api_url).map_err(|e| {
            ProviderError::Configuration(format!("invalid api_url '{}': {}", config.api_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ProviderError::Configuration(format!(
                "invalid api_url '{}': cannot carry a path",
                config.api_url
            )));
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("healthchecksio-provider/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ProviderError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// 末尾スラッシュを除いたベースURL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// ベースURLにパスセグメントを追加したURL
    ///
    /// 各セグメントはパーセントエンコードされるため、IDに`/`や`?`が
    /// 含まれていても別のエンドポイントを指すことはない。
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{} {}", method, url);
        self.http_client
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(_) => body,
        };
        Err(ApiError::Status { status, message })
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(builder).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl HealthchecksApi for HealthchecksClient {
    async fn list_channels(&self) -> Result<Vec<Channel>, ApiError> {
        let url = self.endpoint(&["channels", ""])?;
        let envelope: ChannelsEnvelope = self.send_json(self.request(Method::GET, url)).await?;
        Ok(envelope.channels)
    }

    async fn list_healthchecks(&self) -> Result<Vec<HealthcheckResponse>, ApiError> {
        let url = self.endpoint(&["checks", ""])?;
        let envelope: HealthchecksEnvelope = self.send_json(self.request(Method::GET, url)).await?;
        Ok(envelope.checks)
    }

    async fn create_healthcheck(
        &self,
        check: &HealthcheckRequest,
    ) -> Result<HealthcheckResponse, ApiError> {
        let url = self.endpoint(&["checks", ""])?;
        self.send_json(self.request(Method::POST, url).json(check))
            .await
    }

    async fn update_healthcheck(
        &self,
        id: &str,
        check: &HealthcheckRequest,
    ) -> Result<HealthcheckResponse, ApiError> {
        let url = self.endpoint(&["checks", id])?;
        self.send_json(self.request(Method::POST, url).json(check))
            .await
    }

    async fn delete_healthcheck(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["checks", id])?;
        self.send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }
}
