//! wiremockベースのhealthchecks.io APIサーバー

use healthchecksio_common::config::ProviderConfig;
use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-api-key";
#[allow(dead_code)]
pub const API_PREFIX: &str = "/api/v1";

/// モックサーバー
#[allow(dead_code)]
pub struct MockHealthchecks {
    pub server: MockServer,
}

#[allow(dead_code)]
impl MockHealthchecks {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// サーバーを指すプロバイダ設定
    pub fn config(&self) -> ProviderConfig {
        let mut config = ProviderConfig::new(TEST_API_KEY);
        config.api_url = self.api_url();
        config
    }

    pub fn api_url(&self) -> String {
        format!("{}{}/", self.server.uri(), API_PREFIX)
    }

    pub fn path(&self, suffix: &str) -> String {
        format!("{}/{}", API_PREFIX, suffix)
    }

    /// `GET checks/` を固定の一覧で応答させる
    pub async fn mount_checks(&self, checks: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path(self.path("checks/")))
            .and(header("X-Api-Key", TEST_API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "checks": checks })))
            .mount(&self.server)
            .await;
    }

    /// `GET channels/` を固定の一覧で応答させる
    pub async fn mount_channels(&self, channels: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path(self.path("channels/")))
            .and(header("X-Api-Key", TEST_API_KEY))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "channels": channels })),
            )
            .mount(&self.server)
            .await;
    }
}

/// APIが返すチェックのJSON
#[allow(dead_code)]
pub fn check_json(id: &str, name: &str, channels: &str) -> Value {
    json!({
        "name": name,
        "slug": name.to_lowercase().replace(' ', "-"),
        "tags": "prod db",
        "desc": "",
        "grace": 3600,
        "timeout": 86400,
        "schedule": "",
        "tz": "",
        "channels": channels,
        "methods": "",
        "n_pings": 0,
        "status": "new",
        "ping_url": format!("https://hc-ping.com/{}", id),
        "update_url": format!("https://healthchecks.io/api/v1/checks/{}", id),
        "pause_url": format!("https://healthchecks.io/api/v1/checks/{}/pause", id),
    })
}
