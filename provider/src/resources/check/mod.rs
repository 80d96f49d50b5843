//! チェックリソースのリコンサイラ
//!
//! desired state とリモートのチェックを突き合わせ、必要な呼び出しだけを行う。
//!
//! - 作成: 検証 → エンコード → 作成呼び出し → レスポンスからIDを確定
//! - 読み取り: 一覧取得 → IDで線形探索 → デコード（見つからなければ`None`）
//! - 更新: 追跡対象の属性に差分がある場合のみ更新呼び出し、その後必ず再読み取り
//! - 削除: 削除呼び出しをそのまま発行

pub mod codec;
pub mod model;

pub use codec::{decode, encode, slug_from_name};
pub use model::{CheckConfig, CheckState};

use crate::client::HealthchecksApi;
use crate::error::{ProviderError, ProviderResult};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 差分検出の対象となる属性のうち、`prior`と`desired`で異なるものを返す
///
/// 更新呼び出しはリモート側でping履歴や通知状態のリセットを伴うことがあるため、
/// 空の結果なら更新呼び出しを行わない。
pub fn changed_fields(prior: &CheckConfig, desired: &CheckConfig) -> Vec<&'static str> {
    let prior = prior.normalized();
    let desired = desired.normalized();
    let mut changed = Vec::new();

    if prior.name != desired.name {
        changed.push("name");
    }
    if prior.tags != desired.tags {
        changed.push("tags");
    }
    if prior.timeout != desired.timeout {
        changed.push("timeout");
    }
    if prior.grace != desired.grace {
        changed.push("grace");
    }
    if prior.schedule != desired.schedule {
        changed.push("schedule");
    }
    if prior.timezone != desired.timezone {
        changed.push("timezone");
    }
    if prior.channels != desired.channels {
        changed.push("channels");
    }
    if prior.description != desired.description {
        changed.push("desc");
    }
    if prior.methods != desired.methods {
        changed.push("methods");
    }

    changed
}

/// `healthchecksio_check` リソース
#[derive(Clone)]
pub struct HealthcheckResource {
    api: Arc<dyn HealthchecksApi>,
}

impl HealthcheckResource {
    /// APIクライアントを指定して作成
    pub fn new(api: Arc<dyn HealthchecksApi>) -> Self {
        Self { api }
    }

    /// チェックを作成し、リモートが払い出したIDを含む状態を返す
    pub async fn create(&self, desired: &CheckConfig) -> ProviderResult<CheckState> {
        info!("creating healthcheck named: {}", desired.name);

        let desired = desired.normalized();
        desired.validate()?;

        let request = encode(&desired);
        debug!(?request, "healthcheck create");

        let response = self
            .api
            .create_healthcheck(&request)
            .await
            .map_err(|e| ProviderError::remote("create healthcheck", e))?;

        let state = decode(&response, &desired.channels)?;
        info!(id = %state.id, "healthcheck created");
        Ok(state)
    }

    /// IDでチェックを読み取る
    ///
    /// 単一取得エンドポイントは使わず、一覧から線形探索する。リモートに
    /// 存在しない場合は`Ok(None)`（呼び出し側はローカルのIDを破棄する）。
    /// チャンネルは`prior_channels`の順序に合わせて並べ直される。
    pub async fn read(
        &self,
        id: &str,
        prior_channels: &[String],
    ) -> ProviderResult<Option<CheckState>> {
        info!("reading healthcheck with key: {}", id);

        let checks = self
            .api
            .list_healthchecks()
            .await
            .map_err(|e| ProviderError::remote("read healthchecks", e))?;

        let Some(found) = checks.iter().find(|c| c.id().as_deref() == Some(id)) else {
            warn!(id, "healthcheck no longer exists remotely");
            return Ok(None);
        };

        decode(found, prior_channels).map(Some)
    }

    /// チェックを更新し、再読み取りした状態を返す
    ///
    /// `prior` は最後に観測した状態。追跡対象の属性に差分が無ければ
    /// 更新呼び出しは行わず、再読み取りのみ行う。
    pub async fn update(
        &self,
        prior: &CheckState,
        desired: &CheckConfig,
    ) -> ProviderResult<Option<CheckState>> {
        info!("updating healthcheck with key: {}", prior.id);

        let desired = desired.normalized();
        desired.validate()?;

        let changed = changed_fields(&prior.config, &desired);
        if changed.is_empty() {
            debug!(id = %prior.id, "no tracked attribute changed, skipping update call");
        } else {
            let request = encode(&desired);
            debug!(?request, ?changed, "healthcheck update");
            self.api
                .update_healthcheck(&prior.id, &request)
                .await
                .map_err(|e| ProviderError::remote("update healthcheck", e))?;
        }

        self.read(&prior.id, &desired.channels).await
    }

    /// チェックを削除
    ///
    /// 既に存在しないIDの扱いはリモートAPIに委ねる。
    pub async fn delete(&self, id: &str) -> ProviderResult<()> {
        info!("deleting healthcheck with key: {}", id);

        self.api
            .delete_healthcheck(id)
            .await
            .map_err(|e| ProviderError::remote("delete healthcheck", e))
    }

    /// 既存チェックをIDでインポート（チャンネルは辞書順）
    pub async fn import(&self, id: &str) -> ProviderResult<Option<CheckState>> {
        info!("importing healthcheck with key: {}", id);
        self.read(id, &[]).await
    }
}
