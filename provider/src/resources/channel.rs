//! `healthchecksio_channel` データソース
//!
//! 通知チャンネルはこのプロバイダからは作成・変更しない。名前と種類で
//! 既存チャンネルを探すだけ。

use crate::client::HealthchecksApi;
use crate::error::{ProviderError, ProviderResult};
use healthchecksio_common::error::CommonError;
use healthchecksio_common::types::Channel;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// チャンネル検索条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelQuery {
    /// 名前（空なら種類のみで検索）
    #[serde(default)]
    pub name: String,
    /// 種類（必須）
    pub kind: String,
}

/// 見つかったチャンネル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelState {
    /// チャンネルID
    pub id: String,
    /// 名前
    pub name: String,
    /// 種類
    pub kind: String,
}

impl From<&Channel> for ChannelState {
    fn from(channel: &Channel) -> Self {
        Self {
            id: channel.id.clone(),
            name: channel.name.clone(),
            kind: channel.kind.clone(),
        }
    }
}

fn is_target(channel: &Channel, name: &str, kind: &str) -> bool {
    if name.is_empty() {
        return channel.kind == kind;
    }
    channel.name == name && channel.kind == kind
}

/// 一覧の並び順で最初に条件に一致したチャンネルを返す
///
/// `name`が空なら`kind`のみで一致判定する。
pub fn resolve_channel<'a>(channels: &'a [Channel], name: &str, kind: &str) -> Option<&'a Channel> {
    channels.iter().find(|c| is_target(c, name, kind))
}

/// チャンネルデータソース
#[derive(Clone)]
pub struct ChannelDataSource {
    api: Arc<dyn HealthchecksApi>,
}

impl ChannelDataSource {
    /// APIクライアントを指定して作成
    pub fn new(api: Arc<dyn HealthchecksApi>) -> Self {
        Self { api }
    }

    /// 条件に一致するチャンネルを読み取る
    ///
    /// 一致しない場合はエラーではなく`Ok(None)`。
    pub async fn read(&self, query: &ChannelQuery) -> ProviderResult<Option<ChannelState>> {
        if query.kind.trim().is_empty() {
            return Err(CommonError::validation("kind", "must not be empty").into());
        }
        info!("reading channel with keys: {}, {}", query.name, query.kind);

        let channels = self
            .api
            .list_channels()
            .await
            .map_err(|e| ProviderError::remote("read channels", e))?;

        match resolve_channel(&channels, &query.name, &query.kind) {
            Some(channel) => Ok(Some(ChannelState::from(channel))),
            None => {
                warn!(name = %query.name, kind = %query.kind, "no matching channel found");
                Ok(None)
            }
        }
    }
}
