//! healthchecks.io API のワイヤ型
//!
//! リスト値（tags, channels）は区切り文字で連結された単一の文字列として
//! やり取りされる。連結・分割はプロバイダ側のcodecでのみ行い、ここでは
//! ワイヤ上の形をそのまま表現する。

use serde::{Deserialize, Deserializer, Serialize};

/// `tags` の区切り文字
pub const TAG_DELIMITER: char = ' ';

/// `channels` の区切り文字
pub const CHANNEL_DELIMITER: char = ',';

/// `null` を既定値として扱うデシリアライザ
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// チェック作成・更新リクエストのボディ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthcheckRequest {
    /// チェック名
    pub name: String,
    /// スラッグ（空なら送らない）
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub slug: String,
    /// スペース区切りのタグ
    pub tags: String,
    /// 期待されるping間隔（秒）
    pub timeout: u32,
    /// 猶予期間（秒）
    pub grace: u32,
    /// cron式（空なら送らない）
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub schedule: String,
    /// スケジュールのタイムゾーン（空なら送らない）
    #[serde(rename = "tz", default, skip_serializing_if = "String::is_empty")]
    pub timezone: String,
    /// カンマ区切りのチャンネルID
    pub channels: String,
    /// 説明
    pub desc: String,
    /// 許可するpingのHTTPメソッド（"" または "POST"）
    pub methods: String,
}

/// API から返されるチェック
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthcheckResponse {
    /// チェックのUUID（新しいAPIリビジョンのみ）
    #[serde(default, deserialize_with = "null_as_default")]
    pub uuid: String,
    /// チェック名
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// スラッグ
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    /// スペース区切りのタグ
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: String,
    /// 説明
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
    /// 猶予期間（秒）
    #[serde(default, deserialize_with = "null_as_default")]
    pub grace: u32,
    /// ping間隔（秒）。cronチェックでは返されない
    #[serde(default)]
    pub timeout: Option<u32>,
    /// cron式
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedule: String,
    /// タイムゾーン
    #[serde(rename = "tz", default, deserialize_with = "null_as_default")]
    pub timezone: String,
    /// カンマ区切りのチャンネルID
    #[serde(default, deserialize_with = "null_as_default")]
    pub channels: String,
    /// 許可するpingのHTTPメソッド
    #[serde(default, deserialize_with = "null_as_default")]
    pub methods: String,
    /// ping URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub ping_url: String,
    /// 更新用URL（末尾がチェックID）
    #[serde(default, deserialize_with = "null_as_default")]
    pub update_url: String,
    /// 一時停止用URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub pause_url: String,
}

fn last_path_segment(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let (_host, path) = rest.split_once('/')?;
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

impl HealthcheckResponse {
    /// レスポンスからチェックIDを取り出す
    ///
    /// `uuid` → `update_url` の末尾 → `ping_url` の末尾 の順に探す。
    pub fn id(&self) -> Option<String> {
        if !self.uuid.is_empty() {
            return Some(self.uuid.clone());
        }
        last_path_segment(&self.update_url)
            .or_else(|| last_path_segment(&self.ping_url))
            .map(str::to_string)
    }
}

/// `GET checks/` のレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthchecksEnvelope {
    /// チェック一覧
    #[serde(default)]
    pub checks: Vec<HealthcheckResponse>,
}

/// 通知チャンネル
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// チャンネルID
    pub id: String,
    /// 名前（任意・重複あり）
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// 種類（email, sms, slack ...）
    pub kind: String,
}

/// `GET channels/` のレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelsEnvelope {
    /// チャンネル一覧
    #[serde(default)]
    pub channels: Vec<Channel>,
}
