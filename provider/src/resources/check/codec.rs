//! desired state とワイヤ形式の相互変換
//!
//! 区切り文字による連結・分割はこのモジュールでのみ行う。
//! 要素に区切り文字（tagsはスペース、channelsはカンマ）が含まれていても
//! エスケープはしない。その要素はリモート上で分割されてしまう（既知の制約）。

use super::model::{CheckConfig, CheckState, DEFAULT_TIMEOUT_SECS};
use crate::error::{ProviderError, ProviderResult};
use crate::ordering::stabilize;
use healthchecksio_common::types::{
    HealthcheckRequest, HealthcheckResponse, CHANNEL_DELIMITER, TAG_DELIMITER,
};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9_-]").expect("valid regex"));
static REPEATED_DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").expect("valid regex"));

fn join(items: &[String], delimiter: char) -> String {
    let separator = delimiter.to_string();
    items
        .iter()
        .filter(|item| !item.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

fn split(raw: &str, delimiter: char) -> Vec<String> {
    raw.split(delimiter)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// タグをスペース区切りの文字列に連結
pub fn join_tags(tags: &[String]) -> String {
    join(tags, TAG_DELIMITER)
}

/// スペース区切りのタグを分割（空要素は捨てる）
pub fn split_tags(raw: &str) -> Vec<String> {
    split(raw, TAG_DELIMITER)
}

/// チャンネルIDをカンマ区切りの文字列に連結
pub fn join_channels(channels: &[String]) -> String {
    join(channels, CHANNEL_DELIMITER)
}

/// カンマ区切りのチャンネルIDを分割（空要素は捨てる）
pub fn split_channels(raw: &str) -> Vec<String> {
    split(raw, CHANNEL_DELIMITER)
}

/// チェック名からスラッグを生成
///
/// 小文字化し、空白を`-`に置換、`[a-z0-9_-]`以外を除去、連続する`-`を
/// まとめ、前後の`-`を取り除く。
pub fn slug_from_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let dashed = WHITESPACE.replace_all(&lowered, "-");
    let cleaned = NON_SLUG_CHARS.replace_all(&dashed, "");
    let collapsed = REPEATED_DASHES.replace_all(&cleaned, "-");
    collapsed.trim_matches('-').to_string()
}

/// desired state をワイヤ形式に変換
///
/// 未設定の任意項目はワイヤ上のゼロ値（空文字列）になる。
pub fn encode(config: &CheckConfig) -> HealthcheckRequest {
    HealthcheckRequest {
        name: config.name.clone(),
        slug: slug_from_name(&config.name),
        tags: join_tags(&config.tags),
        timeout: config.timeout,
        grace: config.grace,
        schedule: config.schedule.clone().unwrap_or_default(),
        timezone: config.timezone.clone().unwrap_or_default(),
        channels: join_channels(&config.channels),
        desc: config.description.clone().unwrap_or_default(),
        methods: config.methods.clone(),
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// ワイヤ形式を observed state に変換
///
/// チャンネルは`prior_channels`の順序に合わせて並べ直す。
/// レスポンスからIDを導出できない場合は`ProviderError::Encoding`。
pub fn decode(
    response: &HealthcheckResponse,
    prior_channels: &[String],
) -> ProviderResult<CheckState> {
    let id = response.id().ok_or_else(|| {
        ProviderError::Encoding(format!(
            "healthcheck '{}' carries no identifier (uuid, update_url or ping_url)",
            response.name
        ))
    })?;

    let channels = split_channels(&response.channels);
    let channels = stabilize(prior_channels, &channels);

    Ok(CheckState {
        id,
        config: CheckConfig {
            name: response.name.clone(),
            tags: split_tags(&response.tags),
            timeout: response.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS),
            grace: response.grace,
            schedule: optional(&response.schedule),
            timezone: optional(&response.timezone),
            channels,
            description: optional(&response.desc),
            methods: response.methods.clone(),
        },
        slug: response.slug.clone(),
        ping_url: response.ping_url.clone(),
        pause_url: response.pause_url.clone(),
    })
}
