//! チェックリソースの desired state / observed state

use healthchecksio_common::error::CommonError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// timeout / grace の下限（秒）
pub const MIN_PERIOD_SECS: u32 = 60;

/// timeout / grace の上限（秒、365日）
pub const MAX_PERIOD_SECS: u32 = 31_536_000;

/// timeout のデフォルト値（秒）
pub const DEFAULT_TIMEOUT_SECS: u32 = 86_400;

/// grace のデフォルト値（秒）
pub const DEFAULT_GRACE_SECS: u32 = 3_600;

/// `methods` に指定できる値（"" は任意のメソッド）
pub const ALLOWED_METHODS: [&str; 2] = ["", "POST"];

fn default_timeout() -> u32 {
    DEFAULT_TIMEOUT_SECS
}

fn default_grace() -> u32 {
    DEFAULT_GRACE_SECS
}

/// ユーザーが記述するチェックの desired state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// チェック名（必須）
    pub name: String,

    /// タグ
    #[serde(default)]
    pub tags: Vec<String>,

    /// 期待されるping間隔（秒）(デフォルト: 86400)
    #[serde(default = "default_timeout")]
    pub timeout: u32,

    /// 猶予期間（秒）(デフォルト: 3600)
    #[serde(default = "default_grace")]
    pub grace: u32,

    /// cron式。設定時は timeout ではなくスケジュールで判定される
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// スケジュールのタイムゾーン（IANA名）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// 通知チャンネルID（UUID）
    #[serde(default)]
    pub channels: Vec<String>,

    /// 説明
    #[serde(
        rename = "desc",
        alias = "description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// 許可するpingのHTTPメソッド（"" または "POST"）
    #[serde(default)]
    pub methods: String,
}

impl CheckConfig {
    /// 名前だけを指定し、その他をデフォルト値で構築
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
            timeout: DEFAULT_TIMEOUT_SECS,
            grace: DEFAULT_GRACE_SECS,
            schedule: None,
            timezone: None,
            channels: Vec::new(),
            description: None,
            methods: String::new(),
        }
    }

    /// 空要素・空文字列を取り除いた正規形を返す
    ///
    /// 空のタグ/チャンネルは捨て、空文字列の任意項目は未設定として扱う。
    pub fn normalized(&self) -> Self {
        fn non_empty(items: &[String]) -> Vec<String> {
            items.iter().filter(|s| !s.is_empty()).cloned().collect()
        }
        fn present(value: &Option<String>) -> Option<String> {
            value.clone().filter(|v| !v.is_empty())
        }

        Self {
            name: self.name.clone(),
            tags: non_empty(&self.tags),
            timeout: self.timeout,
            grace: self.grace,
            schedule: present(&self.schedule),
            timezone: present(&self.timezone),
            channels: non_empty(&self.channels),
            description: present(&self.description),
            methods: self.methods.clone(),
        }
    }

    /// リモート呼び出し前の属性検証
    pub fn validate(&self) -> Result<(), CommonError> {
        if self.name.is_empty() {
            return Err(CommonError::validation("name", "must not be empty"));
        }
        validate_period("timeout", self.timeout)?;
        validate_period("grace", self.grace)?;

        if !ALLOWED_METHODS.contains(&self.methods.as_str()) {
            return Err(CommonError::validation(
                "methods",
                format!(
                    "expected one of \"\" or \"POST\", got \"{}\"",
                    self.methods
                ),
            ));
        }

        for channel in self.channels.iter().filter(|c| !c.is_empty()) {
            if Uuid::parse_str(channel).is_err() {
                return Err(CommonError::validation(
                    "channels",
                    format!("\"{}\" is not a valid UUID", channel),
                ));
            }
        }

        Ok(())
    }
}

fn validate_period(field: &'static str, value: u32) -> Result<(), CommonError> {
    if (MIN_PERIOD_SECS..=MAX_PERIOD_SECS).contains(&value) {
        Ok(())
    } else {
        Err(CommonError::validation(
            field,
            format!(
                "expected to be in the range ({} - {}), got {}",
                MIN_PERIOD_SECS, MAX_PERIOD_SECS, value
            ),
        ))
    }
}

/// リモートから読み取ったチェックの observed state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckState {
    /// リモートが払い出したID
    pub id: String,

    /// ユーザーが管理する属性
    #[serde(flatten)]
    pub config: CheckConfig,

    /// スラッグ（読み取り専用）
    #[serde(default)]
    pub slug: String,

    /// ping URL（読み取り専用）
    #[serde(default)]
    pub ping_url: String,

    /// 一時停止用URL（読み取り専用）
    #[serde(default)]
    pub pause_url: String,
}
