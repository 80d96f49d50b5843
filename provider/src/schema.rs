//! リソーススキーマ記述子
//!
//! オーケストレーション側に公開する属性定義（型・必須/任意/計算済み・既定値・
//! 検証内容）。プラグインプロトコルでのスキーマ交渉は扱わず、JSONとして
//! 出力できる形だけを提供する。

use crate::resources::check::model::{
    DEFAULT_GRACE_SECS, DEFAULT_TIMEOUT_SECS, MAX_PERIOD_SECS, MIN_PERIOD_SECS,
};
use healthchecksio_common::config::{API_KEY_ENV, API_URL_ENV};
use serde::Serialize;
use serde_json::Value;

/// チェックリソース名
pub const CHECK_RESOURCE: &str = "healthchecksio_check";

/// チャンネルデータソース名
pub const CHANNEL_DATA_SOURCE: &str = "healthchecksio_channel";

/// 属性の型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// 文字列
    #[serde(rename = "string")]
    Text,
    /// 整数
    Int,
    /// 文字列のリスト
    #[serde(rename = "list_of_string")]
    TextList,
}

/// 属性定義
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    /// 属性名
    pub name: &'static str,
    /// 型
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    /// 説明
    pub description: &'static str,
    /// 必須
    pub required: bool,
    /// 任意
    pub optional: bool,
    /// リモートが値を決める（読み取り専用）
    pub computed: bool,
    /// ログに出さない
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub sensitive: bool,
    /// 既定値
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// フォールバック環境変数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<&'static str>,
    /// 検証内容
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<String>,
}

impl Attribute {
    fn new(name: &'static str, attr_type: AttributeType, description: &'static str) -> Self {
        Self {
            name,
            attr_type,
            description,
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            default: None,
            env: None,
            validation: None,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    fn default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    fn env(mut self, name: &'static str) -> Self {
        self.env = Some(name);
        self
    }

    fn validation(mut self, rule: impl Into<String>) -> Self {
        self.validation = Some(rule.into());
        self
    }
}

/// リソース／データソースのスキーマ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceSchema {
    /// 名前
    pub name: &'static str,
    /// インポート可能か
    pub importable: bool,
    /// 属性
    pub attributes: Vec<Attribute>,
}

impl ResourceSchema {
    /// 属性名で検索
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// プロバイダ全体のスキーマ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderSchema {
    /// provider ブロックの属性
    pub provider: Vec<Attribute>,
    /// リソース
    pub resources: Vec<ResourceSchema>,
    /// データソース
    pub data_sources: Vec<ResourceSchema>,
}

fn period_rule() -> String {
    format!("between {} and {}", MIN_PERIOD_SECS, MAX_PERIOD_SECS)
}

/// `healthchecksio_check` のスキーマ
pub fn check_schema() -> ResourceSchema {
    use AttributeType::{Int, Text, TextList};

    ResourceSchema {
        name: CHECK_RESOURCE,
        importable: true,
        attributes: vec![
            Attribute::new("id", Text, "ID of the check").computed(),
            Attribute::new("name", Text, "Name of the check").required(),
            Attribute::new("tags", TextList, "Tags associated with the check").optional(),
            Attribute::new("timeout", Int, "Timeout period of the check")
                .optional()
                .default(Value::from(DEFAULT_TIMEOUT_SECS))
                .validation(period_rule()),
            Attribute::new("grace", Int, "Grace period for the check")
                .optional()
                .default(Value::from(DEFAULT_GRACE_SECS))
                .validation(period_rule()),
            Attribute::new(
                "schedule",
                Text,
                "A cron expression defining the check's schedule",
            )
            .optional(),
            Attribute::new("timezone", Text, "Timezone used for the schedule").optional(),
            Attribute::new("channels", TextList, "Channels integrated with the check")
                .optional()
                .validation("each element must be a UUID"),
            Attribute::new("desc", Text, "Description of the check").optional(),
            Attribute::new(
                "methods",
                Text,
                "Allowed HTTP methods for making ping requests",
            )
            .optional()
            .default(Value::from(""))
            .validation("one of \"\", \"POST\""),
            Attribute::new("slug", Text, "Slug derived from the check name").computed(),
            Attribute::new("ping_url", Text, "Ping URL associated with this check").computed(),
            Attribute::new("pause_url", Text, "Pause URL associated with this check")
                .computed(),
        ],
    }
}

/// `healthchecksio_channel` のスキーマ
pub fn channel_schema() -> ResourceSchema {
    use AttributeType::Text;

    ResourceSchema {
        name: CHANNEL_DATA_SOURCE,
        importable: false,
        attributes: vec![
            Attribute::new("id", Text, "ID of the channel").computed(),
            Attribute::new("name", Text, "Name of the channel to search for").optional(),
            Attribute::new("kind", Text, "Kind of channel").required(),
        ],
    }
}

/// プロバイダ全体のスキーマ
pub fn provider_schema() -> ProviderSchema {
    use AttributeType::Text;

    ProviderSchema {
        provider: vec![
            Attribute::new("api_key", Text, "A healthchecks.io api key.")
                .required()
                .sensitive()
                .env(API_KEY_ENV),
            Attribute::new("api_url", Text, "A healthchecks.io api base URL.")
                .optional()
                .env(API_URL_ENV),
        ],
        resources: vec![check_schema()],
        data_sources: vec![channel_schema()],
    }
}
