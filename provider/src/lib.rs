//! healthchecks.io provider
//!
//! healthchecks.io のチェックを宣言的に管理するためのリコンサイラと、
//! 通知チャンネルを検索するデータソース。

#![warn(missing_docs)]

/// コマンドラインインターフェース
pub mod cli;

/// healthchecks.io 管理APIクライアント
pub mod client;

/// 環境変数ベースの設定
pub mod config;

/// エラー型
pub mod error;

/// ロギング初期化
pub mod logging;

/// リスト順序の安定化
pub mod ordering;

/// リソース／データソース
pub mod resources;

/// スキーマ記述子
pub mod schema;

pub use error::{ProviderError, ProviderResult};
