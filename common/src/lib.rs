//! healthchecks.io provider 共通ライブラリ
//!
//! ワイヤ型・プロバイダ設定・共通エラー型

#![warn(missing_docs)]

/// プロバイダ設定
pub mod config;

/// 共通エラー型
pub mod error;

/// healthchecks.io API のワイヤ型
pub mod types;
