//! テスト共通ヘルパー

pub mod mock_server;
