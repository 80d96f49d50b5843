//! プロバイダが公開するリソースとデータソース

pub mod channel;
pub mod check;

pub use channel::{resolve_channel, ChannelDataSource, ChannelQuery, ChannelState};
pub use check::{CheckConfig, CheckState, HealthcheckResource};
