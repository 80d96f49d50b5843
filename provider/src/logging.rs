//! ロギング初期化ユーティリティ
//!
//! 標準出力は結果のJSONに使うため、ログは標準エラーに出す。

use crate::config::get_log_level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// tracing subscriber を初期化する
///
/// フィルタは `HEALTHCHECKSIO_LOG_LEVEL` → `RUST_LOG` → `info` の順に決まり、
/// `debug = true` の場合は `debug` になる。
pub fn init(debug: bool) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_new(get_log_level(debug))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
}
