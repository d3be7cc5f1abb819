//! 日誌初始化

use tracing_subscriber::EnvFilter;

/// 日誌過濾設定的環境變數
pub const LOG_ENV: &str = "BIZDASH_LOG";

/// 初始化日誌（輸出到 stderr，stdout 保留給儀表板 JSON）
///
/// 重複呼叫不會有作用。
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
