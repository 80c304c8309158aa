//! 日志初始化
//!
//! TUI 独占 stdout，日志写入文件：
//! `<data_dir>/character-browser-tui/logs/character-browser.log`
//!
//! 各模块使用 `log` 宏，由 tracing-subscriber 的 tracing-log 桥接到同一个 subscriber。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::APP_DIR_NAME;

const LOG_FILE_NAME: &str = "character-browser.log";

/// 日志目录
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join("logs")
}

/// 构建过滤器：`RUST_LOG` 优先，否则使用配置中的级别
fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化文件日志
///
/// 返回的 guard 必须存活到程序退出，否则缓冲中的日志会丢失。
pub fn init_logging(default_level: &str) -> Result<WorkerGuard> {
    init_logging_in(&log_dir(), default_level)
}

/// 在指定目录初始化文件日志；目录无法创建时在安装 subscriber 之前返回错误
fn init_logging_in(dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(build_filter(default_level))
        .try_init()
        .context("Failed to install log subscriber")?;

    log::info!(
        "{} v{} started, logging to {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        dir.join(LOG_FILE_NAME).display()
    );
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_is_app_scoped() {
        let dir = log_dir();
        assert!(dir.ends_with("character-browser-tui/logs"));
    }

    #[test]
    fn uncreatable_log_dir_is_error() {
        // 以普通文件作为父目录，create_dir_all 必然失败
        let blocker = std::env::temp_dir().join(format!("character-browser-log-{}", std::process::id()));
        std::fs::write(&blocker, "").unwrap();

        let result = init_logging_in(&blocker.join("logs"), "info");
        let _ = std::fs::remove_file(&blocker);

        let err = result.err().unwrap();
        assert!(err.to_string().contains("Failed to create log directory"));
    }

    #[test]
    fn invalid_level_falls_back() {
        // 无论 RUST_LOG 如何设置都不应 panic
        let _ = build_filter("definitely=not=valid");
        let _ = build_filter("debug");
    }
}
