//! Character Browser TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 查询与配置 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     JsonConfigService::load()   // 读取配置，文件不存在时使用默认值
//!     init_logging()              // 日志写入文件（stdout 属于 TUI）
//!     set_language / set_theme    // 应用配置
//!     Runtime::new()              // 查询在 tokio runtime 上执行
//!     CharacterClient::new()      // GraphQL 客户端
//!     init_terminal()             // 原始模式 + 备用屏幕
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use character_browser_client::CharacterClient;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use backend::{ConfigService, JsonConfigService, QueryService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 加载配置
    let config_service = JsonConfigService::new();
    let config = config_service.load()?;

    // 2. 初始化日志（guard 存活到 main 结束），失败时不写日志继续运行
    let _log_guard = match init_logging(&config.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {e:#}");
            None
        }
    };
    log::info!("Config loaded from {}", config_service.path().display());

    i18n::set_language(config.language());
    view::theme::set_theme(config.theme);

    // 3. 创建 runtime 与客户端
    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let client = CharacterClient::new(config.client_config())?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let queries = QueryService::new(Arc::new(client), runtime.handle().clone(), tx);

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let mut app = model::App::new();
    let result = app::run(&mut terminal, &mut app, &queries, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Application error: {e:#}");
    }
    result
}
