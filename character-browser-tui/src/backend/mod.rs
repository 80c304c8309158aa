//!
//! src/backend/mod.rs
//! Backend 层：查询与配置
//!
//! Backend 层与 UI 完全解耦。
//! 通过 character-browser-client 库访问 GraphQL 服务。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置（JSON 文件）
//!         mod query_service;      // 异步查询
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、查询服务（QueryService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/query_service.rs 中定义：
//!
//!         持有 Arc<dyn CharacterApi>、tokio runtime 的 Handle
//!         和一个 UnboundedSender<QueryMessage>。
//!
//!         execute(command) 为每个查询 spawn 一个任务：
//!             - Command::FetchList { page }   → api.list_characters(page)
//!             - Command::FetchDetail { id }   → api.get_character(&id)
//!
//!         结果带着请求参数发回主循环，主循环在下一轮渲染前取出。
//!         同一时刻可能有多个查询在飞，Update 层按参数丢弃过期结果。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置服务（JsonConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：<config_dir>/character-browser-tui/config.json
//!
//!         {
//!             "endpoint": "https://rickandmortyapi.com/graphql",
//!             "language": "en-US",
//!             "theme": "dark",
//!             "connect_timeout_secs": 10,
//!             "request_timeout_secs": 30,
//!             "log_level": "info"
//!         }
//!
//!         文件不存在时全部取默认值；只写部分字段也可以。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按下 Enter
//!         ↓
//!     Update 层处理 ListMessage::Open，返回 Command::FetchDetail
//!         ↓
//!     主循环调用 QueryService::execute
//!         ↓
//!     后台任务调用 CharacterClient（GraphQL POST）
//!         ↓
//!     QueryMessage::DetailLoaded 经 channel 返回
//!         ↓
//!     Update 层更新 Model 状态
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod query_service;

pub use config_service::{ConfigService, JsonConfigService, APP_DIR_NAME};
pub use query_service::QueryService;
