//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复，以及文件日志。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 文件日志
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     终端类型定义：
//!         pub type Term = Terminal<CrosstermBackend<Stdout>>;
//!
//!
//!     初始化终端：
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲，每个按键立即生效
//!             - 关闭字符回显
//!             - 捕获 Ctrl+C、方向键等特殊键
//!
//!         · Alternate Screen（备用屏幕）
//!             - 退出后恢复主屏幕内容
//!
//!
//!     恢复终端：
//!         restore_terminal() 在 app::run 之后立即执行，
//!         即使 run 返回错误，也会先恢复终端，再返回错误结果。
//!
//!
//!     日志：
//!         TUI 占用了 stdout，所以日志不能打到终端上。
//!         init_logging() 把日志写到数据目录下的文件：
//!
//!             <data_dir>/character-browser-tui/logs/character-browser.log
//!
//!         级别由 RUST_LOG 决定，没有设置时取配置文件中的 log_level。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
