//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event / Backend ─→ Update 之间的桥梁。
//! 所有的用户操作和查询结果都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage：主消息
//!         mod list;           // ListMessage：列表视图中的操作
//!         mod query;          // QueryMessage：异步查询的结果
//!
//!
//!     消息来源有两个：
//!         · src/event/handler.rs 把按键翻译成 AppMessage
//!         · src/backend/query_service.rs 的异步任务把查询结果作为
//!           QueryMessage 发回主循环，主循环再包装成 AppMessage::Query
//!
//!     两者最终都进入：
//!         pub fn update(app: &mut App, msg: AppMessage) -> Command
//!

mod app;
mod list;
mod query;

pub use app::AppMessage;
pub use list::ListMessage;
pub use query::QueryMessage;
