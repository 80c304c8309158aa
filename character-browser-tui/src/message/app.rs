//! 应用主消息枚举

use super::{ListMessage, QueryMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 列表视图相关消息
    List(ListMessage),

    /// 查询结果消息（来自 Backend 层）
    Query(QueryMessage),

    /// 打开/关闭帮助
    ToggleHelp,

    /// 关闭帮助
    CloseHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
