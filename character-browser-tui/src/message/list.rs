//! 列表视图消息

/// 列表视图消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 打开高亮项的详情
    Open,
    /// 下一页
    NextPage,
}
