//! Update 层返回给主循环的副作用

/// 需要主循环执行的副作用
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// 无副作用
    #[default]
    None,
    /// 查询指定页的角色列表
    FetchList { page: u32 },
    /// 查询指定 ID 的角色详情
    FetchDetail { id: String },
}
