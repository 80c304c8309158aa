//! 查询结果状态

/// 单个查询的渲染状态
///
/// 列表与详情各持有一个，互不影响。`NotFound` 只由详情查询产生：
/// 服务端成功返回但 `character` 为 null。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<T> {
    /// 请求已发出，尚未返回
    Pending,
    /// 请求失败，保存错误文本
    Failed(String),
    /// 请求成功
    Loaded(T),
    /// 请求成功但目标不存在
    NotFound,
}

impl<T> QueryState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// 成功时返回数据
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// 失败时返回错误文本
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self::Pending
    }
}
