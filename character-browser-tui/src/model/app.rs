//! 应用主状态结构

use super::{CharacterDetailState, CharacterListState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 列表视图状态（根视图）
    pub list: CharacterListState,

    /// 详情视图状态
    ///
    /// 只要 `list.selected_id` 非空就存在，且与之对应；任意时刻最多一个。
    pub detail: Option<CharacterDetailState>,

    /// 是否显示帮助弹窗
    pub show_help: bool,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            should_quit: false,
            list: CharacterListState::new(),
            detail: None,
            show_help: false,
            status_message: None,
        }
    }

    /// 详情视图是否可见
    ///
    /// 列表处于加载中或失败状态时，整个列表视图（包括其中的详情）只显示对应提示。
    pub fn detail_visible(&self) -> bool {
        self.detail.is_some() && self.list.query.loaded().is_some()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
