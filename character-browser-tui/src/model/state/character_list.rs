//! 角色列表视图状态

use character_browser_client::{Character, CharacterPage, ClientError};

use crate::model::QueryState;

/// 角色列表视图状态
#[derive(Debug)]
pub struct CharacterListState {
    /// 当前页码，从 1 开始，只会递增
    pub page: u32,
    /// 当前页的查询状态
    pub query: QueryState<CharacterPage>,
    /// 高亮行索引
    pub cursor: usize,
    /// 已选中的角色 ID（驱动详情视图），没有取消选择的操作
    pub selected_id: Option<String>,
}

impl CharacterListState {
    /// 初始状态：第 1 页，查询中
    pub fn new() -> Self {
        Self {
            page: 1,
            query: QueryState::Pending,
            cursor: 0,
            selected_id: None,
        }
    }

    /// 当前页已加载的角色，未加载时为空
    pub fn characters(&self) -> &[Character] {
        self.query
            .loaded()
            .map_or(&[][..], |page| page.results.as_slice())
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        let len = self.characters().len();
        if len > 0 && self.cursor < len - 1 {
            self.cursor += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.cursor = self.characters().len().saturating_sub(1);
    }

    /// 获取当前高亮的角色
    pub fn highlighted(&self) -> Option<&Character> {
        self.characters().get(self.cursor)
    }

    /// 翻到下一页，返回新页码
    ///
    /// 不检查总页数：超出范围的页由服务端返回空列表。
    pub fn next_page(&mut self) -> u32 {
        self.page = self.page.saturating_add(1);
        self.query = QueryState::Pending;
        self.cursor = 0;
        self.page
    }

    /// 设置选中的角色，返回选中项是否发生变化
    pub fn select(&mut self, id: &str) -> bool {
        if self.selected_id.as_deref() == Some(id) {
            return false;
        }
        self.selected_id = Some(id.to_string());
        true
    }

    /// 写入列表查询结果
    ///
    /// 结果页码与当前页码不一致时视为过期结果，丢弃并返回 `false`。
    pub fn apply_result(&mut self, page: u32, result: Result<CharacterPage, ClientError>) -> bool {
        if page != self.page {
            return false;
        }

        self.query = match result {
            Ok(data) => QueryState::Loaded(data),
            Err(e) => QueryState::Failed(e.to_string()),
        };
        self.cursor = 0;
        true
    }
}

impl Default for CharacterListState {
    fn default() -> Self {
        Self::new()
    }
}
