//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **页面内容归对应视图**：`list.*`、`detail.*`
//! 3. **跨组件复用归 `common.*`**
//! 4. **键盘提示归 `hints.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 状态栏快捷键提示
    pub hints: HintTexts,
    /// 角色列表视图
    pub list: ListTexts,
    /// 角色详情视图
    pub detail: DetailTexts,
    /// 帮助弹窗
    pub help: HelpTexts,
    /// 状态栏消息
    pub status: StatusTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub select: &'static str,
    pub open: &'static str,
    pub next_page: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub close: &'static str,
}

// ============================================================================
// 列表视图
// ============================================================================

pub struct ListTexts {
    pub title: &'static str,
    pub page: &'static str,
    /// "第 N 页 / 共 M 页" 中的分隔词
    pub of: &'static str,
    pub empty: &'static str,
}

// ============================================================================
// 详情视图
// ============================================================================

pub struct DetailTexts {
    pub title: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub not_found: &'static str,
}

// ============================================================================
// 帮助弹窗
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    pub shortcuts: &'static str,
    pub move_up_down: &'static str,
    pub first_last: &'static str,
    pub open: &'static str,
    pub next_page: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub close_hint: &'static str,
}

// ============================================================================
// 状态栏消息
// ============================================================================

pub struct StatusTexts {
    pub loaded: &'static str,
    pub failed: &'static str,
}
