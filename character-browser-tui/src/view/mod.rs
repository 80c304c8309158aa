//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 主循环每一轮都调用 render() 重绘整个界面。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod components;     // 状态栏、帮助弹窗
//!         mod layout;         // 主布局
//!         mod pages;          // 列表视图、详情视图
//!         pub mod theme;      // 主题与颜色
//!
//!
//!     界面布局：
//!         ┌──────────────────────────────────────────────┐
//!         │ Character Browser v0.1.0                     │  ← 标题栏
//!         ├─ Character List · Page 1 of 42 ──────────────┤
//!         │ ● Rick Sanchez        https://...1.jpeg      │  ← 列表视图
//!         │   Morty Smith         https://...2.jpeg      │
//!         │ ┌─ Character Details ──────────────────────┐ │
//!         │ │ Name    Rick Sanchez                     │ │  ← 详情视图
//!         │ │ ID      1                                │ │
//!         │ │ Image   https://...1.jpeg                │ │
//!         │ └──────────────────────────────────────────┘ │
//!         ├──────────────────────────────────────────────┤
//!         │ ↑↓ Select │ Enter Details │ n Next Page │ ...│  ← 状态栏
//!         └──────────────────────────────────────────────┘
//!
//!     每个查询各自有 加载中 / 失败 / 成功 三种显示：
//!         - 加载中：区域内只显示 “Loading...”
//!         - 失败：区域内只显示 “Error: <错误信息>”
//!         - 成功：显示数据
//!     详情查询多一种：角色不存在时显示 “Character not found: <id>”。
//!     列表加载中或失败时，详情视图不显示（状态仍保留）。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
