//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(frame.area());

    render_title_bar(frame, main_layout[0]);
    render_list_view(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 帮助弹窗在最上层
    if app.show_help {
        components::help::render(frame);
    }
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(" {} v{}", t().common.app_name, env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 列表视图标题：“角色列表 · 第 N 页 / 共 M 页”
fn list_title(app: &App) -> String {
    let texts = &t().list;
    // 超出总页数时不再显示“共 M 页”
    let total = app
        .list
        .query
        .loaded()
        .and_then(|page| page.total_pages())
        .filter(|&total| app.list.page <= total);

    match total {
        Some(total) => format!(
            " {} · {} {} {} {} ",
            texts.title, texts.page, app.list.page, texts.of, total
        ),
        None => format!(" {} · {} {} ", texts.title, texts.page, app.list.page),
    }
}

/// 渲染列表视图（根视图）
fn render_list_view(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(list_title(app))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors().border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::character_list::render(app, frame, inner_area);
}
