//! 角色列表视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, QueryState};
use crate::view::theme::{colors, Styles};

use super::{character_detail, render_error, render_loading};

/// 详情区高度（含边框）
const DETAIL_HEIGHT: u16 = 7;

/// 名称列最小宽度
const NAME_COLUMN_WIDTH: usize = 28;

/// 渲染列表视图
///
/// 加载中或失败时只显示对应提示，列表与详情都不渲染。
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    match &app.list.query {
        QueryState::Pending => render_loading(frame, area),
        QueryState::Failed(message) => render_error(frame, area, message),
        QueryState::Loaded(_) | QueryState::NotFound => render_loaded(app, frame, area),
    }
}

fn render_loaded(app: &App, frame: &mut Frame, area: Rect) {
    let (list_area, detail_area) = if app.detail_visible() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(DETAIL_HEIGHT)])
            .split(area);
        (rows[0], Some(rows[1]))
    } else {
        (area, None)
    };

    render_entries(app, frame, list_area);

    if let (Some(detail), Some(detail_area)) = (&app.detail, detail_area) {
        character_detail::render(detail, frame, detail_area);
    }
}

/// 渲染角色条目：名称 + 图片 URL
fn render_entries(app: &App, frame: &mut Frame, area: Rect) {
    let characters = app.list.characters();
    if characters.is_empty() {
        let line = Line::styled(format!("  {}", t().list.empty), Style::default().fg(colors().muted));
        frame.render_widget(Paragraph::new(vec![Line::from(""), line]), area);
        return;
    }

    let c = colors();
    let items: Vec<ListItem> = characters
        .iter()
        .enumerate()
        .map(|(i, character)| {
            let is_highlighted = i == app.list.cursor;
            let is_selected = app.list.selected_id.as_deref() == Some(character.id.as_str());

            let marker = if is_selected { "● " } else { "  " };
            let padding = NAME_COLUMN_WIDTH.saturating_sub(character.name.width());

            let (name_style, dim_style) = if is_highlighted {
                (Styles::selected(), Styles::selected())
            } else {
                (Style::default().fg(c.fg), Style::default().fg(c.muted))
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(c.accent)),
                Span::styled(character.name.as_str(), name_style),
                Span::styled(format!("{:padding$}  {}", "", character.image), dim_style),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.list.cursor));

    frame.render_stateful_widget(List::new(items), area, &mut state);
}
