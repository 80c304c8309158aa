//! 角色详情视图

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{CharacterDetailState, QueryState};
use crate::view::theme::{colors, Styles};

use super::{render_error, render_loading};

/// 渲染详情视图
pub fn render(detail: &CharacterDetailState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.detail.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &detail.query {
        QueryState::Pending => render_loading(frame, inner),
        QueryState::Failed(message) => render_error(frame, inner, message),
        QueryState::NotFound => {
            let line = Line::styled(
                format!("  {}: {}", texts.detail.not_found, detail.character_id),
                Style::default().fg(c.muted),
            );
            frame.render_widget(Paragraph::new(line), inner);
        }
        QueryState::Loaded(character) => {
            let field = |label: &str, value: &str, style: Style| {
                Line::from(vec![
                    Span::styled(format!("  {label:<8}"), Style::default().fg(c.muted)),
                    Span::styled(value.to_string(), style),
                ])
            };
            let lines = vec![
                field(texts.detail.name, &character.name, Styles::title()),
                field(texts.detail.id, &character.id, Style::default().fg(c.fg)),
                field(texts.detail.image, &character.image, Style::default().fg(c.accent)),
            ];
            frame.render_widget(Paragraph::new(lines), inner);
        }
    }
}
