//! 页面视图

pub mod character_detail;
pub mod character_list;

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::view::theme::colors;

/// 加载提示，独占整个区域
fn render_loading(frame: &mut Frame, area: Rect) {
    let line = Line::styled(format!("  {}", t().common.loading), Style::default().fg(colors().muted));
    frame.render_widget(Paragraph::new(line), area);
}

/// 错误提示，独占整个区域
fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::styled(
        format!("  {}: {}", t().common.error, message),
        Style::default().fg(colors().error),
    );
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: false }), area);
}
