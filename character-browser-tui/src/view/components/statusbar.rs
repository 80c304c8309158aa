//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在右侧，列表加载中时显示加载提示
    let status = if app.list.query.is_pending() {
        Some(t().common.loading)
    } else {
        app.status_message.as_deref()
    };
    if let Some(msg) = status {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
///
/// 列表视图下“下一页”始终显示；帮助弹窗打开时只提示关闭。
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let hints = &t().hints;

    if app.show_help {
        return vec![("Esc", hints.close)];
    }

    vec![
        ("↑↓", hints.select),
        ("Enter", hints.open),
        ("n", hints.next_page),
        ("?", hints.help),
        ("q", hints.quit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_page_hint_shown_in_every_list_state() {
        use character_browser_client::CharacterPage;
        use crate::model::QueryState;

        let mut app = App::new();
        for state in [
            QueryState::Pending,
            QueryState::Failed("boom".to_string()),
            QueryState::Loaded(CharacterPage::default()),
        ] {
            app.list.query = state;
            assert!(get_hints(&app).iter().any(|(key, _)| *key == "n"));
        }
    }

    #[test]
    fn help_overlay_only_offers_close() {
        let mut app = App::new();
        app.show_help = true;
        assert_eq!(get_hints(&app), vec![("Esc", t().hints.close)]);
    }
}
