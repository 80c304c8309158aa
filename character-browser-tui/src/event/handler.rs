//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ListMessage};
use crate::model::App;




/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}




/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),      // 键盘事件
        _ => AppMessage::Noop,                                          // Resize 等：下一轮自动重绘
    }
}




/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 帮助弹窗打开时，只响应关闭
    if app.show_help {
        return handle_help_keys(&key);
    }

    if DefaultKeymap::QUIT.matches(&key) || DefaultKeymap::ALT_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::ALT_HELP.matches(&key) {
        return AppMessage::ToggleHelp;
    }

    handle_list_keys(&key)
}




/// 帮助弹窗按键
fn handle_help_keys(key: &KeyEvent) -> AppMessage {
    if DefaultKeymap::CLOSE.matches(key)
        || DefaultKeymap::OPEN.matches(key)
        || DefaultKeymap::HELP.matches(key)
        || DefaultKeymap::ALT_HELP.matches(key)
    {
        AppMessage::CloseHelp
    } else {
        AppMessage::Noop
    }
}




/// 列表视图按键
fn handle_list_keys(key: &KeyEvent) -> AppMessage {
    let msg = if DefaultKeymap::UP.matches(key) || DefaultKeymap::UP_VIM.matches(key) {
        ListMessage::SelectPrevious
    } else if DefaultKeymap::DOWN.matches(key) || DefaultKeymap::DOWN_VIM.matches(key) {
        ListMessage::SelectNext
    } else if DefaultKeymap::FIRST.matches(key) {
        ListMessage::SelectFirst
    } else if DefaultKeymap::LAST.matches(key) {
        ListMessage::SelectLast
    } else if DefaultKeymap::OPEN.matches(key) {
        ListMessage::Open
    } else if DefaultKeymap::NEXT_PAGE.matches(key) {
        ListMessage::NextPage
    } else {
        return AppMessage::Noop;
    };

    AppMessage::List(msg)
}
