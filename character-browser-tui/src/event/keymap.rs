//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 SHIFT（部分终端在输入 `?` 时会带上 SHIFT）。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = if matches!(key.code, KeyCode::Char(_)) {
            key.modifiers.difference(KeyModifiers::SHIFT)
        } else {
            key.modifiers
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const ALT_QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const ALT_HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const CLOSE: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 列表
    pub const UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const UP_VIM: KeyBinding = KeyBinding::key(KeyCode::Char('k'));
    pub const DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const DOWN_VIM: KeyBinding = KeyBinding::key(KeyCode::Char('j'));
    pub const FIRST: KeyBinding = KeyBinding::key(KeyCode::Home);
    pub const LAST: KeyBinding = KeyBinding::key(KeyCode::End);
    pub const OPEN: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const NEXT_PAGE: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
}
