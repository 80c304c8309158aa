//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Resize(width, height)        // 终端窗口大小变化，下一轮自动重绘
//!             Event::Mouse(MouseEvent)            // 鼠标事件（不处理）
//!
//!             当接收到键盘事件时：
//!                 - Ctrl+C 任何时候都退出
//!                 - 帮助弹窗打开时，只响应 Esc / Enter / ? / Alt+h 关闭
//!                 - 全局快捷键：q / Alt+q 退出，? / Alt+h 帮助
//!                 - 其余交给列表视图：
//!                     ↑/k ↓/j     → ListMessage::SelectPrevious / SelectNext
//!                     Home/End    → ListMessage::SelectFirst / SelectLast
//!                     Enter       → ListMessage::Open       （相当于点击角色）
//!                     n           → ListMessage::NextPage
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
