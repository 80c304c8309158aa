//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod command;        // Command：需要主循环执行的副作用
//!         mod list;           // 列表视图消息处理
//!         mod query;          // 查询结果处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Command {...}
//!
//!
//!     Update 层本身不做任何 I/O。需要查询时返回 Command：
//!         - Command::FetchList { page }    列表页码变化
//!         - Command::FetchDetail { id }    详情绑定到新的 ID
//!     主循环把 Command 交给 backend::QueryService，
//!     查询完成后结果以 AppMessage::Query 再次进入 update()。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod command;
mod list;
mod query;

pub use command::Command;

use crate::message::AppMessage;
use crate::model::App;

/// 启动时需要执行的命令：加载当前页
pub fn init(app: &App) -> Command {
    Command::FetchList { page: app.list.page }
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Command {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Command::None
        }

        AppMessage::List(list_msg) => list::update(app, list_msg),

        AppMessage::Query(query_msg) => query::update(app, query_msg),

        AppMessage::ToggleHelp => {
            app.show_help = !app.show_help;
            Command::None
        }

        AppMessage::CloseHelp => {
            app.show_help = false;
            Command::None
        }

        AppMessage::Noop => Command::None,
    }
}

#[cfg(test)]
mod tests {
    use character_browser_client::{Character, CharacterPage, ClientError};

    use super::*;
    use crate::message::{ListMessage, QueryMessage};
    use crate::model::QueryState;

    fn rick() -> Character {
        Character {
            id: "1".to_string(),
            name: "Rick Sanchez".to_string(),
            image: "rick.png".to_string(),
        }
    }

    fn morty() -> Character {
        Character {
            id: "2".to_string(),
            name: "Morty Smith".to_string(),
            image: "morty.png".to_string(),
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new();
        update(
            &mut app,
            AppMessage::Query(QueryMessage::ListLoaded {
                page: 1,
                result: Ok(CharacterPage {
                    page: 1,
                    results: vec![rick(), morty()],
                    info: None,
                }),
            }),
        );
        app
    }

    #[test]
    fn init_fetches_first_page() {
        let app = App::new();
        assert_eq!(init(&app), Command::FetchList { page: 1 });
    }

    #[test]
    fn next_page_issues_page_two() {
        let mut app = loaded_app();
        let cmd = update(&mut app, AppMessage::List(ListMessage::NextPage));
        assert_eq!(cmd, Command::FetchList { page: 2 });
        assert_eq!(app.list.page, 2);
        assert!(app.list.query.is_pending());
    }

    #[test]
    fn next_page_is_unbounded() {
        let mut app = App::new();
        for expected in 2..=60 {
            let cmd = update(&mut app, AppMessage::List(ListMessage::NextPage));
            assert_eq!(cmd, Command::FetchList { page: expected });
        }
        assert_eq!(app.list.page, 60);
    }

    #[test]
    fn open_mounts_one_detail_for_highlighted_id() {
        let mut app = loaded_app();
        let cmd = update(&mut app, AppMessage::List(ListMessage::Open));

        assert_eq!(cmd, Command::FetchDetail { id: "1".to_string() });
        assert_eq!(app.list.selected_id.as_deref(), Some("1"));
        let detail = app.detail.as_ref().unwrap();
        assert_eq!(detail.character_id, "1");
        assert!(detail.query.is_pending());
    }

    #[test]
    fn open_same_id_twice_does_not_refetch() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::List(ListMessage::Open));
        let cmd = update(&mut app, AppMessage::List(ListMessage::Open));
        assert_eq!(cmd, Command::None);
    }

    #[test]
    fn open_other_id_replaces_detail() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::List(ListMessage::Open));
        update(&mut app, AppMessage::List(ListMessage::SelectNext));
        let cmd = update(&mut app, AppMessage::List(ListMessage::Open));

        assert_eq!(cmd, Command::FetchDetail { id: "2".to_string() });
        assert_eq!(app.detail.as_ref().map(|d| d.character_id.as_str()), Some("2"));
    }

    #[test]
    fn open_while_pending_does_nothing() {
        let mut app = App::new();
        let cmd = update(&mut app, AppMessage::List(ListMessage::Open));
        assert_eq!(cmd, Command::None);
        assert!(app.detail.is_none());
    }

    #[test]
    fn late_detail_for_previous_id_is_ignored() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::List(ListMessage::Open));
        update(&mut app, AppMessage::List(ListMessage::SelectNext));
        update(&mut app, AppMessage::List(ListMessage::Open));

        update(
            &mut app,
            AppMessage::Query(QueryMessage::DetailLoaded {
                id: "1".to_string(),
                result: Ok(Some(rick())),
            }),
        );
        assert!(app.detail.as_ref().unwrap().query.is_pending());

        update(
            &mut app,
            AppMessage::Query(QueryMessage::DetailLoaded {
                id: "2".to_string(),
                result: Ok(Some(morty())),
            }),
        );
        assert_eq!(
            app.detail.as_ref().unwrap().query,
            QueryState::Loaded(morty())
        );
    }

    #[test]
    fn late_list_for_previous_page_is_ignored() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::List(ListMessage::NextPage));
        update(
            &mut app,
            AppMessage::Query(QueryMessage::ListLoaded {
                page: 1,
                result: Ok(CharacterPage::default()),
            }),
        );
        assert!(app.list.query.is_pending());
        assert_eq!(app.list.page, 2);
    }

    #[test]
    fn list_failure_sets_error_and_status() {
        let mut app = App::new();
        update(
            &mut app,
            AppMessage::Query(QueryMessage::ListLoaded {
                page: 1,
                result: Err(ClientError::NetworkError {
                    detail: "unreachable".to_string(),
                }),
            }),
        );
        assert_eq!(app.list.query.error(), Some("Network error: unreachable"));
        assert!(app.status_message.is_some());
    }

    #[test]
    fn selection_survives_page_change() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::List(ListMessage::Open));
        update(&mut app, AppMessage::List(ListMessage::NextPage));

        assert_eq!(app.list.selected_id.as_deref(), Some("1"));
        assert!(app.detail.is_some());
        assert!(!app.detail_visible());
    }

    #[test]
    fn help_toggles_and_closes() {
        let mut app = App::new();
        update(&mut app, AppMessage::ToggleHelp);
        assert!(app.show_help);
        update(&mut app, AppMessage::CloseHelp);
        assert!(!app.show_help);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new();
        assert_eq!(update(&mut app, AppMessage::Quit), Command::None);
        assert!(app.should_quit);
    }
}
