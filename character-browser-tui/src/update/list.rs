//! 列表视图更新逻辑

use crate::message::ListMessage;
use crate::model::{App, CharacterDetailState};

use super::Command;

/// 处理列表视图消息
pub fn update(app: &mut App, msg: ListMessage) -> Command {
    match msg {
        ListMessage::SelectPrevious => {
            app.list.select_previous();
            Command::None
        }
        ListMessage::SelectNext => {
            app.list.select_next();
            Command::None
        }
        ListMessage::SelectFirst => {
            app.list.select_first();
            Command::None
        }
        ListMessage::SelectLast => {
            app.list.select_last();
            Command::None
        }
        ListMessage::Open => handle_open(app),
        ListMessage::NextPage => {
            let page = app.list.next_page();
            log::info!("Next page: {page}");
            Command::FetchList { page }
        }
    }
}

/// 选中高亮的角色
///
/// 选中本身不发请求；只有详情视图绑定到新的 ID 时才查询。
fn handle_open(app: &mut App) -> Command {
    let Some(id) = app.list.highlighted().map(|c| c.id.clone()) else {
        return Command::None;
    };

    if !app.list.select(&id) {
        return Command::None;
    }

    log::debug!("Selected character {id}");
    app.detail = Some(CharacterDetailState::new(id.clone()));
    Command::FetchDetail { id }
}
