//! 查询结果更新逻辑

use chrono::Local;

use crate::i18n::t;
use crate::message::QueryMessage;
use crate::model::App;

use super::Command;

/// 处理查询结果
pub fn update(app: &mut App, msg: QueryMessage) -> Command {
    match msg {
        QueryMessage::ListLoaded { page, result } => {
            if !app.list.apply_result(page, result) {
                log::debug!("Dropped stale list result for page {page} (current page {})", app.list.page);
                return Command::None;
            }
            let outcome = match app.list.query.error() {
                Some(e) => Err(e.to_string()),
                None => Ok(app.list.characters().len()),
            };
            report(app, &format!("#{page}"), outcome);
        }

        QueryMessage::DetailLoaded { id, result } => {
            let Some(detail) = app.detail.as_mut() else {
                log::debug!("Dropped detail result for {id}: no detail view");
                return Command::None;
            };
            if !detail.apply_result(&id, result) {
                log::debug!("Dropped stale detail result for {id} (current {})", detail.character_id);
                return Command::None;
            }
            let outcome = match detail.query.error() {
                Some(e) => Err(e.to_string()),
                None => Ok(usize::from(detail.query.loaded().is_some())),
            };
            report(app, &format!("ID {id}"), outcome);
        }
    }

    Command::None
}

/// 记录日志并更新状态栏
fn report(app: &mut App, target: &str, outcome: Result<usize, String>) {
    let texts = t();
    let time = Local::now().format("%H:%M:%S");
    match outcome {
        Ok(count) => {
            log::info!("Query {target} settled with {count} item(s)");
            app.set_status(format!("{} {target} ({time})", texts.status.loaded));
        }
        Err(message) => {
            log::warn!("Query {target} failed: {message}");
            app.set_status(format!("{} {target} ({time})", texts.status.failed));
        }
    }
}
