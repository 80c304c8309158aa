//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，App 处于以下状态：
//!
//! App {
//!
//!     should_quit: false,                     // 决定应用是否应该退出
//!     list: CharacterListState {
//!         page: 1,                            // 从第 1 页开始
//!         query: QueryState::Pending,         // 启动时立即查询第 1 页
//!         cursor: 0,
//!         selected_id: None,
//!     },
//!     detail: None,                           // 选中角色后才出现
//!     show_help: false,
//!     status_message: None,
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     while let Ok(msg) = rx.try_recv() {             // 1. 取出所有已完成的查询结果
//!         update::update(&mut app, Query(msg))            // 不会阻塞
//!     }
//!     terminal.draw(|f| view::render(&app, f))        // 2. 渲染 UI
//!     if app.should_quit { break }                    // 3. 检查是否应该退出
//!     if let Some(event) = poll_event() {             // 4. 轮询输入，最多等待 100ms
//!         let msg = handle_event(event, &app);
//!         let cmd = update::update(&mut app, msg);
//!         queries.execute(cmd)                        // 5. 需要查询时交给 Backend
//!     }
//! }

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::QueryService;
use crate::event;
use crate::message::{AppMessage, QueryMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    queries: &QueryService,
    results: &mut UnboundedReceiver<QueryMessage>,
) -> Result<()> {
    queries.execute(update::init(app));

    loop {
        // 1. 应用已完成的查询结果
        while let Ok(msg) = results.try_recv() {
            let cmd = update::update(app, AppMessage::Query(msg));
            queries.execute(cmd);
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            log::info!("Quit requested");
            break;
        }

        // 4. 轮询事件
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, app);
            let cmd = update::update(app, msg);
            queries.execute(cmd);
        }
    }

    Ok(())
}
