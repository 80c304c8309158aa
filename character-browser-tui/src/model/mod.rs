//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，不包含任何业务逻辑。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod query;          // 查询状态（加载中 / 失败 / 成功 / 不存在）
//!         pub mod state;      // 列表与详情视图的数据状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,                          // 退出标志
//!             pub list: CharacterListState,                   // 列表视图（根）
//!             pub detail: Option<CharacterDetailState>,       // 详情视图（最多一个）
//!             pub show_help: bool,                            // 帮助弹窗
//!             pub status_message: Option<String>,             // 状态栏消息
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、列表状态（CharacterListState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         page            当前页码（≥ 1），只由“下一页”递增
//!         query           当前页的 QueryState<CharacterPage>
//!         cursor          高亮行
//!         selected_id     已选中的角色 ID，设置后不会被清除
//!
//!     数据流：
//!         用户按 n
//!             ↓
//!         update/list.rs 调用 app.list.next_page()
//!             ↓
//!         返回 Command::FetchList { page }，由主循环交给 Backend 层
//!             ↓
//!         查询结果以 QueryMessage::ListLoaded 回到 Update 层
//!             ↓
//!         页码一致才写入 app.list.query（过期结果直接丢弃）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、详情状态（CharacterDetailState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         character_id    绑定的角色 ID
//!         query           QueryState<Character>
//!
//!     选中新的角色时整体替换为新的实例并发起 Command::FetchDetail。
//!

mod app;
mod query;
pub mod state;

pub use app::App;
pub use query::QueryState;
pub use state::{CharacterDetailState, CharacterListState};
