//! 查询结果消息
//!
//! 由 Backend 层的异步任务发送，携带发起查询时的参数，
//! Update 层据此判断结果是否过期。

use character_browser_client::{Character, CharacterPage, ClientError};

/// 查询结果消息
#[derive(Debug, Clone)]
pub enum QueryMessage {
    /// 列表查询完成
    ListLoaded {
        page: u32,
        result: Result<CharacterPage, ClientError>,
    },
    /// 详情查询完成
    DetailLoaded {
        id: String,
        result: Result<Option<Character>, ClientError>,
    },
}
