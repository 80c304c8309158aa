//! 视图状态模块
//!
//! 列表视图与详情视图各自的数据容器

mod character_detail;
mod character_list;

pub use character_detail::CharacterDetailState;
pub use character_list::CharacterListState;
