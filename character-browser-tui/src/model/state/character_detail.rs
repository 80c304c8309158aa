//! 角色详情视图状态

use character_browser_client::{Character, ClientError};

use crate::model::QueryState;

/// 角色详情视图状态
///
/// 每个实例绑定一个角色 ID；ID 变化时由 Update 层整体替换。
#[derive(Debug)]
pub struct CharacterDetailState {
    /// 要展示的角色 ID
    pub character_id: String,
    /// 详情查询状态
    pub query: QueryState<Character>,
}

impl CharacterDetailState {
    /// 为指定 ID 创建详情状态（查询中）
    pub fn new(character_id: impl Into<String>) -> Self {
        Self {
            character_id: character_id.into(),
            query: QueryState::Pending,
        }
    }

    /// 写入详情查询结果
    ///
    /// ID 不匹配的结果视为过期结果，丢弃并返回 `false`。
    pub fn apply_result(&mut self, id: &str, result: Result<Option<Character>, ClientError>) -> bool {
        if id != self.character_id {
            return false;
        }

        self.query = match result {
            Ok(Some(character)) => QueryState::Loaded(character),
            Ok(None) => QueryState::NotFound,
            Err(e) => QueryState::Failed(e.to_string()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rick() -> Character {
        Character {
            id: "1".to_string(),
            name: "Rick Sanchez".to_string(),
            image: "rick.png".to_string(),
        }
    }

    #[test]
    fn new_detail_is_pending() {
        let detail = CharacterDetailState::new("1");
        assert_eq!(detail.character_id, "1");
        assert!(detail.query.is_pending());
    }

    #[test]
    fn loaded_result() {
        let mut detail = CharacterDetailState::new("1");
        assert!(detail.apply_result("1", Ok(Some(rick()))));
        assert_eq!(detail.query.loaded().map(|c| c.name.as_str()), Some("Rick Sanchez"));
    }

    #[test]
    fn missing_character_is_not_found() {
        let mut detail = CharacterDetailState::new("404");
        assert!(detail.apply_result("404", Ok(None)));
        assert_eq!(detail.query, QueryState::NotFound);
    }

    #[test]
    fn result_for_other_id_is_dropped() {
        let mut detail = CharacterDetailState::new("2");
        assert!(!detail.apply_result("1", Ok(Some(rick()))));
        assert!(detail.query.is_pending());
    }

    #[test]
    fn failure_keeps_error_text() {
        let mut detail = CharacterDetailState::new("1");
        let err = ClientError::GraphQl {
            messages: vec!["Character not found".to_string()],
        };
        assert!(detail.apply_result("1", Err(err)));
        assert_eq!(detail.query.error(), Some("Character not found"));
    }
}
