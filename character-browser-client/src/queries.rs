//! Query documents and their response shapes

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::types::{Character, CharacterPage, PageInfo};

pub(crate) const CHARACTERS_OPERATION: &str = "Characters";

pub(crate) const CHARACTERS_QUERY: &str = r"
query Characters($page: Int!) {
  characters(page: $page) {
    info {
      count
      pages
      next
      prev
    }
    results {
      id
      name
      image
    }
  }
}
";

pub(crate) const CHARACTER_OPERATION: &str = "Character";

pub(crate) const CHARACTER_QUERY: &str = r"
query Character($id: ID!) {
  character(id: $id) {
    id
    name
    image
  }
}
";

#[derive(Debug, Serialize)]
pub(crate) struct CharactersVariables {
    pub page: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct CharacterVariables<'a> {
    pub id: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CharactersData {
    pub characters: Option<CharactersField>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CharactersField {
    pub info: Option<PageInfo>,
    pub results: Option<Vec<Character>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CharacterData {
    pub character: Option<Character>,
}

impl CharactersData {
    /// `characters` 必须存在；`results` 为 null 时按空页处理
    pub fn into_page(self, page: u32) -> Result<CharacterPage> {
        let characters = self.characters.ok_or_else(|| ClientError::MissingData {
            field: "data.characters".to_string(),
        })?;

        Ok(CharacterPage {
            page,
            results: characters.results.unwrap_or_default(),
            info: characters.info,
        })
    }
}
