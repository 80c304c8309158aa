//! Public data types

use serde::{Deserialize, Serialize};

/// A character as returned by both queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    /// Avatar image URL.
    pub image: String,
}

/// Pagination metadata of the `characters` query.
///
/// Every field is optional on the wire; the API returns `null` for `next`
/// on the last page and for `prev` on the first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub count: Option<u32>,
    pub pages: Option<u32>,
    pub next: Option<u32>,
    pub prev: Option<u32>,
}

/// One page of characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    /// The page number this result was requested for.
    pub page: u32,
    pub results: Vec<Character>,
    pub info: Option<PageInfo>,
}

impl CharacterPage {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Total page count reported by the server, if any.
    pub fn total_pages(&self) -> Option<u32> {
        self.info.and_then(|info| info.pages)
    }
}
