//! Query trait the UI depends on

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Character, CharacterPage};

/// Read access to the character API.
///
/// [`CharacterClient`](crate::CharacterClient) is the HTTP implementation;
/// tests substitute their own.
#[async_trait]
pub trait CharacterApi: Send + Sync {
    /// Fetch one page of characters. Pages start at 1.
    ///
    /// A page past the end is not an error: it comes back with no results.
    async fn list_characters(&self, page: u32) -> Result<CharacterPage>;

    /// Fetch a single character by id.
    ///
    /// Returns `Ok(None)` when the server answers successfully but knows no
    /// character with that id.
    async fn get_character(&self, id: &str) -> Result<Option<Character>>;
}
