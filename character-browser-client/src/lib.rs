//! # character-browser-client
//!
//! A small GraphQL client for the public
//! [Rick and Morty API](https://rickandmortyapi.com/graphql).
//!
//! Exposes exactly two read queries:
//!
//! | Query | Variables | Returns |
//! |-------|-----------|---------|
//! | `characters` | `page: Int!` | one page of [`Character`]s plus [`PageInfo`] |
//! | `character` | `id: ID!` | a single [`Character`], or `None` when the id is unknown |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use character_browser_client::{CharacterApi, CharacterClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CharacterClient::new(ClientConfig::default())?;
//!
//!     let page = client.list_characters(1).await?;
//!     for character in &page.results {
//!         println!("{} {}", character.id, character.name);
//!     }
//!
//!     if let Some(rick) = client.get_character("1").await? {
//!         println!("{} -> {}", rick.name, rick.image);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError). Nothing is
//! retried: a failed query is reported once and it is up to the caller to
//! display it.

mod client;
mod error;
mod graphql;
mod http_client;
mod queries;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ClientError, Result};

// Re-export the concrete client
pub use client::{CharacterClient, ClientConfig, DEFAULT_ENDPOINT};

// Re-export core trait
pub use traits::CharacterApi;

// Re-export types
pub use types::{Character, CharacterPage, PageInfo};
