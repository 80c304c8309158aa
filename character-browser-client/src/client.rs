//! HTTP implementation of [`CharacterApi`]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::graphql::{GraphQlRequest, decode_response};
use crate::http_client::{HttpUtils, create_http_client};
use crate::queries::{
    CHARACTER_OPERATION, CHARACTER_QUERY, CHARACTERS_OPERATION, CHARACTERS_QUERY, CharacterData,
    CharacterVariables, CharactersData, CharactersVariables,
};
use crate::traits::CharacterApi;
use crate::types::{Character, CharacterPage};

/// Public Rick and Morty GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/graphql";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// GraphQL endpoint URL (http or https).
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// GraphQL client for the character API.
pub struct CharacterClient {
    client: Client,
    endpoint: Url,
}

impl CharacterClient {
    /// Create a client. Fails if the endpoint is not an http(s) URL.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoint = parse_endpoint(&config.endpoint)?;
        let client = create_http_client(config.connect_timeout, config.request_timeout)?;
        log::info!("GraphQL endpoint: {endpoint}");
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// 执行一次 GraphQL 查询并解码 `data`
    async fn execute<V, T>(&self, operation: &str, query: &str, variables: V) -> Result<T>
    where
        V: Serialize + Send,
        T: DeserializeOwned,
    {
        let body = request_body(operation, query, variables)?;

        let builder = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .body(body);

        let (status, text) = HttpUtils::execute_request(builder, operation).await?;
        decode_response(status, &text).inspect_err(|e| {
            if e.is_expected() {
                log::warn!("[graphql] {operation} failed: {e}");
            } else {
                log::error!("[graphql] {operation} failed: {e}");
            }
        })
    }
}

/// 序列化 GraphQL 请求体
fn request_body<V: Serialize>(operation: &str, query: &str, variables: V) -> Result<String> {
    let request = GraphQlRequest {
        query,
        variables,
        operation_name: operation,
    };
    serde_json::to_string(&request).map_err(|e| ClientError::SerializationError {
        detail: e.to_string(),
    })
}

/// 校验 endpoint，只接受 http/https
fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint).map_err(|e| ClientError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        detail: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            detail: format!("unsupported scheme '{other}'"),
        }),
    }
}

#[async_trait]
impl CharacterApi for CharacterClient {
    async fn list_characters(&self, page: u32) -> Result<CharacterPage> {
        let data: CharactersData = self
            .execute(CHARACTERS_OPERATION, CHARACTERS_QUERY, CharactersVariables { page })
            .await?;
        let page = data.into_page(page)?;
        log::debug!("Loaded {} characters for page {}", page.results.len(), page.page);
        Ok(page)
    }

    async fn get_character(&self, id: &str) -> Result<Option<Character>> {
        let data: CharacterData = self
            .execute(CHARACTER_OPERATION, CHARACTER_QUERY, CharacterVariables { id })
            .await?;
        if data.character.is_none() {
            log::info!("Character '{id}' not found");
        }
        Ok(data.character)
    }
}
