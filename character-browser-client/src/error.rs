use serde::{Deserialize, Serialize};

/// Unified error type for all character queries.
///
/// Every variant renders to one human-readable line; that line is what the UI
/// shows in place of the query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The endpoint answered with a non-success HTTP status and no usable GraphQL body.
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body (truncated).
        body: String,
    },

    /// The GraphQL server reported one or more errors.
    GraphQl {
        /// Messages of every entry in the `errors` array.
        messages: Vec<String>,
    },

    /// A field the query requires was absent from an otherwise successful response.
    MissingData {
        /// Path of the missing field, e.g. `data.characters`.
        field: String,
    },

    /// Failed to parse the response body.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize the request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The configured endpoint is not a usable http(s) URL.
    InvalidEndpoint {
        /// The rejected endpoint string.
        endpoint: String,
        /// Why it was rejected.
        detail: String,
    },
}

impl ClientError {
    /// 是否为预期行为（服务端返回的业务错误、配置错误等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::GraphQl { .. } | Self::MissingData { .. } | Self::InvalidEndpoint { .. }
        )
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::HttpStatus { status, body } => {
                if body.is_empty() {
                    write!(f, "HTTP {status}")
                } else {
                    write!(f, "HTTP {status}: {body}")
                }
            }
            Self::GraphQl { messages } => {
                if messages.is_empty() {
                    write!(f, "GraphQL error")
                } else {
                    write!(f, "{}", messages.join("; "))
                }
            }
            Self::MissingData { field } => write!(f, "Response is missing '{field}'"),
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
            Self::InvalidEndpoint { endpoint, detail } => {
                write!(f, "Invalid endpoint '{endpoint}': {detail}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
