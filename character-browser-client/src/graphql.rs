//! GraphQL request/response envelope
//!
//! 请求体为 `{ query, variables, operationName }`，
//! 响应体为 `{ data?, errors? }`。只要 `errors` 非空即视为失败，不处理部分结果。

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// GraphQL 请求体
#[derive(Debug, Serialize)]
pub(crate) struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
    #[serde(rename = "operationName")]
    pub operation_name: &'a str,
}

/// GraphQL 错误条目（只关心 message）
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

/// GraphQL 响应体
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl<T> GraphQlResponse<T> {
    /// 取出 `data`，`errors` 优先
    pub fn into_data(self) -> Result<T> {
        if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
            return Err(ClientError::GraphQl {
                messages: errors.into_iter().map(|e| e.message).collect(),
            });
        }

        self.data.ok_or_else(|| ClientError::MissingData {
            field: "data".to_string(),
        })
    }
}

/// 将 HTTP 状态码和响应文本解码为 `T`
///
/// GraphQL 服务端经常在 4xx 响应中携带 `errors` 数组，
/// 因此非 2xx 时先尝试解析响应体取出错误信息；即使带有 `data` 也视为失败。
pub(crate) fn decode_response<T>(status: u16, body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let success = (200..300).contains(&status);

    let envelope: GraphQlResponse<T> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) if success => {
            log::error!("GraphQL response parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(body));
            return Err(ClientError::ParseError {
                detail: e.to_string(),
            });
        }
        Err(_) => {
            return Err(ClientError::HttpStatus {
                status,
                body: truncate_for_log(body),
            });
        }
    };

    if success {
        return envelope.into_data();
    }

    // 非 2xx：只有 `errors` 非空时才采用 GraphQL 错误，其余一律按 HTTP 状态失败
    match envelope.into_data() {
        Err(err @ ClientError::GraphQl { .. }) => Err(err),
        _ => Err(ClientError::HttpStatus {
            status,
            body: truncate_for_log(body),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: i32,
    }

    #[test]
    fn request_uses_operation_name_key() {
        #[derive(Serialize)]
        struct Vars {
            page: u32,
        }
        let request = GraphQlRequest {
            query: "query Q($page: Int!) { x }",
            variables: Vars { page: 2 },
            operation_name: "Q",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["operationName"], "Q");
        assert_eq!(json["variables"]["page"], 2);
    }

    #[test]
    fn decode_success() {
        let result: Result<Payload> = decode_response(200, r#"{"data":{"value":7}}"#);
        assert_eq!(result, Ok(Payload { value: 7 }));
    }

    #[test]
    fn decode_errors_take_precedence_over_data() {
        let body = r#"{"data":{"value":7},"errors":[{"message":"boom"},{"message":"bang"}]}"#;
        let result: Result<Payload> = decode_response(200, body);
        assert_eq!(
            result,
            Err(ClientError::GraphQl {
                messages: vec!["boom".to_string(), "bang".to_string()]
            })
        );
    }

    #[test]
    fn decode_empty_errors_array_is_ignored() {
        let result: Result<Payload> = decode_response(200, r#"{"data":{"value":1},"errors":[]}"#);
        assert_eq!(result, Ok(Payload { value: 1 }));
    }

    #[test]
    fn decode_graphql_errors_on_bad_request() {
        let body = r#"{"errors":[{"message":"Variable \"$page\" got invalid value"}]}"#;
        let result: Result<Payload> = decode_response(400, body);
        assert!(
            matches!(&result, Err(ClientError::GraphQl { messages }) if messages[0].contains("$page")),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn decode_missing_data_on_success() {
        let result: Result<Payload> = decode_response(200, r#"{"data":null}"#);
        assert_eq!(
            result,
            Err(ClientError::MissingData {
                field: "data".to_string()
            })
        );
    }

    #[test]
    fn decode_non_json_error_page() {
        let result: Result<Payload> = decode_response(502, "<html>Bad Gateway</html>");
        assert_eq!(
            result,
            Err(ClientError::HttpStatus {
                status: 502,
                body: "<html>Bad Gateway</html>".to_string()
            })
        );
    }

    #[test]
    fn decode_json_without_data_on_error_status() {
        let result: Result<Payload> = decode_response(500, r#"{"message":"internal"}"#);
        assert!(
            matches!(&result, Err(ClientError::HttpStatus { status: 500, .. })),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn decode_data_on_error_status_is_http_status() {
        let result: Result<Payload> = decode_response(500, r#"{"data":{"value":1}}"#);
        assert_eq!(
            result,
            Err(ClientError::HttpStatus {
                status: 500,
                body: r#"{"data":{"value":1}}"#.to_string()
            })
        );
    }

    #[test]
    fn decode_errors_with_data_on_error_status_is_graphql() {
        let body = r#"{"data":{"value":1},"errors":[{"message":"upstream failed"}]}"#;
        let result: Result<Payload> = decode_response(503, body);
        assert_eq!(
            result,
            Err(ClientError::GraphQl {
                messages: vec!["upstream failed".to_string()]
            })
        );
    }

    #[test]
    fn decode_garbage_on_success_is_parse_error() {
        let result: Result<Payload> = decode_response(200, "not json");
        assert!(
            matches!(&result, Err(ClientError::ParseError { .. })),
            "unexpected result: {result:?}"
        );
    }
}
