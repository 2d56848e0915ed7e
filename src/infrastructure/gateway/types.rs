//! Gateway Types
//!
//! 与 API Gateway 代理事件/响应 JSON 结构兼容的请求与响应

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};

/// 入站请求描述
///
/// `resource` 是路由模板（如 `/articles/{id}`），不是实际请求路径；
/// 路径参数的取值放在 `path_parameters` 中
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(alias = "resourcePath")]
    pub resource: String,

    /// 实际请求路径，仅用于日志
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub http_method: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub path_parameters: HashMap<String, String>,
}

impl GatewayRequest {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            ..Default::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.http_method = Some(method.into());
        self
    }

    pub fn with_path_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters.insert(name.into(), value.into());
        self
    }

    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters.get(name).map(String::as_str)
    }
}

/// API Gateway 在没有路径参数时发送 `null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HashMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// 出站响应，生成后即定稿
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: String,
}

impl GatewayResponse {
    /// 纯文本响应，不带额外响应头
    pub fn plain(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    /// 数据接口响应，带 JSON 与 CORS 响应头
    pub fn json(status_code: u16, body: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());
        Self {
            status_code,
            headers,
            body: body.into(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_proxy_event() {
        let event = r#"{
            "resource": "/articles/{id}",
            "path": "/articles/hello",
            "httpMethod": "GET",
            "pathParameters": {"id": "hello"},
            "headers": {"Accept": "application/json"}
        }"#;

        let request: GatewayRequest = serde_json::from_str(event).unwrap();
        assert_eq!(request.resource, "/articles/{id}");
        assert_eq!(request.path.as_deref(), Some("/articles/hello"));
        assert_eq!(request.http_method.as_deref(), Some("GET"));
        assert_eq!(request.path_parameter("id"), Some("hello"));
    }

    #[test]
    fn test_request_null_path_parameters() {
        let request: GatewayRequest =
            serde_json::from_str(r#"{"resource": "/articles", "pathParameters": null}"#).unwrap();
        assert!(request.path_parameters.is_empty());
    }

    #[test]
    fn test_request_accepts_resource_path_alias() {
        let request: GatewayRequest =
            serde_json::from_str(r#"{"resourcePath": "/heartbeat"}"#).unwrap();
        assert_eq!(request, GatewayRequest::new("/heartbeat"));
    }

    #[test]
    fn test_response_serializes_in_proxy_shape() {
        let response = GatewayResponse::json(200, "[]");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["body"], "[]");
        assert_eq!(value["headers"]["Content-Type"], "application/json");
        assert_eq!(value["headers"]["Access-Control-Allow-Origin"], "*");
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = GatewayResponse::json(404, "");
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(GatewayResponse::plain(200, "OK").header("content-type"), None);
    }
}
