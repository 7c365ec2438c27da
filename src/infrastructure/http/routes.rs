//! HTTP Routes
//!
//! API Gateway REST 代理事件的规范化与分发
//!
//! API Endpoints:
//! - GET    /books        书籍一览
//! - POST   /books        书籍创建
//! - GET    /books/{id}   书籍单体获取
//! - PUT    /books/{id}   书籍更新
//! - DELETE /books/{id}   书籍删除

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::Value;

use super::dto::ApiGatewayResponse;
use super::error::ApiError;
use super::handlers;
use super::state::AppState;

/// 规范化后的入站请求
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: String,
    pub path: String,
    pub body: Option<String>,
}

/// 解析 API Gateway 代理事件
///
/// `isBase64Encoded` 标记的请求体先做 base64 解码；
/// 测试事件里已是对象的 body 也接受。
fn parse_event(event: &Value) -> Result<ApiRequest, ApiError> {
    let object = event
        .as_object()
        .ok_or_else(|| ApiError::BadRequest("Request payload must be a JSON object".to_string()))?;

    let method = object
        .get("httpMethod")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::BadRequest("httpMethod is required".to_string()))?
        .to_uppercase();

    let path = object
        .get("path")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::BadRequest("path is required".to_string()))?
        .to_string();

    let is_base64 = object
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let body = match object.get("body") {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) if is_base64 => {
            let bytes = BASE64
                .decode(text)
                .map_err(|error| ApiError::BadRequest(format!("Malformed base64 body: {error}")))?;
            let text = String::from_utf8(bytes).map_err(|_| {
                ApiError::BadRequest("Request body must be valid UTF-8".to_string())
            })?;
            Some(text)
        }
        Some(Value::String(text)) => Some(text.clone()),
        Some(body @ Value::Object(_)) => Some(body.to_string()),
        Some(_) => {
            return Err(ApiError::BadRequest(
                "Request body must be a string".to_string(),
            ))
        }
    };

    Ok(ApiRequest { method, path, body })
}

/// 处理一次 API Gateway 事件
///
/// 所有错误在这里收敛成带状态码的响应，不向 Lambda 运行时抛出。
pub async fn route_event(state: &AppState, event: Value) -> ApiGatewayResponse {
    match dispatch(state, &event).await {
        Ok(response) => response,
        Err(error) => error.into_response(),
    }
}

async fn dispatch(state: &AppState, event: &Value) -> Result<ApiGatewayResponse, ApiError> {
    let request = parse_event(event)?;

    let segments: Vec<&str> = request
        .path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    tracing::debug!(method = %request.method, path = %request.path, "Routing request");

    match (request.method.as_str(), segments.as_slice()) {
        ("GET", ["books"]) => handlers::list_books(state).await,
        ("POST", ["books"]) => handlers::create_book(state, request.body.as_deref()).await,
        ("GET", ["books", id]) => handlers::get_book(state, id).await,
        ("PUT", ["books", id]) => handlers::update_book(state, id, request.body.as_deref()).await,
        ("DELETE", ["books", id]) => handlers::delete_book(state, id).await,
        (_, ["books"]) | (_, ["books", _]) => Err(ApiError::MethodNotAllowed(format!(
            "{} is not allowed on {}",
            request.method, request.path
        ))),
        _ => Err(ApiError::NotFound(format!(
            "Route not found: {}",
            request.path
        ))),
    }
}
