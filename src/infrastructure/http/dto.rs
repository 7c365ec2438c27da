//! Data Transfer Objects
//!
//! API Gateway 代理响应与请求体结构。

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::{Author, PublishedYear, Summary, Title};

// ============================================================================
// API Gateway 响应
// ============================================================================

/// API Gateway 代理响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// JSON 成功响应
pub fn json_response(status_code: u16, payload: &impl Serialize) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: serde_json::to_string(payload).expect("response payload should serialize"),
    }
}

// ============================================================================
// 请求体
// ============================================================================

/// 书籍信息请求体（创建与更新共用）
///
/// 字段直接反序列化为值对象，非法输入在 serde 边界即失败。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInformation {
    pub title: Title,
    pub author: Author,
    pub published_year: PublishedYear,
    #[serde(default)]
    pub summary: Summary,
}
