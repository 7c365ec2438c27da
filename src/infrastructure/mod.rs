//! 基础设施层
//!
//! - http: API Gateway 事件路由与响应
//! - persistence: DynamoDB / 内存仓储实现

pub mod http;
pub mod persistence;
