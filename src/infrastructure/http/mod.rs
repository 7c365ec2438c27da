//! HTTP Layer - API Gateway 入站适配
//!
//! Lambda 事件 -> 命令/查询 -> API Gateway 响应

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use dto::{ApiGatewayResponse, BookInformation};
pub use error::ApiError;
pub use routes::route_event;
pub use state::AppState;
