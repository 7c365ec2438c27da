//! Libris - 无服务器书籍目录 API
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Book Context: 值对象、聚合根、集合与校验规则
//!
//! 应用层 (application/):
//! - Ports: 仓储端口定义（BookRepository）
//! - Commands: 创建/更新/删除处理器
//! - Queries: 单本/列表查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: API Gateway 事件路由、DTO、错误映射
//! - Persistence: DynamoDB 条件写仓储 + 内存仓储
//!
//! 一致性模型: 不在进程内加锁，创建/更新/删除的存在性冲突
//! 完全由存储层条件写原子裁决。

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
