//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（BookRepository）
//! - commands: 命令及处理器（创建/更新/删除）
//! - queries: 查询及处理器（单本/列表）
//! - error: 应用层错误定义
//!
//! 每个处理器只持有一个仓储端口（构造注入，无全局单例）；
//! 核心不做任何内部重试。

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

pub use commands::{
    CreateBook, CreateBookHandler, DeleteBook, DeleteBookHandler, UpdateBook, UpdateBookHandler,
};
pub use error::ApplicationError;
pub use ports::{BookRepositoryPort, RepositoryError};
pub use queries::{GetBook, GetBookHandler, ListBooks, ListBooksHandler};
