//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（DynamoDB / 内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Book, BookId, BookList};

/// Repository 错误
///
/// 存在性冲突（NotFound / AlreadyExists）与其他存储故障严格区分，
/// 适配器不得把条件写失败折叠成一般失败。
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Book not found: {0}")]
    NotFound(String),

    #[error("Book already exists: {0}")]
    AlreadyExists(String),

    #[error("Storage operation failed: {0}")]
    OperationFailed(String),
}

/// Book Repository Port
///
/// 创建/更新/删除的存在性语义由存储层条件写原子保证，
/// 实现不得用先读后写代替条件写。
#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    /// 全量获取
    async fn list_books(&self) -> Result<BookList, RepositoryError>;

    /// 新建书籍。标识已被占用时返回 `AlreadyExists`
    async fn create_book(&self, book: Book) -> Result<Book, RepositoryError>;

    /// 按标识取单本。不存在时返回 `NotFound`
    async fn get_book(&self, id: &BookId) -> Result<Book, RepositoryError>;

    /// 整体覆盖已有书籍。不存在时返回 `NotFound`
    async fn update_book(&self, book: Book) -> Result<Book, RepositoryError>;

    /// 删除书籍。不存在时返回 `NotFound`
    async fn delete_book(&self, id: &BookId) -> Result<(), RepositoryError>;
}
