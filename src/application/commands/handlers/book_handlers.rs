//! Book Command Handlers

use chrono::Utc;
use std::sync::Arc;

use crate::application::commands::{CreateBook, DeleteBook, UpdateBook};
use crate::application::error::ApplicationError;
use crate::application::ports::BookRepositoryPort;
use crate::domain::{Book, BookId};

// ============================================================================
// CreateBook
// ============================================================================

/// CreateBook Handler
///
/// 标识与时间戳在这里统一生成: 新书的 `created_at` 与 `updated_at`
/// 来自同一个 now。
pub struct CreateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl CreateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: CreateBook) -> Result<Book, ApplicationError> {
        let now = Utc::now();
        let book = Book::new(
            BookId::generate(),
            command.title,
            command.author,
            command.published_year,
            command.summary,
            now,
            now,
        )?;

        let created = self.book_repo.create_book(book).await?;

        tracing::info!(
            book_id = %created.id(),
            title = %created.title(),
            "Book created"
        );

        Ok(created)
    }
}

// ============================================================================
// UpdateBook
// ============================================================================

/// UpdateBook Handler
///
/// 先读取现存记录拿到 `created_at`，再整体替换。最终写入仍由
/// 存储层的存在性前置条件把关，并发删除时以删除为准。
pub struct UpdateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl UpdateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: UpdateBook) -> Result<Book, ApplicationError> {
        let stored = self.book_repo.get_book(&command.book_id).await?;

        let now = Utc::now();
        let updated = stored.update(
            command.title,
            command.author,
            command.published_year,
            command.summary,
            now,
        );

        let saved = self.book_repo.update_book(updated).await?;

        tracing::info!(
            book_id = %saved.id(),
            title = %saved.title(),
            "Book updated"
        );

        Ok(saved)
    }
}

// ============================================================================
// DeleteBook
// ============================================================================

/// DeleteBook Handler
pub struct DeleteBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl DeleteBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: DeleteBook) -> Result<(), ApplicationError> {
        // 先取一次，让不存在的标识带着书籍上下文报错
        let book = self.book_repo.get_book(&command.book_id).await?;

        self.book_repo.delete_book(&command.book_id).await?;

        tracing::info!(
            book_id = %command.book_id,
            title = %book.title(),
            "Book deleted"
        );

        Ok(())
    }
}
