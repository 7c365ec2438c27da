//! Book Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::BookRepositoryPort;
use crate::application::queries::{GetBook, ListBooks};
use crate::domain::{Book, BookList};

// ============================================================================
// ListBooks
// ============================================================================

/// ListBooks Handler - 直接委托给仓储
pub struct ListBooksHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl ListBooksHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, _query: ListBooks) -> Result<BookList, ApplicationError> {
        let books = self.book_repo.list_books().await?;

        tracing::debug!(total = books.total(), "Books listed");

        Ok(books)
    }
}

// ============================================================================
// GetBook
// ============================================================================

/// GetBook Handler - 直接委托给仓储，NotFound 原样传播
pub struct GetBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl GetBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: GetBook) -> Result<Book, ApplicationError> {
        let book = self.book_repo.get_book(&query.book_id).await?;
        Ok(book)
    }
}
