//! Application State
//!
//! 把仓储端口装配进各命令/查询处理器。

use std::sync::Arc;

use crate::application::{
    BookRepositoryPort, CreateBookHandler, DeleteBookHandler, GetBookHandler, ListBooksHandler,
    UpdateBookHandler,
};

/// 应用状态
pub struct AppState {
    pub book_repo: Arc<dyn BookRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_book_handler: CreateBookHandler,
    pub update_book_handler: UpdateBookHandler,
    pub delete_book_handler: DeleteBookHandler,

    // ========== Query Handlers ==========
    pub get_book_handler: GetBookHandler,
    pub list_books_handler: ListBooksHandler,
}

impl AppState {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self {
            book_repo: book_repo.clone(),

            create_book_handler: CreateBookHandler::new(book_repo.clone()),
            update_book_handler: UpdateBookHandler::new(book_repo.clone()),
            delete_book_handler: DeleteBookHandler::new(book_repo.clone()),

            get_book_handler: GetBookHandler::new(book_repo.clone()),
            list_books_handler: ListBooksHandler::new(book_repo),
        }
    }
}
