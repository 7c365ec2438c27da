//! Book Queries

use crate::domain::BookId;

/// 获取全部书籍
#[derive(Debug, Clone, Copy)]
pub struct ListBooks;

/// 按标识获取单本书籍
#[derive(Debug, Clone)]
pub struct GetBook {
    pub book_id: BookId,
}
