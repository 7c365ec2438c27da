//! Domain Layer - 领域层
//!
//! 单一限界上下文:
//! - Book Context: 书籍目录管理

pub mod book;

pub use book::{Author, Book, BookId, BookList, PublishedYear, Summary, Title, ValidationError};
