//! Queries - 查询及处理器

mod book_queries;
pub mod handlers;

pub use book_queries::{GetBook, ListBooks};
pub use handlers::{GetBookHandler, ListBooksHandler};
