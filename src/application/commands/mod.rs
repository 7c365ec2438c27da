//! Commands - 命令及处理器

mod book_commands;
pub mod handlers;

pub use book_commands::{CreateBook, DeleteBook, UpdateBook};
pub use handlers::{CreateBookHandler, DeleteBookHandler, UpdateBookHandler};
