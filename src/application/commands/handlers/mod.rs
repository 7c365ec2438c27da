//! Command Handlers

mod book_handlers;

pub use book_handlers::{CreateBookHandler, DeleteBookHandler, UpdateBookHandler};
