//! Book Context - 书籍限界上下文
//!
//! 职责:
//! - 值对象校验（构造即合法，不存在部分合法状态）
//! - Book 聚合根与跨字段不变量
//! - 书籍集合

mod aggregate;
mod collection;
mod errors;
mod value_objects;

pub use aggregate::Book;
pub use collection::BookList;
pub use errors::ValidationError;
pub use value_objects::{Author, BookId, PublishedYear, Summary, Title};
