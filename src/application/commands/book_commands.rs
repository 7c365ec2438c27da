//! Book Commands

use crate::domain::{Author, BookId, PublishedYear, Summary, Title};

/// 创建书籍
///
/// 标识由服务端生成，调用方不可指定。
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub title: Title,
    pub author: Author,
    pub published_year: PublishedYear,
    pub summary: Summary,
}

/// 整体更新书籍
#[derive(Debug, Clone)]
pub struct UpdateBook {
    pub book_id: BookId,
    pub title: Title,
    pub author: Author,
    pub published_year: PublishedYear,
    pub summary: Summary,
}

/// 删除书籍
#[derive(Debug, Clone)]
pub struct DeleteBook {
    pub book_id: BookId,
}
