//! Book Context - Collection

use serde::Serialize;

use super::Book;

/// 书籍集合
///
/// 不变量: `total` 恒等于 `items.len()`。
/// 只能通过 [`BookList::from_items`] 构造，`total` 不是独立状态。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookList {
    items: Vec<Book>,
    total: usize,
}

impl BookList {
    pub fn from_items(items: Vec<Book>) -> Self {
        let total = items.len();
        Self { items, total }
    }

    pub fn items(&self) -> &[Book] {
        &self.items
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 按作者过滤
    pub fn filter_by_author(&self, author: &str) -> Self {
        let filtered = self
            .items
            .iter()
            .filter(|book| book.author().as_str() == author)
            .cloned()
            .collect();
        Self::from_items(filtered)
    }

    /// 提取指定年份及之后出版的书籍
    pub fn published_after(&self, year: i32) -> Self {
        let filtered = self
            .items
            .iter()
            .filter(|book| book.published_year().value() >= year)
            .cloned()
            .collect();
        Self::from_items(filtered)
    }
}
