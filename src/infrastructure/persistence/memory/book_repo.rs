//! In-Memory Book Repository
//!
//! 测试与本地运行用的仓储实现。通过 DashMap 的 entry 占用判断
//! 提供与 DynamoDB 条件写等价的存在性语义。

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::application::ports::{BookRepositoryPort, RepositoryError};
use crate::domain::{Book, BookId, BookList};

/// 内存书籍仓储
pub struct InMemoryBookRepository {
    books: DashMap<String, Book>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
        }
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepositoryPort for InMemoryBookRepository {
    async fn list_books(&self) -> Result<BookList, RepositoryError> {
        let mut items: Vec<Book> = self
            .books
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        // DashMap 迭代顺序不稳定，按创建时间给出确定顺序
        items.sort_by_key(|book| book.created_at());
        Ok(BookList::from_items(items))
    }

    async fn create_book(&self, book: Book) -> Result<Book, RepositoryError> {
        match self.books.entry(book.id().as_str().to_string()) {
            Entry::Occupied(_) => Err(RepositoryError::AlreadyExists(format!(
                "Book {} already exists",
                book.id()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(book.clone());
                Ok(book)
            }
        }
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, RepositoryError> {
        self.books
            .get(id.as_str())
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RepositoryError::NotFound(format!("Book {id} not found")))
    }

    async fn update_book(&self, book: Book) -> Result<Book, RepositoryError> {
        match self.books.entry(book.id().as_str().to_string()) {
            Entry::Occupied(mut slot) => {
                slot.insert(book.clone());
                Ok(book)
            }
            Entry::Vacant(_) => Err(RepositoryError::NotFound(format!(
                "Book {} not found",
                book.id()
            ))),
        }
    }

    async fn delete_book(&self, id: &BookId) -> Result<(), RepositoryError> {
        self.books
            .remove(id.as_str())
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Book {id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use std::sync::Arc;

    use super::*;
    use crate::domain::{Author, PublishedYear, Summary, Title};

    fn book_with_id(id: &str) -> Book {
        let now = Utc::now();
        Book::new(
            BookId::new(id).unwrap(),
            Title::new("Dune").unwrap(),
            Author::new("Herbert").unwrap(),
            PublishedYear::new(1965).unwrap(),
            Summary::none(),
            now,
            now,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_replay_same_id_conflicts() {
        let repo = InMemoryBookRepository::new();

        repo.create_book(book_with_id("book-1")).await.unwrap();

        let replay = repo.create_book(book_with_id("book-1")).await;
        assert!(matches!(replay, Err(RepositoryError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_get_missing_id_on_empty_store() {
        let repo = InMemoryBookRepository::new();

        let result = repo.get_book(&BookId::new("missing-id").unwrap()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_requires_existing_record() {
        let repo = InMemoryBookRepository::new();

        let result = repo.update_book(book_with_id("book-1")).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));

        repo.create_book(book_with_id("book-1")).await.unwrap();
        assert!(repo.update_book(book_with_id("book-1")).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_is_not_idempotent() {
        let repo = InMemoryBookRepository::new();
        repo.create_book(book_with_id("book-1")).await.unwrap();

        let id = BookId::new("book-1").unwrap();
        repo.delete_book(&id).await.unwrap();

        let second = repo.delete_book(&id).await;
        assert!(matches!(second, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_counts_every_book() {
        let repo = InMemoryBookRepository::new();
        repo.create_book(book_with_id("book-1")).await.unwrap();
        repo.create_book(book_with_id("book-2")).await.unwrap();

        let books = repo.list_books().await.unwrap();
        assert_eq!(books.total(), 2);
        assert_eq!(books.items().len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_creates_admit_exactly_one() {
        let repo = Arc::new(InMemoryBookRepository::new());

        let (first, second) = tokio::join!(
            repo.create_book(book_with_id("book-1")),
            repo.create_book(book_with_id("book-1")),
        );

        let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);

        let conflict = if first.is_ok() { second } else { first };
        assert!(matches!(conflict, Err(RepositoryError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_concurrent_deletes_admit_exactly_one() {
        let repo = Arc::new(InMemoryBookRepository::new());
        repo.create_book(book_with_id("book-1")).await.unwrap();

        let id = BookId::new("book-1").unwrap();
        let (first, second) = tokio::join!(repo.delete_book(&id), repo.delete_book(&id));

        let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);

        let miss = if first.is_ok() { second } else { first };
        assert!(matches!(miss, Err(RepositoryError::NotFound(_))));
    }
}
